use log::{debug, info};
use mlbpick_core::classification::ClassifiedArgs;
use mlbpick_core::config::Settings;
use mlbpick_core::error::Result;
use mlbpick_core::game_fields::GameFields;

use super::listing::Lister;
use super::selector::Selector;
use super::types::{FeedOutcome, Selection, SelectorOptions, Step};

/// Runs both interactive steps: pick a game from the listing, then a feed.
///
/// The selector is checked before the listing is fetched, so a missing
/// selector never costs a list download.
///
/// # Errors
///
/// Returns an error if the selector is unavailable, the listing fails, or a
/// selector could not be run. Cancelling either step is not an error.
pub fn choose_feed(
    classified: &ClassifiedArgs,
    settings: &Settings,
    lister: &impl Lister,
    selector: &impl Selector,
) -> Result<FeedOutcome> {
    selector.ensure_available()?;

    debug!("Fetching game list with {:?}", classified.list_query_args);
    let listing = lister.list(&classified.list_query_args)?;

    let game_options = SelectorOptions::for_games(classified, settings);
    let Selection::Chosen(line) = selector.select(&listing, &game_options)? else {
        info!("Game selection cancelled");
        return Ok(FeedOutcome::Cancelled(Step::Game));
    };

    let fields = GameFields::extract(&line);
    let feeds = fields.feeds().join("\n");

    let Selection::Chosen(feed) = selector.select(&feeds, &SelectorOptions::for_feeds())? else {
        info!("Feed selection cancelled");
        return Ok(FeedOutcome::Cancelled(Step::Feed));
    };

    Ok(FeedOutcome::Chosen { fields, feed })
}
