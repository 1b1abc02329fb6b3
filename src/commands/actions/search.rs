//! Search command handler.

use log::debug;

use crate::{
    commands::{CommandContext, Reply, embed_response::format_search_results},
    sheets::{Requester, SheetsError},
    tracker::SearchScope,
};

/// Searches items of one category, or of every category.
///
/// An empty keyword matches every item of the scope.
pub async fn handle_search<R: Requester>(
    context: &CommandContext<'_, R>,
    scope: SearchScope,
    keyword: &str,
) -> Result<Reply, SheetsError> {
    debug!("handling search {:?} for '{}' from {}", scope, keyword, context.user);

    let items = context.tracker.search_items(scope, keyword).await?;
    Ok(format_search_results(scope, keyword, &items))
}
