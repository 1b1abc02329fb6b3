//! Report command handler.
//!
//! Records a dated note about a book, movie or activity. The item id is not
//! required to exist, the title is only shown when it does.

use log::debug;

use crate::{
    commands::{CommandContext, Reply, embed_response::format_report_added},
    sheets::{Requester, SheetsError},
    tracker::Category,
};

pub async fn handle_report<R: Requester>(
    context: &CommandContext<'_, R>,
    category: Category,
    item_id: i64,
    content: &str,
) -> Result<Reply, SheetsError> {
    debug!(
        "handling report command for {} {} from {}",
        category.as_str(),
        item_id,
        context.user
    );

    let report = context
        .tracker
        .add_report(category, item_id, content, context.today())
        .await?;
    let item = context.tracker.find_item(category, item_id).await?;

    Ok(format_report_added(&report, item.as_ref()))
}
