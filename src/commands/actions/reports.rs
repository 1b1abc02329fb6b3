//! Reports command handler.
//!
//! Read-only views over the reports sheet: the history of one item, the
//! reports of the last days and a keyword search.

use log::debug;

use crate::{
    commands::{
        CommandContext, Reply,
        command::ReportsCommand,
        descriptors::MAX_RECENT_DAYS,
        embed_response::{format_history, format_recent, format_report_search},
    },
    sheets::{Requester, SheetsError},
};

pub async fn handle_reports<R: Requester>(
    context: &CommandContext<'_, R>,
    command: &ReportsCommand,
) -> Result<Reply, SheetsError> {
    debug!("handling reports command {:?} from {}", command, context.user);

    match command {
        ReportsCommand::History { category, item_id } => {
            let reports = context.tracker.history(*category, *item_id).await?;
            Ok(format_history(*category, *item_id, &reports))
        }
        ReportsCommand::Recent { days } => {
            let days = (*days).clamp(1, MAX_RECENT_DAYS);
            let reports = context.tracker.recent_reports(days, context.today()).await?;
            Ok(format_recent(days, &reports))
        }
        ReportsCommand::Search { keyword } => {
            let reports = context.tracker.search_reports(keyword).await?;
            Ok(format_report_search(keyword, &reports))
        }
    }
}
