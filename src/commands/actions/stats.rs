//! Stats command handler.
//!
//! Every statistic is computed from a fresh read of the sheets, weeks start
//! on Sunday and periods end today.

use log::debug;

use crate::{
    commands::{
        CommandContext, Reply,
        command::StatsCommand,
        embed_response::{
            format_book_stats, format_current, format_monthly, format_summary, format_weekly,
        },
    },
    sheets::{Requester, SheetsError},
    tracker::{
        Category,
        stats::{book_stats, current_progress, month_start, period_stats, summary, week_start},
    },
};

pub async fn handle_stats<R: Requester>(
    context: &CommandContext<'_, R>,
    command: StatsCommand,
) -> Result<Reply, SheetsError> {
    debug!("handling stats command {:?} from {}", command, context.user);

    let today = context.today();
    let tracker = context.tracker;

    match command {
        StatsCommand::Summary => {
            let items = tracker.all_items().await?;
            let reports = tracker.reports().await?;
            Ok(format_summary(&summary(&items), reports.len()))
        }
        StatsCommand::Weekly => {
            let items = tracker.all_items().await?;
            let reports = tracker.reports().await?;
            Ok(format_weekly(&period_stats(
                &items,
                &reports,
                week_start(today),
                today,
            )))
        }
        StatsCommand::Monthly => {
            let items = tracker.all_items().await?;
            let reports = tracker.reports().await?;
            Ok(format_monthly(&period_stats(
                &items,
                &reports,
                month_start(today),
                today,
            )))
        }
        StatsCommand::Books => {
            let books = tracker.items(Category::Book).await?;
            Ok(format_book_stats(&book_stats(&books, today)))
        }
        StatsCommand::Current => {
            let items = tracker.all_items().await?;
            Ok(format_current(&current_progress(&items)))
        }
    }
}
