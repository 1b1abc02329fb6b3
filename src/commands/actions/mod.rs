//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler receives a
//! [`CommandContext`](crate::commands::CommandContext) and the parsed command,
//! reads or writes through the tracker and returns a [`Reply`].
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Receive context with the tracker, the user and the current time
//! 2. Read or write the spreadsheet through the tracker
//! 3. Return a reply built by [`embed_response`](crate::commands::embed_response)
//!
//! Data source errors are returned as is, the
//! [`Commander`](crate::commands::Commander) turns them into a message.
//!
//! # Available Handlers
//!
//! - [`handle_book`] - Add, buy, start, finish and list books
//! - [`handle_movie`] - Add, watch, skip and list movies
//! - [`handle_activity`] - Add, complete, skip and list activities
//! - [`handle_report`] - Record a daily report
//! - [`handle_reports`] - Report history, recent reports and report search
//! - [`handle_search`] - Search items
//! - [`handle_stats`] - Statistics

mod activity;
mod book;
mod movie;
mod report;
mod reports;
mod search;
mod stats;

use crate::{
    commands::{CommandContext, Reply, embed_response::format_status_change},
    sheets::{Requester, SheetsError},
    tracker::{Category, Status},
};

pub use crate::commands::actions::{
    activity::handle_activity, book::handle_book, movie::handle_movie, report::handle_report,
    reports::handle_reports, search::handle_search, stats::handle_stats,
};

/// Moves an item to `to` and formats the result.
///
/// `from` is only displayed, the current status of the item is not checked.
async fn change_status<R: Requester>(
    context: &CommandContext<'_, R>,
    category: Category,
    id: i64,
    from: Status,
    to: Status,
) -> Result<Reply, SheetsError> {
    let item = context
        .tracker
        .set_status(category, id, to, context.today())
        .await?;

    Ok(format_status_change(category, id, from, to, item.as_ref()))
}
