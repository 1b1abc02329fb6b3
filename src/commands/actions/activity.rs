//! Activity command handler.
//!
//! Activities are planned, then either done or skipped.

use log::debug;

use crate::{
    commands::{
        CommandContext, Reply,
        actions::change_status,
        command::ActivityCommand,
        embed_response::{format_item_added, format_item_list},
    },
    sheets::{Requester, SheetsError},
    tracker::{Category, NewItem, Status},
};

pub async fn handle_activity<R: Requester>(
    context: &CommandContext<'_, R>,
    command: &ActivityCommand,
) -> Result<Reply, SheetsError> {
    debug!("handling activity command {:?} from {}", command, context.user);

    match command {
        ActivityCommand::Add { content, memo } => {
            let new_item = NewItem {
                category: Category::Activity,
                title: content.clone(),
                author: None,
                memo: memo.clone(),
                status: Status::Planned,
            };
            let item = context.tracker.add_item(new_item, context.local_now()).await?;
            Ok(format_item_added(&item))
        }
        ActivityCommand::Done(id) => {
            change_status(context, Category::Activity, *id, Status::Planned, Status::Done).await
        }
        ActivityCommand::Skip(id) => {
            change_status(context, Category::Activity, *id, Status::Planned, Status::Skipped).await
        }
        ActivityCommand::List => {
            let items = context.tracker.items(Category::Activity).await?;
            Ok(format_item_list(Category::Activity, &items))
        }
    }
}
