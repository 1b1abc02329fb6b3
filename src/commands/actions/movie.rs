//! Movie command handler.

use log::debug;

use crate::{
    commands::{
        CommandContext, Reply,
        actions::change_status,
        command::MovieCommand,
        embed_response::{format_item_added, format_item_list},
    },
    sheets::{Requester, SheetsError},
    tracker::{Category, NewItem, Status},
};

pub async fn handle_movie<R: Requester>(
    context: &CommandContext<'_, R>,
    command: &MovieCommand,
) -> Result<Reply, SheetsError> {
    debug!("handling movie command {:?} from {}", command, context.user);

    match command {
        MovieCommand::Add { title, memo } => {
            let new_item = NewItem {
                category: Category::Movie,
                title: title.clone(),
                author: None,
                memo: memo.clone(),
                status: Status::WantToWatch,
            };
            let item = context.tracker.add_item(new_item, context.local_now()).await?;
            Ok(format_item_added(&item))
        }
        MovieCommand::Watch(id) => {
            change_status(context, Category::Movie, *id, Status::WantToWatch, Status::Watched).await
        }
        MovieCommand::Skip(id) => {
            change_status(context, Category::Movie, *id, Status::WantToWatch, Status::Missed).await
        }
        MovieCommand::List => {
            let items = context.tracker.items(Category::Movie).await?;
            Ok(format_item_list(Category::Movie, &items))
        }
    }
}
