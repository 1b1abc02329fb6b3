//! Book command handler.
//!
//! Books follow the lifecycle `買いたい → 積読 → 読書中 → 読了`.

use log::debug;

use crate::{
    commands::{
        CommandContext, Reply,
        actions::change_status,
        command::BookCommand,
        embed_response::{format_item_added, format_item_list, format_wishlist},
    },
    sheets::{Requester, SheetsError},
    tracker::{Category, NewItem, Status},
};

pub async fn handle_book<R: Requester>(
    context: &CommandContext<'_, R>,
    command: &BookCommand,
) -> Result<Reply, SheetsError> {
    debug!("handling book command {:?} from {}", command, context.user);

    match command {
        BookCommand::Add {
            title,
            author,
            status,
            memo,
        } => {
            let new_item = NewItem {
                category: Category::Book,
                title: title.clone(),
                author: Some(author.clone()),
                memo: memo.clone(),
                status: *status,
            };
            let item = context.tracker.add_item(new_item, context.local_now()).await?;
            Ok(format_item_added(&item))
        }
        BookCommand::Buy(id) => {
            change_status(context, Category::Book, *id, Status::WantToBuy, Status::WantToRead).await
        }
        BookCommand::Start(id) => {
            change_status(context, Category::Book, *id, Status::WantToRead, Status::Reading).await
        }
        BookCommand::Finish(id) => {
            change_status(context, Category::Book, *id, Status::Reading, Status::Finished).await
        }
        BookCommand::List => {
            let items = context.tracker.items(Category::Book).await?;
            Ok(format_item_list(Category::Book, &items))
        }
        BookCommand::Wishlist => {
            let items: Vec<_> = context
                .tracker
                .items(Category::Book)
                .await?
                .into_iter()
                .filter(|i| i.status == Status::WantToBuy)
                .collect();
            Ok(format_wishlist(&items))
        }
    }
}
