//! Item and report operations on top of the spreadsheet.

use chrono::{NaiveDate, NaiveDateTime};
use futures::future::join_all;
use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::{
    sheets::{Requester, SheetsError, Table},
    tracker::{
        query::{self, SearchScope},
        structs::{Category, Item, Report, Status},
    },
};

/// An item about to be added.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub category: Category,
    pub title: String,
    pub author: Option<String>,
    pub memo: String,
    pub status: Status,
}

/// Reads and writes items and reports through a [Requester].
///
/// Ids are allocated from the data: a new row gets the largest id of its
/// table plus one. Allocation and write happen under a single lock so two
/// concurrent commands never get the same id.
///
/// # Examples
///
/// ```no_run
/// let tracker = Tracker::new(LocalSheets::in_memory());
/// let item = tracker.add_item(new_item, now).await?;
/// tracker.set_status(Category::Activity, item.id, Status::Done, today).await?;
/// ```
pub struct Tracker<R: Requester> {
    requester: R,
    /// Serializes id allocation and row writes
    write_lock: Mutex<()>,
}

/// Largest id of the rows plus one, rows without an integer id are ignored.
fn next_id(rows: &[Vec<String>]) -> i64 {
    rows.iter()
        .filter_map(|row| row.first()?.trim().parse::<i64>().ok())
        .max()
        .map_or(1, |id| id.max(0) + 1)
}

impl<R: Requester> Tracker<R> {
    /// Create a new [Tracker].
    ///
    /// # Arguments
    ///
    /// * `requester` - An implementation of the [Requester] trait to read and write rows.
    pub fn new(requester: R) -> Self {
        Tracker {
            requester,
            write_lock: Mutex::new(()),
        }
    }

    /// Items of a category, in sheet order.
    pub async fn items(&self, category: Category) -> Result<Vec<Item>, SheetsError> {
        let rows = self.requester.read(&category.table().range()).await?;
        let items: Vec<Item> = rows
            .iter()
            .enumerate()
            .filter_map(|(index, cells)| Item::from_row(category, index + 1, cells))
            .collect();

        debug!("read {} {} items", items.len(), category.as_str());

        Ok(items)
    }

    /// Items of every category of the scope, read concurrently.
    pub async fn items_of(&self, categories: &[Category]) -> Result<Vec<Item>, SheetsError> {
        let results = join_all(categories.iter().map(|category| self.items(*category))).await;

        let mut items = Vec::new();
        for result in results {
            items.extend(result?);
        }
        Ok(items)
    }

    pub async fn all_items(&self) -> Result<Vec<Item>, SheetsError> {
        self.items_of(&Category::ALL).await
    }

    pub async fn find_item(&self, category: Category, id: i64) -> Result<Option<Item>, SheetsError> {
        Ok(self
            .items(category)
            .await?
            .into_iter()
            .find(|item| item.id == id))
    }

    /// Appends a new item and returns it with its allocated id.
    pub async fn add_item(&self, new_item: NewItem, now: NaiveDateTime) -> Result<Item, SheetsError> {
        let _guard = self.write_lock.lock().await;

        let table = new_item.category.table();
        let rows = self.requester.read(&table.range()).await?;

        let item = Item {
            id: next_id(&rows),
            category: new_item.category,
            created_at: Some(now),
            title: new_item.title,
            author: new_item.author,
            memo: new_item.memo,
            status: new_item.status,
            updated_at: Some(now.date()),
            row: rows.len() + 1,
        };

        self.requester.append(&table.range(), item.to_row()).await?;

        info!(
            "added {} {} with status {}",
            item.category.as_str(),
            item.id,
            item.status.as_str()
        );

        Ok(item)
    }

    /// Sets the status of an item.
    ///
    /// Returns the updated item, or `None` when no item has this id. The
    /// previous status is not checked.
    pub async fn set_status(
        &self,
        category: Category,
        id: i64,
        status: Status,
        today: NaiveDate,
    ) -> Result<Option<Item>, SheetsError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut item) = self.find_item(category, id).await? else {
            warn!("{} {} not found, status {} not applied", category.as_str(), id, status.as_str());
            return Ok(None);
        };

        let previous = item.status;
        item.status = status;
        item.updated_at = Some(today);

        self.requester
            .update(&category.table().row_range(item.row), item.to_row())
            .await?;

        info!(
            "{} {} status {} -> {}",
            category.as_str(),
            id,
            previous.as_str(),
            status.as_str()
        );

        Ok(Some(item))
    }

    /// Every report, in sheet order.
    pub async fn reports(&self) -> Result<Vec<Report>, SheetsError> {
        let rows = self.requester.read(&Table::Reports.range()).await?;
        Ok(rows.iter().filter_map(|cells| Report::from_row(cells)).collect())
    }

    /// Appends a report dated `today`.
    pub async fn add_report(
        &self,
        category: Category,
        item_id: i64,
        content: &str,
        today: NaiveDate,
    ) -> Result<Report, SheetsError> {
        let _guard = self.write_lock.lock().await;

        let rows = self.requester.read(&Table::Reports.range()).await?;
        let report = Report {
            id: next_id(&rows),
            date: today,
            category,
            item_id,
            content: content.to_owned(),
        };

        self.requester
            .append(&Table::Reports.range(), report.to_row())
            .await?;

        info!(
            "added report {} for {} {}",
            report.id,
            category.as_str(),
            item_id
        );

        Ok(report)
    }

    pub async fn history(&self, category: Category, item_id: i64) -> Result<Vec<Report>, SheetsError> {
        Ok(query::item_history(&self.reports().await?, category, item_id))
    }

    pub async fn recent_reports(&self, days: i64, today: NaiveDate) -> Result<Vec<Report>, SheetsError> {
        Ok(query::recent_reports(&self.reports().await?, days, today))
    }

    pub async fn search_reports(&self, keyword: &str) -> Result<Vec<Report>, SheetsError> {
        Ok(query::search_reports(&self.reports().await?, keyword))
    }

    pub async fn search_items(&self, scope: SearchScope, keyword: &str) -> Result<Vec<Item>, SheetsError> {
        let items = self.items_of(&scope.categories()).await?;
        Ok(query::search_items(&items, scope, keyword))
    }
}
