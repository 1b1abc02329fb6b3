//! Domain structures of the tracker.
//!
//! These are the types handlers and notifications work with, converted from and
//! to the raw string rows of the spreadsheet.

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;

use crate::sheets::Table;

/// Format of the `created_at` column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the date columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Kind of tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Book,
    Movie,
    Activity,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Book, Category::Movie, Category::Activity];

    /// Value used in commands and in the `category` column of reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Movie => "movie",
            Category::Activity => "activity",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Book => "本",
            Category::Movie => "映画",
            Category::Activity => "活動",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Book => "📚",
            Category::Movie => "🎬",
            Category::Activity => "🎯",
        }
    }

    pub fn table(&self) -> Table {
        match self {
            Category::Book => Table::Books,
            Category::Movie => Table::Movies,
            Category::Activity => Table::Activities,
        }
    }

    /// Statuses an item of this category can take, in lifecycle order.
    pub fn statuses(&self) -> &'static [Status] {
        match self {
            Category::Book => &[
                Status::WantToBuy,
                Status::WantToRead,
                Status::Reading,
                Status::Finished,
                Status::Abandoned,
            ],
            Category::Movie => &[Status::WantToWatch, Status::Watched, Status::Missed],
            Category::Activity => &[Status::Planned, Status::Done, Status::Skipped],
        }
    }

    /// Status given to new items when none is provided.
    pub fn default_status(&self) -> Status {
        match self {
            Category::Book => Status::WantToRead,
            Category::Movie => Status::WantToWatch,
            Category::Activity => Status::Planned,
        }
    }
}

/// Status of an item. Each category uses its own subset, see [`Category::statuses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    WantToBuy,
    WantToRead,
    Reading,
    Finished,
    Abandoned,
    WantToWatch,
    Watched,
    Missed,
    Planned,
    Done,
    Skipped,
}

impl Status {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::WantToBuy => "want_to_buy",
            Status::WantToRead => "want_to_read",
            Status::Reading => "reading",
            Status::Finished => "finished",
            Status::Abandoned => "abandoned",
            Status::WantToWatch => "want_to_watch",
            Status::Watched => "watched",
            Status::Missed => "missed",
            Status::Planned => "planned",
            Status::Done => "done",
            Status::Skipped => "skipped",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::WantToBuy => "買いたい",
            Status::WantToRead => "積読",
            Status::Reading => "読書中",
            Status::Finished => "読了",
            Status::Abandoned => "中断",
            Status::WantToWatch => "観たい",
            Status::Watched => "視聴済み",
            Status::Missed => "見逃し",
            Status::Planned => "予定",
            Status::Done => "完了",
            Status::Skipped => "スキップ",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Status::WantToBuy => "🛒",
            Status::WantToRead => "📋",
            Status::Reading => "📖",
            Status::Finished => "✅",
            Status::Abandoned => "❌",
            Status::WantToWatch => "🎬",
            Status::Watched => "✅",
            Status::Missed => "😅",
            Status::Planned => "🎯",
            Status::Done => "✅",
            Status::Skipped => "😅",
        }
    }

    /// Parses a status column for the given category.
    ///
    /// `registered` is the book status of older sheets and reads as
    /// [`Status::WantToRead`]. Unknown values fall back to the category's
    /// default status.
    pub fn parse(category: Category, value: &str) -> Status {
        if category == Category::Book && value == "registered" {
            return Status::WantToRead;
        }

        match category
            .statuses()
            .iter()
            .find(|status| status.as_str() == value)
        {
            Some(status) => *status,
            None => {
                warn!(
                    "unknown {} status string: {}",
                    category.as_str(),
                    value
                );
                category.default_status()
            }
        }
    }
}

/// A book, movie or activity row.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub category: Category,
    pub created_at: Option<NaiveDateTime>,
    /// Title for books and movies, content for activities
    pub title: String,
    /// Only set for books
    pub author: Option<String>,
    pub memo: String,
    pub status: Status,
    pub updated_at: Option<NaiveDate>,
    /// 1-based row of the item in its sheet
    pub row: usize,
}

impl Item {
    /// Builds an item from a sheet row.
    ///
    /// Returns `None` for rows whose id cell is not an integer, like the header.
    pub fn from_row(category: Category, row: usize, cells: &[String]) -> Option<Item> {
        let cell = |index: usize| cells.get(index).map(|c| c.trim()).unwrap_or_default();
        let id = cell(0).parse::<i64>().ok()?;

        // Books have an extra author column after the title
        let (author, offset) = match category {
            Category::Book => (Some(cell(3).to_owned()), 1),
            _ => (None, 0),
        };

        Some(Item {
            id,
            category,
            created_at: parse_datetime(cell(1)),
            title: cell(2).to_owned(),
            author,
            memo: cell(3 + offset).to_owned(),
            status: Status::parse(category, cell(4 + offset)),
            updated_at: parse_date(cell(5 + offset)),
            row,
        })
    }

    /// Converts the item into a sheet row.
    pub fn to_row(&self) -> Vec<String> {
        let mut cells = vec![
            self.id.to_string(),
            self.created_at
                .map(|d| d.format(DATETIME_FORMAT).to_string())
                .unwrap_or_default(),
            self.title.clone(),
        ];
        if self.category == Category::Book {
            cells.push(self.author.clone().unwrap_or_default());
        }
        cells.push(self.memo.clone());
        cells.push(self.status.as_str().to_owned());
        cells.push(
            self.updated_at
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        );
        cells
    }

    /// Line used in lists and searches.
    ///
    /// - book: `📖 [3] Dune - Frank Herbert (読書中)`
    /// - movie or activity: `🎯 [5] Jogging (予定)`
    pub fn display_line(&self) -> String {
        match &self.author {
            Some(author) if !author.is_empty() => format!(
                "{} [{}] {} - {} ({})",
                self.status.emoji(),
                self.id,
                self.title,
                author,
                self.status.label()
            ),
            _ => format!(
                "{} [{}] {} ({})",
                self.status.emoji(),
                self.id,
                self.title,
                self.status.label()
            ),
        }
    }

    /// Line used when items of several categories are listed together.
    pub fn summary_line(&self) -> String {
        format!(
            "{} [{}] {} ({})",
            self.category.emoji(),
            self.id,
            self.title,
            self.status.label()
        )
    }
}

/// A dated free text note about an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub date: NaiveDate,
    pub category: Category,
    /// Id of the item the report is about, its existence is not checked
    pub item_id: i64,
    pub content: String,
}

impl Report {
    /// Builds a report from a sheet row.
    ///
    /// Returns `None` for the header and for rows with an unknown category or
    /// an invalid date.
    pub fn from_row(cells: &[String]) -> Option<Report> {
        let cell = |index: usize| cells.get(index).map(|c| c.trim()).unwrap_or_default();
        let id = cell(0).parse::<i64>().ok()?;

        let Some(category) = Category::parse(cell(2)) else {
            warn!("skip report {} with unknown category {}", id, cell(2));
            return None;
        };
        let Some(date) = parse_date(cell(1)) else {
            warn!("skip report {} with invalid date {}", id, cell(1));
            return None;
        };

        Some(Report {
            id,
            date,
            category,
            item_id: cell(3).parse::<i64>().unwrap_or_default(),
            content: cell(4).to_owned(),
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.format(DATE_FORMAT).to_string(),
            self.category.as_str().to_owned(),
            self.item_id.to_string(),
            self.content.clone(),
        ]
    }
}

/// Parses a `created_at` cell, date only cells are read as midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .or_else(|| parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Parses a date cell, the time part of a datetime cell is ignored.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("book"), Some(Category::Book));
        assert_eq!(Category::parse("movie"), Some(Category::Movie));
        assert_eq!(Category::parse("activity"), Some(Category::Activity));
        assert_eq!(Category::parse("music"), None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse(Category::Book, "reading"), Status::Reading);
        assert_eq!(Status::parse(Category::Movie, "missed"), Status::Missed);
        assert_eq!(Status::parse(Category::Activity, "done"), Status::Done);
    }

    #[test]
    fn test_status_parse_legacy_registered() {
        assert_eq!(Status::parse(Category::Book, "registered"), Status::WantToRead);
    }

    #[test]
    fn test_status_parse_unknown_falls_back() {
        assert_eq!(Status::parse(Category::Book, "lost"), Status::WantToRead);
        assert_eq!(Status::parse(Category::Movie, ""), Status::WantToWatch);
        // A status of another category is unknown too
        assert_eq!(Status::parse(Category::Activity, "watched"), Status::Planned);
    }

    #[test]
    fn test_book_from_row() {
        let item = Item::from_row(
            Category::Book,
            2,
            &row(&[
                "3",
                "2024-01-05 09:30:00",
                "Dune",
                "Frank Herbert",
                "gift",
                "reading",
                "2024-01-07",
            ]),
        )
        .unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Dune");
        assert_eq!(item.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(item.memo, "gift");
        assert_eq!(item.status, Status::Reading);
        assert_eq!(item.updated_at, NaiveDate::from_ymd_opt(2024, 1, 7));
        assert_eq!(
            item.created_at,
            NaiveDate::from_ymd_opt(2024, 1, 5).and_then(|d| d.and_hms_opt(9, 30, 0))
        );
        assert_eq!(item.row, 2);
    }

    #[test]
    fn test_activity_from_short_row() {
        let item = Item::from_row(Category::Activity, 4, &row(&["8", "", "Jogging"])).unwrap();
        assert_eq!(item.title, "Jogging");
        assert_eq!(item.author, None);
        assert_eq!(item.memo, "");
        assert_eq!(item.status, Status::Planned);
        assert_eq!(item.created_at, None);
    }

    #[test]
    fn test_header_row_is_skipped() {
        let header = row(Table::Movies.header());
        assert_eq!(Item::from_row(Category::Movie, 1, &header), None);
    }

    #[test]
    fn test_item_to_row_matches_layout() {
        let cells = row(&[
            "3",
            "2024-01-05 09:30:00",
            "Dune",
            "Frank Herbert",
            "",
            "finished",
            "2024-02-01",
        ]);
        let book = Item::from_row(Category::Book, 2, &cells).unwrap();
        assert_eq!(book.to_row(), cells);

        let cells = row(&["1", "2024-01-05 09:30:00", "Alien", "classic", "watched", ""]);
        let movie = Item::from_row(Category::Movie, 2, &cells).unwrap();
        assert_eq!(movie.to_row(), cells);
    }

    #[test]
    fn test_display_line() {
        let book = Item::from_row(
            Category::Book,
            2,
            &row(&["3", "", "Dune", "Frank Herbert", "", "reading", ""]),
        )
        .unwrap();
        assert_eq!(book.display_line(), "📖 [3] Dune - Frank Herbert (読書中)");

        let activity =
            Item::from_row(Category::Activity, 2, &row(&["5", "", "Jogging", "", "planned"]))
                .unwrap();
        assert_eq!(activity.display_line(), "🎯 [5] Jogging (予定)");
        assert_eq!(activity.summary_line(), "🎯 [5] Jogging (予定)");
    }

    #[test]
    fn test_report_from_row() {
        let report =
            Report::from_row(&row(&["2", "2024-03-01", "movie", "7", "great ending"])).unwrap();
        assert_eq!(report.id, 2);
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(report.category, Category::Movie);
        assert_eq!(report.item_id, 7);
        assert_eq!(report.content, "great ending");
        assert_eq!(
            report.to_row(),
            row(&["2", "2024-03-01", "movie", "7", "great ending"])
        );
    }

    #[test]
    fn test_report_with_unknown_category_is_skipped() {
        assert_eq!(
            Report::from_row(&row(&["2", "2024-03-01", "music", "7", "x"])),
            None
        );
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date("2024-03-01"), expected);
        assert_eq!(parse_date("2024/03/01"), expected);
        assert_eq!(parse_date("2024-03-01 12:00:00"), expected);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
    }
}
