//! Sheet names and column layouts.

use serde::{Deserialize, Serialize};

/// A sheet of the spreadsheet.
///
/// Row 1 of every sheet holds the column headers returned by [`Table::header`].
///
/// | Table        | Sheet               | Columns                                                    |
/// |--------------|---------------------|------------------------------------------------------------|
/// | `Books`      | `books_master`      | id, created_at, title, author, memo, status, updated_at    |
/// | `Movies`     | `movies_master`     | id, created_at, title, memo, status, updated_at            |
/// | `Activities` | `activities_master` | id, created_at, content, memo, status, updated_at          |
/// | `Reports`    | `daily_reports`     | id, date, category, item_id, content                       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Books,
    Movies,
    Activities,
    Reports,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Books, Table::Movies, Table::Activities, Table::Reports];

    /// Name of the sheet in the spreadsheet.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Table::Books => "books_master",
            Table::Movies => "movies_master",
            Table::Activities => "activities_master",
            Table::Reports => "daily_reports",
        }
    }

    /// Column headers, in sheet order.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Table::Books => &[
                "id",
                "created_at",
                "title",
                "author",
                "memo",
                "status",
                "updated_at",
            ],
            Table::Movies => &["id", "created_at", "title", "memo", "status", "updated_at"],
            Table::Activities => &["id", "created_at", "content", "memo", "status", "updated_at"],
            Table::Reports => &["id", "date", "category", "item_id", "content"],
        }
    }

    /// Number of columns of the table.
    pub fn width(&self) -> usize {
        self.header().len()
    }

    fn last_column(&self) -> char {
        // Tables are narrower than 26 columns
        (b'A' + self.width() as u8 - 1) as char
    }

    /// Range covering every row of the table, e.g. `books_master!A:G`.
    pub fn range(&self) -> String {
        format!("{}!A:{}", self.sheet_name(), self.last_column())
    }

    /// Range covering a single 1-based row, e.g. `books_master!A5:G5`.
    pub fn row_range(&self, row: usize) -> String {
        format!(
            "{}!A{}:{}{}",
            self.sheet_name(),
            row,
            self.last_column(),
            row
        )
    }

    pub fn from_sheet_name(name: &str) -> Option<Table> {
        Table::ALL.into_iter().find(|t| t.sheet_name() == name)
    }
}

/// A parsed A1 range as produced by [`Table::range`] and [`Table::row_range`].
#[derive(Debug, PartialEq)]
pub struct SheetRange {
    pub table: Table,
    /// 1-based row when the range targets a single row.
    pub row: Option<usize>,
}

impl SheetRange {
    /// Parses `sheet!A:G` or `sheet!A5:G5`.
    ///
    /// Returns `None` if the sheet is unknown.
    pub fn parse(range: &str) -> Option<SheetRange> {
        let (sheet, cells) = range.split_once('!')?;
        let table = Table::from_sheet_name(sheet)?;

        let first_cell = cells.split(':').next().unwrap_or_default();
        let digits: String = first_cell.chars().filter(|c| c.is_ascii_digit()).collect();
        let row = digits.parse::<usize>().ok();

        Some(SheetRange { table, row })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(Table::Books.range(), "books_master!A:G");
        assert_eq!(Table::Movies.range(), "movies_master!A:F");
        assert_eq!(Table::Activities.range(), "activities_master!A:F");
        assert_eq!(Table::Reports.range(), "daily_reports!A:E");
    }

    #[test]
    fn test_row_range() {
        assert_eq!(Table::Books.row_range(5), "books_master!A5:G5");
        assert_eq!(Table::Reports.row_range(12), "daily_reports!A12:E12");
    }

    #[test]
    fn test_parse_whole_table() {
        assert_eq!(
            SheetRange::parse("movies_master!A:F"),
            Some(SheetRange {
                table: Table::Movies,
                row: None
            })
        );
    }

    #[test]
    fn test_parse_single_row() {
        assert_eq!(
            SheetRange::parse(&Table::Activities.row_range(42)),
            Some(SheetRange {
                table: Table::Activities,
                row: Some(42)
            })
        );
    }

    #[test]
    fn test_parse_unknown_sheet() {
        assert_eq!(SheetRange::parse("unknown!A:B"), None);
        assert_eq!(SheetRange::parse("no range"), None);
    }
}
