//! Local spreadsheet stand-in.
//!
//! This module provides [`LocalSheets`], an in-memory copy of the spreadsheet
//! tables persisted as a JSON file between bot restarts. It answers the same
//! ranges as the Sheets API so the rest of the bot cannot tell the difference.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use tokio::{fs, sync::Mutex};

use crate::sheets::{
    SheetsError,
    requester::Requester,
    schema::SheetRange,
};

/// Rows of every sheet, indexed by sheet name.
type Tables = HashMap<String, Vec<Vec<String>>>;

/// Spreadsheet kept in memory and optionally persisted to disk.
///
/// Row numbers used by [`Requester::update`] are 1-based, like in a sheet.
/// A write only succeeds once the file on disk holds it, a failed write
/// leaves the tables as they were.
///
/// # Examples
///
/// ```no_run
/// let sheets = LocalSheets::load("data/sheets.json").await?;
/// sheets.append("books_master!A:G", row).await?;
/// ```
pub struct LocalSheets {
    /// Path of the JSON file, `None` keeps the tables in memory only.
    path: Option<PathBuf>,
    tables: Mutex<Tables>,
}

/// Sibling file the tables are written to before replacing the real one.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

impl LocalSheets {
    /// Creates an empty spreadsheet which is never written to disk.
    pub fn in_memory() -> Self {
        LocalSheets {
            path: None,
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Loads the tables from disk.
    ///
    /// A missing file starts empty tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold tables,
    /// so the next write never replaces rows that failed to load.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, SheetsError> {
        let path = path.into();
        let tables = match fs::read_to_string(&path).await {
            Ok(serialized_tables) => {
                let tables = serde_json::from_str::<Tables>(&serialized_tables).map_err(|e| {
                    SheetsError::Malformed(format!("cannot load {}: {}", path.display(), e))
                })?;
                info!("loaded local sheets from {}", path.display());
                tables
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("no local sheets found at {}, starting with empty tables", path.display());
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(LocalSheets {
            path: Some(path),
            tables: Mutex::new(tables),
        })
    }

    async fn persist(&self, tables: &Tables) -> Result<(), SheetsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let serialized_tables = serde_json::to_string(tables)
            .map_err(|e| SheetsError::Malformed(format!("cannot serialize tables: {}", e)))?;

        let temp = temp_path(path);
        fs::write(&temp, &serialized_tables).await?;
        fs::rename(&temp, path).await?;

        debug!("persisted local sheets to {}", path.display());
        Ok(())
    }

    fn parse_range(range: &str) -> Result<SheetRange, SheetsError> {
        SheetRange::parse(range)
            .ok_or_else(|| SheetsError::Malformed(format!("unknown range {}", range)))
    }
}

impl Requester for LocalSheets {
    async fn read(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let sheet_range = Self::parse_range(range)?;
        let tables = self.tables.lock().await;
        let rows = tables
            .get(sheet_range.table.sheet_name())
            .cloned()
            .unwrap_or_default();

        match sheet_range.row {
            Some(row) => Ok(rows
                .get(row.saturating_sub(1))
                .cloned()
                .into_iter()
                .collect()),
            None => Ok(rows),
        }
    }

    async fn append(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        let sheet_range = Self::parse_range(range)?;
        let sheet_name = sheet_range.table.sheet_name();
        let mut tables = self.tables.lock().await;

        let rows = tables.entry(sheet_name.to_owned()).or_default();
        rows.push(row);
        let row_number = rows.len();

        if let Err(e) = self.persist(&tables).await {
            error!("failed to persist row {} of {}: {}", row_number, range, e);
            if let Some(rows) = tables.get_mut(sheet_name) {
                rows.pop();
            }
            return Err(e);
        }

        debug!("appended row {} to {}", row_number, range);
        Ok(())
    }

    async fn update(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        let sheet_range = Self::parse_range(range)?;
        let Some(row_number) = sheet_range.row else {
            return Err(SheetsError::Malformed(format!(
                "range {} does not target a single row",
                range
            )));
        };
        let sheet_name = sheet_range.table.sheet_name();
        let index = row_number.saturating_sub(1);

        let mut tables = self.tables.lock().await;
        let target = tables
            .get_mut(sheet_name)
            .and_then(|rows| rows.get_mut(index))
            .ok_or_else(|| SheetsError::Malformed(format!("row {} does not exist", range)))?;
        let previous = std::mem::replace(target, row);

        if let Err(e) = self.persist(&tables).await {
            error!("failed to persist update of {}: {}", range, e);
            if let Some(target) = tables.get_mut(sheet_name).and_then(|rows| rows.get_mut(index)) {
                *target = previous;
            }
            return Err(e);
        }

        debug!("updated row {}", range);
        Ok(())
    }
}
