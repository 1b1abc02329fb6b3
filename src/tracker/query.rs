//! Filters over items and reports.
//!
//! These functions work on rows already read from the spreadsheet so they can
//! be tested without any data source.

use chrono::{Days, NaiveDate};

use crate::tracker::structs::{Category, Item, Report};

/// Scope of an item search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Category(Category),
    All,
}

impl SearchScope {
    pub fn categories(&self) -> Vec<Category> {
        match self {
            SearchScope::Category(category) => vec![*category],
            SearchScope::All => Category::ALL.to_vec(),
        }
    }
}

/// Case-insensitive substring match, an empty keyword matches everything.
///
/// The keyword is used as given, surrounding whitespace included.
pub fn matches_keyword(text: &str, keyword: &str) -> bool {
    keyword.is_empty() || text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Line an item is matched against, which is also the line shown in results.
pub fn search_line(item: &Item, scope: SearchScope) -> String {
    match scope {
        SearchScope::Category(_) => item.display_line(),
        SearchScope::All => item.summary_line(),
    }
}

/// Items whose search line contains the keyword.
pub fn search_items(items: &[Item], scope: SearchScope, keyword: &str) -> Vec<Item> {
    let categories = scope.categories();
    items
        .iter()
        .filter(|item| categories.contains(&item.category))
        .filter(|item| matches_keyword(&search_line(item, scope), keyword))
        .cloned()
        .collect()
}

fn newest_first(mut reports: Vec<Report>) -> Vec<Report> {
    reports.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    reports
}

/// Reports of a single item, most recent first.
pub fn item_history(reports: &[Report], category: Category, item_id: i64) -> Vec<Report> {
    newest_first(
        reports
            .iter()
            .filter(|r| r.category == category && r.item_id == item_id)
            .cloned()
            .collect(),
    )
}

/// Reports dated within the last `days` days, today included, most recent first.
///
/// `days` lower than 1 is read as 1, a window reaching past the earliest
/// representable date covers every report.
pub fn recent_reports(reports: &[Report], days: i64, today: NaiveDate) -> Vec<Report> {
    let from = today
        .checked_sub_days(Days::new(days.max(1).abs_diff(1)))
        .unwrap_or(NaiveDate::MIN);
    newest_first(
        reports
            .iter()
            .filter(|r| r.date >= from && r.date <= today)
            .cloned()
            .collect(),
    )
}

/// Reports whose content contains the keyword, most recent first.
pub fn search_reports(reports: &[Report], keyword: &str) -> Vec<Report> {
    newest_first(
        reports
            .iter()
            .filter(|r| matches_keyword(&r.content, keyword))
            .cloned()
            .collect(),
    )
}

/// Wraps every case-insensitive occurrence of the keyword in `**`.
pub fn highlight(content: &str, keyword: &str) -> String {
    let needle: Vec<char> = keyword.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return content.to_owned();
    }

    let chars: Vec<char> = content.chars().collect();
    let mut highlighted = String::with_capacity(content.len());
    let mut i = 0;
    while i < chars.len() {
        let end = i + needle.len();
        let found = end <= chars.len()
            && chars[i..end]
                .iter()
                .zip(&needle)
                .all(|(c, n)| c.to_lowercase().eq(std::iter::once(*n)));

        if found {
            highlighted.push_str("**");
            highlighted.extend(&chars[i..end]);
            highlighted.push_str("**");
            i = end;
        } else {
            highlighted.push(chars[i]);
            i += 1;
        }
    }
    highlighted
}
