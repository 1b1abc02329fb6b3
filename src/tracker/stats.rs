//! Aggregations behind the `stats` command and the scheduled reports.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::tracker::structs::{Category, Item, Report, Status};

/// Totals of a category.
#[derive(Debug, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: usize,
    /// Count for every status of the category, in lifecycle order
    pub by_status: Vec<(Status, usize)>,
}

/// Completions over a date range.
#[derive(Debug, Default, PartialEq)]
pub struct PeriodStats {
    pub books_finished: usize,
    pub movies_watched: usize,
    pub activities_done: usize,
    pub reports: usize,
    /// Titles of the books finished in the period
    pub finished_titles: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub struct BookStats {
    pub by_status: Vec<(Status, usize)>,
    pub finished_today: usize,
    pub finished_this_week: usize,
    pub finished_this_month: usize,
}

/// What is in progress right now.
#[derive(Debug, PartialEq)]
pub struct CurrentProgress {
    pub reading: Vec<Item>,
    pub wanted_movies: Vec<Item>,
    pub planned_activities: Vec<Item>,
}

/// First day of the week of `today`, weeks start on Sunday.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_sunday() as i64)
}

pub fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

fn of_category(items: &[Item], category: Category) -> impl Iterator<Item = &Item> {
    items.iter().filter(move |i| i.category == category)
}

fn with_status(items: &[Item], status: Status) -> Vec<Item> {
    items.iter().filter(|i| i.status == status).cloned().collect()
}

pub fn count_by_status(items: &[Item], category: Category) -> Vec<(Status, usize)> {
    category
        .statuses()
        .iter()
        .map(|status| {
            let count = of_category(items, category)
                .filter(|i| i.status == *status)
                .count();
            (*status, count)
        })
        .collect()
}

pub fn summary(items: &[Item]) -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            category,
            total: of_category(items, category).count(),
            by_status: count_by_status(items, category),
        })
        .collect()
}

fn completed_between(items: &[Item], status: Status, from: NaiveDate, to: NaiveDate) -> Vec<&Item> {
    items
        .iter()
        .filter(|i| i.status == status)
        .filter(|i| i.updated_at.is_some_and(|d| d >= from && d <= to))
        .collect()
}

/// Completions and reports dated between `from` and `to`, both included.
pub fn period_stats(items: &[Item], reports: &[Report], from: NaiveDate, to: NaiveDate) -> PeriodStats {
    let finished = completed_between(items, Status::Finished, from, to);

    PeriodStats {
        books_finished: finished.len(),
        movies_watched: completed_between(items, Status::Watched, from, to).len(),
        activities_done: completed_between(items, Status::Done, from, to).len(),
        reports: reports
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .count(),
        finished_titles: finished.iter().map(|i| i.title.clone()).collect(),
    }
}

pub fn book_stats(items: &[Item], today: NaiveDate) -> BookStats {
    let finished_since = |from: NaiveDate| completed_between(items, Status::Finished, from, today).len();

    BookStats {
        by_status: count_by_status(items, Category::Book),
        finished_today: finished_since(today),
        finished_this_week: finished_since(week_start(today)),
        finished_this_month: finished_since(month_start(today)),
    }
}

pub fn current_progress(items: &[Item]) -> CurrentProgress {
    CurrentProgress {
        reading: with_status(items, Status::Reading),
        wanted_movies: with_status(items, Status::WantToWatch),
        planned_activities: with_status(items, Status::Planned),
    }
}

/// Items still in `status` created more than `days` days before `now`.
pub fn stale_items(items: &[Item], status: Status, now: NaiveDateTime, days: i64) -> Vec<Item> {
    let limit = now - Duration::days(days);
    items
        .iter()
        .filter(|i| i.status == status)
        .filter(|i| i.created_at.is_some_and(|created_at| created_at < limit))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(category: Category, id: i64, status: Status, updated_at: Option<NaiveDate>) -> Item {
        Item {
            id,
            category,
            created_at: updated_at.and_then(|d| d.and_hms_opt(8, 0, 0)),
            title: format!("{} {}", category.as_str(), id),
            author: None,
            memo: String::new(),
            status,
            updated_at,
            row: id as usize,
        }
    }

    fn report(id: i64, date: NaiveDate) -> Report {
        Report {
            id,
            date,
            category: Category::Book,
            item_id: 1,
            content: String::new(),
        }
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-03-13 is a Wednesday
        assert_eq!(week_start(date(2024, 3, 13)), date(2024, 3, 10));
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 10));
        assert_eq!(week_start(date(2024, 3, 16)), date(2024, 3, 10));
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
    }

    #[test]
    fn test_summary() {
        let items = vec![
            item(Category::Book, 1, Status::Reading, None),
            item(Category::Book, 2, Status::Finished, None),
            item(Category::Book, 3, Status::Finished, None),
            item(Category::Movie, 1, Status::WantToWatch, None),
        ];
        let summary = summary(&items);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].category, Category::Book);
        assert_eq!(summary[0].total, 3);
        assert_eq!(
            summary[0].by_status,
            vec![
                (Status::WantToBuy, 0),
                (Status::WantToRead, 0),
                (Status::Reading, 1),
                (Status::Finished, 2),
                (Status::Abandoned, 0),
            ]
        );
        assert_eq!(summary[1].total, 1);
        assert_eq!(summary[2].total, 0);
    }

    #[test]
    fn test_period_stats() {
        let items = vec![
            item(Category::Book, 1, Status::Finished, Some(date(2024, 3, 11))),
            item(Category::Book, 2, Status::Finished, Some(date(2024, 3, 2))),
            item(Category::Book, 3, Status::Reading, Some(date(2024, 3, 11))),
            item(Category::Movie, 1, Status::Watched, Some(date(2024, 3, 12))),
            item(Category::Activity, 1, Status::Done, Some(date(2024, 3, 10))),
            item(Category::Activity, 2, Status::Skipped, Some(date(2024, 3, 10))),
        ];
        let reports = vec![report(1, date(2024, 3, 9)), report(2, date(2024, 3, 12))];

        let stats = period_stats(&items, &reports, date(2024, 3, 10), date(2024, 3, 13));
        assert_eq!(
            stats,
            PeriodStats {
                books_finished: 1,
                movies_watched: 1,
                activities_done: 1,
                reports: 1,
                finished_titles: vec!["book 1".to_owned()],
            }
        );
    }

    #[test]
    fn test_book_stats() {
        let today = date(2024, 3, 13);
        let items = vec![
            item(Category::Book, 1, Status::Finished, Some(today)),
            item(Category::Book, 2, Status::Finished, Some(date(2024, 3, 11))),
            item(Category::Book, 3, Status::Finished, Some(date(2024, 3, 2))),
            item(Category::Book, 4, Status::Finished, Some(date(2024, 2, 28))),
            item(Category::Book, 5, Status::WantToBuy, None),
        ];
        let stats = book_stats(&items, today);

        assert_eq!(stats.finished_today, 1);
        assert_eq!(stats.finished_this_week, 2);
        assert_eq!(stats.finished_this_month, 3);
        assert_eq!(stats.by_status[0], (Status::WantToBuy, 1));
        assert_eq!(stats.by_status[3], (Status::Finished, 4));
    }

    #[test]
    fn test_current_progress() {
        let items = vec![
            item(Category::Book, 1, Status::Reading, None),
            item(Category::Book, 2, Status::WantToRead, None),
            item(Category::Movie, 1, Status::WantToWatch, None),
            item(Category::Activity, 1, Status::Planned, None),
            item(Category::Activity, 2, Status::Done, None),
        ];
        let progress = current_progress(&items);

        assert_eq!(progress.reading.len(), 1);
        assert_eq!(progress.wanted_movies.len(), 1);
        assert_eq!(progress.planned_activities.len(), 1);
        assert_eq!(progress.planned_activities[0].id, 1);
    }

    #[test]
    fn test_stale_items() {
        let now = date(2024, 3, 20).and_hms_opt(21, 0, 0).unwrap();
        let items = vec![
            item(Category::Movie, 1, Status::WantToWatch, Some(date(2024, 3, 1))),
            item(Category::Movie, 2, Status::WantToWatch, Some(date(2024, 3, 19))),
            item(Category::Movie, 3, Status::Watched, Some(date(2024, 3, 1))),
            item(Category::Movie, 4, Status::WantToWatch, None),
        ];
        let stale = stale_items(&items, Status::WantToWatch, now, 7);
        assert_eq!(stale.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
    }
}
