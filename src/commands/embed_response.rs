//! Embed response formatters for bot commands.
//!
//! Every user facing string of the slash commands lives here. Functions take
//! the data already read from the spreadsheet and return a [`Reply`] or a
//! plain message, they never touch a data source.

use crate::{
    commands::reply::{Color, Embed, Reply},
    tracker::{
        Category, Item, Report, SearchScope, Status,
        query::{highlight, search_line},
        stats::{BookStats, CategorySummary, CurrentProgress, PeriodStats},
    },
};

/// Separator between entries of report histories and report searches.
pub const ENTRY_SEPARATOR: &str = "\n\n─────────────────\n\n";

/// Number of finished titles listed by the monthly statistics.
const MONTHLY_TITLES: usize = 5;

/// Number of items listed per field in progress views.
const PROGRESS_ITEMS: usize = 10;

pub fn format_unknown_command(name: &str) -> String {
    format!("❌ 不明なコマンド: {}", name)
}

/// Formats a response for an unknown subcommand.
///
/// # Examples
///
/// ```
/// let msg = format_unknown_subcommand("dance");
/// assert_eq!(msg, "❌ 不明なサブコマンド: dance");
/// ```
pub fn format_unknown_subcommand(name: &str) -> String {
    format!("❌ 不明なサブコマンド: {}", name)
}

pub fn format_missing_subcommand() -> String {
    "❌ サブコマンドを指定してください".to_owned()
}

pub fn format_missing_option(name: &str) -> String {
    format!("❌ オプション `{}` を指定してください", name)
}

pub fn format_invalid_option(name: &str) -> String {
    format!("❌ オプション `{}` の値が正しくありません", name)
}

/// Formats the message sent when a handler fails.
///
/// # Arguments
///
/// * `error` - Text of the underlying error, shown to the user as is
pub fn format_handler_error(error: &str) -> Reply {
    Reply::Text(format!("処理中にエラーが発生しました: {}", error))
}

fn unit(category: Category) -> &'static str {
    match category {
        Category::Book => "冊",
        Category::Movie => "本",
        Category::Activity => "件",
    }
}

fn count(n: usize, category: Category) -> String {
    format!("{}{}", n, unit(category))
}

/// `• [3] Dune` lines, at most `limit` of them.
pub(crate) fn bullet_lines(items: &[Item], limit: usize) -> String {
    let mut lines: Vec<String> = items
        .iter()
        .take(limit)
        .map(|item| format!("• [{}] {}", item.id, item.title))
        .collect();
    if items.len() > limit {
        lines.push(format!("他{}件", items.len() - limit));
    }
    lines.join("\n")
}

fn title_field_name(category: Category) -> &'static str {
    match category {
        Category::Activity => "活動内容",
        _ => "タイトル",
    }
}

/// Formats the confirmation of a new book, movie or activity.
///
/// The memo field is only shown when the memo is not empty.
pub fn format_item_added(item: &Item) -> Reply {
    let (title, color) = match item.category {
        Category::Book => ("📚 本を追加しました！", Color::Success),
        Category::Movie => ("🎬 映画を追加しました！", Color::Pink),
        Category::Activity => ("🎯 活動を追加しました！", Color::Teal),
    };

    let mut embed = Embed::new(title, color)
        .field("ID", item.id.to_string(), true)
        .field(title_field_name(item.category), &item.title, true);
    if let Some(author) = &item.author {
        embed = embed.field("作者", author, true);
    }
    embed = embed.field("ステータス", item.status.label(), true);
    if !item.memo.is_empty() {
        embed = embed.field("備考", &item.memo, false);
    }

    embed.into()
}

struct TransitionMessage {
    title: &'static str,
    color: Color,
    description: &'static str,
    footer: Option<&'static str>,
}

fn transition_message(to: Status) -> TransitionMessage {
    match to {
        Status::WantToRead => TransitionMessage {
            title: "🛒 本を購入しました！",
            color: Color::Info,
            description: "積読リストに追加されました！📚✨",
            footer: Some("読む準備ができたら /book start で読書を開始しましょう！"),
        },
        Status::Reading => TransitionMessage {
            title: "📖 読書開始！",
            color: Color::Warning,
            description: "頑張って読み進めましょう！✨",
            footer: Some("読み終わったら /book finish で読了にしましょう！"),
        },
        Status::Finished => TransitionMessage {
            title: "🎉 読了おめでとうございます！",
            color: Color::Gold,
            description: "素晴らしい達成感ですね！次の本も楽しみです📚✨",
            footer: Some("感想は /report book で記録できます"),
        },
        Status::Watched => TransitionMessage {
            title: "🍿 視聴完了！",
            color: Color::Success,
            description: "楽しい時間でしたね！🎬✨",
            footer: Some("感想は /report movie で記録できます"),
        },
        Status::Missed => TransitionMessage {
            title: "😅 見逃してしまいました",
            color: Color::Warning,
            description: "また機会があれば観てみてください！",
            footer: None,
        },
        Status::Done => TransitionMessage {
            title: "🎉 活動完了！",
            color: Color::Success,
            description: "お疲れ様でした！🎉✨",
            footer: Some("継続は力なり！次の活動も頑張りましょう！"),
        },
        Status::Skipped => TransitionMessage {
            title: "😅 やり逃してしまいました",
            color: Color::Warning,
            description: "今回は見送りましたね。また機会があればチャレンジしてみてください！",
            footer: None,
        },
        other => TransitionMessage {
            title: "🔄 ステータスを更新しました",
            color: Color::Info,
            description: other.label(),
            footer: None,
        },
    }
}

/// Formats the result of a status change.
///
/// # Arguments
///
/// * `category` - Category of the item
/// * `id` - Id given by the user
/// * `from` - Status the transition starts from
/// * `to` - Status the item was set to
/// * `item` - The updated item, `None` when no item has this id
pub fn format_status_change(
    category: Category,
    id: i64,
    from: Status,
    to: Status,
    item: Option<&Item>,
) -> Reply {
    let message = transition_message(to);
    let mut embed = Embed::new(message.title, message.color);

    match item {
        Some(item) => {
            embed = embed
                .description(message.description)
                .field("ID", id.to_string(), true)
                .field(title_field_name(category), &item.title, true);
        }
        None => {
            embed = embed
                .description(format!(
                    "⚠️ ID:{} の{}は見つかりませんでした",
                    id,
                    category.label()
                ))
                .field("ID", id.to_string(), true);
        }
    }

    embed = embed.field(
        "ステータス",
        format!("{} → {}", from.label(), to.label()),
        true,
    );
    if let Some(footer) = message.footer {
        embed = embed.footer(footer);
    }

    embed.into()
}

fn list_line(item: &Item) -> String {
    match &item.author {
        Some(author) if !author.is_empty() => {
            format!("[{}] {} - {}", item.id, item.title, author)
        }
        _ => format!("[{}] {}", item.id, item.title),
    }
}

fn list_field_name(status: Status) -> String {
    match status {
        Status::WantToBuy => "🛒 買いたい本".to_owned(),
        Status::WantToRead => "📋 積読本".to_owned(),
        Status::Reading => "📖 読書中".to_owned(),
        Status::Finished => "✅ 読了済み".to_owned(),
        Status::Planned => "🎯 予定中の活動".to_owned(),
        Status::Done => "✅ 完了した活動".to_owned(),
        Status::Skipped => "😅 スキップした活動".to_owned(),
        Status::WantToWatch => "🎬 観たい映画".to_owned(),
        Status::Watched => "✅ 視聴済みの映画".to_owned(),
        Status::Missed => "😅 見逃した映画".to_owned(),
        other => format!("{} {}", other.emoji(), other.label()),
    }
}

/// Formats every item of a category, grouped by status.
///
/// Statuses without items are left out.
pub fn format_item_list(category: Category, items: &[Item]) -> Reply {
    let (title, color) = match category {
        Category::Book => ("📚 本一覧", Color::Primary),
        Category::Movie => ("🎬 映画一覧", Color::Pink),
        Category::Activity => ("🎯 活動一覧", Color::Slate),
    };
    let mut embed = Embed::new(title, color);

    if items.is_empty() {
        return embed
            .description(format!("登録されている{}はありません", category.label()))
            .into();
    }

    embed = embed.description(format!("登録されている{}の一覧です", category.label()));
    for status in category.statuses() {
        let lines: Vec<String> = items
            .iter()
            .filter(|i| i.status == *status)
            .map(list_line)
            .collect();
        if !lines.is_empty() {
            embed = embed.field(list_field_name(*status), lines.join("\n"), false);
        }
    }

    embed.footer("詳細は各IDで操作してください").into()
}

/// Formats the books still to buy.
pub fn format_wishlist(items: &[Item]) -> Reply {
    let embed = Embed::new("🛒 買いたい本一覧", Color::Pink);
    if items.is_empty() {
        return embed.description("買いたい本はありません").into();
    }

    let lines: Vec<String> = items.iter().map(|i| format!("🛒 {}", list_line(i))).collect();
    embed
        .description(format!("購入予定の本リストです\n\n{}", lines.join("\n")))
        .footer("購入したら /book buy [ID] で積読リストに移動できます")
        .into()
}

/// Formats the confirmation of a new report.
///
/// # Arguments
///
/// * `report` - The stored report
/// * `item` - The item the report is about, when it exists
pub fn format_report_added(report: &Report, item: Option<&Item>) -> Reply {
    let mut embed = Embed::new("📝 日報を記録しました！", Color::Success)
        .description("今日も頑張りましたね！継続は力なりです！✨")
        .field("レポートID", report.id.to_string(), true)
        .field(
            "カテゴリ",
            format!("{} {}", report.category.emoji(), report.category.label()),
            true,
        )
        .field("対象ID", report.item_id.to_string(), true);
    if let Some(item) = item {
        embed = embed.field("対象", &item.title, false);
    }

    embed
        .field("内容", &report.content, false)
        .footer("レポート履歴は /reports で確認できます")
        .into()
}

/// Formats the reports of one item, most recent first.
pub fn format_history(category: Category, item_id: i64, reports: &[Report]) -> Reply {
    let mut embed = Embed::new(
        format!("{} ID:{} のレポート履歴", category.emoji(), item_id),
        Color::Primary,
    );

    if reports.is_empty() {
        embed = embed.description("まだレポートがありません");
    } else {
        let entries: Vec<String> = reports
            .iter()
            .map(|r| format!("📅 {}\n{}", r.date, r.content))
            .collect();
        embed = embed
            .description("過去のレポート記録です")
            .field("📊 総レポート数", format!("{}件", reports.len()), true)
            .field("📝 レポート履歴", entries.join(ENTRY_SEPARATOR), false);
    }

    embed
        .footer(format!(
            "/report {} {} [内容] で新しいレポートを記録できます",
            category.as_str(),
            item_id
        ))
        .into()
}

/// Formats the reports of the last days.
///
/// # Arguments
///
/// * `days` - Number of days covered, already clamped to at least 1
/// * `reports` - Reports of the window, most recent first
pub fn format_recent(days: i64, reports: &[Report]) -> Reply {
    let mut embed = Embed::new(format!("📝 過去{}日間のレポート一覧", days), Color::Success)
        .description(format!("最近の活動記録です（{}件）", reports.len()));

    for category in Category::ALL {
        let n = reports.iter().filter(|r| r.category == category).count();
        embed = embed.field(
            format!("{} {}", category.emoji(), category.label()),
            format!("{}件", n),
            true,
        );
    }

    let lines: Vec<String> = reports
        .iter()
        .map(|r| {
            format!(
                "{} {} [ID:{}] {}",
                r.date,
                r.category.emoji(),
                r.item_id,
                r.content
            )
        })
        .collect();

    embed
        .field("📋 レポート一覧", lines.join("\n"), false)
        .footer("詳細を見るには /reports history を使用してください")
        .into()
}

/// Formats the reports matching a keyword, with the keyword in bold.
pub fn format_report_search(keyword: &str, reports: &[Report]) -> Reply {
    let entries: Vec<String> = reports
        .iter()
        .map(|r| {
            format!(
                "{} {} [ID:{}]\n{}",
                r.category.emoji(),
                r.date,
                r.item_id,
                highlight(&r.content, keyword)
            )
        })
        .collect();

    Embed::new(format!("🔍 \"{}\" の検索結果", keyword), Color::Warning)
        .description("レポート内容から検索しました")
        .field("📊 見つかった件数", format!("{}件", reports.len()), true)
        .field("🔍 検索結果", entries.join(ENTRY_SEPARATOR), false)
        .footer(format!("キーワード \"{}\" でハイライト表示", keyword))
        .into()
}

/// Formats the items found by a search.
pub fn format_search_results(scope: SearchScope, keyword: &str, items: &[Item]) -> Reply {
    let (title, color, noun) = match scope {
        SearchScope::Category(Category::Book) => {
            (format!("🔍 本の検索結果: \"{}\"", keyword), Color::Primary, "本")
        }
        SearchScope::Category(Category::Movie) => {
            (format!("🔍 映画の検索結果: \"{}\"", keyword), Color::Pink, "映画")
        }
        SearchScope::Category(Category::Activity) => {
            (format!("🔍 活動の検索結果: \"{}\"", keyword), Color::Teal, "活動")
        }
        SearchScope::All => (
            format!("🔍 全体検索結果: \"{}\"", keyword),
            Color::Warning,
            "アイテム",
        ),
    };
    let embed = Embed::new(title, color);

    if items.is_empty() {
        return embed
            .description(format!("該当する{}が見つかりませんでした", noun))
            .into();
    }

    let lines: Vec<String> = items.iter().map(|i| search_line(i, scope)).collect();
    embed
        .description(lines.join("\n"))
        .footer(format!("{}件見つかりました", items.len()))
        .into()
}

/// Formats totals per category and status.
pub fn format_summary(summary: &[CategorySummary], reports: usize) -> Reply {
    let mut embed = Embed::new("📊 全体統計", Color::Blue);

    for category_summary in summary {
        let category = category_summary.category;
        let mut lines = vec![format!("登録: {}", count(category_summary.total, category))];
        lines.extend(
            category_summary
                .by_status
                .iter()
                .map(|(status, n)| format!("{}: {}", status.label(), count(*n, category))),
        );
        embed = embed.field(
            format!("{} {}", category.emoji(), category.label()),
            lines.join("\n"),
            true,
        );
    }

    embed
        .field("📝 日報", format!("{}件", reports), true)
        .footer("継続的な活動記録、素晴らしいですね！")
        .into()
}

/// Formats the completions of the current week.
pub fn format_weekly(stats: &PeriodStats) -> Reply {
    Embed::new("📅 今週の統計", Color::Green)
        .description("日曜日から今日までの記録です")
        .field("📚 読了", format!("{}冊", stats.books_finished), true)
        .field("🎬 視聴", format!("{}本", stats.movies_watched), true)
        .field("🎯 完了", format!("{}件", stats.activities_done), true)
        .field("📝 日報", format!("{}件", stats.reports), true)
        .footer("今週も充実した週でしたね！")
        .into()
}

/// Formats the completions of the current month.
///
/// Only the first finished titles are listed, the rest is counted.
pub fn format_monthly(stats: &PeriodStats) -> Reply {
    let mut embed = Embed::new("🗓️ 今月の統計", Color::Purple)
        .field("📚 読了冊数", format!("{}冊", stats.books_finished), true)
        .field("🎬 視聴本数", format!("{}本", stats.movies_watched), true)
        .field("🎯 完了活動", format!("{}件", stats.activities_done), true)
        .field("📝 日報件数", format!("{}件", stats.reports), true);

    if !stats.finished_titles.is_empty() {
        let mut lines: Vec<String> = stats
            .finished_titles
            .iter()
            .take(MONTHLY_TITLES)
            .map(|t| format!("• {}", t))
            .collect();
        if stats.finished_titles.len() > MONTHLY_TITLES {
            lines.push(format!(
                "その他{}冊",
                stats.finished_titles.len() - MONTHLY_TITLES
            ));
        }
        embed = embed.field("🏆 今月読了した本", lines.join("\n"), false);
    }

    embed.footer("素晴らしい1ヶ月でした！").into()
}

pub fn format_book_stats(stats: &BookStats) -> Reply {
    let by_status: Vec<String> = stats
        .by_status
        .iter()
        .map(|(status, n)| format!("{}: {}冊", status.label(), n))
        .collect();

    Embed::new("📚 読書統計詳細", Color::Red)
        .field("ステータス別", by_status.join("\n"), true)
        .field(
            "期間別",
            format!(
                "今月: {}冊\n今週: {}冊\n今日: {}冊",
                stats.finished_this_month, stats.finished_this_week, stats.finished_today
            ),
            true,
        )
        .into()
}

pub fn format_current(progress: &CurrentProgress) -> Reply {
    Embed::new("⚡ 現在の進行状況", Color::Orange)
        .field("📖 読書中", bullet_lines(&progress.reading, PROGRESS_ITEMS), false)
        .field(
            "🎬 観たい映画",
            bullet_lines(&progress.wanted_movies, PROGRESS_ITEMS),
            false,
        )
        .field(
            "🎯 予定中の活動",
            bullet_lines(&progress.planned_activities, PROGRESS_ITEMS),
            false,
        )
        .into()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn item(category: Category, id: i64, title: &str, status: Status) -> Item {
        Item {
            id,
            category,
            created_at: None,
            title: title.to_owned(),
            author: match category {
                Category::Book => Some("Frank Herbert".to_owned()),
                _ => None,
            },
            memo: String::new(),
            status,
            updated_at: None,
            row: id as usize,
        }
    }

    fn report(id: i64, day: u32, category: Category, content: &str) -> Report {
        Report {
            id,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            category,
            item_id: 1,
            content: content.to_owned(),
        }
    }

    fn embed(reply: Reply) -> Embed {
        match reply {
            Reply::Embed(embed) => embed,
            Reply::Text(text) => panic!("expected an embed, got {}", text),
        }
    }

    #[test]
    fn test_format_unknown_subcommand() {
        assert_eq!(format_unknown_subcommand("dance"), "❌ 不明なサブコマンド: dance");
    }

    #[test]
    fn test_format_handler_error() {
        assert_eq!(
            format_handler_error("timeout"),
            Reply::Text("処理中にエラーが発生しました: timeout".to_owned())
        );
    }

    #[test]
    fn test_format_book_added() {
        let mut book = item(Category::Book, 3, "Dune", Status::WantToBuy);
        book.memo = "gift".to_owned();
        let embed = embed(format_item_added(&book));

        assert_eq!(embed.title, "📚 本を追加しました！");
        assert_eq!(embed.color, Color::Success);
        assert_eq!(embed.field_value("ID"), Some("3"));
        assert_eq!(embed.field_value("タイトル"), Some("Dune"));
        assert_eq!(embed.field_value("作者"), Some("Frank Herbert"));
        assert_eq!(embed.field_value("ステータス"), Some("買いたい"));
        assert_eq!(embed.field_value("備考"), Some("gift"));
    }

    #[test]
    fn test_format_activity_added_without_memo() {
        let activity = item(Category::Activity, 12, "Jogging 30min", Status::Planned);
        let embed = embed(format_item_added(&activity));

        assert_eq!(embed.title, "🎯 活動を追加しました！");
        assert_eq!(embed.color, Color::Teal);
        assert_eq!(embed.field_value("活動内容"), Some("Jogging 30min"));
        assert_eq!(embed.field_value("ステータス"), Some("予定"));
        assert_eq!(embed.field_value("備考"), None);
    }

    #[test]
    fn test_format_status_change_done() {
        let activity = item(Category::Activity, 12, "Jogging 30min", Status::Done);
        let embed = embed(format_status_change(
            Category::Activity,
            12,
            Status::Planned,
            Status::Done,
            Some(&activity),
        ));

        assert_eq!(embed.title, "🎉 活動完了！");
        assert_eq!(embed.description.as_deref(), Some("お疲れ様でした！🎉✨"));
        assert_eq!(embed.field_value("ステータス"), Some("予定 → 完了"));
        assert_eq!(
            embed.footer.as_deref(),
            Some("継続は力なり！次の活動も頑張りましょう！")
        );
    }

    #[test]
    fn test_format_status_change_buy() {
        let book = item(Category::Book, 1, "Dune", Status::WantToRead);
        let embed = embed(format_status_change(
            Category::Book,
            1,
            Status::WantToBuy,
            Status::WantToRead,
            Some(&book),
        ));

        assert_eq!(embed.title, "🛒 本を購入しました！");
        assert_eq!(embed.field_value("ステータス"), Some("買いたい → 積読"));
    }

    #[test]
    fn test_format_status_change_not_found() {
        let embed = embed(format_status_change(
            Category::Movie,
            99,
            Status::WantToWatch,
            Status::Watched,
            None,
        ));

        assert_eq!(
            embed.description.as_deref(),
            Some("⚠️ ID:99 の映画は見つかりませんでした")
        );
        assert_eq!(embed.field_value("タイトル"), None);
        assert_eq!(embed.field_value("ステータス"), Some("観たい → 視聴済み"));
    }

    #[test]
    fn test_format_item_list_groups_by_status() {
        let items = vec![
            item(Category::Book, 1, "Dune", Status::Reading),
            item(Category::Book, 2, "Emma", Status::WantToBuy),
            item(Category::Book, 3, "Ubik", Status::Reading),
        ];
        let embed = embed(format_item_list(Category::Book, &items));

        assert_eq!(embed.title, "📚 本一覧");
        assert_eq!(embed.field_value("🛒 買いたい本"), Some("[2] Emma - Frank Herbert"));
        assert_eq!(
            embed.field_value("📖 読書中"),
            Some("[1] Dune - Frank Herbert\n[3] Ubik - Frank Herbert")
        );
        assert_eq!(embed.field_value("✅ 読了済み"), None);
    }

    #[test]
    fn test_format_item_list_empty() {
        let embed = embed(format_item_list(Category::Book, &[]));
        assert_eq!(
            embed.description.as_deref(),
            Some("登録されている本はありません")
        );
        assert!(embed.fields.is_empty());
    }

    #[test]
    fn test_format_wishlist() {
        let items = vec![item(Category::Book, 2, "Emma", Status::WantToBuy)];
        let embed = embed(format_wishlist(&items));

        assert_eq!(embed.title, "🛒 買いたい本一覧");
        assert_eq!(
            embed.description.as_deref(),
            Some("購入予定の本リストです\n\n🛒 [2] Emma - Frank Herbert")
        );
    }

    #[test]
    fn test_format_report_added() {
        let report = report(4, 13, Category::Book, "Read 20 pages");
        let book = item(Category::Book, 1, "Dune", Status::Reading);
        let embed = embed(format_report_added(&report, Some(&book)));

        assert_eq!(embed.title, "📝 日報を記録しました！");
        assert_eq!(embed.field_value("レポートID"), Some("4"));
        assert_eq!(embed.field_value("カテゴリ"), Some("📚 本"));
        assert_eq!(embed.field_value("対象ID"), Some("1"));
        assert_eq!(embed.field_value("対象"), Some("Dune"));
        assert_eq!(embed.field_value("内容"), Some("Read 20 pages"));
    }

    #[test]
    fn test_format_history() {
        let reports = vec![
            report(2, 12, Category::Book, "chapter 2"),
            report(1, 11, Category::Book, "chapter 1"),
        ];
        let embed = embed(format_history(Category::Book, 1, &reports));

        assert_eq!(embed.title, "📚 ID:1 のレポート履歴");
        assert_eq!(embed.field_value("📊 総レポート数"), Some("2件"));
        assert_eq!(
            embed.field_value("📝 レポート履歴"),
            Some("📅 2024-03-12\nchapter 2\n\n─────────────────\n\n📅 2024-03-11\nchapter 1")
        );
        assert_eq!(
            embed.footer.as_deref(),
            Some("/report book 1 [内容] で新しいレポートを記録できます")
        );
    }

    #[test]
    fn test_format_recent() {
        let reports = vec![
            report(2, 12, Category::Movie, "great"),
            report(1, 11, Category::Book, "chapter 1"),
        ];
        let embed = embed(format_recent(7, &reports));

        assert_eq!(embed.title, "📝 過去7日間のレポート一覧");
        assert_eq!(embed.description.as_deref(), Some("最近の活動記録です（2件）"));
        assert_eq!(embed.field_value("📚 本"), Some("1件"));
        assert_eq!(embed.field_value("🎯 活動"), Some("0件"));
        assert_eq!(
            embed.field_value("📋 レポート一覧"),
            Some("2024-03-12 🎬 [ID:1] great\n2024-03-11 📚 [ID:1] chapter 1")
        );
    }

    #[test]
    fn test_format_report_search_highlights() {
        let reports = vec![report(1, 11, Category::Book, "Rust is fun")];
        let embed = embed(format_report_search("rust", &reports));

        assert_eq!(embed.title, "🔍 \"rust\" の検索結果");
        assert_eq!(embed.field_value("📊 見つかった件数"), Some("1件"));
        assert_eq!(
            embed.field_value("🔍 検索結果"),
            Some("📚 2024-03-11 [ID:1]\n**Rust** is fun")
        );
    }

    #[test]
    fn test_format_search_results_empty() {
        let embed = embed(format_search_results(
            SearchScope::Category(Category::Movie),
            "alien",
            &[],
        ));
        assert_eq!(embed.title, "🔍 映画の検索結果: \"alien\"");
        assert_eq!(
            embed.description.as_deref(),
            Some("該当する映画が見つかりませんでした")
        );
    }

    #[test]
    fn test_format_search_results_all() {
        let items = vec![item(Category::Activity, 5, "Jogging", Status::Planned)];
        let embed = embed(format_search_results(SearchScope::All, "jog", &items));

        assert_eq!(embed.title, "🔍 全体検索結果: \"jog\"");
        assert_eq!(embed.description.as_deref(), Some("🎯 [5] Jogging (予定)"));
        assert_eq!(embed.footer.as_deref(), Some("1件見つかりました"));
    }

    #[test]
    fn test_format_summary() {
        let summary = vec![CategorySummary {
            category: Category::Movie,
            total: 3,
            by_status: vec![
                (Status::WantToWatch, 1),
                (Status::Watched, 2),
                (Status::Missed, 0),
            ],
        }];
        let embed = embed(format_summary(&summary, 4));

        assert_eq!(
            embed.field_value("🎬 映画"),
            Some("登録: 3本\n観たい: 1本\n視聴済み: 2本\n見逃し: 0本")
        );
        assert_eq!(embed.field_value("📝 日報"), Some("4件"));
    }

    #[test]
    fn test_format_monthly_lists_first_titles() {
        let stats = PeriodStats {
            books_finished: 7,
            finished_titles: (1..=7).map(|i| format!("Book {}", i)).collect(),
            ..Default::default()
        };
        let embed = embed(format_monthly(&stats));

        assert_eq!(embed.field_value("📚 読了冊数"), Some("7冊"));
        assert_eq!(
            embed.field_value("🏆 今月読了した本"),
            Some("• Book 1\n• Book 2\n• Book 3\n• Book 4\n• Book 5\nその他2冊")
        );
    }

    #[test]
    fn test_format_monthly_without_titles() {
        let embed = embed(format_monthly(&PeriodStats::default()));
        assert_eq!(embed.field_value("🏆 今月読了した本"), None);
    }

    #[test]
    fn test_format_book_stats() {
        let stats = BookStats {
            by_status: vec![(Status::WantToBuy, 1), (Status::Finished, 2)],
            finished_today: 0,
            finished_this_week: 1,
            finished_this_month: 2,
        };
        let embed = embed(format_book_stats(&stats));

        assert_eq!(embed.field_value("ステータス別"), Some("買いたい: 1冊\n読了: 2冊"));
        assert_eq!(embed.field_value("期間別"), Some("今月: 2冊\n今週: 1冊\n今日: 0冊"));
    }

    #[test]
    fn test_format_current() {
        let progress = CurrentProgress {
            reading: vec![item(Category::Book, 1, "Dune", Status::Reading)],
            wanted_movies: vec![],
            planned_activities: vec![],
        };
        let embed = embed(format_current(&progress));

        assert_eq!(embed.field_value("📖 読書中"), Some("• [1] Dune"));
        assert_eq!(embed.field_value("🎬 観たい映画"), Some("なし"));
    }
}
