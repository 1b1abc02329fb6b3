//! Notification embeds.

use crate::{
    commands::{Color, Embed, embed_response::bullet_lines},
    tracker::{Item, stats::PeriodStats},
};

/// Number of items listed per field.
pub const NOTIFICATION_ITEMS: usize = 5;

pub fn format_morning_reminder(reading: &[Item], pile: &[Item]) -> Embed {
    Embed::new("☀️ おはようございます！", Color::Sunshine)
        .description("今日はどの本を読みますか？📚")
        .field("📖 読書中の本", bullet_lines(reading, NOTIFICATION_ITEMS), false)
        .field("📋 積んでいる本", bullet_lines(pile, NOTIFICATION_ITEMS), false)
        .footer("今日も素晴らしい一日にしましょう！")
}

pub fn format_monthly_wishlist(wishlist: &[Item]) -> Embed {
    Embed::new("🛒 月初の買いたい本リスト", Color::Success)
        .description("新しい月が始まりました！気になっていた本を購入してみませんか？📚✨")
        .field(
            format!("📋 買いたい本一覧 ({}冊)", wishlist.len()),
            bullet_lines(wishlist, NOTIFICATION_ITEMS),
            false,
        )
        .footer("購入したら /book buy [ID] で積読リストに移動できます")
}

pub fn format_log_reminder() -> Embed {
    Embed::new("📝 ログ記録のリマインド", Color::Warning)
        .description("今日の活動を振り返って、日報を記録してみませんか？")
        .field("📚 本の記録", "`/report book [ID] [内容]`", false)
        .field("🎬 映画の記録", "`/report movie [ID] [内容]`", false)
        .field("🎯 活動の記録", "`/report activity [ID] [内容]`", false)
        .field(
            "💡 記録のコツ",
            "• 感じたことを一言でもOK\n• 学んだことや気づきを残しましょう",
            false,
        )
        .footer("継続は力なり！今日も一歩前進しましょう 💪")
}

pub fn format_weekly_report(stats: &PeriodStats) -> Embed {
    Embed::new("📅 今週の活動レポート", Color::Success)
        .description("今週も頑張りました！🎉")
        .field("📚 読了した本", format!("{}冊", stats.books_finished), true)
        .field("🎬 視聴した映画", format!("{}本", stats.movies_watched), true)
        .field("🎯 完了した活動", format!("{}件", stats.activities_done), true)
        .field("📝 記録した日報", format!("{}件", stats.reports), true)
        .footer("お疲れ様でした！来週も頑張りましょう！")
}

/// Movies still wanted and activities still planned for more than a week.
pub fn format_stale_items(movies: &[Item], activities: &[Item]) -> Embed {
    Embed::new("⏰ 1週間以上そのままのアイテム", Color::Warning)
        .description("そろそろ取り掛かってみませんか？")
        .field("🎬 観たい映画", bullet_lines(movies, NOTIFICATION_ITEMS), false)
        .field("🎯 予定中の活動", bullet_lines(activities, NOTIFICATION_ITEMS), false)
        .footer("/movie skip や /activity skip で整理することもできます")
}
