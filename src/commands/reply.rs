//! Structured replies, independent of the chat client.

use chrono::{DateTime, FixedOffset};

/// Longest embed title or field name Discord accepts.
pub const MAX_TITLE_LENGTH: usize = 256;
/// Longest embed footer Discord accepts.
pub const MAX_FOOTER_LENGTH: usize = 2048;
/// Longest value Discord accepts in an embed field.
pub const MAX_FIELD_LENGTH: usize = 1024;
/// Longest embed description Discord accepts.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;
/// Shown in place of an empty field value.
pub const EMPTY_FIELD_VALUE: &str = "なし";

/// A reply sent back to the user or posted to a channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

/// Colors used by replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Additions and completions
    Success,
    Info,
    Warning,
    Error,
    /// Lists and histories
    Primary,
    Teal,
    Gold,
    Pink,
    Slate,
    Sunshine,
    Blue,
    Green,
    Purple,
    Red,
    Orange,
}

impl Color {
    pub fn hex(&self) -> u32 {
        match self {
            Color::Success => 0x4CAF50,
            Color::Info => 0x2196F3,
            Color::Warning => 0xFF9800,
            Color::Error => 0xF44336,
            Color::Primary => 0x9C27B0,
            Color::Teal => 0x00BCD4,
            Color::Gold => 0xFFD700,
            Color::Pink => 0xE91E63,
            Color::Slate => 0x607D8B,
            Color::Sunshine => 0xFFEB3B,
            Color::Blue => 0x3498DB,
            Color::Green => 0x2ECC71,
            Color::Purple => 0x9B59B6,
            Color::Red => 0xE74C3C,
            Color::Orange => 0xF39C12,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich reply with a title, a color and fields.
///
/// Every text is cut to the length Discord accepts for it, and empty field
/// values are replaced by [`EMPTY_FIELD_VALUE`].
///
/// # Examples
///
/// ```
/// let embed = Embed::new("🎯 活動を追加しました！", Color::Teal)
///     .field("ID", "12", true)
///     .footer("継続は力なり！");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub color: Color,
    pub fields: Vec<Field>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_owned();
    }
    let mut truncated: String = value.chars().take(max - 3).collect();
    truncated.push_str("...");
    truncated
}

impl Embed {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Embed {
            title: truncate(&title.into(), MAX_TITLE_LENGTH),
            description: None,
            color,
            fields: Vec::new(),
            footer: None,
            timestamp: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(truncate(&description.into(), MAX_DESCRIPTION_LENGTH));
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        let value = value.into();
        let value = match value.trim().is_empty() {
            true => EMPTY_FIELD_VALUE.to_owned(),
            false => truncate(&value, MAX_FIELD_LENGTH),
        };

        self.fields.push(Field {
            name: truncate(&name.into(), MAX_TITLE_LENGTH),
            value,
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(truncate(&footer.into(), MAX_FOOTER_LENGTH));
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Value of the first field with this name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Reply::Embed(embed)
    }
}
