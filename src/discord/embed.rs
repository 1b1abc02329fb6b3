//! Conversion of [`Reply`] values into serenity builders.

use serenity::{
    builder::{CreateEmbed, CreateEmbedFooter, CreateMessage, EditInteractionResponse},
    model::Timestamp,
};

use crate::commands::{Embed, Reply};

pub fn create_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(&embed.title)
        .color(embed.color.hex());

    if let Some(description) = &embed.description {
        builder = builder.description(description);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(timestamp) = embed.timestamp {
        if let Ok(timestamp) = Timestamp::from_unix_timestamp(timestamp.timestamp()) {
            builder = builder.timestamp(timestamp);
        }
    }

    builder
}

/// Content of a deferred interaction response.
pub fn edit_response(reply: &Reply) -> EditInteractionResponse {
    match reply {
        Reply::Text(text) => EditInteractionResponse::new().content(text),
        Reply::Embed(embed) => EditInteractionResponse::new().embed(create_embed(embed)),
    }
}

/// Message posted to a channel.
pub fn create_message(reply: &Reply) -> CreateMessage {
    match reply {
        Reply::Text(text) => CreateMessage::new().content(text),
        Reply::Embed(embed) => CreateMessage::new().embed(create_embed(embed)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::commands::Color;

    #[test]
    fn test_create_embed() {
        let timestamp = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 13, 10, 30, 0)
            .unwrap();
        let embed = Embed::new("🎯 活動を追加しました！", Color::Teal)
            .description("desc")
            .field("ID", "12", true)
            .footer("footer")
            .timestamp(timestamp);

        let value = serde_json::to_value(create_embed(&embed)).unwrap();
        assert_eq!(value["title"], "🎯 活動を追加しました！");
        assert_eq!(value["description"], "desc");
        assert_eq!(value["color"], 0x00BCD4);
        assert_eq!(value["fields"][0]["name"], "ID");
        assert_eq!(value["fields"][0]["value"], "12");
        assert_eq!(value["fields"][0]["inline"], true);
        assert_eq!(value["footer"]["text"], "footer");
        assert!(value["timestamp"].as_str().unwrap().starts_with("2024-03-13T01:30:00"));
    }

    #[test]
    fn test_create_embed_without_optional_parts() {
        let embed = Embed::new("📚 本一覧", Color::Primary);
        let value = serde_json::to_value(create_embed(&embed)).unwrap();
        assert_eq!(value["title"], "📚 本一覧");
        assert!(value.get("description").is_none_or(|d| d.is_null()));
        assert!(value.get("footer").is_none_or(|f| f.is_null()));
    }

    #[test]
    fn test_text_message() {
        let value = serde_json::to_value(create_message(&Reply::Text("hello".to_owned()))).unwrap();
        assert_eq!(value["content"], "hello");
    }
}
