use serde::{Deserialize, Serialize};

/// Accent color of every translation embed (light blue).
pub const EMBED_COLOR: u32 = 0x00BF_FF;

/// A reaction added to an existing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEvent {
    /// Platform-specific id of the reacting user.
    pub user_id: String,
    /// Unicode glyph, or the name of a custom emoji.
    pub emoji: String,
    pub channel_id: String,
    pub message_id: String,
}

/// The message a reaction was attached to, as fetched from the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMessage {
    /// Display name of the author.
    pub author_name: String,
    /// Avatar URL of the author, if the platform exposes one.
    pub author_icon_url: Option<String>,
    /// Text body. Empty for image-only or embed-only messages.
    pub content: String,
}

/// A rich reply carrying a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEmbed {
    pub author_name: String,
    pub author_icon_url: Option<String>,
    pub description: String,
    pub footer: String,
    pub color: u32,
}

impl ReplyEmbed {
    /// Build the reply for a translation of `source` into `language`.
    pub fn translation(source: &SourceMessage, translation: String, language: &str) -> Self {
        Self {
            author_name: source.author_name.clone(),
            author_icon_url: source.author_icon_url.clone(),
            description: translation,
            footer: format!("Translated to {language}"),
            color: EMBED_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_embed_fields() {
        let source = SourceMessage {
            author_name: "Alice".into(),
            author_icon_url: Some("https://cdn.example/alice.png".into()),
            content: "Hello there".into(),
        };
        let embed = ReplyEmbed::translation(&source, "Hola".into(), "Spanish");
        assert_eq!(embed.author_name, "Alice");
        assert_eq!(
            embed.author_icon_url.as_deref(),
            Some("https://cdn.example/alice.png")
        );
        assert_eq!(embed.description, "Hola");
        assert_eq!(embed.footer, "Translated to Spanish");
        assert_eq!(embed.color, 0x00BFFF);
    }

    #[test]
    fn test_reaction_event_from_json() {
        let json = r#"{"user_id":"1","emoji":"🇫🇷","channel_id":"2","message_id":"3"}"#;
        let event: ReactionEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.emoji, "🇫🇷");
        assert_eq!(event.message_id, "3");
    }
}
