//! Reaction routing: decide whether a reaction gets a translation and post it.

use super::Gateway;
use babel_core::message::{ReactionEvent, ReplyEmbed};
use tracing::{error, info};

/// What happened to a single reaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The bot reacted itself.
    SelfReaction,
    /// The emoji is not a supported flag.
    UnsupportedEmoji,
    /// The reacted message could not be fetched.
    FetchFailed,
    /// The reacted message has no text.
    EmptyContent,
    /// The translation service call failed.
    TranslationFailed,
    /// The reply could not be posted.
    SendFailed,
    /// A translation was posted in the given language.
    Replied { language: String },
}

impl Gateway {
    /// Handle one reaction end to end. Failures are logged and swallowed.
    pub(super) async fn handle_reaction(&self, event: &ReactionEvent) -> Outcome {
        if event.user_id == self.channel.self_id() {
            return Outcome::SelfReaction;
        }

        let Some(language) = self.flags.language_for(&event.emoji) else {
            return Outcome::UnsupportedEmoji;
        };

        let source = match self
            .channel
            .fetch_message(&event.channel_id, &event.message_id)
            .await
        {
            Ok(msg) => msg,
            Err(e) => {
                error!("Error fetching message {}: {e}", event.message_id);
                return Outcome::FetchFailed;
            }
        };

        if source.content.is_empty() {
            return Outcome::EmptyContent;
        }

        info!(
            "translating message {} to {language} for user {}",
            event.message_id, event.user_id
        );
        let translation = match self.translator.translate(&source.content, language).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error translating message {}: {e}", event.message_id);
                return Outcome::TranslationFailed;
            }
        };

        let embed = ReplyEmbed::translation(&source, translation, language);
        if let Err(e) = self.channel.send_embed(&event.channel_id, embed).await {
            error!("Error sending translation to {}: {e}", event.channel_id);
            return Outcome::SendFailed;
        }

        Outcome::Replied {
            language: language.to_string(),
        }
    }
}
