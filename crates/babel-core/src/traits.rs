use crate::{
    error::{BabelError, TranslateError},
    message::{ReactionEvent, ReplyEmbed, SourceMessage},
};
use async_trait::async_trait;

/// Translation backend trait. Turns text into another language.
///
/// Implementations own their credentials and HTTP client and must be safe
/// to call from many tasks at once.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate `text` into `target_language` (a language name such as "Spanish").
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslateError>;
}

/// Messaging Channel trait. The platform session.
///
/// A channel delivers reaction events and lets the bot read the reacted
/// message and post replies. One handle is shared by every in-flight event.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Platform id of the bot account itself.
    fn self_id(&self) -> &str;

    /// Start listening for reaction events.
    /// Returns a receiver that yields one item per reaction added.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<ReactionEvent>, BabelError>;

    /// Fetch a message by channel and message id.
    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<SourceMessage, BabelError>;

    /// Post an embed as a new message in `channel_id`.
    async fn send_embed(&self, channel_id: &str, embed: ReplyEmbed) -> Result<(), BabelError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), BabelError>;
}
