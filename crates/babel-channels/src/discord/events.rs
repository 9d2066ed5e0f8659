//! Gateway event handler that turns serenity reactions into `ReactionEvent`s.

use async_trait::async_trait;
use babel_core::message::ReactionEvent;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::{Reaction, ReactionType};
use serenity::model::gateway::Ready;
use serenity::model::id::{ChannelId, MessageId, UserId};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Forwards every added reaction to the gateway loop.
pub(super) struct ReactionForwarder {
    tx: mpsc::Sender<ReactionEvent>,
}

impl ReactionForwarder {
    pub(super) fn new(tx: mpsc::Sender<ReactionEvent>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl EventHandler for ReactionForwarder {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "Discord gateway ready as {} in {} guild(s)",
            ready.user.name,
            ready.guilds.len()
        );
    }

    async fn reaction_add(&self, _ctx: Context, reaction: Reaction) {
        let Some(user_id) = reaction.user_id else {
            debug!("discord: reaction without user id, skipping");
            return;
        };

        let event = to_event(
            user_id,
            reaction.channel_id,
            reaction.message_id,
            &reaction.emoji,
        );
        if self.tx.send(event).await.is_err() {
            info!("discord channel receiver dropped, ignoring reaction");
        }
    }
}

/// The identifier used for flag lookup: the glyph for unicode emoji, the
/// name for custom emoji.
pub(super) fn emoji_identifier(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(glyph) => glyph.clone(),
        ReactionType::Custom { name, .. } => name.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

pub(super) fn to_event(
    user_id: UserId,
    channel_id: ChannelId,
    message_id: MessageId,
    emoji: &ReactionType,
) -> ReactionEvent {
    ReactionEvent {
        user_id: user_id.to_string(),
        emoji: emoji_identifier(emoji),
        channel_id: channel_id.to_string(),
        message_id: message_id.to_string(),
    }
}
