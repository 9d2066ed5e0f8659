//! Discord channel.
//!
//! Receives `MESSAGE_REACTION_ADD` over the gateway and talks to the REST API
//! for message fetches and embed posts.
//! Docs: <https://discord.com/developers/docs/topics/gateway-events#message-reaction-add>

mod events;
mod send;


use async_trait::async_trait;
use babel_core::{
    config::DiscordConfig,
    error::BabelError,
    message::{ReactionEvent, ReplyEmbed, SourceMessage},
    traits::Channel,
};
use serenity::gateway::ShardManager;
use serenity::http::Http;
use serenity::model::gateway::GatewayIntents;
use serenity::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info};

use events::ReactionForwarder;

/// Gateway intents needed to see reactions in guilds and DMs.
const INTENTS: GatewayIntents = GatewayIntents::GUILDS
    .union(GatewayIntents::GUILD_MESSAGE_REACTIONS)
    .union(GatewayIntents::DIRECT_MESSAGE_REACTIONS);

/// Discord channel using a serenity gateway client plus a shared REST handle.
pub struct DiscordChannel {
    token: String,
    http: Arc<Http>,
    /// The bot's own user id, resolved once at connect time.
    bot_id: String,
    /// Set once `start` has spawned the gateway client.
    shard_manager: Mutex<Option<Arc<ShardManager>>>,
}

impl DiscordChannel {
    /// Resolve the bot identity with the given token.
    ///
    /// Fails when the token is rejected, so a bad credential stops the
    /// process before the gateway is opened.
    pub async fn connect(config: &DiscordConfig) -> Result<Self, BabelError> {
        let http = Arc::new(Http::new(&config.bot_token));
        let me = http
            .get_current_user()
            .await
            .map_err(|e| BabelError::Channel(format!("discord identity check failed: {e}")))?;
        info!("Discord: authenticated as {} ({})", me.name, me.id);

        Ok(Self {
            token: config.bot_token.clone(),
            http,
            bot_id: me.id.to_string(),
            shard_manager: Mutex::new(None),
        })
    }
}

#[async_trait]
impl Channel for DiscordChannel {
    fn name(&self) -> &str {
        "discord"
    }

    fn self_id(&self) -> &str {
        &self.bot_id
    }

    async fn start(&self) -> Result<mpsc::Receiver<ReactionEvent>, BabelError> {
        let (tx, rx) = mpsc::channel(64);

        let mut client = Client::builder(&self.token, INTENTS)
            .event_handler(ReactionForwarder::new(tx))
            .await
            .map_err(|e| BabelError::Channel(format!("discord client build failed: {e}")))?;

        *self.shard_manager.lock().await = Some(client.shard_manager.clone());

        info!("Discord channel connecting to gateway...");
        tokio::spawn(async move {
            if let Err(e) = client.start().await {
                error!("discord gateway stopped: {e}");
            }
        });

        Ok(rx)
    }

    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<SourceMessage, BabelError> {
        send::fetch_message(&self.http, channel_id, message_id).await
    }

    async fn send_embed(&self, channel_id: &str, embed: ReplyEmbed) -> Result<(), BabelError> {
        send::send_embed(&self.http, channel_id, embed).await
    }

    async fn stop(&self) -> Result<(), BabelError> {
        if let Some(manager) = self.shard_manager.lock().await.take() {
            manager.shutdown_all().await;
        }
        info!("Discord channel stopped");
        Ok(())
    }
}
