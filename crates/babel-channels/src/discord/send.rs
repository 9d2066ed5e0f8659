use babel_core::{
    error::BabelError,
    message::{ReplyEmbed, SourceMessage},
};
use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage};
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use serenity::model::user::User;
use tracing::debug;

/// Parse a snowflake id. Discord ids are non-zero `u64`s.
pub(super) fn parse_id(kind: &str, raw: &str) -> Result<u64, BabelError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(BabelError::Channel(format!("invalid discord {kind} id '{raw}'"))),
        Ok(id) => Ok(id),
        Err(e) => Err(BabelError::Channel(format!(
            "invalid discord {kind} id '{raw}': {e}"
        ))),
    }
}

pub(super) async fn fetch_message(
    http: &Http,
    channel_id: &str,
    message_id: &str,
) -> Result<SourceMessage, BabelError> {
    let channel = ChannelId::new(parse_id("channel", channel_id)?);
    let message = MessageId::new(parse_id("message", message_id)?);

    let msg = http
        .get_message(channel, message)
        .await
        .map_err(|e| BabelError::Channel(format!("discord get message failed: {e}")))?;

    debug!(
        "discord: fetched message {message_id} ({} chars, {} attachment(s))",
        msg.content.chars().count(),
        msg.attachments.len()
    );

    Ok(source_message(&msg.author, msg.content))
}

/// Author display name falls back to the username.
pub(super) fn source_message(author: &User, content: String) -> SourceMessage {
    SourceMessage {
        author_name: author
            .global_name
            .clone()
            .unwrap_or_else(|| author.name.clone()),
        author_icon_url: Some(author.face()),
        content,
    }
}

pub(super) fn build_embed(embed: ReplyEmbed) -> CreateEmbed {
    let mut author = CreateEmbedAuthor::new(embed.author_name);
    if let Some(url) = embed.author_icon_url {
        author = author.icon_url(url);
    }
    CreateEmbed::new()
        .author(author)
        .description(embed.description)
        .footer(CreateEmbedFooter::new(embed.footer))
        .colour(embed.color)
}

pub(super) async fn send_embed(
    http: &Http,
    channel_id: &str,
    embed: ReplyEmbed,
) -> Result<(), BabelError> {
    let channel = ChannelId::new(parse_id("channel", channel_id)?);
    channel
        .send_message(http, CreateMessage::new().embed(build_embed(embed)))
        .await
        .map_err(|e| BabelError::Channel(format!("discord send failed: {e}")))?;
    Ok(())
}
