//! Reply targets: where a handled command sends its answer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::http::Http;
use serenity::model::application::CommandInteraction;
use serenity::model::id::ChannelId;

use comfybot_relay::{ReplyError, ResponseTarget};

/// Plain message in the channel a `!` command was posted in.
pub struct ChannelReply {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelReply {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ResponseTarget for ChannelReply {
    async fn send(&self, text: &str) -> Result<(), ReplyError> {
        self.channel_id
            .say(&self.http, text)
            .await
            .map(|_| ())
            .map_err(|e| ReplyError(e.to_string()))
    }
}

/// The interaction's own response. After `defer`, sends edit the deferred
/// response instead of creating a new one.
pub struct InteractionReply<'a> {
    http: Arc<Http>,
    command: &'a CommandInteraction,
    deferred: AtomicBool,
}

impl<'a> InteractionReply<'a> {
    pub fn new(http: Arc<Http>, command: &'a CommandInteraction) -> Self {
        Self {
            http,
            command,
            deferred: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ResponseTarget for InteractionReply<'_> {
    async fn defer(&self) -> Result<(), ReplyError> {
        self.command
            .create_response(
                &self.http,
                CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
            )
            .await
            .map_err(|e| ReplyError(e.to_string()))?;
        self.deferred.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn send(&self, text: &str) -> Result<(), ReplyError> {
        let result = if self.deferred.load(Ordering::SeqCst) {
            self.command
                .edit_response(&self.http, EditInteractionResponse::new().content(text))
                .await
                .map(|_| ())
        } else {
            self.command
                .create_response(
                    &self.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new().content(text),
                    ),
                )
                .await
        };
        result.map_err(|e| ReplyError(e.to_string()))
    }
}
