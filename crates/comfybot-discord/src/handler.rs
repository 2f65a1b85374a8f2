use std::sync::{Arc, OnceLock};

use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::prelude::{Context, EventHandler};
use tracing::{debug, info};

use comfybot_core::config::DiscordConfig;
use comfybot_relay::{InboundMessage, Listener, PromptForwarder};

use crate::reply::ChannelReply;

/// Serenity event handler wired to the webhook forwarder.
pub struct DiscordHandler {
    pub config: DiscordConfig,
    pub listener: Listener,
    pub forwarder: Arc<dyn PromptForwarder>,
    pub bot_id: OnceLock<UserId>,
    /// Set by the first `ready`; later ones (re-identify) do not re-sync.
    pub commands_synced: OnceLock<()>,
}

impl DiscordHandler {
    pub fn new(config: &DiscordConfig, forwarder: Arc<dyn PromptForwarder>) -> Self {
        Self {
            config: config.clone(),
            listener: Listener::from_config(config),
            forwarder,
            bot_id: OnceLock::new(),
            commands_synced: OnceLock::new(),
        }
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        self.bot_id.set(ready.user.id).ok();

        info!(name = %ready.user.name, "Discord bot connected");

        if self.config.slash_commands && self.commands_synced.set(()).is_ok() {
            crate::commands::register_commands(&ctx, self.config.guild_id).await;
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = self.bot_id.get().map(|id| id.get());
        if Listener::is_own_message(bot_id, msg.author.id.get()) {
            return;
        }

        let channel_name = resolve_channel_name(&ctx, &msg).await;
        let inbound = InboundMessage {
            author_id: msg.author.id.get(),
            channel_name,
            content: msg.content,
        };
        let target = ChannelReply::new(Arc::clone(&ctx.http), msg.channel_id);

        let outcome = self
            .listener
            .handle(bot_id, &inbound, self.forwarder.as_ref(), target)
            .await;
        debug!(channel_id = %msg.channel_id, ?outcome, "message handled");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            crate::commands::handle_interaction(
                &ctx,
                &command,
                self.forwarder.as_ref(),
                self.config.slash_commands,
            )
            .await;
        }
    }
}

/// Name of the channel a message was posted in.
///
/// Looks in the guild cache first, then asks the API. Channels without a
/// name (DMs) yield `None`.
async fn resolve_channel_name(ctx: &Context, msg: &Message) -> Option<String> {
    let cached = msg
        .guild_id
        .and_then(|gid| ctx.cache.guild(gid))
        .and_then(|guild| guild.channels.get(&msg.channel_id).map(|ch| ch.name.clone()));
    if cached.is_some() {
        return cached;
    }

    match msg.channel_id.to_channel(ctx).await {
        Ok(channel) => channel.guild().map(|ch| ch.name),
        Err(e) => {
            debug!(channel_id = %msg.channel_id, error = %e, "channel lookup failed");
            None
        }
    }
}
