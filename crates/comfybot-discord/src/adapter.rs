use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::Client;
use tracing::info;

use comfybot_core::config::DiscordConfig;
use comfybot_relay::PromptForwarder;

use crate::error::DiscordError;
use crate::handler::DiscordHandler;

/// Discord channel adapter.
///
/// Wraps a serenity `Client` and drives the event loop. Serenity resumes
/// dropped gateway sessions on its own; `run` only returns when the client
/// gives up, e.g. on a rejected token.
pub struct DiscordAdapter {
    config: DiscordConfig,
    forwarder: Arc<dyn PromptForwarder>,
}

impl DiscordAdapter {
    pub fn new(config: &DiscordConfig, forwarder: Arc<dyn PromptForwarder>) -> Self {
        Self {
            config: config.clone(),
            forwarder,
        }
    }

    /// Connect to Discord and process events until the client stops.
    pub async fn run(self) -> Result<(), DiscordError> {
        if self.config.bot_token.trim().is_empty() {
            return Err(DiscordError::MissingToken);
        }

        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let mut client = self.build_client(intents).await?;

        info!(channel = %self.config.channel_name, "Discord: gateway connecting");
        client.start().await?;

        info!("Discord: gateway stopped");
        Ok(())
    }

    /// Build a serenity `Client` with our event handler.
    async fn build_client(&self, intents: GatewayIntents) -> Result<Client, serenity::Error> {
        let handler = DiscordHandler::new(&self.config, Arc::clone(&self.forwarder));

        Client::builder(&self.config.bot_token, intents)
            .event_handler(handler)
            .await
    }
}
