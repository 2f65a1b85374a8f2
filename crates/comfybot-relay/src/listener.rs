//! `!` text commands posted in the configured channel.

use tracing::{debug, warn};

use comfybot_core::config::DiscordConfig;
use comfybot_core::messages::LEGACY_HELP;
use comfybot_core::{parse_command, Command, PromptRequest};

use crate::forwarder::{relay_prompt, PromptForwarder};
use crate::target::ResponseTarget;
use crate::Disposition;

/// A chat message reduced to what the listener looks at.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub author_id: u64,
    /// `None` when the channel name could not be resolved.
    pub channel_name: Option<String>,
    pub content: String,
}

/// Filters inbound messages and routes `!help` / `!prompt` / `!P`.
#[derive(Debug, Clone)]
pub struct Listener {
    channel_name: String,
    acknowledge: bool,
}

impl Listener {
    pub fn new(channel_name: impl Into<String>, acknowledge: bool) -> Self {
        Self {
            channel_name: channel_name.into(),
            acknowledge,
        }
    }

    pub fn from_config(config: &DiscordConfig) -> Self {
        Self::new(config.channel_name.clone(), config.legacy_ack)
    }

    /// True when the message must be ignored to avoid answering ourselves.
    /// An unknown bot id counts as "own": nothing is handled before `ready`.
    pub fn is_own_message(bot_id: Option<u64>, author_id: u64) -> bool {
        bot_id.map_or(true, |id| id == author_id)
    }

    pub fn watches(&self, channel_name: Option<&str>) -> bool {
        channel_name == Some(self.channel_name.as_str())
    }

    /// Handle one message. Replies go to `target`; only a failed webhook
    /// call or `!help` produce a reply unless acknowledgements are enabled.
    pub async fn handle<F, T>(
        &self,
        bot_id: Option<u64>,
        msg: &InboundMessage,
        forwarder: &F,
        target: T,
    ) -> Disposition
    where
        F: PromptForwarder + ?Sized,
        T: ResponseTarget,
    {
        if Self::is_own_message(bot_id, msg.author_id) {
            return Disposition::OwnMessage;
        }
        if !self.watches(msg.channel_name.as_deref()) {
            return Disposition::OtherChannel;
        }

        match parse_command(&msg.content) {
            None => Disposition::NotACommand,
            Some(Command::Help) => {
                if let Err(e) = target.send(LEGACY_HELP).await {
                    warn!(channel = %self.channel_name, error = %e, "failed to send help");
                }
                Disposition::HelpSent
            }
            Some(Command::Prompt(prompt)) => {
                let request =
                    PromptRequest::new(msg.content.as_str(), prompt, &self.channel_name, target);
                if !request.is_forwardable() {
                    debug!(request_id = %request.id, "empty prompt dropped");
                    return Disposition::EmptyPrompt;
                }
                relay_prompt(forwarder, &request, self.acknowledge).await
            }
        }
    }
}
