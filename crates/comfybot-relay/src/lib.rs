pub mod error;
pub mod forwarder;
pub mod listener;
pub mod slash;
pub mod target;

#[cfg(test)]
pub(crate) mod fakes;

pub use error::{ForwardError, ReplyError};
pub use forwarder::{relay_prompt, PromptForwarder, WebhookForwarder, WebhookPayload};
pub use listener::{InboundMessage, Listener};
pub use target::ResponseTarget;

/// What happened to one inbound event. Returned by every handler so callers
/// and tests can see the outcome without inspecting side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Authored by the bot itself, or the bot's identity is not known yet.
    OwnMessage,
    /// Posted outside the configured channel.
    OtherChannel,
    NotACommand,
    /// Prompt command with nothing to send.
    EmptyPrompt,
    HelpSent,
    Forwarded,
    ForwardFailed,
}
