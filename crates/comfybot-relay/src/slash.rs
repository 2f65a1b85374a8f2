//! Slash command handlers, independent of the chat platform.
//!
//! Unlike `!` commands these always answer: empty input is rejected out loud
//! and a delivered prompt is confirmed.

use tracing::warn;

use comfybot_core::messages::{PROMPT_EMPTY, SLASH_HELP};
use comfybot_core::PromptRequest;

use crate::forwarder::{relay_prompt, PromptForwarder};
use crate::target::ResponseTarget;
use crate::Disposition;

pub const HELP_COMMAND: &str = "help";
pub const PROMPT_COMMAND: &str = "prompt";
/// Name of the single string option of `/prompt`.
pub const PROMPT_OPTION: &str = "prompt";

/// `/help`
pub async fn handle_help<T: ResponseTarget>(target: T) -> Disposition {
    if let Err(e) = target.send(SLASH_HELP).await {
        warn!(error = %e, "failed to answer /help");
    }
    Disposition::HelpSent
}

/// `/prompt prompt:String`
///
/// The option is trimmed; an empty or missing value is rejected without a
/// webhook call. Otherwise the target is deferred before the call so slow
/// webhooks do not time the interaction out.
pub async fn handle_prompt<F, T>(
    forwarder: &F,
    channel: &str,
    option: Option<&str>,
    target: T,
) -> Disposition
where
    F: PromptForwarder + ?Sized,
    T: ResponseTarget,
{
    let raw = option.unwrap_or_default();
    let request = PromptRequest::new(
        format!("/{PROMPT_COMMAND} {raw}"),
        raw.trim(),
        channel,
        target,
    );

    if !request.is_forwardable() {
        if let Err(e) = request.target.send(PROMPT_EMPTY).await {
            warn!(request_id = %request.id, error = %e, "failed to reject empty prompt");
        }
        return Disposition::EmptyPrompt;
    }

    if let Err(e) = request.target.defer().await {
        warn!(request_id = %request.id, error = %e, "failed to defer interaction");
    }

    relay_prompt(forwarder, &request, true).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{RecordingForwarder, RecordingTarget};
    use comfybot_core::messages::{PROMPT_FAILED, PROMPT_SENT};

    #[tokio::test]
    async fn prompt_is_forwarded_and_confirmed() {
        let forwarder = RecordingForwarder::ok();
        let target = RecordingTarget::default();

        let outcome =
            handle_prompt(&forwarder, "comfy", Some("generate a sunset"), &target).await;

        assert_eq!(outcome, Disposition::Forwarded);
        assert_eq!(forwarder.sent(), vec!["generate a sunset".to_string()]);
        assert_eq!(target.replies(), vec![PROMPT_SENT.to_string()]);
        assert!(target.was_deferred());
    }

    #[tokio::test]
    async fn empty_option_is_rejected_without_post() {
        let forwarder = RecordingForwarder::ok();

        for option in [Some(""), Some("   "), None] {
            let target = RecordingTarget::default();
            let outcome = handle_prompt(&forwarder, "comfy", option, &target).await;

            assert_eq!(outcome, Disposition::EmptyPrompt);
            assert_eq!(target.replies(), vec![PROMPT_EMPTY.to_string()]);
            assert!(!target.was_deferred());
        }
        assert!(forwarder.sent().is_empty());
    }

    #[tokio::test]
    async fn option_is_trimmed() {
        let forwarder = RecordingForwarder::ok();
        let target = RecordingTarget::default();

        handle_prompt(&forwarder, "comfy", Some("  misty hills \n"), &target).await;

        assert_eq!(forwarder.sent(), vec!["misty hills".to_string()]);
    }

    #[tokio::test]
    async fn webhook_failure_is_reported_once() {
        let forwarder = RecordingForwarder::failing();
        let target = RecordingTarget::default();

        let outcome = handle_prompt(&forwarder, "comfy", Some("a cat"), &target).await;

        assert_eq!(outcome, Disposition::ForwardFailed);
        assert_eq!(forwarder.sent().len(), 1);
        assert_eq!(target.replies(), vec![PROMPT_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn help_uses_slash_wording() {
        let target = RecordingTarget::default();

        assert_eq!(handle_help(&target).await, Disposition::HelpSent);
        assert_eq!(target.replies(), vec![SLASH_HELP.to_string()]);
    }
}
