use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use comfybot_core::messages::{PROMPT_FAILED, PROMPT_SENT};
use comfybot_core::PromptRequest;

use crate::error::ForwardError;
use crate::target::ResponseTarget;
use crate::Disposition;

/// Sends a prompt to the downstream pipeline.
#[async_trait]
pub trait PromptForwarder: Send + Sync {
    async fn forward(&self, prompt: &str) -> Result<(), ForwardError>;
}

/// JSON body posted to the webhook.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub prompt: &'a str,
}

/// Posts `{"prompt": ...}` to the configured n8n webhook.
#[derive(Debug, Clone)]
pub struct WebhookForwarder {
    url: reqwest::Url,
}

impl WebhookForwarder {
    pub fn new(url: &str) -> Result<Self, ForwardError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ForwardError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ForwardError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }
        Ok(Self { url: parsed })
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

#[async_trait]
impl PromptForwarder for WebhookForwarder {
    async fn forward(&self, prompt: &str) -> Result<(), ForwardError> {
        // A new client per call: connections are never reused between prompts.
        let client = reqwest::Client::builder().build()?;

        let resp = client
            .post(self.url.clone())
            .json(&WebhookPayload { prompt })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %text, "webhook rejected prompt");
            return Err(ForwardError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(())
    }
}

/// Forward a non-empty prompt once and report the outcome to its target.
///
/// Failures always produce the static error reply. Success is only
/// announced when `confirm` is set. There is no retry.
pub async fn relay_prompt<F, T>(
    forwarder: &F,
    request: &PromptRequest<T>,
    confirm: bool,
) -> Disposition
where
    F: PromptForwarder + ?Sized,
    T: ResponseTarget,
{
    info!(request_id = %request.id, channel = %request.channel, "forwarding prompt to webhook");
    debug!(request_id = %request.id, prompt = %request.prompt, "prompt text");

    match forwarder.forward(&request.prompt).await {
        Ok(()) => {
            info!(request_id = %request.id, "prompt delivered");
            if confirm {
                reply(&request.target, PROMPT_SENT, request).await;
            }
            Disposition::Forwarded
        }
        Err(e) => {
            warn!(request_id = %request.id, error = %e, "error sending prompt to webhook");
            reply(&request.target, PROMPT_FAILED, request).await;
            Disposition::ForwardFailed
        }
    }
}

/// Send a reply, logging instead of propagating delivery failures.
pub(crate) async fn reply<T: ResponseTarget, R>(target: &T, text: &str, request: &PromptRequest<R>) {
    if let Err(e) = target.send(text).await {
        warn!(request_id = %request.id, error = %e, "failed to deliver reply");
    }
}
