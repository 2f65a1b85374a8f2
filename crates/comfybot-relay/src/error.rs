/// Errors from a single webhook delivery.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid webhook URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// A reply could not be delivered back to the invoking surface.
#[derive(Debug, thiserror::Error)]
#[error("reply failed: {0}")]
pub struct ReplyError(pub String);
