use async_trait::async_trait;

use crate::error::ReplyError;

/// Where replies for one request go: a channel for `!` commands, the
/// interaction itself for slash commands.
#[async_trait]
pub trait ResponseTarget: Send + Sync {
    /// Signal that an answer is coming but may take a while.
    ///
    /// Called once, right before the webhook call. No-op by default.
    async fn defer(&self) -> Result<(), ReplyError> {
        Ok(())
    }

    async fn send(&self, text: &str) -> Result<(), ReplyError>;
}

#[async_trait]
impl<T: ResponseTarget + ?Sized> ResponseTarget for &T {
    async fn defer(&self) -> Result<(), ReplyError> {
        (**self).defer().await
    }

    async fn send(&self, text: &str) -> Result<(), ReplyError> {
        (**self).send(text).await
    }
}
