use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ForwardError, ReplyError};
use crate::forwarder::PromptForwarder;
use crate::target::ResponseTarget;

/// Records every prompt it is asked to forward.
pub struct RecordingForwarder {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingForwarder {
    pub fn ok() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptForwarder for RecordingForwarder {
    async fn forward(&self, prompt: &str) -> Result<(), ForwardError> {
        self.sent.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(ForwardError::Api {
                status: 502,
                message: "bad gateway".to_string(),
            });
        }
        Ok(())
    }
}

/// Records replies and whether `defer` was called.
#[derive(Default)]
pub struct RecordingTarget {
    replies: Mutex<Vec<String>>,
    deferred: AtomicBool,
    broken: bool,
}

impl RecordingTarget {
    /// A target whose sends always fail.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn was_deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseTarget for RecordingTarget {
    async fn defer(&self) -> Result<(), ReplyError> {
        self.deferred.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn send(&self, text: &str) -> Result<(), ReplyError> {
        if self.broken {
            return Err(ReplyError("channel gone".to_string()));
        }
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
