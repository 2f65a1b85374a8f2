use uuid::Uuid;

/// One prompt on its way to the webhook.
///
/// Built when a command arrives and dropped once the webhook call resolves.
/// `target` is whatever the invoking surface needs to answer the user.
#[derive(Debug, Clone)]
pub struct PromptRequest<T> {
    /// Log correlation only.
    pub id: Uuid,
    pub raw: String,
    pub prompt: String,
    pub channel: String,
    pub target: T,
}

impl<T> PromptRequest<T> {
    pub fn new(
        raw: impl Into<String>,
        prompt: impl Into<String>,
        channel: impl Into<String>,
        target: T,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            raw: raw.into(),
            prompt: prompt.into(),
            channel: channel.into(),
            target,
        }
    }

    /// Empty prompts are never sent to the webhook.
    pub fn is_forwardable(&self) -> bool {
        !self.prompt.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_is_not_forwardable() {
        let req = PromptRequest::new("!prompt", "", "comfy", ());
        assert!(!req.is_forwardable());
    }

    #[test]
    fn each_request_gets_its_own_id() {
        let a = PromptRequest::new("!P cat", "cat", "comfy", ());
        let b = PromptRequest::new("!P cat", "cat", "comfy", ());
        assert!(a.is_forwardable());
        assert_ne!(a.id, b.id);
    }
}
