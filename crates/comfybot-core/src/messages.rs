//! User-facing reply texts.

/// Help shown for `!help` in the configured channel.
pub const LEGACY_HELP: &str = "Welcome to the ComfyUI Discord Bot! Here are the commands you can use:
- `!prompt <your prompt>` or `!P <your prompt>`: Send a prompt to ComfyUI.
- `!help`: Display this help message.";

/// Help shown for `/help`.
pub const SLASH_HELP: &str = "Welcome to the ComfyUI Discord Bot! Here are the commands you can use:
- `/prompt <your prompt>`: Send a prompt to ComfyUI.
- `/help`: Display this help message.";

pub const PROMPT_SENT: &str = "Your prompt has been sent to ComfyUI!";

pub const PROMPT_FAILED: &str = "Sorry, there was an error processing your prompt.";

pub const PROMPT_EMPTY: &str = "Please provide a valid prompt.";

pub const UNKNOWN_COMMAND: &str = "Unknown command.";
