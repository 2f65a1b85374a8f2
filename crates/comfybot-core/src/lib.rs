pub mod command;
pub mod config;
pub mod error;
pub mod messages;
pub mod request;

pub use command::{extract_prompt, parse_command, Command};
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use request::PromptRequest;
