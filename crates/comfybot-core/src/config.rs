use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{BotError, Result};

/// Environment variable names used by existing deployments, mapped onto
/// config keys.
const LEGACY_ENV: [(&str, &str); 4] = [
    ("DISCORD_COMFY", "discord.bot_token"),
    ("N8N_WEBHOOK_URL", "webhook.url"),
    ("DISCORD_CHANNEL_NAME", "discord.channel_name"),
    ("DISCORD_GUILD_ID", "discord.guild_id"),
];

/// Top-level config (comfybot.toml + legacy env vars + COMFYBOT_* overrides).
///
/// Loaded once before the Discord client starts and never reloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Name of the only channel where `!` text commands are examined.
    #[serde(default)]
    pub channel_name: String,
    /// Guild that slash commands are registered to. 0 means "not configured".
    #[serde(default)]
    pub guild_id: u64,
    /// When true, `/help` and `/prompt` are registered and answered.
    /// Defaults to true.
    #[serde(default = "bool_true")]
    pub slash_commands: bool,
    /// When true, a successful `!prompt` is confirmed in the channel the same
    /// way `/prompt` is. Defaults to false.
    #[serde(default)]
    pub legacy_ack: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// n8n webhook that starts the ComfyUI workflow.
    #[serde(default)]
    pub url: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            channel_name: String::new(),
            guild_id: 0,
            slash_commands: true,
            legacy_ack: false,
        }
    }
}

fn bool_true() -> bool {
    true
}

impl BotConfig {
    /// Load config from a TOML file, the legacy env vars and COMFYBOT_* overrides.
    ///
    /// Later sources win:
    ///   1. TOML file (explicit path, or ~/.comfybot/comfybot.toml); may be absent
    ///   2. DISCORD_COMFY, N8N_WEBHOOK_URL, DISCORD_CHANNEL_NAME, DISCORD_GUILD_ID
    ///   3. COMFYBOT_<SECTION>__<KEY>, e.g. COMFYBOT_DISCORD__LEGACY_ACK=true
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        tracing::debug!(path = %path, "loading configuration");

        let config: BotConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(legacy_env())
            .merge(Env::prefixed("COMFYBOT_").split("__"))
            .extract()
            .map_err(|e| BotError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot possibly run: every required value must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.discord.bot_token.trim().is_empty() {
            return Err(BotError::MissingSetting {
                key: "discord.bot_token",
                env: "DISCORD_COMFY",
            });
        }
        if self.webhook.url.trim().is_empty() {
            return Err(BotError::MissingSetting {
                key: "webhook.url",
                env: "N8N_WEBHOOK_URL",
            });
        }
        if self.discord.channel_name.trim().is_empty() {
            return Err(BotError::MissingSetting {
                key: "discord.channel_name",
                env: "DISCORD_CHANNEL_NAME",
            });
        }
        Ok(())
    }
}

/// Load a `.env` file (working directory or a parent) into the process
/// environment. Variables already set are left alone; no file is fine.
///
/// Call before [`BotConfig::load`] so the legacy variables can come from `.env`.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(BotError::Config(format!(".env: {e}"))),
    }
}

fn legacy_env() -> Env {
    Env::raw()
        .only(&LEGACY_ENV.map(|(var, _)| var))
        .map(|var| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| var == *name)
                .map(|(_, key)| (*key).into())
                .unwrap_or_else(|| var.as_str().into())
        })
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.comfybot/comfybot.toml", home)
}
