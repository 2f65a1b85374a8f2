use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use comfybot_core::config::BotConfig;
use comfybot_relay::{PromptForwarder, WebhookForwarder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "comfybot=info,comfybot_core=info,comfybot_relay=info,comfybot_discord=info".into()
            }),
        )
        .init();

    // .env first so its variables feed the config loader; real env vars win
    match comfybot_core::config::load_dotenv() {
        Ok(Some(path)) => info!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => {
            error!(code = e.code(), "{e}");
            return Err(e.into());
        }
    }

    // load config: COMFYBOT_CONFIG > ~/.comfybot/comfybot.toml, then env vars
    let config_path = std::env::var("COMFYBOT_CONFIG").ok();
    let config = BotConfig::load(config_path.as_deref()).map_err(|e| {
        error!(code = e.code(), "{e}");
        e
    })?;

    let forwarder: Arc<dyn PromptForwarder> = Arc::new(
        WebhookForwarder::new(&config.webhook.url).context("webhook URL is not usable")?,
    );

    info!(
        channel = %config.discord.channel_name,
        guild_id = config.discord.guild_id,
        slash_commands = config.discord.slash_commands,
        "starting ComfyUI relay bot"
    );

    let adapter = comfybot_discord::DiscordAdapter::new(&config.discord, forwarder);
    if let Err(e) = adapter.run().await {
        error!(error = %e, "error starting Discord bot");
        return Err(e.into());
    }

    Ok(())
}
