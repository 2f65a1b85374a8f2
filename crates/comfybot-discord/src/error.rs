/// Why the gateway client could not be started or stopped running.
#[derive(Debug, thiserror::Error)]
pub enum DiscordError {
    /// Login, gateway or HTTP failure reported by serenity.
    #[error("Discord client error: {0}")]
    Client(#[from] serenity::Error),

    /// The adapter was built from a config that never went through
    /// `BotConfig::validate`.
    #[error("Discord bot token is empty (set DISCORD_COMFY)")]
    MissingToken,
}
