//! Discord slash commands: `/help`, `/prompt`.
//!
//! Registration happens once, in the first `ready()`, scoped to the configured guild.
//! Interactions are dispatched from `interaction_create` in the event handler.

use std::sync::Arc;

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use tracing::{debug, info, warn};

use comfybot_core::messages::UNKNOWN_COMMAND;
use comfybot_relay::slash::{self, HELP_COMMAND, PROMPT_COMMAND, PROMPT_OPTION};
use comfybot_relay::PromptForwarder;

use crate::reply::InteractionReply;

/// Definitions of every slash command the bot answers.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(HELP_COMMAND).description("Show available commands"),
        CreateCommand::new(PROMPT_COMMAND)
            .description("Send a prompt to ComfyUI")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    PROMPT_OPTION,
                    "The prompt text to send to ComfyUI",
                )
                .required(true),
            ),
    ]
}

/// Guild that commands are scoped to. 0 means none was configured.
pub fn target_guild(guild_id: u64) -> Option<GuildId> {
    (guild_id != 0).then(|| GuildId::new(guild_id))
}

/// Sync slash commands to the configured guild. Failures are logged only.
pub async fn register_commands(ctx: &Context, guild_id: u64) {
    let Some(gid) = target_guild(guild_id) else {
        warn!("no guild configured (DISCORD_GUILD_ID), slash commands not synced");
        return;
    };

    match gid.set_commands(&ctx.http, command_definitions()).await {
        Ok(cmds) => info!(guild = %gid, count = cmds.len(), "synced slash commands"),
        Err(e) => warn!(guild = %gid, error = %e, "error syncing slash commands"),
    }
}

/// Which handler an interaction goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Help,
    Prompt,
    /// Not ours, or slash commands are disabled.
    Unknown,
}

/// Pick the handler for a command name. With slash commands disabled every
/// interaction is `Unknown`, so leftovers from an earlier registration still
/// get an answer.
pub fn route(name: &str, enabled: bool) -> Route {
    if !enabled {
        return Route::Unknown;
    }
    match name {
        HELP_COMMAND => Route::Help,
        PROMPT_COMMAND => Route::Prompt,
        _ => Route::Unknown,
    }
}

/// Dispatch a slash command interaction to the appropriate handler.
pub async fn handle_interaction(
    ctx: &Context,
    command: &CommandInteraction,
    forwarder: &dyn PromptForwarder,
    enabled: bool,
) {
    let target = InteractionReply::new(Arc::clone(&ctx.http), command);

    let outcome = match route(&command.data.name, enabled) {
        Route::Help => slash::handle_help(&target).await,
        Route::Prompt => {
            let channel = command.channel_id.to_string();
            let option = string_option(command, PROMPT_OPTION);
            slash::handle_prompt(forwarder, &channel, option, &target).await
        }
        Route::Unknown => {
            warn!(command = %command.data.name, enabled, "unhandled slash command");
            respond_ephemeral(ctx, command, UNKNOWN_COMMAND).await;
            return;
        }
    };

    debug!(command = %command.data.name, ?outcome, "slash command handled");
}

fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_str())
}

fn ephemeral_message(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Send an ephemeral response to a slash command (only visible to the invoker).
/// Delivery failures are logged and swallowed.
async fn respond_ephemeral(ctx: &Context, command: &CommandInteraction, content: &str) {
    if let Err(e) = command
        .create_response(&ctx.http, ephemeral_message(content))
        .await
    {
        warn!(command = %command.data.name, error = %e, "failed to answer unknown command");
    }
}
