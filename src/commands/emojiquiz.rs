use poise::{serenity_prelude as serenity, CreateReply};
use tracing::instrument;

use crate::utils::poise::{CommandResult, Context};

pub mod core;
use self::core::{GuildRef, Puzzle, Reply};

mod interactions;
pub use interactions::{handle_component, handle_message, handle_modal};

fn guild(ctx: Context<'_>) -> Option<GuildRef> {
    ctx.guild_id()
        .map(|id| GuildRef::from_cache(id, ctx.cache()))
}

async fn send(ctx: Context<'_>, reply: Reply) -> CommandResult {
    let Some(text) = reply.text() else {
        return Ok(());
    };

    let mut builder = CreateReply::default().ephemeral(true).content(text);

    if let Some(preview) = reply.preview() {
        builder = builder.embed(preview.embed());
    }

    ctx.send(builder).await?;
    Ok(())
}

/// add a new emojiquiz to this server
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "emojiquiz-create",
    guild_only,
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn create(
    ctx: Context<'_>,
    #[description = "the emojis players have to decipher"] word: String,
    #[description = "a hint shown next to the emojis"] hint: String,
    #[description = "the answer players have to type"] searched: String,
) -> CommandResult {
    let Some(guild) = guild(ctx) else {
        return Ok(());
    };

    ctx.defer_ephemeral().await?;

    let reply = ctx
        .data()
        .emojiquiz(ctx.serenity_context().http.clone())
        .create_puzzle(&guild, Puzzle::new(word, hint, searched))
        .await?;

    send(ctx, reply).await
}

/// remove an emojiquiz from this server
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "emojiquiz-delete",
    guild_only,
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn delete(
    ctx: Context<'_>,
    #[description = "the emojis of the quiz to remove"] word: String,
) -> CommandResult {
    let Some(guild) = guild(ctx) else {
        return Ok(());
    };

    ctx.defer_ephemeral().await?;

    let reply = ctx
        .data()
        .emojiquiz(ctx.serenity_context().http.clone())
        .delete_puzzle(&guild, &word)
        .await?;

    send(ctx, reply).await
}

/// forget every emojiquiz and setting of this server
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "emojiquiz-reset",
    guild_only,
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn reset(ctx: Context<'_>) -> CommandResult {
    let Some(guild) = guild(ctx) else {
        return Ok(());
    };

    ctx.defer_ephemeral().await?;

    let reply = ctx
        .data()
        .emojiquiz(ctx.serenity_context().http.clone())
        .reset_guild(&guild)
        .await?;

    send(ctx, reply).await
}

/// start the emojiquiz in a channel
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "emojiquiz-setup",
    guild_only,
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn setup(
    ctx: Context<'_>,
    #[description = "where the quiz is played"]
    #[channel_types("Text")]
    channel: serenity::GuildChannel,
    #[description = "where suggestions wait for moderation"]
    #[channel_types("Text")]
    pending_channel: serenity::GuildChannel,
) -> CommandResult {
    let Some(guild) = guild(ctx) else {
        return Ok(());
    };

    ctx.defer_ephemeral().await?;

    let reply = ctx
        .data()
        .emojiquiz(ctx.serenity_context().http.clone())
        .setup_channel(&guild, channel.id, pending_channel.id)
        .await?;

    send(ctx, reply).await
}
