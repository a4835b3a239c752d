use std::collections::HashMap;

use poise::{serenity_prelude as serenity, Modal as _};
use tracing::{debug, instrument, warn};

use super::core::{
    buttons, replies, Actor, GuildRef, Guess, Moderator, PostedSuggestion, Puzzle, Reply,
    Verdict, MODAL_ID,
};
use crate::{
    framework::event_handler::HandlerError, utils::serenity::interaction::InteractionExt,
    PoiseData,
};

#[derive(Debug, poise::Modal)]
#[name = "Emojiquiz suggestion"]
struct SuggestionModal {
    #[name = "Word in emoji"]
    #[placeholder = "Enter word in emojis."]
    #[min_length = 1]
    #[max_length = 100]
    emoji_word_input: String,

    #[name = "Hint"]
    #[placeholder = "Give a hint."]
    #[min_length = 1]
    #[max_length = 100]
    hint_word_input: String,

    #[name = "Searched Word"]
    #[placeholder = "Enter the searched word."]
    #[min_length = 1]
    #[max_length = 100]
    searched_word_input: String,
}

impl From<SuggestionModal> for Puzzle {
    fn from(modal: SuggestionModal) -> Self {
        Self::new(
            modal.emoji_word_input.trim(),
            modal.hint_word_input.trim(),
            modal.searched_word_input.trim(),
        )
    }
}

/// Treats every message in a game channel as a guess.
pub async fn handle_message(
    ctx: &serenity::Context,
    data: &PoiseData,
    message: &serenity::Message,
) -> Result<(), HandlerError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let guess = Guess {
        guild: GuildRef::from_cache(guild_id, &ctx.cache),
        channel_id: message.channel_id,
        message_id: message.id,
        author: Actor::from(&message.author),
        content: message.content.clone(),
    };

    let outcome = data
        .emojiquiz(ctx.http.clone())
        .check_guess(&guess)
        .await?;

    debug!(?outcome, "message checked");
    Ok(())
}

#[instrument(skip_all, fields(custom_id = %interaction.data.custom_id))]
pub async fn handle_component(
    ctx: &serenity::Context,
    data: &PoiseData,
    interaction: &serenity::ComponentInteraction,
) -> Result<(), HandlerError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };

    let guild = GuildRef::from_cache(guild_id, &ctx.cache);
    let quiz = data.emojiquiz(ctx.http.clone());
    let custom_id = interaction.custom_id();

    let reply = if custom_id == buttons::SKIP.custom_id {
        // pruning and publishing can outlast the response window
        interaction.acknowledge(ctx).await?;

        quiz.skip_puzzle(&guild, interaction.channel_id, &Actor::from(&interaction.user))
            .await?;

        return Ok(());
    } else if custom_id == buttons::FIRST_LETTER.custom_id {
        quiz.reveal_first_letter(&guild).await?
    } else if custom_id == buttons::SUGGEST.custom_id {
        let modal = SuggestionModal::create(None, MODAL_ID.to_owned());
        interaction.create(ctx, modal).await?;

        return Ok(());
    } else if let Some(verdict) = Verdict::from_custom_id(custom_id) {
        let Some(card) = PostedSuggestion::from_message(&interaction.message) else {
            warn!("moderation button on a message without a suggestion card");
            interaction.acknowledge(ctx).await?;
            return Ok(());
        };

        let moderator = moderator(ctx, guild_id, interaction).await?;

        quiz.moderate(&guild, &moderator, verdict, &card).await?
    } else {
        return Ok(());
    };

    respond(ctx, interaction, &reply).await
}

#[instrument(skip_all, fields(user = %interaction.user.tag()))]
pub async fn handle_modal(
    ctx: &serenity::Context,
    data: &PoiseData,
    interaction: &serenity::ModalInteraction,
) -> Result<(), HandlerError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };

    let suggestion = match SuggestionModal::parse(interaction.data.clone()) {
        Ok(suggestion) => suggestion,
        Err(err) => {
            warn!(err, "could not read suggestion modal");
            interaction.reply_ephemeral(ctx, replies::FAILED).await?;
            return Ok(());
        }
    };

    let reply = data
        .emojiquiz(ctx.http.clone())
        .submit_suggestion(
            &GuildRef::from_cache(guild_id, &ctx.cache),
            &Actor::from(&interaction.user),
            suggestion.into(),
        )
        .await?;

    respond(ctx, interaction, &reply).await
}

/// Answers privately, or just acknowledges when there is nothing to say.
async fn respond(
    ctx: &serenity::Context,
    interaction: &impl InteractionExt,
    reply: &Reply,
) -> Result<(), HandlerError> {
    match reply.text() {
        Some(text) => interaction.reply_ephemeral(ctx, text).await?,
        None => interaction.acknowledge(ctx).await?,
    }

    Ok(())
}

/// Role names come from the guild, the administrator flag from the
/// permissions resolved for the interaction.
async fn moderator(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    interaction: &serenity::ComponentInteraction,
) -> Result<Moderator, serenity::Error> {
    let member = interaction.member.as_ref();

    let names = match member {
        Some(member) if !member.roles.is_empty() => {
            let guild_roles: HashMap<_, _> = guild_id
                .roles(ctx)
                .await?
                .into_iter()
                .map(|(id, role)| (id, role.name))
                .collect();

            role_names(&member.roles, &guild_roles)
        }
        _ => Vec::new(),
    };

    Ok(Moderator {
        actor: Actor::from(&interaction.user),
        role_names: names,
        administrator: is_administrator(member.and_then(|member| member.permissions)),
    })
}

/// Names of the member's roles, skipping ids the guild no longer has.
fn role_names(
    member_roles: &[serenity::RoleId],
    guild_roles: &HashMap<serenity::RoleId, String>,
) -> Vec<String> {
    member_roles
        .iter()
        .filter_map(|id| guild_roles.get(id))
        .cloned()
        .collect()
}

/// Permissions are missing outside of guilds; that is never an administrator.
fn is_administrator(permissions: Option<serenity::Permissions>) -> bool {
    permissions.is_some_and(|permissions| permissions.administrator())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{is_administrator, role_names, SuggestionModal};
    use crate::commands::emojiquiz::core::Puzzle;
    use poise::serenity_prelude::{Permissions, RoleId};
    use pretty_assertions::assert_eq;

    #[test]
    fn suggestion_trimmed() {
        let modal = SuggestionModal {
            emoji_word_input: " 🐱🏠".to_owned(),
            hint_word_input: "animal home ".to_owned(),
            searched_word_input: " cat house\n".to_owned(),
        };

        assert_eq!(
            Puzzle::from(modal),
            Puzzle::new("🐱🏠", "animal home", "cat house")
        );
    }

    #[test]
    fn role_names_resolved() {
        let guild_roles = HashMap::from([
            (RoleId::new(1), "emojiquiz".to_owned()),
            (RoleId::new(2), "members".to_owned()),
            (RoleId::new(3), "jeezyDevelopment".to_owned()),
        ]);

        assert_eq!(
            role_names(&[RoleId::new(3), RoleId::new(1)], &guild_roles),
            vec!["jeezyDevelopment".to_owned(), "emojiquiz".to_owned()]
        );
    }

    #[test]
    fn unknown_roles_skipped() {
        let guild_roles = HashMap::from([(RoleId::new(2), "members".to_owned())]);

        assert_eq!(
            role_names(&[RoleId::new(9), RoleId::new(2)], &guild_roles),
            vec!["members".to_owned()]
        );
        assert!(role_names(&[], &guild_roles).is_empty());
    }

    #[test]
    fn administrator_flag() {
        assert!(is_administrator(Some(Permissions::ADMINISTRATOR)));
        assert!(is_administrator(Some(
            Permissions::ADMINISTRATOR | Permissions::MANAGE_GUILD
        )));
        assert!(!is_administrator(Some(Permissions::MANAGE_GUILD)));
        assert!(!is_administrator(None));
    }
}
