use poise::serenity_prelude::{self as serenity, UserId};

/// Whoever triggered an event, as far as the cards care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub tag: String,
    pub avatar_url: String,
    pub bot: bool,
}

impl From<&serenity::User> for Actor {
    fn from(user: &serenity::User) -> Self {
        Self {
            id: user.id,
            tag: user.tag(),
            avatar_url: user.face(),
            bot: user.bot,
        }
    }
}

/// A guild as seen by one event. The name is only known when the
/// event came with a cached guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRef {
    pub id: serenity::GuildId,
    pub name: Option<String>,
}

impl GuildRef {
    pub fn new(id: serenity::GuildId, name: Option<String>) -> Self {
        Self { id, name }
    }

    pub fn from_cache(id: serenity::GuildId, cache: impl AsRef<serenity::Cache>) -> Self {
        Self::new(id, id.name(cache))
    }
}
