use poise::serenity_prelude::{
    self as serenity, Colour, CreateButton, CreateEmbed, CreateEmbedFooter, ReactionType,
};

use super::{
    actor::Actor,
    content::{self, buttons, ButtonSpec},
    puzzle::Puzzle,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub icon_url: String,
}

impl Footer {
    pub fn new(text: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: icon_url.into(),
        }
    }

    pub fn solved_by(actor: &Actor) -> Self {
        Self::new(
            format!("{} {}", actor.tag, content::footer::SOLVED),
            &actor.avatar_url,
        )
    }

    pub fn skipped_by(actor: &Actor) -> Self {
        Self::new(
            format!("{} {}", actor.tag, content::footer::SKIPPED),
            &actor.avatar_url,
        )
    }

    pub fn signed(actor: &Actor) -> Self {
        Self::new(&actor.tag, &actor.avatar_url)
    }

    fn create(&self) -> CreateEmbedFooter {
        CreateEmbedFooter::new(&self.text).icon_url(&self.icon_url)
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new(content::footer::TEXT, content::footer::ICON_URL)
    }
}

fn create_button(spec: &ButtonSpec, disabled: bool) -> CreateButton {
    let button = CreateButton::new(spec.custom_id)
        .label(spec.label)
        .style(spec.style)
        .disabled(disabled);

    if let Some(emoji) = spec.emoji {
        button.emoji(ReactionType::Unicode(emoji.to_owned()))
    } else {
        button
    }
}

fn base_embed(word: &str, hint: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(content::TITLE)
        .description(content::DESCRIPTION)
        .field(content::fields::WORD, word, true)
        .field(content::fields::HINT, hint, true)
}

/// The public puzzle announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCard {
    pub word: String,
    pub hint: String,
    pub footer: Footer,
}

impl PuzzleCard {
    pub fn new(puzzle: &Puzzle, footer: Footer) -> Self {
        Self {
            word: puzzle.word.clone(),
            hint: puzzle.hint.clone(),
            footer,
        }
    }

    pub fn embed(&self) -> CreateEmbed {
        base_embed(&self.word, &self.hint)
            .colour(Colour::new(content::COLOR))
            .footer(self.footer.create())
    }

    pub fn buttons(&self) -> Vec<CreateButton> {
        buttons::PUZZLE
            .iter()
            .map(|spec| create_button(spec, false))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Pending,
    Accepted,
    Denied,
}

impl CardStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    fn colour(self) -> Colour {
        Colour::new(match self {
            Self::Pending => content::moderation::PENDING_COLOR,
            Self::Accepted => content::moderation::ACCEPT_COLOR,
            Self::Denied => content::moderation::DECLINE_COLOR,
        })
    }

    fn field(self) -> (&'static str, &'static str) {
        match self {
            Self::Pending => (content::fields::STATUS, content::fields::STATUS_PENDING),
            Self::Accepted => (
                content::moderation::STATUS_NAME,
                content::moderation::ACCEPTED,
            ),
            Self::Denied => (content::moderation::STATUS_NAME, content::moderation::DENIED),
        }
    }
}

/// A suggestion as posted in the moderation channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCard {
    pub word: String,
    pub hint: String,
    pub searched: Option<String>,
    pub status: CardStatus,
    pub footer: Footer,
}

impl SuggestionCard {
    pub fn pending(puzzle: &Puzzle, submitter: &Actor) -> Self {
        Self {
            word: puzzle.word.clone(),
            hint: puzzle.hint.clone(),
            searched: Some(puzzle.searched.clone()),
            status: CardStatus::Pending,
            footer: Footer::signed(submitter),
        }
    }

    /// The same card after a moderator decided, signed by them.
    pub fn closed(card: &PostedSuggestion, status: CardStatus, moderator: &Actor) -> Self {
        Self {
            word: card.word.clone(),
            hint: card.hint.clone(),
            searched: None,
            status,
            footer: Footer::signed(moderator),
        }
    }

    /// Message text above the embed, only set while the answer is known.
    pub fn content(&self) -> Option<String> {
        self.searched.as_ref().map(|searched| {
            format!(
                "{solution}: **{searched}**",
                solution = content::moderation::SOLUTION
            )
        })
    }

    pub fn embed(&self) -> CreateEmbed {
        let (status_name, status_value) = self.status.field();

        base_embed(&self.word, &self.hint)
            .field(status_name, status_value, false)
            .colour(self.status.colour())
            .footer(self.footer.create())
    }

    /// Moderation buttons, disabled once the card is closed.
    pub fn buttons(&self) -> Vec<CreateButton> {
        buttons::MODERATION
            .iter()
            .map(|spec| create_button(spec, !self.status.is_pending()))
            .collect()
    }
}

/// What a moderation button can read back from the card it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedSuggestion {
    pub channel_id: serenity::ChannelId,
    pub message_id: serenity::MessageId,
    pub word: String,
    pub hint: String,
    pub submitter: String,
}

impl PostedSuggestion {
    /// Reads word, hint and submitter from the first embed of a card.
    pub fn from_message(message: &serenity::Message) -> Option<Self> {
        Self::from_embed(message.channel_id, message.id, message.embeds.first()?)
    }

    pub fn from_embed(
        channel_id: serenity::ChannelId,
        message_id: serenity::MessageId,
        embed: &serenity::Embed,
    ) -> Option<Self> {
        let word = embed.fields.first()?.value.clone();
        let hint = embed.fields.get(1)?.value.clone();
        let submitter = embed
            .footer
            .as_ref()
            .map(|footer| footer.text.clone())
            .unwrap_or_default();

        Some(Self {
            channel_id,
            message_id,
            word,
            hint,
            submitter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CardStatus, PostedSuggestion, SuggestionCard};
    use crate::commands::emojiquiz::core::{actor::Actor, puzzle::Puzzle};
    use poise::serenity_prelude::{self as serenity, UserId};
    use pretty_assertions::assert_eq;

    fn submitter() -> Actor {
        Actor {
            id: UserId::new(10),
            tag: "slime#0001".to_owned(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_owned(),
            bot: false,
        }
    }

    #[test]
    fn pending_card_shows_solution() {
        let puzzle = Puzzle::new("🐱🏠", "animal home", "cat house");
        let card = SuggestionCard::pending(&puzzle, &submitter());

        assert_eq!(card.content().as_deref(), Some("`Solution`: **cat house**"));
        assert_eq!(card.footer.text, "slime#0001");
        assert!(card.status.is_pending());
    }

    #[test]
    fn closed_card_drops_solution() {
        let posted = PostedSuggestion {
            channel_id: serenity::ChannelId::new(1),
            message_id: serenity::MessageId::new(2),
            word: "🐱🏠".to_owned(),
            hint: "animal home".to_owned(),
            submitter: "slime#0001".to_owned(),
        };

        let card = SuggestionCard::closed(&posted, CardStatus::Denied, &submitter());

        assert_eq!(card.content(), None);
        assert_eq!(card.word, "🐱🏠");
        assert_eq!(card.status, CardStatus::Denied);
    }

    #[test]
    fn posted_suggestion_from_embed() -> Result<(), serde_json::Error> {
        let embed: serenity::Embed = serde_json::from_value(serde_json::json!({
            "title": "**Emojiquiz**",
            "fields": [
                { "name": "❓Searched word", "value": "🐱🏠", "inline": true },
                { "name": "❗Hint", "value": "animal home", "inline": true },
                { "name": "Status", "value": "`🟡 Pending`", "inline": false }
            ],
            "footer": { "text": "slime#0001" }
        }))?;

        let posted = PostedSuggestion::from_embed(
            serenity::ChannelId::new(1),
            serenity::MessageId::new(2),
            &embed,
        )
        .expect("embed is a suggestion card");

        assert_eq!(posted.word, "🐱🏠");
        assert_eq!(posted.hint, "animal home");
        assert_eq!(posted.submitter, "slime#0001");
        assert_eq!(posted.message_id, serenity::MessageId::new(2));

        Ok(())
    }

    #[test]
    fn embed_without_fields_is_not_a_card() -> Result<(), serde_json::Error> {
        let embed: serenity::Embed = serde_json::from_value(serde_json::json!({
            "title": "something else"
        }))?;

        assert_eq!(
            PostedSuggestion::from_embed(
                serenity::ChannelId::new(1),
                serenity::MessageId::new(2),
                &embed,
            ),
            None
        );

        Ok(())
    }
}
