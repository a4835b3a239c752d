use std::sync::Arc;

use poise::serenity_prelude::{
    self as serenity, ChannelId, CreateMessage, EditMessage, GetMessages, Http, MessageId,
    ReactionType,
};
use tracing::{instrument, warn};

use super::cards::{PuzzleCard, SuggestionCard};
use crate::utils::serenity::buttons::WithButtons;

/// The outbound calls a transition makes on the chat platform.
pub trait Chat {
    type Error: std::fmt::Display;

    /// Posts a puzzle with its buttons, returning the new message.
    async fn publish(&self, channel: ChannelId, card: &PuzzleCard)
        -> Result<MessageId, Self::Error>;

    async fn react(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), Self::Error>;

    /// Deletes up to `count` of the most recent messages in a channel.
    async fn prune(&self, channel: ChannelId, count: u8) -> Result<(), Self::Error>;

    async fn post_suggestion(
        &self,
        channel: ChannelId,
        card: &SuggestionCard,
    ) -> Result<MessageId, Self::Error>;

    /// Rewrites a suggestion card in place.
    async fn update_suggestion(
        &self,
        channel: ChannelId,
        message: MessageId,
        card: &SuggestionCard,
    ) -> Result<(), Self::Error>;
}

/// Logs a failed platform call and carries on.
///
/// Storage writes made before the call are not undone, so the stored state
/// can now disagree with what the channel shows.
pub(super) fn best_effort<T, E: std::fmt::Display>(
    result: Result<T, E>,
    action: &'static str,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%err, action, "chat call failed, stored state may not match the channel");
            None
        }
    }
}

/// [`Chat`] over serenity's http client.
#[derive(Debug, Clone)]
pub struct Discord {
    http: Arc<Http>,
}

impl Discord {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl Chat for Discord {
    type Error = serenity::Error;

    #[instrument(skip_all, fields(%channel))]
    async fn publish(
        &self,
        channel: ChannelId,
        card: &PuzzleCard,
    ) -> Result<MessageId, Self::Error> {
        let builder = CreateMessage::new()
            .embed(card.embed())
            .with_buttons(card.buttons());

        channel
            .send_message(&*self.http, builder)
            .await
            .map(|message| message.id)
    }

    async fn react(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), Self::Error> {
        channel
            .create_reaction(&*self.http, message, ReactionType::Unicode(emoji.to_owned()))
            .await
    }

    #[instrument(skip(self), fields(%channel))]
    async fn prune(&self, channel: ChannelId, count: u8) -> Result<(), Self::Error> {
        let messages = channel
            .messages(&*self.http, GetMessages::new().limit(count))
            .await?;

        let ids: Vec<MessageId> = messages.iter().map(|message| message.id).collect();

        if ids.is_empty() {
            return Ok(());
        }

        channel.delete_messages(&*self.http, ids).await
    }

    #[instrument(skip_all, fields(%channel))]
    async fn post_suggestion(
        &self,
        channel: ChannelId,
        card: &SuggestionCard,
    ) -> Result<MessageId, Self::Error> {
        let mut builder = CreateMessage::new()
            .embed(card.embed())
            .with_buttons(card.buttons());

        if let Some(content) = card.content() {
            builder = builder.content(content);
        }

        channel
            .send_message(&*self.http, builder)
            .await
            .map(|message| message.id)
    }

    #[instrument(skip_all, fields(%channel, %message))]
    async fn update_suggestion(
        &self,
        channel: ChannelId,
        message: MessageId,
        card: &SuggestionCard,
    ) -> Result<(), Self::Error> {
        let builder = EditMessage::new()
            .embed(card.embed())
            .with_buttons(card.buttons());

        channel
            .edit_message(&*self.http, message, builder)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use poise::serenity_prelude::{ChannelId, MessageId};
    use std::sync::Mutex;

    use super::Chat;
    use crate::commands::emojiquiz::core::cards::{PuzzleCard, SuggestionCard};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Publish(ChannelId, PuzzleCard),
        React(ChannelId, MessageId, String),
        Prune(ChannelId, u8),
        PostSuggestion(ChannelId, SuggestionCard),
        UpdateSuggestion(ChannelId, MessageId, SuggestionCard),
    }

    /// Records every call; message ids count up from 1000.
    #[derive(Debug, Default)]
    pub struct Recorder {
        calls: Mutex<Vec<Call>>,
        failing: bool,
    }

    #[derive(Debug)]
    pub struct Unavailable;

    impl std::fmt::Display for Unavailable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("chat unavailable")
        }
    }

    impl Recorder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every call is recorded and then fails.
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().expect("lock is not poisoned").clone()
        }

        fn record(&self, call: Call) -> Result<MessageId, Unavailable> {
            let mut calls = self.calls.lock().expect("lock is not poisoned");
            calls.push(call);

            if self.failing {
                Err(Unavailable)
            } else {
                Ok(MessageId::new(1000 + calls.len() as u64))
            }
        }
    }

    impl Chat for &Recorder {
        type Error = Unavailable;

        async fn publish(
            &self,
            channel: ChannelId,
            card: &PuzzleCard,
        ) -> Result<MessageId, Self::Error> {
            self.record(Call::Publish(channel, card.clone()))
        }

        async fn react(
            &self,
            channel: ChannelId,
            message: MessageId,
            emoji: &str,
        ) -> Result<(), Self::Error> {
            self.record(Call::React(channel, message, emoji.to_owned()))
                .map(|_| ())
        }

        async fn prune(&self, channel: ChannelId, count: u8) -> Result<(), Self::Error> {
            self.record(Call::Prune(channel, count)).map(|_| ())
        }

        async fn post_suggestion(
            &self,
            channel: ChannelId,
            card: &SuggestionCard,
        ) -> Result<MessageId, Self::Error> {
            self.record(Call::PostSuggestion(channel, card.clone()))
        }

        async fn update_suggestion(
            &self,
            channel: ChannelId,
            message: MessageId,
            card: &SuggestionCard,
        ) -> Result<(), Self::Error> {
            self.record(Call::UpdateSuggestion(channel, message, card.clone()))
                .map(|_| ())
        }
    }
}
