use poise::serenity_prelude::{ChannelId, MessageId};
use tracing::{debug, info, instrument, warn};

use super::{
    actor::{Actor, GuildRef},
    cards::{Footer, PostedSuggestion, PuzzleCard, SuggestionCard},
    chat::{best_effort, Chat},
    content::reactions,
    moderation::{ModerationPolicy, Moderator, Verdict},
    puzzle::Puzzle,
    reply::Reply,
    state::GuildGameState,
    store::{Backend, Store},
};

/// Per-deployment knobs of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Guesses counted before the counter starts over without a prune.
    pub prune_cap: u32,
    pub moderation: ModerationPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prune_cap: 30,
            moderation: ModerationPolicy::default(),
        }
    }
}

/// A message posted somewhere in a guild.
#[derive(Debug, Clone)]
pub struct Guess {
    pub guild: GuildRef,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub author: Actor,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a guess: a bot wrote it, or it was outside the game channel.
    Ignored,
    Wrong,
    /// `next` is the word now on display, if one could be picked.
    Solved { next: Option<String> },
}

/// One guild's game, driven by a single event.
///
/// Every operation loads the guild's record, decides, calls out to the chat
/// and writes the record back. Storage errors are returned; chat errors are
/// logged and skipped.
pub struct Emojiquiz<'a, B, C> {
    store: &'a Store<B>,
    chat: C,
    settings: &'a Settings,
}

impl<'a, B: Backend, C: Chat> Emojiquiz<'a, B, C> {
    pub fn new(store: &'a Store<B>, chat: C, settings: &'a Settings) -> Self {
        Self {
            store,
            chat,
            settings,
        }
    }

    async fn load_or_new(&self, guild: &GuildRef) -> Result<GuildGameState, B::Error> {
        let state = self
            .store
            .load(guild.id)
            .await?
            .unwrap_or_else(|| GuildGameState::new(guild.id));

        Ok(state)
    }

    /// Picks, publishes and records the next puzzle.
    async fn publish_next(
        &self,
        state: &mut GuildGameState,
        channel: ChannelId,
        footer: Footer,
    ) -> Option<String> {
        let Some(next) = state.pool.pick() else {
            warn!("no puzzle left to publish");
            return None;
        };

        let card = PuzzleCard::new(&next, footer);
        let message = best_effort(self.chat.publish(channel, &card).await, "publish puzzle");

        debug!(word = %next.word, ?message, "puzzle published");
        state.show(next.word.clone(), message);

        Some(next.word)
    }

    /// Clears the channel's recent messages and publishes the next puzzle.
    async fn rotate(
        &self,
        state: &mut GuildGameState,
        channel: ChannelId,
        footer: Footer,
    ) -> Option<String> {
        best_effort(
            self.chat.prune(channel, state.prune_count()).await,
            "prune channel",
        );
        state.reset_counter();

        self.publish_next(state, channel, footer).await
    }

    #[instrument(skip_all, fields(guild = %guild.id, word = %puzzle.word))]
    pub async fn create_puzzle(
        &self,
        guild: &GuildRef,
        puzzle: Puzzle,
    ) -> Result<Reply, B::Error> {
        let mut state = self.load_or_new(guild).await?;

        if state.pool.collides(&puzzle) {
            info!("word or answer already in the pool");
            return Ok(Reply::AlreadyExists);
        }

        let preview = PuzzleCard::new(&puzzle, Footer::default());
        let searched = puzzle.searched.clone();

        state.touch_name(guild.name.as_deref());
        state.pool.push(puzzle);
        self.store.save(&state).await?;

        info!(pool = state.pool.len(), "puzzle created");
        Ok(Reply::Created { preview, searched })
    }

    /// Removes a word from the pool. If the game is running, the channel
    /// is cleared and a fresh puzzle takes its place.
    #[instrument(skip_all, fields(guild = %guild.id, word = %word))]
    pub async fn delete_puzzle(&self, guild: &GuildRef, word: &str) -> Result<Reply, B::Error> {
        let Some(mut state) = self.store.load(guild.id).await? else {
            return Ok(Reply::NothingStored);
        };

        if state.pool.remove_word(word).is_none() {
            return Ok(Reply::NeverSetUp {
                word: word.to_owned(),
            });
        }

        state.touch_name(guild.name.as_deref());

        if state.pool.is_empty() {
            if let Some(channel) = state.channel_id {
                best_effort(
                    self.chat.prune(channel, state.prune_count()).await,
                    "prune channel",
                );
            }

            self.store.delete(guild.id).await?;
            info!("last puzzle deleted, guild record removed");

            return Ok(Reply::Deleted {
                word: word.to_owned(),
            });
        }

        match state.channel_id {
            Some(channel) => {
                self.rotate(&mut state, channel, Footer::default()).await;
            }
            None if state.current_word.as_deref() == Some(word) => {
                state.current_word = None;
                state.active_message_id = None;
            }
            None => (),
        }

        self.store.save(&state).await?;

        info!(pool = state.pool.len(), "puzzle deleted");
        Ok(Reply::Deleted {
            word: word.to_owned(),
        })
    }

    /// Forgets everything stored for the guild.
    #[instrument(skip_all, fields(guild = %guild.id))]
    pub async fn reset_guild(&self, guild: &GuildRef) -> Result<Reply, B::Error> {
        self.store.delete(guild.id).await?;

        info!("guild reset");
        Ok(Reply::Reset)
    }

    #[instrument(skip_all, fields(guild = %guild.id, %channel, %pending_channel))]
    pub async fn setup_channel(
        &self,
        guild: &GuildRef,
        channel: ChannelId,
        pending_channel: ChannelId,
    ) -> Result<Reply, B::Error> {
        let Some(mut state) = self.store.load(guild.id).await? else {
            return Ok(Reply::NeedsPuzzle);
        };

        if state.pool.is_empty() {
            return Ok(Reply::NeedsPuzzle);
        }

        state.touch_name(guild.name.as_deref());
        state.channel_id = Some(channel);
        state.pending_channel_id = Some(pending_channel);

        self.publish_next(&mut state, channel, Footer::default())
            .await;
        self.store.save(&state).await?;

        info!("game channel set up");
        Ok(Reply::SetUp)
    }

    /// Checks a message against the puzzle on display.
    #[instrument(skip_all, fields(guild = %guess.guild.id, channel = %guess.channel_id))]
    pub async fn check_guess(&self, guess: &Guess) -> Result<GuessOutcome, B::Error> {
        if guess.author.bot {
            return Ok(GuessOutcome::Ignored);
        }

        let Some(mut state) = self.store.load(guess.guild.id).await? else {
            return Ok(GuessOutcome::Ignored);
        };

        if state.channel_id != Some(guess.channel_id) {
            return Ok(GuessOutcome::Ignored);
        }

        state.touch_name(guess.guild.name.as_deref());
        state.count_guess();

        let solved = state
            .current_puzzle()
            .is_some_and(|puzzle| puzzle.is_solved_by(&guess.content));

        let outcome = if solved {
            best_effort(
                self.chat
                    .react(guess.channel_id, guess.message_id, reactions::RIGHT)
                    .await,
                "react to guess",
            );

            let next = self
                .rotate(
                    &mut state,
                    guess.channel_id,
                    Footer::solved_by(&guess.author),
                )
                .await;

            info!(solver = %guess.author.tag, ?next, "puzzle solved");
            GuessOutcome::Solved { next }
        } else {
            best_effort(
                self.chat
                    .react(guess.channel_id, guess.message_id, reactions::WRONG)
                    .await,
                "react to guess",
            );

            GuessOutcome::Wrong
        };

        state.enforce_cap(self.settings.prune_cap);
        self.store.save(&state).await?;

        Ok(outcome)
    }

    /// Replaces the puzzle on display without anyone solving it.
    ///
    /// Runs in the game channel when one is recorded, otherwise wherever the
    /// button was clicked.
    #[instrument(skip_all, fields(guild = %guild.id, actor = %actor.tag))]
    pub async fn skip_puzzle(
        &self,
        guild: &GuildRef,
        clicked_in: ChannelId,
        actor: &Actor,
    ) -> Result<Reply, B::Error> {
        let Some(mut state) = self.store.load(guild.id).await? else {
            return Ok(Reply::Silent);
        };

        let channel = state.channel_id.unwrap_or(clicked_in);

        state.touch_name(guild.name.as_deref());
        self.rotate(&mut state, channel, Footer::skipped_by(actor))
            .await;
        self.store.save(&state).await?;

        info!(next = ?state.current_word, "puzzle skipped");
        Ok(Reply::Silent)
    }

    #[instrument(skip_all, fields(guild = %guild.id))]
    pub async fn reveal_first_letter(&self, guild: &GuildRef) -> Result<Reply, B::Error> {
        let letter = self
            .store
            .load(guild.id)
            .await?
            .and_then(|state| state.current_puzzle().and_then(Puzzle::first_letter));

        Ok(letter.map_or(Reply::Silent, Reply::FirstLetter))
    }

    /// Queues a member's puzzle for moderation.
    #[instrument(skip_all, fields(guild = %guild.id, submitter = %submitter.tag, word = %puzzle.word))]
    pub async fn submit_suggestion(
        &self,
        guild: &GuildRef,
        submitter: &Actor,
        puzzle: Puzzle,
    ) -> Result<Reply, B::Error> {
        let Some(mut state) = self.store.load(guild.id).await? else {
            return Ok(Reply::NotPlaying);
        };

        if state.pool.collides(&puzzle) || state.pending_pool.contains_word(&puzzle.word) {
            info!("suggestion already known");
            return Ok(Reply::AlreadyExists);
        }

        state.touch_name(guild.name.as_deref());

        match state.pending_channel_id {
            Some(channel) => {
                let card = SuggestionCard::pending(&puzzle, submitter);
                best_effort(
                    self.chat.post_suggestion(channel, &card).await,
                    "post suggestion",
                );
            }
            None => warn!("no moderation channel recorded, suggestion is stored only"),
        }

        state.pending_pool.push(puzzle.clone());
        self.store.save(&state).await?;

        info!(pending = state.pending_pool.len(), "suggestion queued");
        Ok(Reply::Suggested(puzzle))
    }

    /// Accepts or declines the suggestion a moderation card shows.
    #[instrument(skip_all, fields(guild = %guild.id, moderator = %moderator.actor.tag, ?verdict, word = %card.word))]
    pub async fn moderate(
        &self,
        guild: &GuildRef,
        moderator: &Moderator,
        verdict: Verdict,
        card: &PostedSuggestion,
    ) -> Result<Reply, B::Error> {
        if !self.settings.moderation.allows(moderator) {
            info!("moderation refused");
            return Ok(Reply::NotAllowed);
        }

        let Some(mut state) = self.store.load(guild.id).await? else {
            return Ok(Reply::NoLongerPending);
        };

        let Some(puzzle) = state.pending_pool.find_word(&card.word).cloned() else {
            return Ok(Reply::NoLongerPending);
        };

        if verdict == Verdict::Accept && state.pool.collides(&puzzle) {
            info!("accepted suggestion collides with the pool");
            return Ok(Reply::AlreadyExists);
        }

        state.touch_name(guild.name.as_deref());
        state.pending_pool.remove_word(&card.word);

        if verdict == Verdict::Accept {
            state.pool.push(puzzle);
        }

        self.store.save(&state).await?;

        let closed = SuggestionCard::closed(card, verdict.status(), &moderator.actor);
        best_effort(
            self.chat
                .update_suggestion(card.channel_id, card.message_id, &closed)
                .await,
            "close suggestion card",
        );

        info!("suggestion moderated");
        Ok(Reply::Moderated {
            verdict,
            submitter: card.submitter.clone(),
        })
    }
}
