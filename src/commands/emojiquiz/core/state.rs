use poise::serenity_prelude::{ChannelId, GuildId, MessageId};
use serde::{Deserialize, Serialize};

use super::puzzle::{Pool, Puzzle};

/// Everything stored for one guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildGameState {
    pub guild_id: GuildId,
    #[serde(default)]
    pub guild_name: Option<String>,

    #[serde(default)]
    pub pending_channel_id: Option<ChannelId>,
    #[serde(default)]
    pub channel_id: Option<ChannelId>,

    #[serde(default)]
    pub current_word: Option<String>,
    #[serde(default)]
    pub active_message_id: Option<MessageId>,

    #[serde(default)]
    pub bulk_delete_counter: u32,

    #[serde(default)]
    pub pool: Pool,
    #[serde(default)]
    pub pending_pool: Pool,
}

impl GuildGameState {
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            guild_name: None,
            pending_channel_id: None,
            channel_id: None,
            current_word: None,
            active_message_id: None,
            bulk_delete_counter: 0,
            pool: Pool::new(),
            pending_pool: Pool::new(),
        }
    }

    /// Overwrites the cached guild name when the event carried one.
    pub fn touch_name(&mut self, name: Option<&str>) {
        if let Some(name) = name {
            self.guild_name = Some(name.to_owned());
        }
    }

    /// The pool entry currently on display.
    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current_word
            .as_deref()
            .and_then(|word| self.pool.find_word(word))
    }

    /// How many recent messages a prune should remove: every counted guess,
    /// plus the puzzle announcement and one more.
    pub fn prune_count(&self) -> u8 {
        u8::try_from(self.bulk_delete_counter.saturating_add(2))
            .unwrap_or(u8::MAX)
            .min(100)
    }

    pub fn reset_counter(&mut self) {
        self.bulk_delete_counter = 0;
    }

    pub fn count_guess(&mut self) {
        self.bulk_delete_counter = self.bulk_delete_counter.saturating_add(1);
    }

    /// Resets a counter that went past `cap` without a prune.
    pub fn enforce_cap(&mut self, cap: u32) {
        if self.bulk_delete_counter > cap {
            self.reset_counter();
        }
    }

    /// Records a newly announced puzzle.
    pub fn show(&mut self, word: String, message: Option<MessageId>) {
        self.current_word = Some(word);
        self.active_message_id = message;
    }
}
