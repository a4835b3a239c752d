mod actor;
mod cards;
mod chat;
mod content;
mod moderation;
mod puzzle;
mod quiz;
mod reply;
mod state;
mod store;

pub use actor::{Actor, GuildRef};
pub use cards::PostedSuggestion;
pub use chat::Discord;
pub use content::{replies, MODAL_ID};
pub use moderation::{ModerationPolicy, Moderator, Verdict};
pub use puzzle::Puzzle;
pub use quiz::{Emojiquiz, Guess, Settings};
pub use reply::Reply;
pub use store::{MongoDb, StoreMongoDb};

pub mod buttons {
    pub use super::content::buttons::{FIRST_LETTER, SKIP, SUGGEST};
}
