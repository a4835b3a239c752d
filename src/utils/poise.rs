use crate::PoiseData;

use poise::{serenity_prelude as serenity, CreateReply};

pub type Context<'a> = poise::Context<'a, PoiseData, crate::errors::CommandError>;

pub type Error = crate::errors::CommandError;
pub type Command = poise::Command<PoiseData, Error>;
pub type CommandResult = Result<(), Error>;

pub trait ContextExt {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;
}

impl ContextExt for Context<'_> {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let builder = CreateReply::default().ephemeral(true).content(text);
        self.send(builder).await
    }
}
