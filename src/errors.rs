use poise::{serenity_prelude as serenity, BoxFuture, FrameworkError};

use thiserror::Error as ThisError;
use thisslime::TracingError;
use tracing::{error, error_span, warn, Instrument};

use crate::{
    commands::emojiquiz::core::replies, framework::event_handler::HandlerError,
    utils::poise::ContextExt, PoiseData,
};

pub fn handle_framework_error(
    err: FrameworkError<'_, PoiseData, CommandError>,
) -> BoxFuture<'_, ()> {
    Box::pin(async {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);

                async {
                    error.trace();

                    if let Err(err) = ctx.reply_ephemeral(replies::FAILED).await {
                        warn!(%err, "could not tell the user about the error");
                    }
                }
                .instrument(span)
                .await;
            }
            FrameworkError::EventHandler { error, event, .. } => {
                let event = event.snake_case_name();
                let _enter = error_span!("", event).entered();

                error.trace();
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                let _enter = error_span!("", command).entered();

                error!(%missing_permissions, "bot is missing permissions");
            }
            _ => {
                if let Err(err) = poise::builtins::on_error(err).await {
                    error!(%err, "failed to handle framework error");
                }
            }
        };
    })
}

#[derive(Debug, ThisError, TracingError)]
#[span(level = WARN)]
pub enum CommandError {
    #[error("serenity error: {0}")]
    #[event(level = ERROR)]
    Serenity(#[from] serenity::Error),

    #[error("error from mongodb: {0}")]
    #[event(level = ERROR)]
    MongoDb(#[from] mongodb::error::Error),

    #[error("error from event handler: {0}")]
    Handler(#[from] HandlerError),
}

/// Anything that stops the bot from starting or running.
#[derive(Debug, ThisError, TracingError)]
#[span]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::framework::config::Error),

    #[error("could not run discord client: {0}")]
    #[event(level = ERROR)]
    Client(#[from] serenity::Error),

    #[error("could not connect to mongodb: {0}")]
    #[event(level = ERROR)]
    MongoDb(#[from] mongodb::error::Error),
}
