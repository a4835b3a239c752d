use std::{future::Future, pin::Pin};

use poise::{
    serenity_prelude::{self as serenity, FullEvent, Interaction},
    FrameworkContext,
};
use thiserror::Error;
use thisslime::TracingError;
use tracing::{info, trace};

use crate::{
    commands::emojiquiz::{self, core::MODAL_ID},
    errors::CommandError,
    PoiseData,
};

#[derive(Debug, Error, TracingError)]
#[span(level = WARN)]
pub enum HandlerError {
    #[error("serenity error: {0}")]
    #[event(level = ERROR)]
    Serenity(#[from] serenity::Error),

    #[error("error from mongodb: {0}")]
    #[event(level = ERROR)]
    MongoDb(#[from] mongodb::error::Error),
}

async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    framework_ctx: FrameworkContext<'_, PoiseData, CommandError>,
    data: &PoiseData,
) -> Result<(), HandlerError> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!(user = %data_about_bot.user.tag(), "connected");
        }
        FullEvent::Message { new_message: msg } if msg.author.id != framework_ctx.bot_id => {
            emojiquiz::handle_message(serenity_ctx, data, msg).await?;
        }
        FullEvent::InteractionCreate { interaction } => match interaction {
            Interaction::Component(component) => {
                trace!(custom_id = %component.data.custom_id, "button clicked");
                emojiquiz::handle_component(serenity_ctx, data, component).await?;
            }
            Interaction::Modal(modal) if modal.data.custom_id == MODAL_ID => {
                emojiquiz::handle_modal(serenity_ctx, data, modal).await?;
            }
            _ => (),
        },
        _ => (),
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, PoiseData, CommandError>,
    data: &'a PoiseData,
) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
    Box::pin(async move {
        event_handler(serenity_ctx, event, framework_ctx, data)
            .await
            .map_err(CommandError::from)
    })
}
