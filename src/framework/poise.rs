use tracing::trace;

use crate::{
    commands::{self, LogCommands},
    errors::{self, CommandError},
};

use super::{config::BotConfig, data::PoiseData, event_handler};

pub fn build(bot: BotConfig, data: PoiseData) -> poise::Framework<PoiseData, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            on_error: errors::handle_framework_error,
            event_handler: event_handler::poise,
            pre_command: |ctx| Box::pin(async move { ctx.log_command().await }),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                let ctx = ctx.clone();
                let http = ctx.http.clone();

                let commands = framework.options().commands.as_ref();

                if let Some(guild_id) = bot.testing_server() {
                    poise::builtins::register_in_guild(&http, commands, *guild_id).await?;
                }

                poise::builtins::register_globally(&http, commands).await?;

                let activity = bot.activity();
                ctx.set_activity(activity);

                trace!("finished setup, accepting commands");

                if let Some(status_channel) = bot.status_channel() {
                    status_channel.say(&ctx, "ready!").await?;
                }

                Ok(data)
            })
        })
        .build()
}
