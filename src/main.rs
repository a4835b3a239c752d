#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
use cli::{Cli, Command};

/// Slash commands and event handlers.
mod commands;

mod errors;

mod framework;
use framework::{data::PoiseData, ConfigSetup};

mod utils;

use clap::Parser;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use thisslime::TracingError;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.command().is_start() {
        framework::logging::init_tracing();
    }

    if let Err(err) = run(cli).await {
        err.trace();
        return Err(err.into());
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<(), errors::Error> {
    let config = ConfigSetup::load(&cli)?;

    if cli.command() == Command::Config {
        println!("# {}", config.path().display());
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let mongo = mongodb::Client::with_options(config.mongodb()?)?;
    let data = PoiseData::new(&config, &mongo.database(config.db.name()));
    data.ready().await;

    let framework = framework::poise::build(config.bot.clone(), data);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::Client::builder(config.token(), intents)
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "could not listen for ctrl-c");
            return;
        }

        info!("shutting down");
        shard_manager.shutdown_all().await;
    });

    client.start().await?;

    mongo.shutdown().await;
    info!("bye!");

    Ok(())
}
