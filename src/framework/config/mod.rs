use std::{ops::Deref, path::PathBuf};

use mongodb::options::ServerAddress;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::commands::emojiquiz::core::{ModerationPolicy, Settings};

mod bot;
pub use bot::BotConfig;

mod secrets;
pub use secrets::Secrets;

pub const PATH_VAR: &str = "EMOJIQUIZ_TOML";
const DEFAULT_PATH: &str = "./emojiquiz.toml";

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(config::ConfigError),

    #[error("problem loading secrets: {0}")]
    Secrets(#[from] secrets::Error),

    #[error("could not print config: {0}")]
    #[event(level = ERROR)]
    Print(#[from] toml::ser::Error),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub bot: BotConfig,
    pub db: DbConfig,
    #[serde(default)]
    pub emojiquiz: EmojiquizConfig,
}

impl AppConfig {
    pub fn load(path: &std::path::Path) -> Result<Self, Error> {
        Self::from_source(config::File::new(
            &path.to_string_lossy(),
            config::FileFormat::Toml,
        ))
    }

    fn from_source(source: impl config::Source + Send + Sync + 'static) -> Result<Self, Error> {
        config::Config::builder()
            .add_source(source)
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DbConfig {
    url: String,
    #[serde(default = "DbConfig::default_name")]
    name: String,
}

impl DbConfig {
    fn default_name() -> String {
        "emojiquiz".to_owned()
    }

    pub fn url(&self) -> mongodb::error::Result<ServerAddress> {
        ServerAddress::parse(&self.url)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EmojiquizConfig {
    /// Role names allowed to accept or decline suggestions.
    moderation_roles: Vec<String>,
    prune_cap: u32,
}

impl EmojiquizConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            prune_cap: self.prune_cap,
            moderation: ModerationPolicy::new(self.moderation_roles.iter().cloned()),
        }
    }
}

impl Default for EmojiquizConfig {
    fn default() -> Self {
        let settings = Settings::default();

        Self {
            moderation_roles: settings.moderation.roles().to_vec(),
            prune_cap: settings.prune_cap,
        }
    }
}

/// Everything needed before the bot can connect.
#[derive(Debug, Clone)]
pub struct ConfigSetup {
    pub app: AppConfig,
    path: PathBuf,
    secrets: Secrets,
}

impl ConfigSetup {
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(cli: &crate::cli::Cli) -> Result<Self, Error> {
        let path = Self::resolve_path(
            cli.config.clone(),
            std::env::var_os(PATH_VAR).map(PathBuf::from),
        );

        let app = AppConfig::load(&path)?;
        info!(path = %path.display(), "config loaded");

        let secrets = Secrets::load()?;

        Ok(Self { app, path, secrets })
    }

    /// The command line wins over the environment, which wins over the default.
    fn resolve_path(cli: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        cli.or(env).unwrap_or_else(|| {
            warn!(path = DEFAULT_PATH, "{PATH_VAR} env unset, using default path");
            PathBuf::from(DEFAULT_PATH)
        })
    }

    pub fn mongodb(&self) -> mongodb::error::Result<mongodb::options::ClientOptions> {
        let credential = self
            .secrets
            .db
            .as_ref()
            .map(secrets::DbSecrets::mongo_credential);

        let options = mongodb::options::ClientOptions::builder()
            .app_name("emojiquiz".to_owned())
            .credential(credential)
            .hosts(vec![self.app.db.url()?])
            .build();

        Ok(options)
    }

    pub fn token(&self) -> &str {
        self.secrets.bot_token()
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Deref for ConfigSetup {
    type Target = AppConfig;

    fn deref(&self) -> &Self::Target {
        &self.app
    }
}
