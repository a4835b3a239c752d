pub const TOKEN_VAR: &str = "EMOJIQUIZ_TOKEN";
pub const DB_USERNAME_VAR: &str = "EMOJIQUIZ_DB_USERNAME";
pub const DB_PASSWORD_VAR: &str = "EMOJIQUIZ_DB_PASSWORD";

#[derive(Debug, Clone)]
pub struct Secrets {
    bot_token: String,
    pub db: Option<DbSecrets>,
}

impl Secrets {
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    #[tracing::instrument(skip_all, name = "secrets")]
    pub fn load() -> Result<Self, Error> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads secrets through `var`, which returns `None` for unset keys.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let bot_token = var(TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or(Error::Missing(TOKEN_VAR))?;

        let db = match (var(DB_USERNAME_VAR), var(DB_PASSWORD_VAR)) {
            (Some(username), Some(password)) => Some(DbSecrets { username, password }),
            (None, None) => {
                tracing::debug!("no db credentials in environment, connecting without auth");
                None
            }
            (Some(_), None) => return Err(Error::Missing(DB_PASSWORD_VAR)),
            (None, Some(_)) => return Err(Error::Missing(DB_USERNAME_VAR)),
        };

        Ok(Self { bot_token, db })
    }
}

#[derive(Debug, Clone)]
pub struct DbSecrets {
    username: String,
    password: String,
}

impl DbSecrets {
    pub fn mongo_credential(&self) -> mongodb::options::Credential {
        mongodb::options::Credential::builder()
            .username(self.username.clone())
            .password(self.password.clone())
            .build()
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("environment variable '{0}' is not set")]
    #[event(level = ERROR)]
    Missing(&'static str),
}
