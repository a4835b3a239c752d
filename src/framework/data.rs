use std::sync::Arc;

use mongodb::Database;
use poise::serenity_prelude::Http;

use crate::commands::emojiquiz::core::{Discord, Emojiquiz, MongoDb, Settings, StoreMongoDb};

use super::config::AppConfig;

#[derive(Debug, Clone)]
pub struct PoiseData {
    settings: Settings,
    store: StoreMongoDb,
}

impl PoiseData {
    pub(crate) fn new(config: &AppConfig, db: &Database) -> Self {
        Self {
            settings: config.emojiquiz.settings(),
            store: StoreMongoDb::from_database(db),
        }
    }

    /// Creates the storage schema, logging instead of failing.
    pub(crate) async fn ready(&self) {
        self.store.ready().await;
    }

    /// The game, ready for one event.
    pub(crate) fn emojiquiz(&self, http: Arc<Http>) -> Emojiquiz<'_, MongoDb, Discord> {
        Emojiquiz::new(&self.store, Discord::new(http), &self.settings)
    }
}
