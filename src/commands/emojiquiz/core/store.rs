use mongodb::{
    bson::{doc, ser::to_bson, Bson},
    options::{IndexOptions, ReplaceOptions},
    IndexModel,
};
use poise::serenity_prelude::GuildId;
use tracing::{error, info, instrument, trace};

use super::state::GuildGameState;

/// Row storage for guild state, keyed by guild.
///
/// Writes replace the whole record. Nothing coordinates two events
/// writing the same guild, the last one wins.
pub trait Backend {
    type Error;

    async fn ensure_schema(&self) -> Result<(), Self::Error>;

    async fn load(&self, guild_id: GuildId) -> Result<Option<GuildGameState>, Self::Error>;
    async fn save(&self, state: &GuildGameState) -> Result<(), Self::Error>;
    async fn delete(&self, guild_id: GuildId) -> Result<(), Self::Error>;
}

#[derive(Debug, Default)]
pub struct Store<Backend> {
    backend: std::sync::Arc<Backend>,
}

impl<B> Clone for Store<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}

impl<B: Backend> Store<B>
where
    B::Error: std::fmt::Display,
{
    /// Creates indexes if they are missing. A failure is logged, never fatal.
    #[instrument(skip_all)]
    pub async fn ready(&self) {
        match self.backend.ensure_schema().await {
            Ok(()) => info!("emojiquiz storage ready"),
            Err(err) => error!(%err, "could not prepare emojiquiz storage"),
        }
    }
}

impl<B: Backend> Store<B> {
    pub async fn load(&self, guild_id: GuildId) -> Result<Option<GuildGameState>, B::Error> {
        self.backend.load(guild_id).await
    }

    pub async fn save(&self, state: &GuildGameState) -> Result<(), B::Error> {
        trace!(guild = %state.guild_id, pool = state.pool.len(), "saving guild state");
        self.backend.save(state).await
    }

    pub async fn delete(&self, guild_id: GuildId) -> Result<(), B::Error> {
        trace!(guild = %guild_id, "deleting guild state");
        self.backend.delete(guild_id).await
    }
}

impl<B> From<B> for Store<B> {
    fn from(value: B) -> Self {
        Self {
            backend: std::sync::Arc::new(value),
        }
    }
}

#[cfg(test)]
pub type HashMap = tokio::sync::RwLock<std::collections::HashMap<GuildId, GuildGameState>>;

#[cfg(test)]
pub type StoreHashMap = Store<HashMap>;

#[cfg(test)]
impl StoreHashMap {
    pub fn new() -> Self {
        Self::default()
    }
}

pub type StoreMongoDb = Store<MongoDb>;

impl StoreMongoDb {
    pub fn new(collection: mongodb::Collection<GuildGameState>) -> Self {
        MongoDb::new(collection).into()
    }

    pub fn from_database(db: &mongodb::Database) -> Self {
        Self::new(db.collection(MongoDb::COLLECTION_NAME))
    }
}

/// In-memory storage for tests.
#[cfg(test)]
trait BackendInfallible {
    async fn load(&self, guild_id: GuildId) -> Option<GuildGameState>;
    async fn save(&self, state: &GuildGameState);
    async fn delete(&self, guild_id: GuildId);
}

#[cfg(test)]
impl BackendInfallible for HashMap {
    async fn load(&self, guild_id: GuildId) -> Option<GuildGameState> {
        let guard = self.read().await;
        guard.get(&guild_id).cloned()
    }

    async fn save(&self, state: &GuildGameState) {
        let mut guard = self.write().await;
        guard.insert(state.guild_id, state.clone());
    }

    async fn delete(&self, guild_id: GuildId) {
        let mut guard = self.write().await;
        guard.remove(&guild_id);
    }
}

#[cfg(test)]
impl<B: BackendInfallible> Backend for B {
    type Error = std::convert::Infallible;

    async fn ensure_schema(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn load(&self, guild_id: GuildId) -> Result<Option<GuildGameState>, Self::Error> {
        Ok(BackendInfallible::load(self, guild_id).await)
    }

    async fn save(&self, state: &GuildGameState) -> Result<(), Self::Error> {
        BackendInfallible::save(self, state).await;
        Ok(())
    }

    async fn delete(&self, guild_id: GuildId) -> Result<(), Self::Error> {
        BackendInfallible::delete(self, guild_id).await;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MongoDb {
    collection: mongodb::Collection<GuildGameState>,
}

impl MongoDb {
    const COLLECTION_NAME: &'static str = "emojiquiz";

    pub fn new(collection: mongodb::Collection<GuildGameState>) -> Self {
        Self { collection }
    }

    fn guild_filter(guild_id: GuildId) -> mongodb::bson::Document {
        let id: Bson = to_bson(&guild_id).expect("GuildId implements Serialize");
        doc! { "guild_id": id }
    }
}

impl Backend for MongoDb {
    type Error = mongodb::error::Error;

    async fn ensure_schema(&self) -> Result<(), Self::Error> {
        let index = IndexModel::builder()
            .keys(doc! { "guild_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index, None).await.map(|_| ())
    }

    async fn load(&self, guild_id: GuildId) -> Result<Option<GuildGameState>, Self::Error> {
        self.collection
            .find_one(Self::guild_filter(guild_id), None)
            .await
    }

    async fn save(&self, state: &GuildGameState) -> Result<(), Self::Error> {
        self.collection
            .replace_one(
                Self::guild_filter(state.guild_id),
                state,
                ReplaceOptions::builder().upsert(true).build(),
            )
            .await
            .map(|_| ())
    }

    async fn delete(&self, guild_id: GuildId) -> Result<(), Self::Error> {
        self.collection
            .delete_one(Self::guild_filter(guild_id), None)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use poise::serenity_prelude::GuildId;

    use super::{Backend, GuildGameState};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Down;

    impl std::fmt::Display for Down {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("storage unavailable")
        }
    }

    impl std::error::Error for Down {}

    /// Fails every call.
    #[derive(Debug, Default)]
    pub struct Broken;

    impl Backend for Broken {
        type Error = Down;

        async fn ensure_schema(&self) -> Result<(), Self::Error> {
            Err(Down)
        }

        async fn load(&self, _: GuildId) -> Result<Option<GuildGameState>, Self::Error> {
            Err(Down)
        }

        async fn save(&self, _: &GuildGameState) -> Result<(), Self::Error> {
            Err(Down)
        }

        async fn delete(&self, _: GuildId) -> Result<(), Self::Error> {
            Err(Down)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{testing::Broken, Store};
    type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

    mod consts {
        use poise::serenity_prelude as serenity;

        pub const GUILD_FOO: serenity::GuildId = serenity::GuildId::new(1);
        pub const GUILD_BAR: serenity::GuildId = serenity::GuildId::new(2);
    }

    macro_rules! test_backends {
        {$($(#[$attr:meta])* $backend:ty as $mod_name:ident $block:block)+} => {
            $(
            paste::paste! {
                mod [<$mod_name _ backend>] {
                    use super::consts::*;
                    use super::Result;
                    use crate::commands::emojiquiz::core::{puzzle::Puzzle, state::GuildGameState};
                    use pretty_assertions::assert_eq;
                    type Store = super::Store<super::$backend>;

                    $(#[$attr])*
                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn load_missing() -> Result {
                        let (store, _db) = $block;
                        store.ready().await;

                        assert_eq!(store.load(GUILD_FOO).await?, None);

                        Ok(())
                    }

                    $(#[$attr])*
                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn save_then_load() -> Result {
                        let (store, _db) = $block;
                        store.ready().await;

                        let mut state = GuildGameState::new(GUILD_FOO);
                        state.pool.push(Puzzle::new("🐱🏠", "animal home", "cat house"));
                        state.pending_pool.push(Puzzle::new("☀️🌻", "yellow plant", "sunflower"));
                        state.bulk_delete_counter = 4;
                        store.save(&state).await?;

                        assert_eq!(store.load(GUILD_FOO).await?, Some(state));
                        assert_eq!(store.load(GUILD_BAR).await?, None);

                        Ok(())
                    }

                    $(#[$attr])*
                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn save_overwrites() -> Result {
                        let (store, _db) = $block;
                        store.ready().await;

                        let mut state = GuildGameState::new(GUILD_FOO);
                        state.pool.push(Puzzle::new("🐱🏠", "animal home", "cat house"));
                        store.save(&state).await?;

                        state.pool.push(Puzzle::new("☀️🌻", "yellow plant", "sunflower"));
                        state.current_word = Some("☀️🌻".to_owned());
                        store.save(&state).await?;

                        let loaded = store.load(GUILD_FOO).await?.expect("state was saved");
                        assert_eq!(loaded.pool.len(), 2);
                        assert_eq!(loaded.current_word.as_deref(), Some("☀️🌻"));

                        Ok(())
                    }

                    $(#[$attr])*
                    #[tracing_test::traced_test]
                    #[tokio::test]
                    async fn delete() -> Result {
                        let (store, _db) = $block;
                        store.ready().await;

                        store.save(&GuildGameState::new(GUILD_FOO)).await?;
                        store.save(&GuildGameState::new(GUILD_BAR)).await?;

                        store.delete(GUILD_FOO).await?;

                        assert_eq!(store.load(GUILD_FOO).await?, None);
                        assert!(store.load(GUILD_BAR).await?.is_some());

                        // deleting twice is fine
                        store.delete(GUILD_FOO).await?;

                        Ok(())
                    }
                }
            }
            )+
        };
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn ready_logs_instead_of_failing() {
        let store = Store::from(Broken);
        store.ready().await;

        assert!(logs_contain("could not prepare emojiquiz storage"));
    }

    #[tokio::test]
    async fn broken_backend_errors() {
        let store = Store::from(Broken);

        assert!(store.load(consts::GUILD_FOO).await.is_err());
        assert!(store.delete(consts::GUILD_FOO).await.is_err());
    }

    test_backends! {
        super::HashMap as hash_map {
            (Store::new(), ())
        }

        #[ignore = "needs a local mongod binary"]
        super::MongoDb as mongodb {
            let mongodb = temp_mongo::TempMongo::new()
                .await
                .expect("setting up db should not fail");
            let client = mongodb.client();
            let collection = client.database("emojiquiz_test").collection("emojiquiz");
            (Store::new(collection), mongodb)
        }
    }
}
