use poise::serenity_prelude::{ActivityData, ChannelId, GuildId};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct BotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    testing_server: Option<GuildId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_channel: Option<ChannelId>,
}

impl BotConfig {
    pub fn testing_server(&self) -> Option<&GuildId> {
        if self.testing_server.is_none() {
            debug!("no testing server set in config, commands are only registered globally");
        }

        self.testing_server.as_ref()
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let Some(activity) = &self.activity else {
            warn!("no bot.activity provided in config, defaulting to none");
            return None;
        };

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed_activity = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
            return None;
        };

        debug!(
            "bot.activity parsed as {:?}: {}",
            parsed_activity.kind, parsed_activity.name
        );
        info!("successfully parsed bot activity from config");

        Some(parsed_activity)
    }

    pub fn status_channel(&self) -> Option<ChannelId> {
        self.status_channel
    }
}

#[cfg(test)]
mod tests {
    use super::BotConfig;
    use poise::serenity_prelude::ActivityType;
    use pretty_assertions::assert_eq;

    fn with_activity(activity: &str) -> BotConfig {
        BotConfig {
            activity: Some(activity.to_owned()),
            ..BotConfig::default()
        }
    }

    #[test]
    fn activity_kinds() {
        let playing = with_activity("playing emojiquiz")
            .activity()
            .expect("activity parses");
        assert_eq!(playing.kind, ActivityType::Playing);
        assert_eq!(playing.name, "emojiquiz");

        let listening = with_activity("listening to guesses")
            .activity()
            .expect("activity parses");
        assert_eq!(listening.kind, ActivityType::Listening);
        assert_eq!(listening.name, "guesses");
    }

    #[tracing_test::traced_test]
    #[test]
    fn bad_activity_disabled() {
        assert!(with_activity("sleeping").activity().is_none());
        assert!(with_activity("").activity().is_none());
        assert!(BotConfig::default().activity().is_none());

        assert!(logs_contain("disabling bot activity"));
    }
}
