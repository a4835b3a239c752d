use super::{actor::Actor, cards::CardStatus, content::buttons};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Decline,
}

impl Verdict {
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        if custom_id == buttons::ACCEPT.custom_id {
            Some(Self::Accept)
        } else if custom_id == buttons::DECLINE.custom_id {
            Some(Self::Decline)
        } else {
            None
        }
    }

    pub fn status(self) -> CardStatus {
        match self {
            Self::Accept => CardStatus::Accepted,
            Self::Decline => CardStatus::Denied,
        }
    }
}

/// The member clicking a moderation button.
#[derive(Debug, Clone)]
pub struct Moderator {
    pub actor: Actor,
    pub role_names: Vec<String>,
    pub administrator: bool,
}

/// Who may accept or decline suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationPolicy {
    roles: Vec<String>,
}

impl ModerationPolicy {
    pub fn new(roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn allows(&self, moderator: &Moderator) -> bool {
        moderator.administrator
            || moderator
                .role_names
                .iter()
                .any(|name| self.roles.contains(name))
    }
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self::new(super::content::moderation::DEFAULT_ROLES)
    }
}

#[cfg(test)]
mod tests {
    use super::{ModerationPolicy, Moderator, Verdict};
    use crate::commands::emojiquiz::core::actor::Actor;
    use poise::serenity_prelude::UserId;

    fn moderator(roles: &[&str], administrator: bool) -> Moderator {
        Moderator {
            actor: Actor {
                id: UserId::new(5),
                tag: "mod#0005".to_owned(),
                avatar_url: String::new(),
                bot: false,
            },
            role_names: roles.iter().map(|role| (*role).to_owned()).collect(),
            administrator,
        }
    }

    #[test]
    fn allowed_by_role() {
        let policy = ModerationPolicy::default();

        assert!(policy.allows(&moderator(&["members", "emojiquiz"], false)));
        assert!(policy.allows(&moderator(&["jeezyDevelopment"], false)));
    }

    #[test]
    fn allowed_as_admin() {
        let policy = ModerationPolicy::new(Vec::<String>::new());

        assert!(policy.allows(&moderator(&[], true)));
    }

    #[test]
    fn denied_otherwise() {
        let policy = ModerationPolicy::default();

        assert!(!policy.allows(&moderator(&[], false)));
        assert!(!policy.allows(&moderator(&["Emojiquiz", "members"], false)));
    }

    #[test]
    fn verdict_from_custom_id() {
        assert_eq!(
            Verdict::from_custom_id("emojiquiz_accept"),
            Some(Verdict::Accept)
        );
        assert_eq!(
            Verdict::from_custom_id("emojiquiz_decline"),
            Some(Verdict::Decline)
        );
        assert_eq!(Verdict::from_custom_id("skip_word"), None);
    }
}
