//! Every string, color and button the emojiquiz shows.

use poise::serenity_prelude::ButtonStyle;

pub const TITLE: &str = "**Emojiquiz**";
pub const DESCRIPTION: &str =
    "If you have any issues to solve that emojiquiz then you can click the buttons to get some help.";

pub const COLOR: u32 = 0xFFFFFF;

pub mod fields {
    pub const WORD: &str = "❓Searched word";
    pub const HINT: &str = "❗Hint";
    pub const STATUS: &str = "Status";
    pub const STATUS_PENDING: &str = "`🟡 Pending`";
}

pub mod footer {
    pub const TEXT: &str = "Emojiquiz ~ solved the last emojiquiz! 😄";
    pub const SOLVED: &str = "~ solved the last emojiquiz! 😄";
    pub const SKIPPED: &str = "~ skipped the last emojiquiz! 👀";
    pub const ICON_URL: &str = "https://i.imgur.com/OHN3crW.png";
}

pub mod reactions {
    pub const RIGHT: &str = "✅";
    pub const WRONG: &str = "❌";
}

pub mod moderation {
    pub const STATUS_NAME: &str = "**Status:**\n";
    pub const ACCEPTED: &str = "`🟢 Accepted`";
    pub const DENIED: &str = "`🔴 Denied`";
    pub const ACCEPT_COLOR: u32 = 0x00F700;
    pub const DECLINE_COLOR: u32 = 0xE71837;
    pub const PENDING_COLOR: u32 = 0x9B8F22;
    pub const SOLUTION: &str = "`Solution`";

    pub const DEFAULT_ROLES: [&str; 2] = ["emojiquiz", "jeezyDevelopment"];
}

pub mod replies {
    pub const ALREADY_EXISTS: &str = "This word already exist.";
    pub const PREVIEW: &str = "That's how it will look like!\nSearched word:";
    pub const NOTHING_STORED: &str = "Nothing in the database";
    pub const RESET: &str = "You successfully reset the bot. ✅";
    pub const SET_UP: &str = "Successfully set up emojiquiz. ✅";
    pub const NEEDS_PUZZLE: &str =
        "You need to do **/emojiquiz-create** first before you can setup the emojiquiz. 😀";
    pub const FIRST_LETTER: &str = "The first letter is a";
    pub const NOT_ALLOWED: &str = "You are not allowed to moderate emojiquiz suggestions.";
    pub const NO_LONGER_PENDING: &str = "This suggestion is no longer pending.";
    pub const NOT_PLAYING: &str = "There is no emojiquiz in this server yet.";
    pub const FAILED: &str = "Something went wrong, please try again later.";
}

pub const MODAL_ID: &str = "emojiquiz";

/// A button's look; the custom id is what interactions are routed by.
#[derive(Debug, Clone, Copy)]
pub struct ButtonSpec {
    pub custom_id: &'static str,
    pub label: &'static str,
    pub style: ButtonStyle,
    pub emoji: Option<&'static str>,
}

pub mod buttons {
    use super::ButtonSpec;
    use poise::serenity_prelude::ButtonStyle;

    pub const SKIP: ButtonSpec = ButtonSpec {
        custom_id: "skip_word",
        label: "Skip word",
        style: ButtonStyle::Secondary,
        emoji: Some("⏩"),
    };

    pub const FIRST_LETTER: ButtonSpec = ButtonSpec {
        custom_id: "first_letter",
        label: "First Letter",
        style: ButtonStyle::Secondary,
        emoji: Some("⚡"),
    };

    pub const SUGGEST: ButtonSpec = ButtonSpec {
        custom_id: "suggest_new_quiz",
        label: "Suggest new quiz",
        style: ButtonStyle::Secondary,
        emoji: Some("🤳"),
    };

    pub const DECLINE: ButtonSpec = ButtonSpec {
        custom_id: "emojiquiz_decline",
        label: "Decline",
        style: ButtonStyle::Danger,
        emoji: None,
    };

    pub const ACCEPT: ButtonSpec = ButtonSpec {
        custom_id: "emojiquiz_accept",
        label: "Accept",
        style: ButtonStyle::Success,
        emoji: None,
    };

    /// Shown under every puzzle.
    pub const PUZZLE: [ButtonSpec; 3] = [SKIP, FIRST_LETTER, SUGGEST];

    /// Shown under every moderation card.
    pub const MODERATION: [ButtonSpec; 2] = [DECLINE, ACCEPT];
}
