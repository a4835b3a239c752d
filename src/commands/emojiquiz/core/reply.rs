use super::{cards::PuzzleCard, content::replies, moderation::Verdict, puzzle::Puzzle};

/// What the member who triggered an event gets told, privately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to say; interactions still get acknowledged.
    Silent,

    /// The word or the answer is already in the pool.
    AlreadyExists,
    /// How the new puzzle will look, with its answer.
    Created { preview: PuzzleCard, searched: String },

    NothingStored,
    Deleted { word: String },
    NeverSetUp { word: String },

    Reset,

    SetUp,
    NeedsPuzzle,

    FirstLetter(char),

    Suggested(Puzzle),
    NotPlaying,

    NotAllowed,
    NoLongerPending,
    Moderated { verdict: Verdict, submitter: String },
}

impl Reply {
    /// The text of the reply. [`Reply::Created`] also carries an embed.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            Self::Silent => return None,
            Self::AlreadyExists => replies::ALREADY_EXISTS.to_owned(),
            Self::Created { searched, .. } => format!("{} **{searched}**", replies::PREVIEW),
            Self::NothingStored => replies::NOTHING_STORED.to_owned(),
            Self::Deleted { word } => format!("Successfully reset {word}!"),
            Self::NeverSetUp { word } => format!("{word} has never been set up!"),
            Self::Reset => replies::RESET.to_owned(),
            Self::SetUp => replies::SET_UP.to_owned(),
            Self::NeedsPuzzle => replies::NEEDS_PUZZLE.to_owned(),
            Self::FirstLetter(letter) => format!("{} **{letter}**.", replies::FIRST_LETTER),
            Self::Suggested(puzzle) => format!(
                "Your emojiquiz suggestion is submitted!\n**word:** {word}\n**hint:** {hint}\n**searched:** {searched}",
                word = puzzle.word,
                hint = puzzle.hint,
                searched = puzzle.searched,
            ),
            Self::NotPlaying => replies::NOT_PLAYING.to_owned(),
            Self::NotAllowed => replies::NOT_ALLOWED.to_owned(),
            Self::NoLongerPending => replies::NO_LONGER_PENDING.to_owned(),
            Self::Moderated {
                verdict: Verdict::Accept,
                submitter,
            } => format!("You successfully accepted **{submitter}** emojiquiz suggestion. ✅"),
            Self::Moderated {
                verdict: Verdict::Decline,
                submitter,
            } => format!("You declined **{submitter}** emojiquiz suggestion. ❌"),
        };

        Some(text)
    }

    pub fn preview(&self) -> Option<&PuzzleCard> {
        match self {
            Self::Created { preview, .. } => Some(preview),
            _ => None,
        }
    }
}
