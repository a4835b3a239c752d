use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// One emojiquiz: the emoji `word` shown to players, a `hint`,
/// and the `searched` answer they have to type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub word: String,
    pub hint: String,
    pub searched: String,
}

impl Puzzle {
    pub fn new(
        word: impl Into<String>,
        hint: impl Into<String>,
        searched: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
            searched: searched.into(),
        }
    }

    /// Whether `content` solves this puzzle, ignoring case.
    pub fn is_solved_by(&self, content: &str) -> bool {
        self.searched.to_lowercase() == content.to_lowercase()
    }

    pub fn first_letter(&self) -> Option<char> {
        self.searched.chars().next()
    }

    /// Two puzzles collide when they share the emoji word or the answer.
    /// Answers are compared the way guesses are, ignoring case.
    pub fn collides_with(&self, other: &Self) -> bool {
        self.word == other.word || self.searched.to_lowercase() == other.searched.to_lowercase()
    }
}

/// An ordered list of puzzles.
///
/// Uniqueness of `word` and `searched` is not enforced here,
/// callers check [`Pool::collides`] before pushing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool(Vec<Puzzle>);

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, puzzle: Puzzle) {
        self.0.push(puzzle)
    }

    pub fn find_word(&self, word: &str) -> Option<&Puzzle> {
        self.0.iter().find(|puzzle| puzzle.word == word)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.find_word(word).is_some()
    }

    pub fn collides(&self, puzzle: &Puzzle) -> bool {
        self.0.iter().any(|existing| existing.collides_with(puzzle))
    }

    /// Removes every entry with this word, returning the first one removed.
    pub fn remove_word(&mut self, word: &str) -> Option<Puzzle> {
        let removed = self.find_word(word).cloned();
        self.0.retain(|puzzle| puzzle.word != word);
        removed
    }

    /// Fisher–Yates shuffle of the whole pool, then the head.
    ///
    /// The stored order is left alone. The puzzle that was just played
    /// can come up again.
    pub fn pick_with(&self, rng: &mut impl Rng) -> Option<Puzzle> {
        let mut shuffled: Vec<&Puzzle> = self.0.iter().collect();
        shuffled.shuffle(rng);
        shuffled.first().map(|puzzle| (*puzzle).clone())
    }

    pub fn pick(&self) -> Option<Puzzle> {
        self.pick_with(&mut rand::thread_rng())
    }
}

impl FromIterator<Puzzle> for Pool {
    fn from_iter<T: IntoIterator<Item = Puzzle>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pool, Puzzle};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn cat_house() -> Puzzle {
        Puzzle::new("🐱🏠", "animal home", "cat house")
    }

    fn sun_flower() -> Puzzle {
        Puzzle::new("☀️🌻", "yellow plant", "sunflower")
    }

    #[test]
    fn solved_ignores_case() {
        let puzzle = cat_house();

        assert!(puzzle.is_solved_by("Cat House"));
        assert!(puzzle.is_solved_by("CAT HOUSE"));
        assert!(!puzzle.is_solved_by("cathouse"));
        assert!(!puzzle.is_solved_by("cat house "));
    }

    #[test]
    fn first_letter_handles_multibyte() {
        assert_eq!(cat_house().first_letter(), Some('c'));
        assert_eq!(Puzzle::new("🍎", "fruit", "äpfel").first_letter(), Some('ä'));
        assert_eq!(Puzzle::new("🍎", "fruit", "").first_letter(), None);
    }

    #[test]
    fn collides_on_word_or_searched() {
        let pool: Pool = [cat_house()].into_iter().collect();

        assert!(pool.collides(&Puzzle::new("🐱🏠", "other", "other")));
        assert!(pool.collides(&Puzzle::new("🐈🏡", "other", "cat house")));
        assert!(pool.collides(&Puzzle::new("🐈🏡", "other", "Cat House")));
        assert!(!pool.collides(&sun_flower()));
    }

    #[test]
    fn remove_word() {
        let mut pool: Pool = [cat_house(), sun_flower()].into_iter().collect();

        assert_eq!(pool.remove_word("🐱🏠"), Some(cat_house()));
        assert_eq!(pool.len(), 1);
        assert!(!pool.contains_word("🐱🏠"));

        assert_eq!(pool.remove_word("🐱🏠"), None);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn pick_comes_from_pool() {
        let pool: Pool = [cat_house(), sun_flower()].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..32 {
            let picked = pool.pick_with(&mut rng).expect("pool is not empty");
            assert!(pool.contains_word(&picked.word));
        }
    }

    #[test]
    fn pick_reaches_every_puzzle() {
        let pool: Pool = [cat_house(), sun_flower()].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let picks: Vec<Puzzle> = (0..64).filter_map(|_| pool.pick_with(&mut rng)).collect();

        assert!(picks.contains(&cat_house()));
        assert!(picks.contains(&sun_flower()));
    }

    #[test]
    fn pick_leaves_order_alone() {
        let pool: Pool = [cat_house(), sun_flower()].into_iter().collect();
        let before = pool.clone();

        pool.pick();

        assert_eq!(pool, before);
    }

    #[test]
    fn pick_from_empty() {
        assert_eq!(Pool::new().pick(), None);
    }
}
