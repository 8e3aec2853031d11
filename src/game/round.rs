// Round state and guess bookkeeping
//
// A Round is plain data: the word being guessed, the letters tried so far and
// how many of them missed. It knows nothing about screens or SDL2.

use crate::catalog::{Category, is_word_char};
use crate::config::MAX_WRONG_GUESSES;
use rand::Rng;
use std::collections::BTreeSet;

/// Result of guessing a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a letter or digit; nothing changed
    Invalid,
    /// Letter was tried before; nothing changed
    AlreadyGuessed,
    /// Letter occurs in the word
    Correct,
    /// Letter does not occur in the word; one more wrong guess counted
    Incorrect,
}

/// How a letter control should look for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unused,
    Hit,
    Miss,
}

/// One word-guessing round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    category: String,
    word: String,
    guessed_letters: BTreeSet<char>,
    wrong_count: u8,
    max_wrong: u8,
}

impl Round {
    /// Starts a round with a word picked uniformly at random from `category`
    pub fn start<R: Rng>(category: &Category, rng: &mut R) -> Self {
        let words = category.words();
        let word = &words[rng.gen_range(0..words.len())];
        Self::with_word(category.name(), word)
    }

    /// Starts a round with a known word
    ///
    /// The word must be non-empty and use only A-Z and 0-9, as catalog
    /// validation guarantees for loaded words.
    pub fn with_word(category: &str, word: &str) -> Self {
        debug_assert!(
            !word.is_empty() && word.chars().all(|c| is_word_char(c.to_ascii_uppercase())),
            "invalid word {:?}",
            word
        );
        Round {
            category: category.to_string(),
            word: word.to_ascii_uppercase(),
            guessed_letters: BTreeSet::new(),
            wrong_count: 0,
            max_wrong: MAX_WRONG_GUESSES,
        }
    }

    /// Guesses a letter (case-insensitive)
    ///
    /// Characters outside A-Z and 0-9 report [`GuessOutcome::Invalid`] and
    /// repeating a letter reports [`GuessOutcome::AlreadyGuessed`]; both leave
    /// the round untouched.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();

        if !is_word_char(letter) {
            return GuessOutcome::Invalid;
        }
        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            // Saturate so wrong_count stays within [0, max_wrong]
            self.wrong_count = (self.wrong_count + 1).min(self.max_wrong);
            GuessOutcome::Incorrect
        }
    }

    /// True once every character of the word has been guessed
    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.guessed_letters.contains(&c))
    }

    /// True once the wrong-guess budget is spent
    pub fn is_lost(&self) -> bool {
        self.wrong_count >= self.max_wrong
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter.to_ascii_uppercase())
    }

    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    pub fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    pub fn remaining_guesses(&self) -> u8 {
        self.max_wrong - self.wrong_count
    }

    /// Word with unguessed letters replaced by `_`, e.g. `"R _ S"`
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed_letters.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn letter_state(&self, letter: char) -> LetterState {
        let letter = letter.to_ascii_uppercase();
        if !self.guessed_letters.contains(&letter) {
            LetterState::Unused
        } else if self.word.contains(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_start_picks_word_from_category() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for category in catalog.categories() {
            for _ in 0..200 {
                let round = Round::start(category, &mut rng);
                assert!(category.contains(round.word()));
                assert_eq!(round.category(), category.name());
                assert_eq!(round.wrong_count(), 0);
                assert!(round.guessed_letters().is_empty());
            }
        }
    }

    #[test]
    fn test_start_is_deterministic_for_seed() {
        let catalog = Catalog::builtin();
        let category = catalog.get("AWS Storage").unwrap();

        let words_a: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| Round::start(category, &mut rng).word().to_string()).collect()
        };
        let words_b: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| Round::start(category, &mut rng).word().to_string()).collect()
        };

        assert_eq!(words_a, words_b);
    }

    #[test]
    fn test_repeated_guess_is_idempotent() {
        let mut once = Round::with_word("AWS Compute", "LAMBDA");
        once.guess('E');

        let mut twice = Round::with_word("AWS Compute", "LAMBDA");
        assert_eq!(twice.guess('E'), GuessOutcome::Incorrect);
        assert_eq!(twice.guess('E'), GuessOutcome::AlreadyGuessed);

        assert_eq!(once, twice);
        assert_eq!(twice.wrong_count(), 1);
    }

    #[test]
    fn test_repeated_correct_guess_reports_already_guessed() {
        let mut round = Round::with_word("AWS Compute", "LAMBDA");
        assert_eq!(round.guess('A'), GuessOutcome::Correct);
        assert_eq!(round.guess('a'), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.wrong_count(), 0);
    }

    #[test]
    fn test_symbols_are_not_guesses() {
        let mut round = Round::with_word("AWS Compute", "EC2");
        let fresh = round.clone();

        for symbol in ['!', '?', ' ', '-', '#', 'é', '_'] {
            assert_eq!(round.guess(symbol), GuessOutcome::Invalid);
        }

        assert_eq!(round, fresh);
        assert_eq!(round.wrong_count(), 0);
        assert!(!round.is_over());
    }

    #[test]
    #[should_panic(expected = "invalid word")]
    #[cfg(debug_assertions)]
    fn test_empty_word_is_rejected() {
        Round::with_word("AWS Compute", "");
    }

    #[test]
    fn test_win_with_digit() {
        let mut round = Round::with_word("AWS Storage", "S3");
        assert_eq!(round.guess('3'), GuessOutcome::Correct);
        assert!(!round.is_won());
        assert_eq!(round.guess('S'), GuessOutcome::Correct);
        assert!(round.is_won());
    }

    #[test]
    fn test_duplicate_letters_need_one_guess() {
        let mut round = Round::with_word("AWS Database", "DYNAMODB");
        for letter in ['D', 'Y', 'N', 'A', 'M', 'O'] {
            round.guess(letter);
        }
        assert!(!round.is_won());
        round.guess('B');
        assert!(round.is_won());
    }

    #[test]
    fn test_sixth_wrong_guess_loses() {
        let mut round = Round::with_word("AWS Compute", "EC2");
        for (i, letter) in ['B', 'F', 'G', 'H', 'J'].into_iter().enumerate() {
            assert_eq!(round.guess(letter), GuessOutcome::Incorrect);
            assert_eq!(round.wrong_count() as usize, i + 1);
            assert!(!round.is_lost());
        }
        round.guess('K');
        assert!(round.is_lost());
        assert_eq!(round.remaining_guesses(), 0);
    }

    #[test]
    fn test_wrong_count_never_exceeds_max() {
        let mut round = Round::with_word("AWS Compute", "EC2");
        for letter in "ABDFGHIJKLMNOPQRSTUVWXYZ".chars() {
            round.guess(letter);
            assert!(round.wrong_count() <= round.max_wrong());
        }
        assert_eq!(round.wrong_count(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn test_win_and_loss_never_coincide() {
        // Every guess order over a small alphabet, stopping when the round ends
        let catalog = Catalog::builtin();
        let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();

        for category in catalog.categories() {
            for word in category.words() {
                for offset in 0..alphabet.len() {
                    let mut round = Round::with_word(category.name(), word);
                    for i in 0..alphabet.len() {
                        round.guess(alphabet[(i + offset) % alphabet.len()]);
                        assert!(!(round.is_won() && round.is_lost()), "{}", word);
                        if round.is_over() {
                            break;
                        }
                    }
                    assert!(round.is_over());
                }
            }
        }
    }

    #[test]
    fn test_masked_word() {
        let mut round = Round::with_word("AWS Database", "RDS");
        assert_eq!(round.masked_word(), "_ _ _");
        round.guess('S');
        assert_eq!(round.masked_word(), "_ _ S");
        round.guess('R');
        assert_eq!(round.masked_word(), "R _ S");
    }

    #[test]
    fn test_letter_state() {
        let mut round = Round::with_word("AWS Database", "RDS");
        round.guess('R');
        round.guess('X');
        assert_eq!(round.letter_state('R'), LetterState::Hit);
        assert_eq!(round.letter_state('x'), LetterState::Miss);
        assert_eq!(round.letter_state('D'), LetterState::Unused);
    }
}
