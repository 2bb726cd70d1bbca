use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{ConfigError, validate_lives};
use crate::secret_word::SecretWord;
use crate::types::{RoundOutcome, RoundResult};

pub const INVALID_GUESS_MESSAGE: &str = "Please input a letter or word!";
pub const REPEATED_GUESS_MESSAGE: &str = "You already made this guess!";
pub const WRONG_WORD_MESSAGE: &str = "Sorry, but that was not the correct word";

/// One playthrough of hangman: a secret word, the lives left, and every guess so far.
#[derive(Clone, Debug)]
pub struct GameRound {
    secret_word: SecretWord,
    lives: u32,
    guesses: BTreeSet<String>,
    // Wrong single-letter guesses, upper-cased, in the order they were made.
    wrong_letters: Vec<char>,
}

impl GameRound {
    pub fn new(word: &str, lives: i64) -> Result<Self, ConfigError> {
        Ok(Self::with_lives(word, validate_lives(lives)?))
    }

    /// `lives` must already have passed [`validate_lives`].
    pub(crate) fn with_lives(word: &str, lives: u32) -> Self {
        Self {
            secret_word: SecretWord::new(word),
            lives,
            guesses: BTreeSet::new(),
            wrong_letters: Vec::new(),
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn secret_word(&self) -> &SecretWord {
        &self.secret_word
    }

    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    /// `"<word> · <lives> lives"`, followed by `" · <wrong letters>"` once there are any.
    pub fn summarize(&self) -> String {
        let mut summary = format!("{} · {} lives", self.secret_word, self.lives);

        if !self.wrong_letters.is_empty() {
            let letters: Vec<String> = self.wrong_letters.iter().map(char::to_string).collect();
            summary.push_str(" · ");
            summary.push_str(&letters.join(" "));
        }

        summary
    }

    /// Applies one guess and returns the feedback to show the player.
    ///
    /// A correct whole-word guess returns an empty message. Malformed and repeated
    /// guesses are rejected without costing a life.
    pub fn try_guess(&mut self, raw: &str) -> String {
        let guess = raw.to_lowercase();

        if self.secret_word.guess_word(&guess) {
            debug!(guess = %guess, "word guessed");
            return String::new();
        }

        if guess.is_empty() || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return INVALID_GUESS_MESSAGE.to_string();
        }

        if self.guesses.contains(&guess) {
            return REPEATED_GUESS_MESSAGE.to_string();
        }

        self.guesses.insert(guess.clone());

        if guess.len() > 1 {
            self.lose_life();
            debug!(guess = %guess, lives = self.lives, "wrong word");
            return WRONG_WORD_MESSAGE.to_string();
        }

        let count = self.secret_word.guess_letter(&guess);
        if count == 0 {
            self.lose_life();
            self.wrong_letters.extend(guess.to_uppercase().chars());
        }
        debug!(guess = %guess, count, lives = self.lives, "letter guessed");

        count_message(count, &guess)
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0 || !self.secret_word.is_hidden()
    }

    /// Only meaningful once [`GameRound::is_over`] is true.
    pub fn won(&self) -> bool {
        self.lives > 0
    }

    /// Shows the answer regardless of how the round went and reports the result.
    pub fn finish(&mut self) -> RoundOutcome {
        self.secret_word.force_reveal();
        let result = if self.won() { RoundResult::Won } else { RoundResult::Lost };
        RoundOutcome {
            result,
            word: self.secret_word.word().to_string(),
            lives_left: self.lives,
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

/// How many times `letter` appears, phrased for the player.
pub fn count_message(count: usize, letter: &str) -> String {
    let letter = letter.to_uppercase();
    match count {
        0 => format!("There are no letter {letter}'s"),
        1 => format!("There is 1 letter {letter}"),
        n => format!("There are {n} letter {letter}'s"),
    }
}
