//! Interactive hangman driver.
//!
//! A session reads one guess per line from any `BufRead` and writes the board,
//! feedback and results to any `Write`. Running out of input ends the whole
//! session, even in endless mode, without starting another round.

use std::io::{self, BufRead, Write};

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::{ConfigError, validate_lives};
use crate::random::{choose, seeded};
use crate::round::GameRound;
use crate::types::{RoundOutcome, RoundResult, SessionEnd, SessionReport};

pub const DEFAULT_LIVES: i64 = 8;
pub const GUESS_PROMPT: &str = "your guess: ";
pub const FAREWELL: &str = "Goodbye!";

pub struct HangmanSession {
    words: Vec<String>,
    lives: u32,
    endless: bool,
    rng: ChaCha8Rng,
}

impl HangmanSession {
    /// Validates everything a round needs before the first one starts.
    pub fn new(
        words: Vec<String>,
        lives: i64,
        endless: bool,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let lives = validate_lives(lives)?;
        if words.is_empty() {
            return Err(ConfigError::NoCandidateWords);
        }
        Ok(Self { words, lives, endless, rng: seeded(seed) })
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn endless(&self) -> bool {
        self.endless
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionReport> {
        let mut rounds = Vec::new();

        loop {
            let Some(word) = choose(&mut self.rng, &self.words).cloned() else {
                break;
            };

            match self.play_round(&word, &mut input, &mut output)? {
                Some(outcome) => rounds.push(outcome),
                None => {
                    info!(rounds = rounds.len(), "input exhausted, ending session");
                    return Ok(SessionReport { rounds, end: SessionEnd::InputExhausted });
                }
            }

            if !self.endless {
                break;
            }
            writeln!(output)?;
        }

        Ok(SessionReport { rounds, end: SessionEnd::Completed })
    }

    /// Plays one round to the end. `None` means input ran out first.
    fn play_round<R: BufRead, W: Write>(
        &self,
        word: &str,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<RoundOutcome>> {
        let mut round = GameRound::with_lives(word, self.lives);
        info!(len = word.len(), lives = self.lives, "round started");

        while !round.is_over() {
            writeln!(output, "{}", round.summarize())?;

            let Some(guess) = read_guess(input, output)? else {
                writeln!(output, "\n{FAREWELL}")?;
                output.flush()?;
                return Ok(None);
            };

            let message = round.try_guess(&guess);
            if !message.is_empty() {
                writeln!(output, "{message}")?;
            }
            writeln!(output)?;
        }

        let outcome = round.finish();
        let verdict = match outcome.result {
            RoundResult::Won => "You win!",
            RoundResult::Lost => "Game over!",
        };
        writeln!(output, "{verdict}")?;
        writeln!(output, "The secret word was \"{}\"", outcome.word)?;
        output.flush()?;

        info!(result = ?outcome.result, lives_left = outcome.lives_left, "round finished");
        Ok(Some(outcome))
    }
}

fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "{GUESS_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let guess = line.trim_end_matches(['\n', '\r']).to_string();
    debug!(guess = %guess, "guess read");
    Ok(Some(guess))
}
