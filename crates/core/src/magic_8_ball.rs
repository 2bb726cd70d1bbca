use std::io::{self, BufRead, Write};

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::ConfigError;
use crate::random::{choose, seeded};
use crate::session::FAREWELL;

pub const QUESTION_PROMPT: &str = "Your question: ";

pub const DEFAULT_ANSWERS: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

pub struct MagicEightBall {
    answers: Vec<String>,
    rng: ChaCha8Rng,
}

impl MagicEightBall {
    pub fn new(answers: Vec<String>, seed: u64) -> Result<Self, ConfigError> {
        if answers.is_empty() {
            return Err(ConfigError::NoAnswers);
        }
        Ok(Self { answers, rng: seeded(seed) })
    }

    pub fn with_default_answers(seed: u64) -> Self {
        let answers = DEFAULT_ANSWERS.iter().map(|answer| answer.to_string()).collect();
        Self { answers, rng: seeded(seed) }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn shake(&mut self) -> &str {
        choose(&mut self.rng, &self.answers).map_or("", String::as_str)
    }

    /// Answers questions until input runs out, or after the first one unless `endless`.
    ///
    /// The question text is read but never looked at. Returns how many were answered.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        endless: bool,
    ) -> io::Result<usize> {
        let mut answered = 0;

        loop {
            write!(output, "{QUESTION_PROMPT}")?;
            output.flush()?;

            let mut question = String::new();
            if input.read_line(&mut question)? == 0 {
                writeln!(output, "\n{FAREWELL}")?;
                break;
            }

            let answer = self.shake().to_string();
            debug!(answer = %answer, "question answered");
            writeln!(output, "The magic 8-ball says: {answer}")?;
            answered += 1;

            if !endless {
                break;
            }
            writeln!(output)?;
        }

        output.flush()?;
        Ok(answered)
    }
}
