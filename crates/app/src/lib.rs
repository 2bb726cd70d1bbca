pub mod cli;
pub mod logging;
pub mod seed;
pub mod settings;
pub mod words;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use parlor_core::{HangmanSession, MagicEightBall, SessionReport, validate_lives};
use tracing::info;

use crate::cli::{Cli, Command, HangmanArgs, MagicEightBallArgs};
use crate::seed::SeedChoice;
use crate::settings::{HangmanSettings, MagicEightBallSettings, Settings};
use crate::words::load_candidates;

/// Runs the chosen game against the terminal.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.config.as_deref())?;
    let seed = SeedChoice::resolve(cli.seed);
    info!(seed = seed.value(), from_cli = matches!(seed, SeedChoice::Cli(_)), "seed chosen");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command {
        Command::Hangman(args) => {
            let mut session = hangman_session(&args, &settings.hangman, seed.value())?;
            play_hangman(&mut session, stdin.lock(), stdout.lock())?;
        }
        Command::MagicEightBall(args) => {
            let (mut ball, endless) = magic_8_ball(&args, &settings.magic_8_ball, seed.value())?;
            let answered = ball.run(stdin.lock(), stdout.lock(), endless)?;
            info!(answered, "magic 8-ball session ended");
        }
    }

    Ok(())
}

/// Merges flags over settings and validates them before any round starts.
pub fn hangman_session(
    args: &HangmanArgs,
    settings: &HangmanSettings,
    seed: u64,
) -> Result<HangmanSession> {
    let lives = args.lives.unwrap_or(settings.lives);
    validate_lives(lives).context("Invalid hangman settings")?;

    let endless = args.endless || settings.endless;
    let words = load_candidates(args.words.as_deref().or(settings.words.as_deref()))?;

    HangmanSession::new(words, lives, endless, seed).context("Invalid hangman settings")
}

pub fn play_hangman<R: BufRead, W: Write>(
    session: &mut HangmanSession,
    input: R,
    output: W,
) -> Result<SessionReport> {
    let report = session.run(input, output).context("Hangman session failed")?;
    info!(
        wins = report.wins(),
        losses = report.losses(),
        end = ?report.end,
        "hangman session ended"
    );
    Ok(report)
}

pub fn magic_8_ball(
    args: &MagicEightBallArgs,
    settings: &MagicEightBallSettings,
    seed: u64,
) -> Result<(MagicEightBall, bool)> {
    let ball = match &settings.answers {
        Some(answers) => {
            MagicEightBall::new(answers.clone(), seed).context("Invalid magic 8-ball settings")?
        }
        None => MagicEightBall::with_default_answers(seed),
    };
    Ok((ball, args.endless || settings.endless))
}
