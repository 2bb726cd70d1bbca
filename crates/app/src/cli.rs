//! Command-line schema for `parlor`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// A collection of small command-line party games
#[derive(Parser, Debug)]
#[command(name = "parlor", long_about = None)]
pub struct Cli {
    /// Settings file to read defaults from
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for choosing secret words and answers (random when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play hangman
    Hangman(HangmanArgs),

    /// Ask the magic 8-ball a question
    #[command(name = "magic-8-ball")]
    MagicEightBall(MagicEightBallArgs),
}

#[derive(Args, Debug, Default)]
pub struct HangmanArgs {
    /// Number of lives to start with [default: 8]
    #[arg(short, long, allow_negative_numbers = true)]
    pub lives: Option<i64>,

    /// Start a new game automatically after each one ends
    #[arg(short, long)]
    pub endless: bool,

    /// Whitespace-separated word list to use instead of the bundled one
    #[arg(short, long)]
    pub words: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct MagicEightBallArgs {
    /// Keep asking for questions until input ends
    #[arg(short, long)]
    pub endless: bool,
}
