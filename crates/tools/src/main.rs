//! Plays many seeded hangman rounds with a random guesser and checks the
//! round invariants after every guess.

use anyhow::{Result, bail};
use clap::Parser;
use parlor::logging::init_logging;
use parlor::words::{BUNDLED_WORDS, filter_candidates};
use parlor_core::round::{INVALID_GUESS_MESSAGE, REPEATED_GUESS_MESSAGE};
use parlor_core::{GameRound, RoundResult};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;
use tracing::info;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const JUNK: [&str; 5] = ["", "4", "?!", "b33f", "a b"];

#[derive(Parser)]
#[command(about = "Stress hangman rounds with random guesses", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    rounds: u32,
    #[arg(short, long, default_value_t = 8)]
    lives: i64,
}

#[derive(Serialize, Default)]
struct SimulationReport {
    seed: u64,
    rounds: u32,
    wins: u32,
    losses: u32,
    guesses: u64,
    free_rejections: u64,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn next_guess(rng: &mut ChaCha8Rng, words: &[String], history: &[String]) -> String {
    match rng.next_u64() % 20 {
        0 if !history.is_empty() => choose(rng, history),
        1 => choose(rng, &JUNK).to_string(),
        2 | 3 => choose(rng, words),
        _ => char::from(choose(rng, ALPHABET)).to_string(),
    }
}

/// Plays one round, returning the guesses it took and how many were rejected for free.
fn play_round(
    rng: &mut ChaCha8Rng,
    words: &[String],
    lives: i64,
) -> Result<(RoundResult, u64, u64)> {
    let word = choose(rng, words);
    let mut round = GameRound::new(&word, lives)?;
    let mut history: Vec<String> = Vec::new();
    let (mut guesses, mut rejected) = (0u64, 0u64);

    while !round.is_over() {
        let guess = next_guess(rng, words, &history);
        let before = round.lives();
        let message = round.try_guess(&guess);
        guesses += 1;

        if round.lives() > before {
            bail!("lives went from {before} to {} after {guess:?} on {word:?}", round.lives());
        }
        if message == INVALID_GUESS_MESSAGE || message == REPEATED_GUESS_MESSAGE {
            if round.lives() != before {
                bail!("rejected guess {guess:?} cost a life on {word:?}");
            }
            rejected += 1;
        } else if history.contains(&guess.to_lowercase()) && !message.is_empty() {
            bail!("repeated guess {guess:?} was accepted on {word:?}");
        }
        history.push(guess.to_lowercase());

        // A guesser limited to 26 letters plus junk cannot need this many tries.
        if guesses > 10_000 {
            bail!("round on {word:?} did not terminate");
        }
    }

    let outcome = round.finish();
    if outcome.word != word || round.secret_word().render() != word {
        bail!("finished round did not reveal {word:?}");
    }
    if (outcome.result == RoundResult::Won) != (outcome.lives_left > 0) {
        bail!("outcome {:?} disagrees with {} lives left", outcome.result, outcome.lives_left);
    }
    Ok((outcome.result, guesses, rejected))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let words = filter_candidates(BUNDLED_WORDS);
    if words.is_empty() {
        bail!("the bundled word list has no playable words");
    }
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut report = SimulationReport { seed: args.seed, ..SimulationReport::default() };

    info!(seed = args.seed, rounds = args.rounds, "starting simulation");
    for _ in 0..args.rounds {
        let (result, guesses, rejected) = play_round(&mut rng, &words, args.lives)?;
        report.rounds += 1;
        report.guesses += guesses;
        report.free_rejections += rejected;
        match result {
            RoundResult::Won => report.wins += 1,
            RoundResult::Lost => report.losses += 1,
        }
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
