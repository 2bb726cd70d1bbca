use thiserror::Error;

/// Settings that make it impossible to start a game.
///
/// Bad guesses are not errors; they come back from [`crate::GameRound::try_guess`]
/// as ordinary messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot start with less than 1 life (got {0})")]
    InvalidLives(i64),
    #[error("cannot start with {0} lives, the maximum is 4294967295")]
    LivesOutOfRange(i64),
    #[error("no candidate words to choose a secret word from")]
    NoCandidateWords,
    #[error("the magic 8-ball needs at least one answer")]
    NoAnswers,
}

/// Checks a starting life count and narrows it to the stored width.
pub fn validate_lives(lives: i64) -> Result<u32, ConfigError> {
    if lives < 1 {
        return Err(ConfigError::InvalidLives(lives));
    }
    u32::try_from(lives).map_err(|_| ConfigError::LivesOutOfRange(lives))
}
