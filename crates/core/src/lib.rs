pub mod error;
pub mod magic_8_ball;
mod random;
pub mod round;
pub mod secret_word;
pub mod session;
pub mod types;

pub use error::{ConfigError, validate_lives};
pub use magic_8_ball::{DEFAULT_ANSWERS, MagicEightBall};
pub use round::{GameRound, count_message};
pub use secret_word::SecretWord;
pub use session::{DEFAULT_LIVES, HangmanSession};
pub use types::*;
