use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Won,
    Lost,
}

/// How a finished round went, with the answer revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub word: String,
    pub lives_left: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// Every round that was started ran to completion.
    Completed,
    /// Input ran out in the middle of a round.
    InputExhausted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub rounds: Vec<RoundOutcome>,
    pub end: SessionEnd,
}

impl SessionReport {
    pub fn wins(&self) -> usize {
        self.rounds.iter().filter(|round| round.result == RoundResult::Won).count()
    }

    pub fn losses(&self) -> usize {
        self.rounds.len() - self.wins()
    }
}
