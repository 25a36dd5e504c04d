mod describe;
mod provider;
mod worker;

use thiserror::Error;

pub use describe::{describe_level, describe_progress};
pub use provider::{HintProvider, HintRequest, SolverHintProvider};
pub use worker::HintWorker;

use crate::core::{GameState, Level};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("No sequence of moves reaches both goals from here")]
    Unsolvable,
    #[error("Both characters are already on their goals")]
    AlreadyAtGoal,
    #[error("Hint provider failed: {0}")]
    Provider(String),
    #[error("Hint worker stopped before answering")]
    WorkerGone,
}

impl HintRequest {
    pub fn new(level: &Level, state: &GameState) -> Self {
        HintRequest {
            level_description: describe_level(level),
            player_progress: describe_progress(state),
            level: level.clone(),
            player: state.player,
        }
    }
}
