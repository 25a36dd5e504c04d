use crate::core::{Level, Position};
use crate::hint::HintError;
use crate::state_graph::solve;

#[derive(Clone, Debug)]
pub struct HintRequest {
    pub level_description: String,
    pub player_progress: String,
    pub level: Level,
    pub player: Position,
}

/// Anything that can turn a stuck player's situation into one short hint.
pub trait HintProvider: Send + Sync {
    fn hint(&self, request: &HintRequest) -> Result<String, HintError>;
}

/// Answers from a shortest solution of the level. It only ever reveals the next
/// move and how far away the goal is.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverHintProvider;

impl HintProvider for SolverHintProvider {
    fn hint(&self, request: &HintRequest) -> Result<String, HintError> {
        let path = solve(&request.level, request.player).ok_or(HintError::Unsolvable)?;
        let Some(next) = path.first() else {
            return Err(HintError::AlreadyAtGoal);
        };
        let mirror_next = next.mirrored();
        Ok(format!(
            "Try moving {}: your mirror self will step {}. The goal is {} moves away.",
            next.name(),
            mirror_next.name(),
            path.len()
        ))
    }
}
