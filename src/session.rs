use log::{debug, info};
use crate::core::{
    check_win, step, Direction, GameState, GameUpdate, Level, MoveRejection, Position, UserAction,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionEvent {
    Moved(Direction),
    Rejected(MoveRejection),
    Completed { moves: usize },
    Restarted,
}

/// Owns the single `GameState` for a level. Every input goes through `dispatch`,
/// which finishes evaluating it before the next one can be handed in.
pub struct Session<'a> {
    level: &'a Level,
    state: GameState,
}

impl<'a> Session<'a> {
    pub fn new(level: &'a Level) -> Self {
        info!("Starting level {} \"{}\"", level.id(), level.name());
        Session {
            level,
            state: GameState::new(level),
        }
    }

    pub fn dispatch(&mut self, action: UserAction) -> SessionEvent {
        match action {
            UserAction::Move(direction) => self.apply_move(direction),
            UserAction::Restart => {
                self.state.restart(self.level);
                info!("Restarted level {}", self.level.id());
                SessionEvent::Restarted
            }
        }
    }

    fn apply_move(&mut self, direction: Direction) -> SessionEvent {
        match step(self.level, &self.state, direction) {
            GameUpdate::NextState(next) => {
                self.state = next;
                debug!("Moved {} to {}", direction.name(), self.state.player);
                if check_win(self.level, &self.state) {
                    self.state.complete = true;
                    let moves = self.state.move_count();
                    info!("Solved \"{}\" in {} moves", self.level.name(), moves);
                    return SessionEvent::Completed { moves };
                }
                SessionEvent::Moved(direction)
            }
            GameUpdate::Rejected(reason) => {
                debug!("Rejected {} at {}: {}", direction.name(), self.state.player, reason);
                SessionEvent::Rejected(reason)
            }
        }
    }

    pub fn level(&self) -> &'a Level {
        self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> Position {
        self.state.player
    }

    pub fn mirror_player(&self) -> Position {
        self.state.mirror_player(self.level)
    }

    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }
}
