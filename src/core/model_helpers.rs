use crate::core::level::Level;
use crate::core::mirror::{mirror_goal, mirror_of};
use crate::core::models::{Direction, GameState, Position, UserAction};

impl GameState {
    pub fn new(level: &Level) -> GameState {
        GameState {
            player: level.player_start(),
            complete: false,
            history: Vec::new(),
        }
    }

    pub fn restart(&mut self, level: &Level) {
        *self = GameState::new(level);
    }

    pub fn mirror_player(&self, level: &Level) -> Position {
        mirror_of(self.player, level.width())
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn history_names(&self) -> Vec<&'static str> {
        self.history.iter().map(|d| d.name()).collect()
    }
}

/// True when both characters stand on their goals and the win has not been recorded yet.
pub fn check_win(level: &Level, game: &GameState) -> bool {
    let goal_reached = game.player == level.goal();
    let mirror_goal_reached = game.mirror_player(level) == mirror_goal(level);
    goal_reached && mirror_goal_reached && !game.complete
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction the mirror character travels: horizontal sense flipped, vertical kept.
    pub fn mirrored(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => *other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl UserAction {
    pub fn all_moves() -> Vec<UserAction> {
        Direction::ALL.iter().map(|&d| UserAction::Move(d)).collect()
    }
}
