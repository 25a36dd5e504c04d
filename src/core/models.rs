use std::fmt;
use std::ops::Add;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `Player` and `Goal` only ever appear as render overlays. A level layout holds
/// `Empty`, `Wall` and `Pit`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TileType {
    Empty,
    Wall,
    Player,
    Goal,
    Pit,
}

impl TileType {
    pub fn is_overlay(&self) -> bool {
        matches!(self, TileType::Player | TileType::Goal)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum World {
    Real,
    Mirror,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    Restart,
}

/// One play session on a level. The mirror character has no field of its own,
/// it is always derived from `player`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub player: Position,
    pub complete: bool,
    pub history: Vec<Direction>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveRejection {
    /// `real` / `mirror` are true for each world whose destination was not walkable.
    Blocked { real: bool, mirror: bool },
    LevelComplete,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::Blocked { real: true, mirror: true } => {
                f.write_str("Movement blocked in both worlds")
            }
            MoveRejection::Blocked { real: true, .. } => {
                f.write_str("Movement blocked by an obstacle in the real world")
            }
            MoveRejection::Blocked { .. } => {
                f.write_str("Movement blocked by an obstacle in the mirror world")
            }
            MoveRejection::LevelComplete => f.write_str("Level already complete"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameUpdate {
    NextState(GameState),
    Rejected(MoveRejection),
}
