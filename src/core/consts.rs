use crate::core::models::Position;

pub const DEFAULT_LEVEL_ID: u32 = 1;

pub const UP: Position = Position { x: 0, y: -1 };
pub const DOWN: Position = Position { x: 0, y: 1 };
pub const LEFT: Position = Position { x: -1, y: 0 };
pub const RIGHT: Position = Position { x: 1, y: 0 };
