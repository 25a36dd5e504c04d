use serde::{Deserialize, Serialize};
use crate::core::models::Position;

/// A grid extent with one corner fixed at 0,0
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub const fn new(width: i32, height: i32) -> GridSize {
        GridSize { width, height }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Position> + use<> {
        let GridSize { width, height } = *self;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}
