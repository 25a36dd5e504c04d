use crate::core::level::Level;
use crate::core::models::Position;

/// Reflects `pos` about the vertical centre line of a grid `width` cells wide.
/// Applying it twice gives back `pos`. Defined for every `i32` position, the
/// arithmetic wraps so extreme out of bounds values still round-trip.
pub fn mirror_of(pos: Position, width: i32) -> Position {
    Position {
        x: width.wrapping_sub(1).wrapping_sub(pos.x),
        y: pos.y,
    }
}

pub fn mirror_goal(level: &Level) -> Position {
    mirror_of(level.goal(), level.width())
}
