use crate::core::consts::{DOWN, LEFT, RIGHT, UP};
use crate::core::level::Level;
use crate::core::mirror::mirror_of;
use crate::core::models::{Direction, GameState, GameUpdate, MoveRejection, Position, World};
use crate::core::walkability::is_walkable;

/// Moves both characters one step in lockstep. Either both land or neither does,
/// `game` itself is never modified.
pub fn step(level: &Level, game: &GameState, direction: Direction) -> GameUpdate {
    if game.complete {
        return GameUpdate::Rejected(MoveRejection::LevelComplete);
    }

    let new_real = game.player + vec_from_dir(direction);
    let new_mirror = mirror_of(game.player, level.width()) + vec_from_dir(direction.mirrored());

    let real_ok = is_walkable(level, new_real, World::Real);
    let mirror_ok = is_walkable(level, new_mirror, World::Mirror);
    if !(real_ok && mirror_ok) {
        return GameUpdate::Rejected(MoveRejection::Blocked {
            real: !real_ok,
            mirror: !mirror_ok,
        });
    }

    let mut history = game.history.clone();
    history.push(direction);
    GameUpdate::NextState(GameState {
        player: new_real,
        complete: false,
        history,
    })
}

pub fn vec_from_dir(dir: Direction) -> Position {
    match dir {
        Direction::Up => UP,
        Direction::Down => DOWN,
        Direction::Left => LEFT,
        Direction::Right => RIGHT,
    }
}
