use crate::core::level::Level;
use crate::core::mirror::mirror_of;
use crate::core::models::{Position, TileType, World};

/// Whether a character in `world` may stand on `pos`.
///
/// Both worlds read the canonical layout. A pit blocks the real world on its own
/// cell and on its reflection. The mirror world is blocked by walls and by the
/// pit cell itself.
pub fn is_walkable(level: &Level, pos: Position, world: World) -> bool {
    let Some(tile) = level.tile(&pos) else {
        return false;
    };
    let mirror_pos = mirror_of(pos, level.width());
    let Some(mirror_tile) = level.tile(&mirror_pos) else {
        return false;
    };

    match world {
        World::Real => {
            tile != TileType::Wall && tile != TileType::Pit && mirror_tile != TileType::Pit
        }
        // the Pit guard is kept even though mirror pits render as floor
        World::Mirror => tile != TileType::Wall && tile != TileType::Pit,
    }
}

/// What a renderer shows for `pos` in `world`, before player and goal overlays.
pub fn display_tile(level: &Level, pos: Position, world: World) -> TileType {
    let Some(tile) = level.tile(&pos) else {
        return TileType::Wall;
    };
    let reflected = level
        .tile(&mirror_of(pos, level.width()))
        .unwrap_or(TileType::Empty);

    match (world, tile) {
        (World::Real, TileType::Empty) if reflected == TileType::Pit => TileType::Pit,
        (World::Mirror, TileType::Pit) => TileType::Empty,
        (_, tile) => tile,
    }
}
