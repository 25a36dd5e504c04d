mod bounded_grid;
mod bounds;
mod consts;
mod level;
mod mirror;
mod model_helpers;
mod models;
mod update;
mod walkability;

pub use bounded_grid::BoundedGrid;
pub use bounds::GridSize;
pub use consts::*;
pub use level::{Level, LevelDefinition, LevelError};
pub use mirror::{mirror_goal, mirror_of};
pub use model_helpers::check_win;
pub use models::{
    Difficulty, Direction, GameState, GameUpdate, MoveRejection, Position, TileType, UserAction,
    World,
};
pub use update::{step, vec_from_dir};
pub use walkability::{display_tile, is_walkable};
