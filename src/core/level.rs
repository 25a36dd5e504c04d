use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::GridSize;
use crate::core::models::{Difficulty, Position, TileType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level id must be a positive integer")]
    ZeroId,
    #[error("Grid size {width}x{height} must be positive in both dimensions")]
    InvalidSize { width: i32, height: i32 },
    #[error("Expected {expected} rows of tiles but found {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("Row {row} has {actual} tiles, expected {expected}")]
    RowWidth { row: usize, expected: usize, actual: usize },
    #[error("Tile at {position} is a render overlay ({tile:?}) and cannot be part of a layout")]
    OverlayInLayout { position: Position, tile: TileType },
    #[error("The {what} position {position} is outside the grid")]
    OutOfBounds { what: &'static str, position: Position },
    #[error("The {what} position {position} sits on a {tile:?} tile")]
    BlockedPosition { what: &'static str, position: Position, tile: TileType },
    #[error("Level {0} appears more than once in the catalog")]
    DuplicateId(u32),
    #[error("No level with id {0}")]
    NotFound(u32),
    #[error("Could not read level data: {0}")]
    Parse(String),
    #[error("Could not open level file {0}")]
    Io(String),
}

/// Serialized form of a level. Converting into a [`Level`] runs every validation rule.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    pub id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    pub grid_size: GridSize,
    pub player_start: Position,
    pub goal: Position,
    pub tiles: Vec<Vec<TileType>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "LevelDefinition", into = "LevelDefinition")]
pub struct Level {
    id: u32,
    name: String,
    difficulty: Difficulty,
    player_start: Position,
    goal: Position,
    tiles: BoundedGrid<TileType>,
}

impl Level {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        difficulty: Difficulty,
        size: GridSize,
        player_start: Position,
        goal: Position,
        rows: Vec<Vec<TileType>>,
    ) -> Result<Level, LevelError> {
        if id == 0 {
            return Err(LevelError::ZeroId);
        }
        if size.width <= 0 || size.height <= 0 {
            return Err(LevelError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        if rows.len() != size.height as usize {
            return Err(LevelError::RowCount {
                expected: size.height as usize,
                actual: rows.len(),
            });
        }
        if let Some((row, tiles)) = rows
            .iter()
            .enumerate()
            .find(|(_, tiles)| tiles.len() != size.width as usize)
        {
            return Err(LevelError::RowWidth {
                row,
                expected: size.width as usize,
                actual: tiles.len(),
            });
        }

        let tiles = BoundedGrid::from_rows(size, rows).ok_or(LevelError::InvalidSize {
            width: size.width,
            height: size.height,
        })?;
        if let Some((position, &tile)) = tiles.iter().find(|(_, tile)| tile.is_overlay()) {
            return Err(LevelError::OverlayInLayout { position, tile });
        }

        for (what, position) in [("start", player_start), ("goal", goal)] {
            let Some(&tile) = tiles.get(&position) else {
                return Err(LevelError::OutOfBounds { what, position });
            };
            if tile == TileType::Wall || tile == TileType::Pit {
                return Err(LevelError::BlockedPosition { what, position, tile });
            }
        }

        Ok(Level {
            id,
            name: name.into(),
            difficulty,
            player_start,
            goal,
            tiles,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn size(&self) -> GridSize {
        self.tiles.size()
    }

    pub fn width(&self) -> i32 {
        self.tiles.size().width
    }

    pub fn height(&self) -> i32 {
        self.tiles.size().height
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn tiles(&self) -> &BoundedGrid<TileType> {
        &self.tiles
    }

    /// Canonical tile at `pos`, `None` when out of bounds.
    pub fn tile(&self, pos: &Position) -> Option<TileType> {
        self.tiles.get(pos).copied()
    }
}

impl TryFrom<LevelDefinition> for Level {
    type Error = LevelError;

    fn try_from(def: LevelDefinition) -> Result<Self, Self::Error> {
        Level::new(
            def.id,
            def.name,
            def.difficulty,
            def.grid_size,
            def.player_start,
            def.goal,
            def.tiles,
        )
    }
}

impl From<Level> for LevelDefinition {
    fn from(level: Level) -> Self {
        let tiles = level.tiles.rows().map(|row| row.to_vec()).collect();
        LevelDefinition {
            id: level.id,
            name: level.name,
            difficulty: level.difficulty,
            grid_size: level.tiles.size(),
            player_start: level.player_start,
            goal: level.goal,
            tiles,
        }
    }
}
