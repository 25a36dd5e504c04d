use crate::core::{Difficulty, GridSize, Level, LevelError, Position, TileType};

const START: Position = Position { x: 1, y: 3 };

fn empty_grid(size: GridSize) -> Vec<Vec<TileType>> {
    vec![vec![TileType::Empty; size.width as usize]; size.height as usize]
}

fn first_steps() -> Result<Level, LevelError> {
    let size = GridSize::new(10, 7);
    Level::new(1, "First Steps", Difficulty::Easy, size, START, Position::new(8, 3), empty_grid(size))
}

fn the_wall() -> Result<Level, LevelError> {
    let size = GridSize::new(10, 7);
    let mut tiles = empty_grid(size);
    for row in tiles.iter_mut() {
        row[5] = TileType::Wall;
    }
    tiles[3][5] = TileType::Empty;
    Level::new(2, "The Wall", Difficulty::Easy, size, START, Position::new(8, 3), tiles)
}

fn deceptive_depth() -> Result<Level, LevelError> {
    let size = GridSize::new(10, 7);
    let mut tiles = empty_grid(size);
    for row in tiles.iter_mut() {
        row[5] = TileType::Pit;
    }
    tiles[3][5] = TileType::Empty;
    Level::new(3, "Deceptive Depth", Difficulty::Medium, size, START, Position::new(8, 3), tiles)
}

fn timed_gates() -> Result<Level, LevelError> {
    let size = GridSize::new(12, 7);
    let mut tiles = empty_grid(size);
    for y in (1..6).filter(|&y| y != 3) {
        tiles[y][4] = TileType::Wall;
        tiles[y][7] = TileType::Wall;
    }
    Level::new(4, "Timed Gates", Difficulty::Hard, size, START, Position::new(10, 3), tiles)
}

pub fn builtin_levels() -> Result<Vec<Level>, LevelError> {
    Ok(vec![first_steps()?, the_wall()?, deceptive_depth()?, timed_gates()?])
}
