use crate::core::{GameState, Level, TileType};

/// Plain-text summary of the layout: size, start, goal and every obstacle.
pub fn describe_level(level: &Level) -> String {
    let mut desc = format!(
        "Grid is {}x{}. Player starts at {}. Goal is at {}.\n",
        level.width(),
        level.height(),
        level.player_start(),
        level.goal()
    );
    desc.push_str("Real world layout:\n");
    for (pos, tile) in level.tiles().iter() {
        match tile {
            TileType::Wall => desc.push_str(&format!("Wall at ({},{}). ", pos.x, pos.y)),
            TileType::Pit => desc.push_str(&format!("Pit at ({},{}). ", pos.x, pos.y)),
            _ => {}
        }
    }
    desc
}

pub fn describe_progress(state: &GameState) -> String {
    let moves = state.history_names().join(", ");
    let moves = if moves.is_empty() { "None".to_string() } else { moves };
    format!("Player is currently at {}. Moves made: {}.", state.player, moves)
}
