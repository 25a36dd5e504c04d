use serde::{Deserialize, Serialize};
use crate::core::{check_win, Direction, GameState, Level};
use crate::state_graph::StateGraph;

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    level: u32,
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    x: i32,
    y: i32,
    is_goal: bool,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
    direction: Direction,
}

pub fn get_json_data(graph: &StateGraph, level: &Level) -> Result<String, serde_json::Error> {
    let mut nodes: Vec<JsonNode> = graph
        .nodes
        .iter()
        .map(|(&position, &id)| {
            let state = GameState {
                player: position,
                complete: false,
                history: Vec::new(),
            };
            JsonNode {
                id,
                x: position.x,
                y: position.y,
                is_goal: check_win(level, &state),
            }
        })
        .collect();
    nodes.sort_by_key(|node| node.id);

    let mut links: Vec<JsonEdge> = graph
        .edges
        .iter()
        .map(|edge| JsonEdge {
            source: edge.from,
            target: edge.to,
            direction: edge.direction,
        })
        .collect();
    links.sort_by_key(|link| (link.source, link.target));

    let json_data = JsonData {
        level: level.id(),
        nodes,
        links,
    };
    serde_json::to_string_pretty(&json_data)
}
