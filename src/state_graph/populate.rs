use crate::core::{check_win, step, Direction, GameState, GameUpdate, Level, Position};
use crate::state_graph::models::{Edge, PopulateResult, StateGraph};

fn state_at(player: Position) -> GameState {
    GameState {
        player,
        complete: false,
        history: Vec::new(),
    }
}

pub fn populate_node(graph: &mut StateGraph, level: &Level, from_id: usize) {
    let Some(&from_state) = graph.get_state(from_id) else {
        return;
    };
    let from_state = state_at(from_state);

    for direction in Direction::ALL {
        if let GameUpdate::NextState(new_state) = step(level, &from_state, direction) {
            let to_id = graph.upsert_state(new_state.player);
            graph.add_edge(Edge {
                from: from_id,
                to: to_id,
                direction,
            });
        }
    }

    graph.mark_visited(from_id);
}

pub fn populate_step(graph: &mut StateGraph, level: &Level) -> PopulateResult {
    let Some(node_id) = graph.get_unvisited_node() else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, level, node_id);
    PopulateResult::Populated
}

/// Builds the complete graph of positions reachable from `start`.
pub fn populate_all(level: &Level, start: Position) -> StateGraph {
    let mut graph = StateGraph::new();
    graph.upsert_state(start);
    while populate_step(&mut graph, level) == PopulateResult::Populated {}
    graph
}

pub fn winning_nodes(graph: &StateGraph, level: &Level) -> Vec<usize> {
    let mut winners: Vec<usize> = graph
        .nodes
        .iter()
        .filter(|(position, _)| check_win(level, &state_at(**position)))
        .map(|(_, &id)| id)
        .collect();
    winners.sort_unstable();
    winners
}
