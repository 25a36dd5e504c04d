use std::collections::{HashMap, HashSet};
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use crate::core::{Direction, Level, Position};
use crate::state_graph::models::StateGraph;
use crate::state_graph::populate::{populate_all, winning_nodes};

pub struct PetStateGraph {
    pub graph: DiGraph<Position, Direction>,
    pub node_map: HashMap<usize, NodeIndex>,
}

pub fn convert_to_petgraph(graph: &StateGraph) -> PetStateGraph {
    let mut petgraph = DiGraph::new();

    let node_map: HashMap<usize, NodeIndex> = graph
        .nodes
        .iter()
        .map(|(&position, &id)| (id, petgraph.add_node(position)))
        .collect();

    for edge in &graph.edges {
        if let (Some(&from_index), Some(&to_index)) =
            (node_map.get(&edge.from), node_map.get(&edge.to))
        {
            petgraph.add_edge(from_index, to_index, edge.direction);
        }
    }

    PetStateGraph {
        graph: petgraph,
        node_map,
    }
}

/// Shortest sequence of moves from `from` to a winning position, `None` if no
/// winning position is reachable. Already standing on the goal gives an empty path.
pub fn solve(level: &Level, from: Position) -> Option<Vec<Direction>> {
    let graph = populate_all(level, from);
    let start_id = graph.get_id(&from)?;
    let winners = winning_nodes(&graph, level);
    if winners.is_empty() {
        return None;
    }

    let pet = convert_to_petgraph(&graph);
    let start = *pet.node_map.get(&start_id)?;
    let goals: HashSet<NodeIndex> = winners
        .iter()
        .filter_map(|id| pet.node_map.get(id).copied())
        .collect();

    let (_cost, path) = astar(&pet.graph, start, |n| goals.contains(&n), |_| 1, |_| 0)?;

    path.windows(2)
        .map(|pair| {
            let edge = pet.graph.find_edge(pair[0], pair[1])?;
            pet.graph.edge_weight(edge).copied()
        })
        .collect()
}
