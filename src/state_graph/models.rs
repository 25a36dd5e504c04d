use std::collections::HashSet;
use crate::core::{Direction, Position};

/// Every real-world position reachable by lockstep moves. The mirror side is
/// derived from the position, so the position alone identifies a state.
#[derive(Clone, Debug)]
pub struct StateGraph {
    // map from player position to node id
    pub nodes: bimap::BiMap<Position, usize>,
    pub edges: HashSet<Edge>,
    pub unvisited: HashSet<usize>,
    pub next_id: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(PartialEq, Eq, Debug)]
pub enum PopulateResult {
    AllVisited,
    Populated,
}
