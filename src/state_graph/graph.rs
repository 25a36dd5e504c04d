use std::collections::HashSet;
use crate::core::Position;
use crate::state_graph::models::{Edge, StateGraph};

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            unvisited: HashSet::new(),
            next_id: 0,
        }
    }

    pub fn upsert_state(&mut self, state: Position) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(state, id);
        self.unvisited.insert(id);
        id
    }

    pub fn get_id(&self, state: &Position) -> Option<usize> {
        self.nodes.get_by_left(state).copied()
    }

    pub fn get_state(&self, id: usize) -> Option<&Position> {
        self.nodes.get_by_right(&id)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }

    pub fn mark_visited(&mut self, node_id: usize) {
        self.unvisited.remove(&node_id);
    }

    pub fn get_unvisited_node(&self) -> Option<usize> {
        self.unvisited.iter().min().copied()
    }

    pub fn is_fully_populated(&self) -> bool {
        self.unvisited.is_empty()
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        StateGraph::new()
    }
}
