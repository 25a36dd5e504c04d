use crate::state_graph::StateGraph;

pub fn get_graph_info(graph: &StateGraph) -> String {
    format!(
        "Graph has {} reachable positions, {} moves between them, {} unexplored.",
        graph.nodes.len(),
        graph.edges.len(),
        graph.unvisited.len()
    )
}
