mod console_interface;
mod graph;
mod json_export;
mod models;
mod populate;
mod solve;

pub use console_interface::get_graph_info;
pub use json_export::get_json_data;
pub use models::{Edge, PopulateResult, StateGraph};
pub use populate::{populate_all, populate_node, populate_step, winning_nodes};
pub use solve::{convert_to_petgraph, solve, PetStateGraph};
