pub mod console_interface;
pub mod core;
pub mod hint;
pub mod levels;
pub mod models;
pub mod session;
pub mod state_graph;

#[cfg(test)]
mod test;
