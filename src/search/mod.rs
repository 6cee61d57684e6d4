pub mod dijkstra;

mod engine;
mod frontier;
mod route;

pub use engine::{BranchAndBound, Route, SearchStats, TerminationPolicy};
pub use frontier::Strategy;
