pub mod errors;
pub mod geo;
pub mod graph;
pub mod search;

mod collections;
