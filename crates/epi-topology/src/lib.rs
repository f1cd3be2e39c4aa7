//! `epi-topology`: city connectivity graph, generator, and distances.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `CityGraph` (undirected CSR), `CityGraphBuilder`          |
//! | [`generator`] | `TopologyGenerator` trait, `HubRepulsion` fractal model   |
//! | [`distance`]  | `DistanceTable`: all-pairs hop counts by BFS             |
//! | [`error`]     | `TopologyError`, `TopologyResult<T>`                      |
//!
//! Everything here is built once per run and read-only afterwards: the
//! simulation sizes cities from [`CityGraph::degree`] and scales travel by
//! [`DistanceTable::distance`].

pub mod distance;
pub mod error;
pub mod generator;
pub mod graph;

#[cfg(test)]
mod tests;

pub use distance::DistanceTable;
pub use error::{TopologyError, TopologyResult};
pub use generator::{HubRepulsion, TopologyGenerator};
pub use graph::{CityGraph, CityGraphBuilder};
