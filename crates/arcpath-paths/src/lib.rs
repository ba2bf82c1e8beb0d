//! Shortest paths across half-annulus polar grids.
//!
//! This crate searches the implicit 8-connected graph of an
//! [`arcpath_core::PolarGrid`], where every edge costs the straight-line
//! distance between its endpoints:
//!
//! - **Dijkstra** single-pair search ([`dijkstra`], [`shortest_path`])
//! - **A\*** with a straight-line estimate ([`astar`])
//! - **Path reconstruction** from the predecessor table ([`reconstruct`])
//!
//! Each search allocates its own [`DistanceTable`] and [`PredecessorTable`]
//! and hands them back inside a [`Search`]; nothing is cached between calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod dijkstra;
mod distance;
mod frontier;
mod neighbors;
mod polar;
mod reconstruct;
mod tables;
mod traits;

pub use astar::{astar, astar_with};
pub use dijkstra::{dijkstra, dijkstra_with};
pub use distance::euclidean;
pub use neighbors::{OFFSETS, neighbors, push_in_range};
pub use polar::shortest_path;
pub use reconstruct::{ReconstructError, reconstruct};
pub use tables::{DistanceTable, Outcome, PathNode, PredecessorTable, Search};
pub use traits::{AstarPather, Pather, WeightedPather};
