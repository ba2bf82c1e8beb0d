//! **arcpath-core**: core types for shortest paths across a half-annulus.
//!
//! This crate provides the index and position primitives, the grid
//! parameters with their validation, the [`PolarGrid`] generator, and the
//! [`Context`] cancellation token shared by the search crates.

pub mod context;
pub mod geom;
pub mod params;
pub mod polar;

pub use context::Context;
pub use geom::{Index, IndexRange, Vec2};
pub use params::{DEFAULT_H, DEFAULT_INNER, DEFAULT_K, DEFAULT_OUTER, MAX_NODES, ParamError, Params};
pub use polar::{Node, PolarGrid};
