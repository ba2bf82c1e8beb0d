//! **arcpath-app**: the boundary between the path engine and whatever
//! presents it.
//!
//! - [`compute_path`] validates parameters, builds the grid, searches and
//!   returns a [`PathResult`] by value.
//! - [`Planner`] runs computations off the caller's thread, keeping only the
//!   most recent request's result.
//! - [`Reveal`] iterates over growing prefixes of a finished path.

pub mod compute;
pub mod planner;
pub mod reveal;

pub use compute::{
    Algorithm, ComputeError, PathPoint, PathResult, compute_path, compute_path_in,
    compute_path_with,
};
pub use planner::{Planned, Planner};
pub use reveal::Reveal;
