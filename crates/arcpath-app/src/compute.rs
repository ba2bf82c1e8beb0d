//! The stateless path boundary: parameters in, [`PathResult`] out.

use std::fmt;

use arcpath_core::{Context, ParamError, Params, PolarGrid};
use arcpath_paths::{ReconstructError, Search, astar_with, dijkstra_with};

/// Which search engine computes the path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    Astar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("dijkstra"),
            Self::Astar => f.write_str("astar"),
        }
    }
}

/// One node of a computed path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub i: usize,
    pub j: usize,
    pub x: f64,
    pub y: f64,
}

/// The result handed to the presentation layer.
///
/// `total_length` is `None` exactly when the destination is unreachable, in
/// which case `nodes` is empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub nodes: Vec<PathPoint>,
    #[cfg_attr(feature = "serde", serde(rename = "totalLength"))]
    pub total_length: Option<f64>,
}

impl PathResult {
    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.total_length.is_some()
    }
}

/// Failures of [`compute_path`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Rejected before any computation.
    InvalidParameters(ParamError),
    /// The search produced an inconsistent predecessor table. A bug, never
    /// caused by input.
    InternalConsistency(ReconstructError),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters(e) => write!(f, "{e}"),
            Self::InternalConsistency(e) => write!(f, "internal consistency error: {e}"),
        }
    }
}

impl std::error::Error for ComputeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParameters(e) => Some(e),
            Self::InternalConsistency(e) => Some(e),
        }
    }
}

impl From<ParamError> for ComputeError {
    fn from(e: ParamError) -> Self {
        Self::InvalidParameters(e)
    }
}

impl From<ReconstructError> for ComputeError {
    fn from(e: ReconstructError) -> Self {
        Self::InternalConsistency(e)
    }
}

/// Shortest path across the half-annulus described by `params`, using
/// Dijkstra.
pub fn compute_path(params: Params) -> Result<PathResult, ComputeError> {
    compute_path_with(params, Algorithm::Dijkstra)
}

/// Shortest path across the half-annulus described by `params`, using the
/// given engine.
pub fn compute_path_with(params: Params, algorithm: Algorithm) -> Result<PathResult, ComputeError> {
    // A fresh context is never cancelled.
    Ok(compute_path_in(params, algorithm, &Context::new())?.unwrap_or_default())
}

/// Like [`compute_path_with`], returning `Ok(None)` if `ctx` is cancelled
/// before the search finishes.
pub fn compute_path_in(
    params: Params,
    algorithm: Algorithm,
    ctx: &Context,
) -> Result<Option<PathResult>, ComputeError> {
    let grid = PolarGrid::generate(params)?;
    let (source, destination) = (grid.source(), grid.destination());
    let search = match algorithm {
        Algorithm::Dijkstra => dijkstra_with(&grid, source, destination, ctx),
        Algorithm::Astar => astar_with(&grid, source, destination, ctx),
    };
    let Some(search) = search else {
        log::debug!("{algorithm} search for {params} cancelled");
        return Ok(None);
    };
    let result = to_result(&grid, &search)?;
    log::debug!(
        "{algorithm} for {params}: {} nodes settled, path of {} nodes, length {:?}",
        search.settled.len(),
        result.nodes.len(),
        result.total_length
    );
    Ok(Some(result))
}

fn to_result(grid: &PolarGrid, search: &Search) -> Result<PathResult, ReconstructError> {
    let Some(total_length) = search.distance() else {
        return Ok(PathResult::default());
    };
    let mut nodes = Vec::new();
    for p in search.path()? {
        let node = grid.at(p).ok_or(ReconstructError::OutOfRange { at: p })?;
        nodes.push(PathPoint {
            i: p.i,
            j: p.j,
            x: node.pos.x,
            y: node.pos.y,
        });
    }
    Ok(PathResult {
        nodes,
        total_length: Some(total_length),
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_uses_camel_case_length() {
        let r = compute_path(Params::new(3, 2, 1.0, 2.0)).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["nodes"].as_array().map(|a| a.len()), Some(3));
        assert!(json["totalLength"].is_number());
        assert_eq!(json["nodes"][0]["i"], 1);
    }

    #[test]
    fn unreachable_length_serializes_as_null() {
        let json = serde_json::to_value(PathResult::default()).unwrap();
        assert!(json["totalLength"].is_null());
    }
}
