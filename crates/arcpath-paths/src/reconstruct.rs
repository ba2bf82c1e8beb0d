use std::fmt;

use arcpath_core::Index;

use crate::tables::PredecessorTable;

/// Internal-consistency failures found while walking a predecessor table.
///
/// None of these occur for tables produced by this crate's searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructError {
    /// The walk exceeded the number of nodes without reaching the source.
    Cycle { at: Index },
    /// The chain ended at a node other than the source.
    Detached { at: Index },
    /// An endpoint or predecessor lies outside the table.
    OutOfRange { at: Index },
}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { at } => write!(f, "predecessor cycle detected at node {at}"),
            Self::Detached { at } => {
                write!(f, "predecessor chain ends at node {at} before reaching the source")
            }
            Self::OutOfRange { at } => write!(f, "node {at} is outside the grid"),
        }
    }
}

impl std::error::Error for ReconstructError {}

/// Walk predecessor links from `destination` back to `source`.
///
/// Returns the path source-first, both endpoints included, or an empty path
/// if `destination` has no predecessor (unreachable).
pub fn reconstruct(
    preds: &PredecessorTable,
    source: Index,
    destination: Index,
) -> Result<Vec<Index>, ReconstructError> {
    let rng = preds.range();
    for p in [source, destination] {
        if !rng.contains(p) {
            return Err(ReconstructError::OutOfRange { at: p });
        }
    }
    if destination == source {
        return Ok(vec![source]);
    }
    if preds.get(destination).is_none() {
        return Ok(Vec::new());
    }

    let mut path = vec![destination];
    let mut cur = destination;
    while cur != source {
        if path.len() > rng.len() {
            return Err(ReconstructError::Cycle { at: cur });
        }
        let Some(prev) = preds.get(cur) else {
            return Err(ReconstructError::Detached { at: cur });
        };
        if !rng.contains(prev) {
            return Err(ReconstructError::OutOfRange { at: prev });
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    Ok(path)
}
