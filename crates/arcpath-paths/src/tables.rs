use arcpath_core::{Index, IndexRange};

use crate::reconstruct::{ReconstructError, reconstruct};

/// A position with the distance it was finalized at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Index,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// Distance / predecessor tables
// ---------------------------------------------------------------------------

/// Best known distance from the source for every index pair.
///
/// Starts at `f64::INFINITY` everywhere. One table per search; never reused.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    rng: IndexRange,
    dist: Vec<f64>,
}

impl DistanceTable {
    /// A table of `rng.len()` infinite distances.
    pub fn new(rng: IndexRange) -> Self {
        Self {
            rng,
            dist: vec![f64::INFINITY; rng.len()],
        }
    }

    /// The index rectangle the table covers.
    #[inline]
    pub fn range(&self) -> IndexRange {
        self.rng
    }

    /// Distance of `p`; infinite if unreached or out of range.
    #[inline]
    pub fn get(&self, p: Index) -> f64 {
        match self.rng.offset(p) {
            Some(off) => self.dist[off],
            None => f64::INFINITY,
        }
    }

    /// Whether `p` has a finite distance.
    #[inline]
    pub fn is_reachable(&self, p: Index) -> bool {
        self.get(p).is_finite()
    }

    #[inline]
    pub(crate) fn at_offset(&self, off: usize) -> f64 {
        self.dist[off]
    }

    #[inline]
    pub(crate) fn set_offset(&mut self, off: usize, d: f64) {
        self.dist[off] = d;
    }
}

/// Predecessor of every index pair on its current best path.
#[derive(Debug, Clone)]
pub struct PredecessorTable {
    rng: IndexRange,
    prev: Vec<Option<Index>>,
}

impl PredecessorTable {
    /// A table with no predecessors.
    pub fn new(rng: IndexRange) -> Self {
        Self {
            rng,
            prev: vec![None; rng.len()],
        }
    }

    /// The index rectangle the table covers.
    #[inline]
    pub fn range(&self) -> IndexRange {
        self.rng
    }

    /// Predecessor of `p`, or `None` if it has none or is out of range.
    #[inline]
    pub fn get(&self, p: Index) -> Option<Index> {
        self.rng.offset(p).and_then(|off| self.prev[off])
    }

    /// Record `from` as the predecessor of `p`. Ignored if `p` is out of range.
    pub fn set(&mut self, p: Index, from: Index) {
        if let Some(off) = self.rng.offset(p) {
            self.prev[off] = Some(from);
        }
    }

    #[inline]
    pub(crate) fn set_offset(&mut self, off: usize, from: Index) {
        self.prev[off] = Some(from);
    }
}

// ---------------------------------------------------------------------------
// Search result
// ---------------------------------------------------------------------------

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The destination was finalized at this distance.
    Reached(f64),
    /// The frontier emptied without finalizing the destination.
    Unreachable,
}

/// Everything one search invocation produced. Owns its tables.
#[derive(Debug, Clone)]
pub struct Search {
    pub source: Index,
    pub destination: Index,
    pub distances: DistanceTable,
    pub predecessors: PredecessorTable,
    /// Finalized nodes in finalization order, with their final distance.
    pub settled: Vec<PathNode>,
    pub outcome: Outcome,
}

impl Search {
    /// Distance to the destination, or `None` if unreachable.
    pub fn distance(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Reached(d) => Some(d),
            Outcome::Unreachable => None,
        }
    }

    /// Walk the predecessor table from destination back to source.
    ///
    /// Empty when the destination is unreachable.
    pub fn path(&self) -> Result<Vec<Index>, ReconstructError> {
        if self.outcome == Outcome::Unreachable {
            return Ok(Vec::new());
        }
        reconstruct(&self.predecessors, self.source, self.destination)
    }
}
