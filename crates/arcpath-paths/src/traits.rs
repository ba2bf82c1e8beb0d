use arcpath_core::{Index, IndexRange};

/// Minimal pathfinding interface: provides the index space and neighbor
/// enumeration.
pub trait Pather {
    /// The index rectangle the search tables are sized for.
    fn range(&self) -> IndexRange;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Index, buf: &mut Vec<Index>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Index, to: Index) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible) and must satisfy
    /// the triangle inequality with [`cost`](WeightedPather::cost)
    /// (consistent).
    fn estimate(&self, from: Index, to: Index) -> f64;
}
