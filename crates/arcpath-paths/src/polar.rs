//! [`Pather`] implementations for [`PolarGrid`].

use arcpath_core::{Index, IndexRange, PolarGrid};

use crate::dijkstra::dijkstra;
use crate::distance::euclidean;
use crate::neighbors::push_in_range;
use crate::tables::Search;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for PolarGrid {
    fn range(&self) -> IndexRange {
        PolarGrid::range(self)
    }

    fn neighbors(&self, p: Index, buf: &mut Vec<Index>) {
        push_in_range(p, PolarGrid::range(self), buf);
    }
}

impl WeightedPather for PolarGrid {
    fn cost(&self, from: Index, to: Index) -> f64 {
        match (self.at(from), self.at(to)) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => f64::INFINITY,
        }
    }
}

impl AstarPather for PolarGrid {
    // Straight-line distance never exceeds any chain of straight segments.
    fn estimate(&self, from: Index, to: Index) -> f64 {
        match (self.at(from), self.at(to)) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => 0.0,
        }
    }
}

/// Dijkstra from the grid's source (outer ring, first column) to its
/// destination (outer ring, last column).
pub fn shortest_path(grid: &PolarGrid) -> Search {
    dijkstra(grid, grid.source(), grid.destination())
}
