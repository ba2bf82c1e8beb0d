use arcpath_core::{Context, Index};

use crate::frontier::run;
use crate::tables::Search;
use crate::traits::WeightedPather;

/// Single-pair Dijkstra from `source` to `destination`.
///
/// Stops as soon as the destination is finalized. Equal-distance frontier
/// entries pop in ascending `(i, j)` order, so results are reproducible.
pub fn dijkstra<P: WeightedPather>(pather: &P, source: Index, destination: Index) -> Search {
    let (search, _) = run(pather, source, destination, |_| 0.0, || false);
    search
}

/// Like [`dijkstra`], but gives up and returns `None` once `ctx` is
/// cancelled.
pub fn dijkstra_with<P: WeightedPather>(
    pather: &P,
    source: Index,
    destination: Index,
    ctx: &Context,
) -> Option<Search> {
    let (search, cancelled) = run(pather, source, destination, |_| 0.0, || ctx.is_done());
    (!cancelled).then_some(search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar::shortest_path;
    use crate::tables::Outcome;
    use crate::traits::Pather;
    use arcpath_core::{IndexRange, Params, PolarGrid};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    const EPS: f64 = 1e-9;

    fn grid(k: usize, h: usize, inner: f64, outer: f64) -> PolarGrid {
        PolarGrid::generate(Params::new(k, h, inner, outer)).unwrap()
    }

    fn assert_valid_path(grid: &PolarGrid, path: &[Index]) {
        assert_eq!(path.first(), Some(&grid.source()));
        assert_eq!(path.last(), Some(&grid.destination()));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
            assert!(grid.contains(w[1]));
        }
    }

    fn path_cost(grid: &PolarGrid, path: &[Index]) -> f64 {
        path.windows(2).map(|w| grid.cost(w[0], w[1])).sum()
    }

    #[test]
    fn three_by_two_hand_computed() {
        let g = grid(3, 2, 1.0, 2.0);
        let s = shortest_path(&g);
        let d = s.distance().unwrap();
        assert!((d - 2.0 * 5f64.sqrt()).abs() < EPS, "got {d}");
        assert_eq!(
            s.path().unwrap(),
            vec![Index::new(1, 0), Index::new(0, 1), Index::new(1, 2)]
        );
    }

    #[test]
    fn four_by_two_never_backtracks() {
        let g = grid(4, 2, 1.0, 2.0);
        assert_eq!(g.len(), 8);
        let s = shortest_path(&g);
        let path = s.path().unwrap();
        assert_valid_path(&g, &path);
        for w in path.windows(2) {
            assert!(w[1].j > w[0].j, "j must strictly increase: {path:?}");
        }
        let d = s.distance().unwrap();
        assert!((d - (2.0 * 3f64.sqrt() + 1.0)).abs() < EPS, "got {d}");
        assert_eq!(
            path,
            vec![
                Index::new(1, 0),
                Index::new(0, 1),
                Index::new(0, 2),
                Index::new(1, 3)
            ]
        );
    }

    #[test]
    fn default_grid_path_is_valid() {
        let g = PolarGrid::generate(Params::default()).unwrap();
        let s = shortest_path(&g);
        let path = s.path().unwrap();
        assert_valid_path(&g, &path);
        let d = s.distance().unwrap();
        assert!((path_cost(&g, &path) - d).abs() < EPS);
        // Never longer than the outer arc, never shorter than the chord.
        assert!(d <= std::f64::consts::PI * 10.0 + EPS);
        assert!(d >= 20.0 - EPS);
    }

    #[test]
    fn finalized_distances_never_change() {
        let g = grid(24, 8, 3.0, 5.0);
        let s = shortest_path(&g);
        let mut seen = HashSet::new();
        let mut last = 0.0;
        for n in &s.settled {
            assert!(seen.insert(n.pos), "{} finalized twice", n.pos);
            assert_eq!(s.distances.get(n.pos), n.cost);
            assert!(n.cost >= last);
            last = n.cost;
        }
        assert_eq!(s.settled.last().map(|n| n.pos), Some(g.destination()));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = grid(32, 6, 2.0, 4.0);
        let a = shortest_path(&g);
        let b = shortest_path(&g);
        assert_eq!(a.path().unwrap(), b.path().unwrap());
        assert_eq!(a.distance(), b.distance());
        assert_eq!(a.settled, b.settled);
    }

    #[test]
    fn random_grids_yield_valid_paths() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let inner = rng.random_range(0.5..10.0);
            let g = grid(
                rng.random_range(2..48),
                rng.random_range(2..12),
                inner,
                inner + rng.random_range(0.5..5.0),
            );
            let s = shortest_path(&g);
            let path = s.path().unwrap();
            assert_valid_path(&g, &path);
            assert!((path_cost(&g, &path) - s.distance().unwrap()).abs() < 1e-6);
        }
    }

    /// The polar grid with one angular column removed from the edge set.
    struct Walled<'a> {
        grid: &'a PolarGrid,
        column: usize,
    }

    impl Pather for Walled<'_> {
        fn range(&self) -> IndexRange {
            self.grid.range()
        }

        fn neighbors(&self, p: Index, buf: &mut Vec<Index>) {
            if p.j == self.column {
                return;
            }
            self.grid.neighbors(p, buf);
            buf.retain(|n| n.j != self.column);
        }
    }

    impl WeightedPather for Walled<'_> {
        fn cost(&self, from: Index, to: Index) -> f64 {
            self.grid.cost(from, to)
        }
    }

    #[test]
    fn walled_destination_is_unreachable() {
        let g = grid(5, 3, 1.0, 2.0);
        let walled = Walled { grid: &g, column: 2 };
        let s = dijkstra(&walled, g.source(), g.destination());
        assert_eq!(s.outcome, Outcome::Unreachable);
        assert_eq!(s.distance(), None);
        assert!(s.distances.get(g.destination()).is_infinite());
        assert_eq!(s.path().unwrap(), Vec::new());
        // Everything on the source side was still explored.
        assert_eq!(s.settled.len(), 2 * 3);
    }

    #[test]
    fn cancelled_context_abandons_search() {
        let g = grid(16, 4, 1.0, 2.0);
        let ctx = Context::new();
        ctx.cancel();
        assert!(dijkstra_with(&g, g.source(), g.destination(), &ctx).is_none());

        let live = Context::new();
        let s = dijkstra_with(&g, g.source(), g.destination(), &live).unwrap();
        assert_eq!(s.distance(), shortest_path(&g).distance());
    }

    #[test]
    fn endpoints_outside_range_are_unreachable() {
        let g = grid(4, 2, 1.0, 2.0);
        let s = dijkstra(&g, g.source(), Index::new(5, 5));
        assert_eq!(s.outcome, Outcome::Unreachable);
        assert!(s.settled.is_empty());
    }
}
