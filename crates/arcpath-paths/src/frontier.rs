//! The priority-queue search loop shared by Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use arcpath_core::Index;

use crate::tables::{DistanceTable, Outcome, PathNode, PredecessorTable, Search};
use crate::traits::WeightedPather;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `key` first and, among equal keys, the smallest `(i, j)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) key: f64,
    pub(crate) pos: Index,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Best-first search from `source` until `destination` is finalized or the
/// frontier empties.
///
/// Entries are keyed by `g + estimate(node)`; a zero estimate gives
/// Dijkstra. Stale entries are dropped on pop (lazy deletion). Returns the
/// search and whether `cancelled` fired before it finished; a cancelled
/// search's tables are incomplete.
pub(crate) fn run<P, E, C>(
    pather: &P,
    source: Index,
    destination: Index,
    estimate: E,
    cancelled: C,
) -> (Search, bool)
where
    P: WeightedPather,
    E: Fn(Index) -> f64,
    C: Fn() -> bool,
{
    let rng = pather.range();
    let mut distances = DistanceTable::new(rng);
    let mut predecessors = PredecessorTable::new(rng);
    let mut settled = Vec::new();

    let finish = |distances, predecessors, settled, outcome| Search {
        source,
        destination,
        distances,
        predecessors,
        settled,
        outcome,
    };

    let (Some(si), Some(_)) = (rng.offset(source), rng.offset(destination)) else {
        log::debug!("search endpoints {source} -> {destination} outside {rng:?}");
        return (
            finish(distances, predecessors, settled, Outcome::Unreachable),
            false,
        );
    };

    let mut finalized = vec![false; rng.len()];
    distances.set_offset(si, 0.0);

    let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    open.push(FrontierEntry {
        key: estimate(source),
        pos: source,
    });

    let mut nbuf: Vec<Index> = Vec::with_capacity(8);
    let mut stale = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        if cancelled() {
            log::debug!(
                "search {source} -> {destination} cancelled after {} nodes",
                settled.len()
            );
            return (finish(distances, predecessors, settled, Outcome::Unreachable), true);
        }

        let cp = current.pos;
        let Some(ci) = rng.offset(cp) else {
            continue;
        };
        if finalized[ci] {
            stale += 1;
            continue;
        }
        finalized[ci] = true;

        let current_g = distances.at_offset(ci);
        settled.push(PathNode {
            pos: cp,
            cost: current_g,
        });
        if cp == destination {
            break 'search true;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = rng.offset(np) else {
                continue;
            };
            if finalized[ni] {
                continue;
            }
            let tentative = current_g + pather.cost(cp, np);
            if tentative < distances.at_offset(ni) {
                distances.set_offset(ni, tentative);
                predecessors.set_offset(ni, cp);
                open.push(FrontierEntry {
                    key: tentative + estimate(np),
                    pos: np,
                });
            }
        }
    };

    let outcome = if found {
        Outcome::Reached(distances.get(destination))
    } else {
        Outcome::Unreachable
    };
    log::trace!(
        "search {source} -> {destination}: {} settled, {stale} stale pops, {outcome:?}",
        settled.len()
    );
    (finish(distances, predecessors, settled, outcome), false)
}
