use arcpath_core::{Context, Index};

use crate::frontier::run;
use crate::tables::Search;
use crate::traits::AstarPather;

/// Compute the shortest path from `source` to `destination` using A*.
///
/// The frontier is keyed by `g + estimate(node, destination)`. With a
/// consistent estimate the returned distance equals
/// [`dijkstra`](fn@crate::dijkstra)'s, usually after finalizing far fewer
/// nodes.
pub fn astar<P: AstarPather>(pather: &P, source: Index, destination: Index) -> Search {
    let (search, _) = run(
        pather,
        source,
        destination,
        |p| pather.estimate(p, destination),
        || false,
    );
    search
}

/// Like [`astar`], but gives up and returns `None` once `ctx` is cancelled.
pub fn astar_with<P: AstarPather>(
    pather: &P,
    source: Index,
    destination: Index,
    ctx: &Context,
) -> Option<Search> {
    let (search, cancelled) = run(
        pather,
        source,
        destination,
        |p| pather.estimate(p, destination),
        || ctx.is_done(),
    );
    (!cancelled).then_some(search)
}
