use arcpath_core::{Index, IndexRange};

/// The eight neighbor offsets `(di, dj)`, ordered by `di` then `dj`.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Append the in-range 8-connected neighbors of `p` to `buf`.
///
/// There is no wrap-around: column `0` and column `k - 1` are not adjacent.
#[inline]
pub fn push_in_range(p: Index, rng: IndexRange, buf: &mut Vec<Index>) {
    for (di, dj) in OFFSETS {
        if let Some(n) = p.shift(di, dj) {
            if rng.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// The in-range 8-connected neighbors of `p` in a grid of `h` rings by `k`
/// columns.
pub fn neighbors(p: Index, h: usize, k: usize) -> Vec<Index> {
    let mut buf = Vec::with_capacity(8);
    push_in_range(p, IndexRange::new(h, k), &mut buf);
    buf
}
