//! Geometry primitives: [`Index`], [`IndexRange`] and [`Vec2`].
//!
//! Grid positions are addressed by an index pair `(i, j)` where `i` is the
//! radial ring and `j` the angular column. Cartesian positions use [`Vec2`].

use std::fmt;

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// A node index pair: `i` is the radial ring (inner = 0), `j` the angular
/// column (0 at angle π on the negative X axis, `K - 1` at angle 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    pub i: usize,
    pub j: usize,
}

impl Index {
    /// Create a new index pair.
    #[inline]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Return the index shifted by `(di, dj)`, or `None` if either component
    /// would become negative.
    #[inline]
    pub fn shift(self, di: isize, dj: isize) -> Option<Self> {
        Some(Self {
            i: self.i.checked_add_signed(di)?,
            j: self.j.checked_add_signed(dj)?,
        })
    }

    /// Whether `other` differs by at most 1 in each component and is not
    /// `self` (the 8-connected adjacency relation).
    #[inline]
    pub fn is_adjacent(self, other: Index) -> bool {
        self != other && self.i.abs_diff(other.i) <= 1 && self.j.abs_diff(other.j) <= 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

// ---------------------------------------------------------------------------
// IndexRange
// ---------------------------------------------------------------------------

/// The half-open index rectangle `[0, h) × [0, k)` of a grid with `h` rings
/// and `k` angular columns.
///
/// Offsets are row-major: `offset(i, j) = i * k + j`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub h: usize,
    pub k: usize,
}

impl IndexRange {
    /// Create a new range of `h` rings by `k` columns.
    #[inline]
    pub const fn new(h: usize, k: usize) -> Self {
        Self { h, k }
    }

    /// Number of index pairs in the range.
    #[inline]
    pub const fn len(self) -> usize {
        self.h * self.k
    }

    /// Whether the range holds no index pairs.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.h == 0 || self.k == 0
    }

    /// Whether `p` lies inside the range.
    #[inline]
    pub const fn contains(self, p: Index) -> bool {
        p.i < self.h && p.j < self.k
    }

    /// Flat offset of `p`, or `None` if out of range.
    #[inline]
    pub fn offset(self, p: Index) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.i * self.k + p.j)
    }

    /// Index pair at flat offset `off`. The caller guarantees `off < len()`.
    #[inline]
    pub const fn index(self, off: usize) -> Index {
        Index::new(off / self.k, off % self.k)
    }

    /// Iterate over all index pairs in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Index> {
        (0..self.len()).map(move |off| self.index(off))
    }
}

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A Cartesian position. X grows right, Y grows up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position at `radius` and `angle` (radians) from the origin.
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
