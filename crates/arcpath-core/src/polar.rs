//! The half-annulus polar grid.
//!
//! [`PolarGrid::generate`] lays out `H` rings by `K` angular columns over the
//! upper half plane. Column `j = 0` sits at angle π and column `j = K-1` at
//! angle 0.

use std::f64::consts::PI;

use crate::geom::{Index, IndexRange, Vec2};
use crate::params::{ParamError, Params};

/// A generated grid node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub index: Index,
    pub radius: f64,
    /// Radians in `[0, π]`.
    pub angle: f64,
    pub pos: Vec2,
}

/// Every node of a half-annulus, stored row-major by ring.
///
/// Immutable after generation. A new parameter set means a new grid.
#[derive(Clone, Debug)]
pub struct PolarGrid {
    params: Params,
    nodes: Vec<Node>,
}

impl PolarGrid {
    /// Build the grid for `params`.
    ///
    /// Fails without allocating if the parameters are invalid.
    pub fn generate(params: Params) -> Result<Self, ParamError> {
        params.validate()?;
        let rng = params.range();
        let span = params.outer - params.inner;
        let last_ring = (params.h - 1) as f64;
        let last_col = (params.k - 1) as f64;

        let mut nodes = Vec::with_capacity(rng.len());
        for i in 0..params.h {
            let radius = params.inner + (i as f64 / last_ring) * span;
            for j in 0..params.k {
                let angle = PI - (j as f64 / last_col) * PI;
                nodes.push(Node {
                    index: Index::new(i, j),
                    radius,
                    angle,
                    pos: Vec2::from_polar(radius, angle),
                });
            }
        }
        Ok(Self { params, nodes })
    }

    /// The parameters this grid was generated from.
    #[inline]
    pub fn params(&self) -> Params {
        self.params
    }

    /// The index rectangle of the grid.
    #[inline]
    pub fn range(&self) -> IndexRange {
        self.params.range()
    }

    /// Number of nodes (`H * K`).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a generated grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` is a node of this grid.
    #[inline]
    pub fn contains(&self, p: Index) -> bool {
        self.range().contains(p)
    }

    /// The node at `p`, or `None` if out of range.
    #[inline]
    pub fn at(&self, p: Index) -> Option<&Node> {
        self.range().offset(p).map(|off| &self.nodes[off])
    }

    /// Cartesian position of `p`, or `None` if out of range.
    #[inline]
    pub fn pos(&self, p: Index) -> Option<Vec2> {
        self.at(p).map(|n| n.pos)
    }

    /// Search start: outermost ring, first angular column.
    #[inline]
    pub fn source(&self) -> Index {
        self.params.source()
    }

    /// Search goal: outermost ring, last angular column.
    #[inline]
    pub fn destination(&self) -> Index {
        self.params.destination()
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
