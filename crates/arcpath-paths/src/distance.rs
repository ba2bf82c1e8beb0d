use arcpath_core::Node;

/// Edge cost: straight-line distance between two nodes' Cartesian positions.
#[inline]
pub fn euclidean(a: &Node, b: &Node) -> f64 {
    a.pos.distance(b.pos)
}
