//! Brute-force 3-clique enumeration.
//!
//! Every ordered triple `i < j < k` is visited once and kept when all three
//! pairwise edges are present. There is no pruning; N stays in the low dozens.

use std::fmt;

use crate::graph::{EdgeSet, GraphModel, NodeId};

/// Symmetric edge membership over nodes `0..node_count`.
pub trait EdgeLookup {
    /// Number of nodes ids are drawn from.
    fn node_count(&self) -> usize;

    /// True if the unordered pair {a, b} is an edge.
    ///
    /// Implementations must return the same answer for (a, b) and (b, a).
    fn contains_edge(&self, a: NodeId, b: NodeId) -> bool;
}

impl EdgeLookup for EdgeSet {
    fn node_count(&self) -> usize {
        EdgeSet::node_count(self)
    }

    fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.contains(a, b)
    }
}

impl EdgeLookup for GraphModel {
    fn node_count(&self) -> usize {
        GraphModel::node_count(self)
    }

    fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_set().contains(a, b)
    }
}

/// A triangle of mutually connected nodes, stored with `i < j < k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face(pub NodeId, pub NodeId, pub NodeId);

impl Face {
    /// Vertex ids in ascending order.
    #[inline]
    pub fn vertices(self) -> [NodeId; 3] {
        [self.0, self.1, self.2]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face({}, {}, {})", self.0.0, self.1.0, self.2.0)
    }
}

/// Enumerate every face of the graph in `i < j < k` order.
///
/// Nothing beyond what `contains_edge` reports is assumed, so the same
/// function works on incomplete edge sets. Fewer than three nodes yields an
/// empty list.
pub fn find_triangles<G: EdgeLookup + ?Sized>(graph: &G) -> Vec<Face> {
    let n = graph.node_count() as u32;
    if n < 3 {
        return Vec::new();
    }

    let mut faces = Vec::with_capacity(triangle_count(n as usize));
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (a, b, c) = (NodeId(i), NodeId(j), NodeId(k));
                if graph.contains_edge(a, b)
                    && graph.contains_edge(b, c)
                    && graph.contains_edge(c, a)
                {
                    faces.push(Face(a, b, c));
                }
            }
        }
    }
    faces
}

/// `C(n, 3)`: the face count of a complete graph on `n` nodes.
pub fn triangle_count(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}
