//! Edge type and the canonical membership index.
//!
//! Edges are unordered. `EdgeKey` sorts its endpoints on construction so the
//! pair (a, b) and the pair (b, a) hash and compare identically.

use std::collections::HashSet;
use std::fmt;

use super::node::NodeId;

/// Canonical key for an unordered node pair, with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    lo: NodeId,
    hi: NodeId,
}

impl EdgeKey {
    /// Build the key for the pair in either order.
    ///
    /// Returns None for a self-pair.
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        if a == b {
            return None;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Some(Self { lo, hi })
    }

    /// Smaller endpoint.
    #[inline]
    pub fn lo(self) -> NodeId {
        self.lo
    }

    /// Larger endpoint.
    #[inline]
    pub fn hi(self) -> NodeId {
        self.hi
    }

    #[inline]
    pub fn endpoints(self) -> (NodeId, NodeId) {
        (self.lo, self.hi)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.lo.0, self.hi.0)
    }
}

/// Set of unordered edges over nodes `0..node_count`.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    node_count: usize,
    keys: HashSet<EdgeKey>,
}

impl EdgeSet {
    /// Create an empty edge set over `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            keys: HashSet::new(),
        }
    }

    /// Every unordered pair over `node_count` nodes.
    pub fn complete(node_count: usize) -> Self {
        let mut set = Self {
            node_count,
            keys: HashSet::with_capacity(node_count * node_count.saturating_sub(1) / 2),
        };
        for i in 0..node_count as u32 {
            for j in (i + 1)..node_count as u32 {
                set.insert(NodeId(i), NodeId(j));
            }
        }
        set
    }

    /// Insert the pair in either order.
    ///
    /// Returns false for self-pairs, out-of-range ids, and duplicates.
    pub fn insert(&mut self, a: NodeId, b: NodeId) -> bool {
        if a.index() >= self.node_count || b.index() >= self.node_count {
            return false;
        }
        match EdgeKey::new(a, b) {
            Some(key) => self.keys.insert(key),
            None => false,
        }
    }

    /// Remove the pair in either order.
    pub fn remove(&mut self, a: NodeId, b: NodeId) -> bool {
        EdgeKey::new(a, b).is_some_and(|key| self.keys.remove(&key))
    }

    /// Symmetric membership test.
    #[inline]
    pub fn contains(&self, a: NodeId, b: NodeId) -> bool {
        EdgeKey::new(a, b).is_some_and(|key| self.keys.contains(&key))
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
