//! Node type and related structures.
//!
//! Nodes are the points of the drifting network. Each node has:
//! - A dense identifier in `0..N`, stable for the whole session
//! - Position (x, y) in viewport space
//! - Velocity (dx, dy) in units per frame

use std::fmt;

/// Stable node identifier.
///
/// Ids are assigned densely at construction and never reused, so the raw
/// value doubles as the slot in the position/velocity buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from a raw u32.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Slot of this node in the SoA buffers.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Snapshot of one node read out of the graph model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Node {
    #[inline]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }
}

/// Initial state for one node when building a model from fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeSeed {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl NodeSeed {
    /// A node at rest at (x, y).
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, dx: 0.0, dy: 0.0 }
    }

    /// A node at (x, y) moving by (dx, dy) each frame.
    pub fn moving(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        Self { x, y, dx, dy }
    }
}
