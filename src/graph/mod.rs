//! Graph data structures.
//!
//! This module provides the complete graph the animation runs on, using
//! petgraph's StableGraph for topology and a Structure of Arrays (SoA) layout
//! for positions and velocities.

mod edge;
mod model;
mod node;

pub use edge::{EdgeKey, EdgeSet};
pub use model::{GraphModel, Viewport};
pub use node::{Node, NodeId, NodeSeed};
