//! GraphModel - the single owned simulation state.
//!
//! The model stores the complete topology using petgraph's StableGraph,
//! a canonical edge index for O(1) symmetric membership tests, and SoA
//! (Structure of Arrays) buffers for positions and velocities so the host
//! can read them without per-node conversion.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Undirected;
use rand::Rng;

use super::edge::{EdgeKey, EdgeSet};
use super::node::{Node, NodeId, NodeSeed};

/// Rectangular region nodes spawn in and bounce off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if (x, y) lies within `[0, width] x [0, height]`.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// The graph model.
///
/// Topology is complete and fixed at construction: every unordered pair of
/// nodes is joined exactly once and no edge is ever added or removed. Only
/// positions and velocities change after that.
pub struct GraphModel {
    /// Topology. Node weights are their stable ids; edges carry no data.
    graph: StableGraph<NodeId, (), Undirected>,

    /// Canonical membership index over the same edges.
    edges: EdgeSet,

    /// X positions (SoA layout)
    pos_x: Vec<f32>,

    /// Y positions (SoA layout)
    pos_y: Vec<f32>,

    /// X velocities (SoA layout)
    vel_x: Vec<f32>,

    /// Y velocities (SoA layout)
    vel_y: Vec<f32>,
}

impl GraphModel {
    /// Build a complete graph of `node_count` nodes with random state.
    ///
    /// Positions are uniform inside the viewport and each velocity component
    /// is uniform in `[-max_speed, max_speed]`.
    pub fn complete(
        node_count: usize,
        viewport: &Viewport,
        max_speed: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let speed = max_speed.abs();
        let seeds = (0..node_count)
            .map(|_| NodeSeed {
                x: sample(rng, viewport.width),
                y: sample(rng, viewport.height),
                dx: sample_symmetric(rng, speed),
                dy: sample_symmetric(rng, speed),
            })
            .collect();
        Self::from_nodes(seeds)
    }

    /// Build a complete graph over caller-supplied node states.
    ///
    /// Node `i` gets id `NodeId(i)`.
    pub fn from_nodes(seeds: Vec<NodeSeed>) -> Self {
        let n = seeds.len();
        let edge_capacity = n * n.saturating_sub(1) / 2;

        let mut graph = StableGraph::with_capacity(n, edge_capacity);
        let mut pos_x = Vec::with_capacity(n);
        let mut pos_y = Vec::with_capacity(n);
        let mut vel_x = Vec::with_capacity(n);
        let mut vel_y = Vec::with_capacity(n);

        for (i, seed) in seeds.into_iter().enumerate() {
            graph.add_node(NodeId(i as u32));
            pos_x.push(seed.x);
            pos_y.push(seed.y);
            vel_x.push(seed.dx);
            vel_y.push(seed.dy);
        }

        let mut edges = EdgeSet::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                edges.insert(NodeId(i as u32), NodeId(j as u32));
            }
        }

        Self {
            graph,
            edges,
            pos_x,
            pos_y,
            vel_x,
            vel_y,
        }
    }

    // =========================================================================
    // Node Access
    // =========================================================================

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Check whether the id names a node in this model.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.node_count()
    }

    /// Iterate over every node id in order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    /// Snapshot of a node's state.
    pub fn node(&self, id: NodeId) -> Option<Node> {
        let i = id.index();
        self.contains_node(id).then(|| Node {
            id,
            x: self.pos_x[i],
            y: self.pos_y[i],
            dx: self.vel_x[i],
            dy: self.vel_y[i],
        })
    }

    /// Get a node's position.
    pub fn position(&self, id: NodeId) -> Option<(f32, f32)> {
        let i = id.index();
        self.contains_node(id).then(|| (self.pos_x[i], self.pos_y[i]))
    }

    /// Get a node's velocity.
    pub fn velocity(&self, id: NodeId) -> Option<(f32, f32)> {
        let i = id.index();
        self.contains_node(id).then(|| (self.vel_x[i], self.vel_y[i]))
    }

    /// Overwrite a node's position. Returns false for unknown ids.
    pub fn set_position(&mut self, id: NodeId, x: f32, y: f32) -> bool {
        if !self.contains_node(id) {
            return false;
        }
        let i = id.index();
        self.pos_x[i] = x;
        self.pos_y[i] = y;
        true
    }

    /// Overwrite a node's velocity. Returns false for unknown ids.
    pub fn set_velocity(&mut self, id: NodeId, dx: f32, dy: f32) -> bool {
        if !self.contains_node(id) {
            return false;
        }
        let i = id.index();
        self.vel_x[i] = dx;
        self.vel_y[i] = dy;
        true
    }

    // =========================================================================
    // Topology
    // =========================================================================

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The canonical edge index.
    pub fn edge_set(&self) -> &EdgeSet {
        &self.edges
    }

    /// Edges in insertion order: (0,1), (0,2), ..., (N-2,N-1).
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.graph.edge_references().filter_map(|edge| {
            EdgeKey::new(self.graph[edge.source()], self.graph[edge.target()])
        })
    }

    /// Get neighbors of a node, sorted by id.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains_node(id) {
            return Vec::new();
        }
        let mut neighbors: Vec<NodeId> = self
            .graph
            .neighbors(NodeIndex::new(id.index()))
            .filter_map(|n| self.graph.node_weight(n).copied())
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    // =========================================================================
    // Buffer Access
    // =========================================================================

    /// Get X positions slice.
    pub fn positions_x(&self) -> &[f32] {
        &self.pos_x
    }

    /// Get Y positions slice.
    pub fn positions_y(&self) -> &[f32] {
        &self.pos_y
    }

    /// Get X velocities slice.
    pub fn velocities_x(&self) -> &[f32] {
        &self.vel_x
    }

    /// Get Y velocities slice.
    pub fn velocities_y(&self) -> &[f32] {
        &self.vel_y
    }

    /// Mutable views of all four buffers at once, for the stepper.
    pub(crate) fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32], &mut [f32], &mut [f32]) {
        (
            self.pos_x.as_mut_slice(),
            self.pos_y.as_mut_slice(),
            self.vel_x.as_mut_slice(),
            self.vel_y.as_mut_slice(),
        )
    }
}

fn sample(rng: &mut impl Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..=extent)
    } else {
        0.0
    }
}

fn sample_symmetric(rng: &mut impl Rng, magnitude: f32) -> f32 {
    if magnitude > 0.0 {
        rng.random_range(-magnitude..=magnitude)
    } else {
        0.0
    }
}
