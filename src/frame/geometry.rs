//! Derived per-frame geometry and the renderer seam.

use crate::faces::{Face, find_triangles};
use crate::graph::{EdgeKey, GraphModel};

/// A point in viewport space.
pub type Point = [f32; 2];

/// Screen coordinates of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub key: EdgeKey,
    pub from: Point,
    pub to: Point,
}

/// Closed outline of one face: three vertices with the first repeated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePolygon {
    pub face: Face,
    pub points: [Point; 4],
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameGeometry {
    pub nodes: Vec<Point>,
    pub edges: Vec<EdgeSegment>,
    pub faces: Vec<FacePolygon>,
}

impl FrameGeometry {
    /// Read node positions, project edges and re-enumerate faces.
    pub fn capture(model: &GraphModel) -> Self {
        let nodes: Vec<Point> = model
            .positions_x()
            .iter()
            .zip(model.positions_y())
            .map(|(&x, &y)| [x, y])
            .collect();

        let edges: Vec<EdgeSegment> = model
            .edges()
            .map(|key| EdgeSegment {
                key,
                from: nodes[key.lo().index()],
                to: nodes[key.hi().index()],
            })
            .collect();

        let faces: Vec<FacePolygon> = find_triangles(model)
            .into_iter()
            .map(|face| {
                let [a, b, c] = face.vertices().map(|id| nodes[id.index()]);
                FacePolygon {
                    face,
                    points: [a, b, c, a],
                }
            })
            .collect();

        Self {
            nodes,
            edges,
            faces,
        }
    }

    /// Node positions as [x0, y0, x1, y1, ...].
    pub fn node_buffer(&self) -> Vec<f32> {
        self.nodes.iter().flatten().copied().collect()
    }

    /// Edge segments as [x1, y1, x2, y2, ...], one quadruple per edge.
    pub fn edge_buffer(&self) -> Vec<f32> {
        self.edges
            .iter()
            .flat_map(|e| [e.from[0], e.from[1], e.to[0], e.to[1]])
            .collect()
    }

    /// Closed face outlines, 8 floats (four points) per face.
    pub fn face_buffer(&self) -> Vec<f32> {
        self.faces
            .iter()
            .flat_map(|f| f.points.iter().flatten().copied())
            .collect()
    }

    /// Face vertex ids as [i0, j0, k0, i1, j1, k1, ...].
    pub fn face_indices(&self) -> Vec<u32> {
        self.faces
            .iter()
            .flat_map(|f| f.face.vertices().map(|id| id.raw()))
            .collect()
    }
}

/// Receives captured geometry once per redraw.
pub trait RenderSink {
    fn render(&mut self, geometry: &FrameGeometry);
}

/// Retains the most recent frame so the host can read its buffers.
impl RenderSink for FrameGeometry {
    fn render(&mut self, geometry: &FrameGeometry) {
        self.clone_from(geometry);
    }
}
