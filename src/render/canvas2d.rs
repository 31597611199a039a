//! 2D Canvas rendering for the animated network.
//!
//! Draws edges, then nodes, then the translucent faces on top.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::style::RenderStyle;
use crate::frame::{EdgeSegment, FacePolygon, FrameGeometry, Point, RenderSink};

/// 2D Canvas renderer
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    style: RenderStyle,
}

impl Canvas2DRenderer {
    /// Create renderer from canvas element
    pub fn new(canvas: HtmlCanvasElement, style: RenderStyle) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or("2d context not available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx, style })
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Update canvas dimensions
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        match &self.style.background {
            Some(color) => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(0.0, 0.0, width, height);
            }
            None => self.ctx.clear_rect(0.0, 0.0, width, height),
        }
    }

    fn render_edges(&self, edges: &[EdgeSegment]) {
        self.ctx.set_stroke_style_str(&self.style.edge_stroke);
        self.ctx.set_line_width(self.style.edge_width);

        for edge in edges {
            self.ctx.begin_path();
            self.ctx.move_to(edge.from[0] as f64, edge.from[1] as f64);
            self.ctx.line_to(edge.to[0] as f64, edge.to[1] as f64);
            self.ctx.stroke();
        }
    }

    fn render_nodes(&self, nodes: &[Point]) {
        self.ctx.set_fill_style_str(&self.style.node_fill);

        for node in nodes {
            self.ctx.begin_path();
            self.ctx
                .arc(
                    node[0] as f64,
                    node[1] as f64,
                    self.style.node_radius,
                    0.0,
                    std::f64::consts::TAU,
                )
                .ok();
            self.ctx.fill();
        }
    }

    fn render_faces(&self, faces: &[FacePolygon]) {
        self.ctx.set_fill_style_str(&self.style.face_fill);
        self.ctx.set_stroke_style_str(&self.style.face_stroke);
        self.ctx.set_line_width(self.style.face_stroke_width);

        for face in faces {
            let [first, rest @ ..] = &face.points;
            self.ctx.begin_path();
            self.ctx.move_to(first[0] as f64, first[1] as f64);
            for point in rest {
                self.ctx.line_to(point[0] as f64, point[1] as f64);
            }
            self.ctx.fill();
            self.ctx.stroke();
        }
    }
}

impl RenderSink for Canvas2DRenderer {
    fn render(&mut self, geometry: &FrameGeometry) {
        self.clear();
        self.render_edges(&geometry.edges);
        self.render_nodes(&geometry.nodes);
        self.render_faces(&geometry.faces);
    }
}
