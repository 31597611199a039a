//! Facet Net - WASM Module
//!
//! This module animates a small complete graph whose nodes drift around the
//! viewport, and derives a translucent triangle face for every three mutually
//! connected nodes. It is compiled to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen; the host drives it from
//! `requestAnimationFrame` and pointer events.
//!
//! # Architecture
//!
//! - `graph`: Complete graph model (petgraph topology + SoA positions/velocities)
//! - `faces`: Triangle (3-clique) enumeration over the edge set
//! - `kinematics`: Velocity integration with reflection and centroid constraints
//! - `interaction`: Pointer-to-follower-node override
//! - `frame`: Per-frame driver state machine and captured geometry
//! - `render`: Canvas 2D renderer and presentation style
//! - `session`: The single owned model threaded through driver and pointer

use js_sys::Float32Array;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

mod console;

pub mod config;
pub mod faces;
pub mod frame;
pub mod graph;
pub mod interaction;
pub mod kinematics;
pub mod render;
pub mod session;

use config::SessionConfig;
use frame::RenderSink;
use graph::NodeId;
use render::Canvas2DRenderer;
use session::Session;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Main entry point for an animated network.
///
/// This struct wraps the internal Session and provides the public API
/// exposed to JavaScript.
#[wasm_bindgen]
pub struct FacetNetWasm {
    session: Session,
    style: render::RenderStyle,
    canvas: Option<Canvas2DRenderer>,
}

#[wasm_bindgen]
impl FacetNetWasm {
    /// Create a session from a config object (or `undefined` for defaults).
    ///
    /// The initial layout is seeded from `Math.random()`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FacetNetWasm, JsValue> {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
        Self::with_seed(config, seed)
    }

    /// Create a session with a reproducible initial layout.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(config: JsValue, seed: u32) -> Result<FacetNetWasm, JsValue> {
        let config = parse_config(config)?;
        let mut rng = StdRng::seed_from_u64(seed as u64);

        let session = Session::new(&config, &mut rng).map_err(|e| {
            console::warn(&format!("facet-net: rejected config: {e}"));
            JsValue::from_str(&e.to_string())
        })?;

        console::log(&format!(
            "facet-net: {} nodes, {} edges, {} faces in {}x{} ({:?})",
            session.model().node_count(),
            session.model().edge_count(),
            session.geometry().faces.len(),
            config.width,
            config.height,
            config.policy(),
        ));

        Ok(Self {
            session,
            style: config.style,
            canvas: None,
        })
    }

    // =========================================================================
    // Rendering Target
    // =========================================================================

    /// Draw every frame into this canvas from now on.
    #[wasm_bindgen(js_name = attachCanvas)]
    pub fn attach_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let renderer = Canvas2DRenderer::new(canvas, self.style.clone())
            .map_err(|e| JsValue::from_str(&e))?;
        console::log("facet-net: canvas attached");
        self.canvas = Some(renderer);
        self.present();
        Ok(())
    }

    /// Stop drawing to the canvas. Geometry buffers stay available.
    #[wasm_bindgen(js_name = detachCanvas)]
    pub fn detach_canvas(&mut self) {
        self.canvas = None;
    }

    /// Resize the attached canvas. Simulation bounds are unchanged.
    #[wasm_bindgen(js_name = resizeCanvas)]
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(width, height);
        }
        self.present();
    }

    // =========================================================================
    // Frame Loop
    // =========================================================================

    /// Scheduler callback.
    ///
    /// Returns true if the host should request another animation frame.
    pub fn frame(&mut self) -> bool {
        let outcome = self.session.frame();
        if outcome.should_reschedule() {
            self.present();
        }
        outcome.should_reschedule()
    }

    /// Pointer moved to viewport coordinates (x, y).
    ///
    /// Returns true if the follower node moved and the frame was redrawn.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let moved = self.session.pointer_move(x, y).needs_redraw();
        if moved {
            self.present();
        }
        moved
    }

    /// Recapture and draw without stepping.
    pub fn redraw(&mut self) {
        self.session.redraw();
        self.present();
    }

    /// End the loop at the next callback.
    pub fn stop(&mut self) {
        console::log("facet-net: stopping");
        self.session.stop();
    }

    /// Re-enter the Running state. The host must request a new frame.
    pub fn resume(&mut self) {
        console::log("facet-net: resuming");
        self.session.resume();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session.driver().is_running()
    }

    // =========================================================================
    // Geometry Access
    // =========================================================================

    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.session.model().node_count() as u32
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> u32 {
        self.session.model().edge_count() as u32
    }

    #[wasm_bindgen(js_name = faceCount)]
    pub fn face_count(&self) -> u32 {
        self.session.geometry().faces.len() as u32
    }

    /// Node positions as [x0, y0, x1, y1, ...].
    #[wasm_bindgen(js_name = nodePositions)]
    pub fn node_positions(&self) -> Float32Array {
        Float32Array::from(&self.session.geometry().node_buffer()[..])
    }

    /// Edge segments as [x1, y1, x2, y2, ...] per edge.
    #[wasm_bindgen(js_name = edgeSegments)]
    pub fn edge_segments(&self) -> Float32Array {
        Float32Array::from(&self.session.geometry().edge_buffer()[..])
    }

    /// Closed face outlines, four (x, y) points per face.
    #[wasm_bindgen(js_name = facePolygons)]
    pub fn face_polygons(&self) -> Float32Array {
        Float32Array::from(&self.session.geometry().face_buffer()[..])
    }

    /// Face vertex ids as [i0, j0, k0, ...].
    #[wasm_bindgen(js_name = faceIndices)]
    pub fn face_indices(&self) -> Vec<u32> {
        self.session.geometry().face_indices()
    }

    // =========================================================================
    // Node Access
    // =========================================================================

    /// Get a node's X position.
    #[wasm_bindgen(js_name = getNodeX)]
    pub fn get_node_x(&self, node_id: u32) -> Option<f32> {
        self.session.model().position(NodeId(node_id)).map(|(x, _)| x)
    }

    /// Get a node's Y position.
    #[wasm_bindgen(js_name = getNodeY)]
    pub fn get_node_y(&self, node_id: u32) -> Option<f32> {
        self.session.model().position(NodeId(node_id)).map(|(_, y)| y)
    }

    /// Set a node's velocity. Ignores unknown ids and non-finite values.
    #[wasm_bindgen(js_name = setNodeVelocity)]
    pub fn set_node_velocity(&mut self, node_id: u32, dx: f32, dy: f32) -> bool {
        dx.is_finite()
            && dy.is_finite()
            && self.session.model_mut().set_velocity(NodeId(node_id), dx, dy)
    }
}

impl FacetNetWasm {
    fn present(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.render(self.session.geometry());
        }
    }
}

fn parse_config(config: JsValue) -> Result<SessionConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SessionConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(JsValue::from)
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::faces::{find_triangles, triangle_count};
    use crate::frame::{FrameDriver, FrameGeometry, FrameOutcome};
    use crate::graph::{GraphModel, NodeSeed, Viewport};
    use crate::interaction::PointerAdapter;
    use crate::kinematics::{BoundaryPolicy, KinematicsStepper};

    /// Six nodes on a grid, at rest: one frame changes nothing and the
    /// face list depends on topology only.
    #[test]
    fn test_zero_velocity_grid_end_to_end() {
        let seeds: Vec<NodeSeed> = (0..6)
            .map(|i| NodeSeed::at(50.0 * (i % 3) as f32 + 25.0, 50.0 * (i / 3) as f32 + 25.0))
            .collect();
        let model = GraphModel::from_nodes(seeds.clone());
        let stepper = KinematicsStepper::new(Viewport::new(150.0, 100.0), BoundaryPolicy::Reflect);
        let mut session = Session::with_model(model, stepper, PointerAdapter::default());

        assert_eq!(session.frame(), FrameOutcome::Reschedule);

        for (i, seed) in seeds.iter().enumerate() {
            assert_eq!(session.model().position(NodeId(i as u32)), Some((seed.x, seed.y)));
        }
        assert_eq!(session.geometry().faces.len(), 20);
        assert_eq!(session.geometry().face_indices().len(), 60);
    }

    /// Faces reported through the retained geometry match a direct
    /// enumeration, in the same order, across many frames.
    #[test]
    fn test_retained_faces_match_finder() {
        let config = SessionConfig {
            node_count: 9,
            ..SessionConfig::default()
        };
        let mut session = Session::new(&config, &mut StdRng::seed_from_u64(17)).unwrap();

        for _ in 0..30 {
            session.frame();
            let direct = find_triangles(session.model());
            let retained: Vec<_> = session.geometry().faces.iter().map(|f| f.face).collect();
            assert_eq!(retained, direct);
        }
        assert_eq!(session.geometry().faces.len(), triangle_count(9));
    }

    /// Pointer redraws and scheduled frames interleave on the same model.
    #[test]
    fn test_pointer_and_frames_interleave() {
        let mut session =
            Session::new(&SessionConfig::banner(800.0, 800.0), &mut StdRng::seed_from_u64(4))
                .unwrap();

        for step in 0..20 {
            if step % 3 == 0 {
                let x = 10.0 * step as f32;
                session.pointer_move(x, 40.0);
                assert_eq!(session.geometry().nodes[0], [x, 40.0]);
            } else {
                session.frame();
            }
        }
        assert_eq!(session.driver().frames(), 13);
    }

    /// The retained geometry can also be pushed into any other sink.
    #[test]
    fn test_driver_feeds_external_sink() {
        let mut model = GraphModel::from_nodes(vec![NodeSeed::default(); 4]);
        let mut driver = FrameDriver::new(KinematicsStepper::new(
            Viewport::new(10.0, 10.0),
            BoundaryPolicy::Reflect,
        ));
        let mut sink = FrameGeometry::default();

        driver.on_frame(&mut model, &mut sink);
        assert_eq!(sink.edge_buffer().len(), 6 * 4);
        assert_eq!(sink.face_buffer().len(), 4 * 8);
    }
}
