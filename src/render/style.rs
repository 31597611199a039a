//! Presentation settings. None of these affect the simulation.

use serde::{Deserialize, Serialize};

/// Colors and sizes used when drawing a frame.
///
/// Colors are CSS color strings passed straight to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderStyle {
    /// Node circle radius in pixels.
    pub node_radius: f64,
    pub node_fill: String,
    pub edge_stroke: String,
    pub edge_width: f64,
    /// Translucent fill for triangle faces.
    pub face_fill: String,
    pub face_stroke: String,
    pub face_stroke_width: f64,
    /// Solid background color; None clears to transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl RenderStyle {
    /// Smaller nodes for the short banner layout.
    pub fn compact() -> Self {
        Self {
            node_radius: 3.0,
            ..Self::default()
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_radius: 5.0,
            node_fill: "steelblue".to_string(),
            edge_stroke: "#999".to_string(),
            edge_width: 1.0,
            face_fill: "rgba(255, 100, 100, 0.5)".to_string(),
            face_stroke: "black".to_string(),
            face_stroke_width: 1.0,
            background: None,
        }
    }
}
