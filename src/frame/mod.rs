//! Frame orchestration.
//!
//! Each scheduled callback runs one kinematics pass, recaptures the derived
//! geometry (edge endpoints and face polygons) and hands it to a renderer.

mod driver;
mod geometry;

pub use driver::{DriverState, FrameDriver, FrameOutcome};
pub use geometry::{EdgeSegment, FacePolygon, FrameGeometry, Point, RenderSink};
