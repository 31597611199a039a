//! Per-frame position integration.
//!
//! The stepper moves every node by its velocity, optionally pulls stragglers
//! back onto a circle around the centroid, then bounces velocities off the
//! viewport edges.

mod stepper;

pub use stepper::{BoundaryPolicy, KinematicsStepper, StepReport, centroid};
