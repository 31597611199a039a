//! Kinematics stepper.
//!
//! Order of operations for one frame:
//! 1. `position += velocity` for every node
//! 2. centroid variant only: re-project nodes farther than `max_radius`
//!    from the centroid of the integrated positions onto that circle
//! 3. flip the velocity component on any axis where the position is outside
//!    `[0, dimension]`
//!
//! Positions are never clamped to the viewport, so a node can sit up to one
//! velocity step outside the bounds for a frame before it turns around.

use crate::graph::{GraphModel, Viewport};

/// How nodes are kept on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryPolicy {
    /// Elastic bounce off the viewport edges.
    Reflect,
    /// Bounce, plus a maximum distance from the centroid of all nodes.
    CentroidConstrained { max_radius: f32 },
}

impl BoundaryPolicy {
    /// Centroid radius if this policy has one.
    pub fn max_radius(&self) -> Option<f32> {
        match *self {
            BoundaryPolicy::Reflect => None,
            BoundaryPolicy::CentroidConstrained { max_radius } => Some(max_radius),
        }
    }
}

/// Counts from one stepper pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Velocity components flipped by the boundary check.
    pub reflected: usize,
    /// Nodes re-projected onto the centroid circle.
    pub clamped: usize,
}

/// Advances node positions one frame at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicsStepper {
    viewport: Viewport,
    policy: BoundaryPolicy,
}

impl KinematicsStepper {
    pub fn new(viewport: Viewport, policy: BoundaryPolicy) -> Self {
        Self { viewport, policy }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Run one pass over every node in the model.
    pub fn step(&self, model: &mut GraphModel) -> StepReport {
        let Viewport { width, height } = self.viewport;
        let (pos_x, pos_y, vel_x, vel_y) = model.buffers_mut();
        let mut report = StepReport::default();

        for i in 0..pos_x.len() {
            pos_x[i] += vel_x[i];
            pos_y[i] += vel_y[i];
        }

        let constraint = match self.policy {
            BoundaryPolicy::Reflect => None,
            BoundaryPolicy::CentroidConstrained { max_radius } => {
                mean(pos_x, pos_y).map(|center| (center, max_radius))
            }
        };

        for i in 0..pos_x.len() {
            if let Some((center, max_radius)) = constraint {
                if clamp_to_radius(&mut pos_x[i], &mut pos_y[i], center, max_radius) {
                    report.clamped += 1;
                }
            }

            if pos_x[i] < 0.0 || pos_x[i] > width {
                vel_x[i] = -vel_x[i];
                report.reflected += 1;
            }
            if pos_y[i] < 0.0 || pos_y[i] > height {
                vel_y[i] = -vel_y[i];
                report.reflected += 1;
            }
        }

        report
    }
}

/// Arithmetic mean of all node positions, None for an empty model.
pub fn centroid(model: &GraphModel) -> Option<(f32, f32)> {
    mean(model.positions_x(), model.positions_y())
}

fn mean(xs: &[f32], ys: &[f32]) -> Option<(f32, f32)> {
    if xs.is_empty() {
        return None;
    }
    let n = xs.len() as f32;
    let sum_x: f32 = xs.iter().sum();
    let sum_y: f32 = ys.iter().sum();
    Some((sum_x / n, sum_y / n))
}

/// Pull (x, y) onto the circle of `max_radius` around `center` if it lies
/// outside it, keeping its bearing. Returns true if the point moved.
fn clamp_to_radius(x: &mut f32, y: &mut f32, center: (f32, f32), max_radius: f32) -> bool {
    let dx = *x - center.0;
    let dy = *y - center.1;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance <= max_radius {
        return false;
    }

    let angle = dy.atan2(dx);
    *x = center.0 + max_radius * angle.cos();
    *y = center.1 + max_radius * angle.sin();
    true
}
