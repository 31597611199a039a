//! Pointer-driven override of the follower node.
//!
//! A pointer move teleports the follower onto the pointer. No velocity is
//! imparted and the kinematics step is not advanced; the caller redraws the
//! derived geometry immediately through `FrameDriver::redraw`.

use crate::graph::{GraphModel, NodeId};

/// Result of feeding one pointer event to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The follower now sits exactly at the pointer. Redraw.
    Moved,
    /// A coordinate was NaN or infinite; the model is unchanged.
    Rejected,
    /// The follower id is not part of the model (e.g. an empty graph).
    NoFollower,
}

impl PointerOutcome {
    /// True if geometry changed and should be redrawn.
    pub fn needs_redraw(self) -> bool {
        matches!(self, PointerOutcome::Moved)
    }
}

/// Maps pointer coordinates onto one designated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerAdapter {
    follower: NodeId,
}

impl PointerAdapter {
    pub fn new(follower: NodeId) -> Self {
        Self { follower }
    }

    pub fn follower(&self) -> NodeId {
        self.follower
    }

    /// Handle a viewport-relative pointer move.
    pub fn on_pointer_move(&self, model: &mut GraphModel, x: f32, y: f32) -> PointerOutcome {
        if !x.is_finite() || !y.is_finite() {
            return PointerOutcome::Rejected;
        }
        if model.set_position(self.follower, x, y) {
            PointerOutcome::Moved
        } else {
            PointerOutcome::NoFollower
        }
    }
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new(NodeId(0))
    }
}
