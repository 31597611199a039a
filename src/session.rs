//! Session - one animated graph and everything that acts on it.
//!
//! The session owns the single `GraphModel` and lends it to the frame driver
//! and the pointer adapter in turn. The last captured frame is retained so
//! the host can read geometry buffers between callbacks.

use rand::Rng;

use crate::config::{ConfigError, SessionConfig};
use crate::frame::{FrameDriver, FrameGeometry, FrameOutcome};
use crate::graph::GraphModel;
use crate::interaction::{PointerAdapter, PointerOutcome};
use crate::kinematics::KinematicsStepper;

pub struct Session {
    model: GraphModel,
    driver: FrameDriver,
    pointer: PointerAdapter,
    geometry: FrameGeometry,
}

impl Session {
    /// Validate the config and build a randomized session.
    pub fn new(config: &SessionConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let model = GraphModel::complete(
            config.node_count,
            &config.viewport(),
            config.max_speed,
            rng,
        );
        Ok(Self::with_model(
            model,
            config.stepper(),
            PointerAdapter::new(config.follower_id()),
        ))
    }

    /// Build a session around an existing model.
    pub fn with_model(
        model: GraphModel,
        stepper: KinematicsStepper,
        pointer: PointerAdapter,
    ) -> Self {
        let geometry = FrameGeometry::capture(&model);
        Self {
            model,
            driver: FrameDriver::new(stepper),
            pointer,
            geometry,
        }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut GraphModel {
        &mut self.model
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    /// The most recently captured frame.
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Scheduler callback: step, recapture, retain.
    pub fn frame(&mut self) -> FrameOutcome {
        self.driver.on_frame(&mut self.model, &mut self.geometry)
    }

    /// Move the follower to the pointer and recapture immediately.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> PointerOutcome {
        let outcome = self.pointer.on_pointer_move(&mut self.model, x, y);
        if outcome.needs_redraw() {
            self.redraw();
        }
        outcome
    }

    /// Recapture without stepping.
    pub fn redraw(&mut self) {
        FrameDriver::redraw(&self.model, &mut self.geometry);
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn resume(&mut self) {
        self.driver.resume();
    }
}
