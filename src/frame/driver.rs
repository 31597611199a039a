//! FrameDriver - the self-resubmitting animation loop as a state machine.
//!
//! The host scheduler (e.g. `requestAnimationFrame`) calls `on_frame` once
//! per display refresh and asks for another callback only when the driver
//! answers `Reschedule`. Stopping flips the state; the next invocation sees
//! it before doing any work and answers `Halt`.

use super::geometry::{FrameGeometry, RenderSink};
use crate::graph::GraphModel;
use crate::kinematics::{KinematicsStepper, StepReport};

/// Whether the animation loop is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// What the host scheduler should do after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request the next frame.
    Reschedule,
    /// Do not re-register; the loop is over until resumed.
    Halt,
}

impl FrameOutcome {
    pub fn should_reschedule(self) -> bool {
        matches!(self, FrameOutcome::Reschedule)
    }
}

/// Drives one stepper pass and one redraw per scheduled frame.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    stepper: KinematicsStepper,
    state: DriverState,
    frames: u64,
    last_report: StepReport,
}

impl FrameDriver {
    /// Create a driver in the Running state.
    pub fn new(stepper: KinematicsStepper) -> Self {
        Self {
            stepper,
            state: DriverState::Running,
            frames: 0,
            last_report: StepReport::default(),
        }
    }

    pub fn stepper(&self) -> &KinematicsStepper {
        &self.stepper
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Number of frames that advanced the kinematics.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Counts from the most recent stepped frame.
    pub fn last_report(&self) -> StepReport {
        self.last_report
    }

    /// Scheduler callback.
    pub fn on_frame<S: RenderSink + ?Sized>(
        &mut self,
        model: &mut GraphModel,
        sink: &mut S,
    ) -> FrameOutcome {
        if self.state == DriverState::Stopped {
            return FrameOutcome::Halt;
        }

        self.last_report = self.stepper.step(model);
        self.frames += 1;
        Self::redraw(model, sink);

        FrameOutcome::Reschedule
    }

    /// Recapture geometry and render without stepping.
    ///
    /// This is the out-of-cadence path used after pointer moves, and it
    /// works in either state.
    pub fn redraw<S: RenderSink + ?Sized>(model: &GraphModel, sink: &mut S) {
        let geometry = FrameGeometry::capture(model);
        sink.render(&geometry);
    }

    /// Request shutdown. Takes effect at the top of the next callback.
    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    /// Return to Running. The host must schedule a fresh callback.
    pub fn resume(&mut self) {
        self.state = DriverState::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::triangle_count;
    use crate::graph::{NodeId, NodeSeed, Viewport};
    use crate::interaction::PointerAdapter;
    use crate::kinematics::BoundaryPolicy;

    /// Records every frame it is handed.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<FrameGeometry>,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, geometry: &FrameGeometry) {
            self.frames.push(geometry.clone());
        }
    }

    fn grid_model() -> GraphModel {
        // Six nodes on a 3x2 grid, at rest.
        GraphModel::from_nodes(
            (0..6)
                .map(|i| NodeSeed::at(10.0 + 20.0 * (i % 3) as f32, 10.0 + 20.0 * (i / 3) as f32))
                .collect(),
        )
    }

    fn driver() -> FrameDriver {
        FrameDriver::new(KinematicsStepper::new(
            Viewport::new(100.0, 100.0),
            BoundaryPolicy::Reflect,
        ))
    }

    #[test]
    fn test_zero_velocity_frame_keeps_positions_and_faces() {
        let mut model = grid_model();
        let before = FrameGeometry::capture(&model);
        let mut sink = RecordingSink::default();
        let mut driver = driver();

        let outcome = driver.on_frame(&mut model, &mut sink);

        assert_eq!(outcome, FrameOutcome::Reschedule);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].nodes, before.nodes);
        assert_eq!(sink.frames[0].faces.len(), 20);
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_face_count_is_position_independent() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut model = GraphModel::from_nodes(
            (0..6)
                .map(|i| NodeSeed::moving(50.0, 50.0, i as f32 * 7.0, -(i as f32) * 3.0))
                .collect(),
        );
        let mut sink = RecordingSink::default();
        let mut driver = FrameDriver::new(KinematicsStepper::new(
            viewport,
            BoundaryPolicy::CentroidConstrained { max_radius: 30.0 },
        ));

        for _ in 0..50 {
            driver.on_frame(&mut model, &mut sink);
        }

        assert_eq!(sink.frames.len(), 50);
        assert!(sink.frames.iter().all(|f| f.faces.len() == triangle_count(6)));
        assert!(sink.frames.iter().all(|f| f.edges.len() == 15));
    }

    #[test]
    fn test_stopped_driver_halts_without_work() {
        let mut model = GraphModel::from_nodes(vec![NodeSeed::moving(1.0, 1.0, 1.0, 1.0)]);
        let mut sink = RecordingSink::default();
        let mut driver = driver();

        driver.stop();
        assert_eq!(driver.state(), DriverState::Stopped);

        let outcome = driver.on_frame(&mut model, &mut sink);
        assert_eq!(outcome, FrameOutcome::Halt);
        assert!(!outcome.should_reschedule());
        assert!(sink.frames.is_empty());
        assert_eq!(model.position(NodeId(0)), Some((1.0, 1.0)));
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn test_resume_restarts_loop() {
        let mut model = GraphModel::from_nodes(vec![NodeSeed::moving(1.0, 1.0, 1.0, 0.0)]);
        let mut sink = RecordingSink::default();
        let mut driver = driver();

        driver.stop();
        driver.resume();
        assert!(driver.is_running());
        assert!(driver.on_frame(&mut model, &mut sink).should_reschedule());
        assert_eq!(model.position(NodeId(0)), Some((2.0, 1.0)));
    }

    #[test]
    fn test_scheduler_loop_runs_until_stopped() {
        let mut model = grid_model();
        let mut sink = RecordingSink::default();
        let mut driver = driver();

        // A host scheduler that re-registers only on Reschedule.
        let mut pending = true;
        let mut callbacks = 0;
        while pending {
            callbacks += 1;
            if callbacks == 10 {
                driver.stop();
            }
            pending = driver.on_frame(&mut model, &mut sink).should_reschedule();
        }

        assert_eq!(callbacks, 10);
        assert_eq!(driver.frames(), 9);
        assert_eq!(sink.frames.len(), 9);
    }

    #[test]
    fn test_pointer_redraw_skips_kinematics() {
        let mut model = GraphModel::from_nodes(vec![
            NodeSeed::moving(10.0, 10.0, 1.0, 1.0),
            NodeSeed::moving(20.0, 20.0, 1.0, 1.0),
            NodeSeed::moving(30.0, 10.0, 1.0, 1.0),
        ]);
        let mut sink = RecordingSink::default();
        let adapter = PointerAdapter::default();

        let outcome = adapter.on_pointer_move(&mut model, 70.0, 80.0);
        if outcome.needs_redraw() {
            FrameDriver::redraw(&model, &mut sink);
        }

        assert_eq!(sink.frames.len(), 1);
        let frame = &sink.frames[0];
        assert_eq!(frame.nodes, vec![[70.0, 80.0], [20.0, 20.0], [30.0, 10.0]]);
        assert_eq!(frame.faces[0].points[0], [70.0, 80.0]);
        assert_eq!(frame.edges[0].from, [70.0, 80.0]);
    }

    #[test]
    fn test_redraw_works_while_stopped() {
        let model = grid_model();
        let mut sink = RecordingSink::default();
        let mut driver = driver();
        driver.stop();

        FrameDriver::redraw(&model, &mut sink);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_last_report_tracks_reflections() {
        let mut model = GraphModel::from_nodes(vec![NodeSeed::moving(99.5, 50.0, 1.0, 0.0)]);
        let mut sink = FrameGeometry::default();
        let mut driver = driver();

        driver.on_frame(&mut model, &mut sink);
        assert_eq!(driver.last_report().reflected, 1);
        assert_eq!(sink.nodes, vec![[100.5, 50.0]]);
    }
}
