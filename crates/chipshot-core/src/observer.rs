use crate::kinematics::KinematicState;

/// Read-only consumer of simulation states, typically the renderer.
///
/// Drivers call [`StepObserver::on_frame`] once per presented frame, never
/// with mutable access to the state.
pub trait StepObserver {
    fn on_frame(&mut self, state: &KinematicState);
}

/// Headless runs ignore frames.
impl StepObserver for () {
    fn on_frame(&mut self, _state: &KinematicState) {}
}

