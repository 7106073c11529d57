use crate::integration::{Derivative, Integrator, PhaseState};

/// Scale applied to the acceleration each step
pub const BASIC_FORCE_SCALE: f32 = 0.05;

/// Scale applied to the velocity when advancing the position
pub const BASIC_VELOCITY_SCALE: f32 = 0.2;

/// Legacy fixed-substep scheme that ignores the step size.
///
/// `v' = v + 0.05 a`, then `x' = x + 0.2 v'`. Not physically meaningful;
/// intended for debugging and for reproducing older scenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicIntegrator;

impl BasicIntegrator {
    /// Creates a new basic integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for BasicIntegrator {
    fn integrate(&self, derivative: &Derivative<'_>, state: PhaseState, _dt: f32) -> PhaseState {
        let acceleration = derivative(&state).velocity;
        let velocity = state.velocity.add_scaled(&acceleration, BASIC_FORCE_SCALE);
        let position = state.position.add_scaled(&velocity, BASIC_VELOCITY_SCALE);
        PhaseState { position, velocity }
    }

    fn name(&self) -> &str {
        "Basic"
    }
}
