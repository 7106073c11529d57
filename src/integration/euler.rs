use crate::integration::{Derivative, Integrator, PhaseState};

/// Explicit forward Euler: `x' = x + h v`, `v' = v + h a`
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn integrate(&self, derivative: &Derivative<'_>, state: PhaseState, dt: f32) -> PhaseState {
        let slope = derivative(&state);
        state.offset(&slope, dt)
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
