use crate::math::Vector3;

/// Position and velocity of a particle, the state the integrators advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl PhaseState {
    /// Creates a new phase state
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Returns `self + derivative * h`, component-wise on position and velocity
    #[inline]
    pub fn offset(&self, derivative: &PhaseState, h: f32) -> Self {
        Self {
            position: self.position.add_scaled(&derivative.position, h),
            velocity: self.velocity.add_scaled(&derivative.velocity, h),
        }
    }

    /// Returns true if both vectors are finite
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Time derivative of a phase state: maps `(x, v)` to `(v, a)`.
///
/// The particle mass is captured by the closure.
pub type Derivative<'a> = dyn Fn(&PhaseState) -> PhaseState + 'a;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync + std::fmt::Debug {
    /// Advances a phase state by one step of size `dt`
    fn integrate(&self, derivative: &Derivative<'_>, state: PhaseState, dt: f32) -> PhaseState;

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
