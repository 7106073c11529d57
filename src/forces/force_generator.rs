use crate::math::Vector3;

/// A force field: a pure mapping from particle state to a force vector
pub trait ForceGenerator: Send + Sync + std::fmt::Debug {
    /// Returns the type name of the force generator
    fn force_type(&self) -> &'static str;

    /// Computes the force acting on a particle with the given state.
    ///
    /// Must be free of side effects; the integrators call it several times
    /// per particle per step.
    fn compute_force(&self, position: Vector3, velocity: Vector3, mass: f32) -> Vector3;
}

/// A force that is the same everywhere, independent of particle state
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantForce {
    /// The force to apply (in world space)
    force: Vector3,
}

impl ConstantForce {
    /// Creates a new constant force
    pub fn new(force: Vector3) -> Self {
        Self { force }
    }

    /// Gets the current force
    pub fn get_force(&self) -> Vector3 {
        self.force
    }
}

impl ForceGenerator for ConstantForce {
    fn force_type(&self) -> &'static str {
        "Constant"
    }

    fn compute_force(&self, _position: Vector3, _velocity: Vector3, _mass: f32) -> Vector3 {
        self.force
    }
}
