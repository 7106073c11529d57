use crate::forces::ForceGenerator;
use crate::math::Vector3;

/// Uniform gravity: `F = m * g`
#[derive(Debug, Clone, PartialEq)]
pub struct GravityForce {
    /// The gravity acceleration vector
    gravity: Vector3,
}

impl GravityForce {
    /// Creates a new gravity force with the given acceleration
    pub fn new(gravity: Vector3) -> Self {
        Self { gravity }
    }

    /// Creates a new gravity force with Earth-like gravity (-9.81 in y direction)
    pub fn new_earth_gravity() -> Self {
        Self::new(Vector3::new(0.0, -9.81, 0.0))
    }

    /// Gets the gravity acceleration
    pub fn get_gravity(&self) -> Vector3 {
        self.gravity
    }
}

impl ForceGenerator for GravityForce {
    fn force_type(&self) -> &'static str {
        "Gravity"
    }

    fn compute_force(&self, _position: Vector3, _velocity: Vector3, mass: f32) -> Vector3 {
        self.gravity * mass
    }
}
