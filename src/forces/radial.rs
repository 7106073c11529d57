use crate::forces::ForceGenerator;
use crate::math::{Vector3, EPSILON};

/// Inverse-square field around a fixed origin: `F = -s * (x - origin) / |x - origin|^3`.
///
/// Positive strength attracts toward the origin, negative strength repels.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialForce {
    /// The center of the field
    origin: Vector3,

    /// The strength of the field
    strength: f32,
}

impl RadialForce {
    /// Creates a new radial force
    pub fn new(origin: Vector3, strength: f32) -> Self {
        Self { origin, strength }
    }

    /// Gets the center of the field
    pub fn get_origin(&self) -> Vector3 {
        self.origin
    }

    /// Gets the strength of the field
    pub fn get_strength(&self) -> f32 {
        self.strength
    }
}

impl ForceGenerator for RadialForce {
    fn force_type(&self) -> &'static str {
        "Radial"
    }

    fn compute_force(&self, position: Vector3, _velocity: Vector3, _mass: f32) -> Vector3 {
        let distance = position.distance(&self.origin);

        // The field is singular at its origin
        if distance <= EPSILON {
            return Vector3::zero();
        }

        (position - self.origin) * (-self.strength / (distance * distance * distance))
    }
}
