use crate::forces::ForceGenerator;
use crate::math::Vector3;

/// Linear drag relative to a moving medium: `F = -b * (v - v_medium)`
#[derive(Debug, Clone, PartialEq)]
pub struct DragForce {
    /// Velocity of the surrounding medium (wind)
    medium_velocity: Vector3,

    /// Linear drag coefficient
    coefficient: f32,
}

impl DragForce {
    /// Creates a new drag force
    pub fn new(medium_velocity: Vector3, coefficient: f32) -> Self {
        Self {
            medium_velocity,
            coefficient,
        }
    }

    /// Gets the velocity of the medium
    pub fn get_medium_velocity(&self) -> Vector3 {
        self.medium_velocity
    }

    /// Gets the drag coefficient
    pub fn get_coefficient(&self) -> f32 {
        self.coefficient
    }
}

impl ForceGenerator for DragForce {
    fn force_type(&self) -> &'static str {
        "Drag"
    }

    fn compute_force(&self, _position: Vector3, velocity: Vector3, _mass: f32) -> Vector3 {
        (velocity - self.medium_velocity) * -self.coefficient
    }
}
