use rand::Rng;
use std::f32::consts::TAU;

use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::Result;

/// Emits every particle from a single fixed position.
///
/// The launch direction is the x axis rotated by a uniform angle about z and
/// then by an independent uniform angle about y. The resulting directions
/// cluster toward the poles; they are not uniform over the sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEmitter {
    position: Vector3,
}

impl PointEmitter {
    /// Creates a new point emitter
    pub fn new(position: Vector3) -> Result<Self> {
        if !position.is_finite() {
            return Err(PhysicsError::InvalidParameter(
                "point emitter position must be finite".into(),
            ));
        }
        Ok(Self { position })
    }

    /// Returns the emission position
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Draws a launch direction (unit length)
    pub fn sample_direction<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        let polar = rng.gen::<f32>() * TAU;
        let azimuth = rng.gen::<f32>() * TAU;

        Vector3::unit_x()
            .rotate_about_axis(&Vector3::unit_z(), polar)
            .rotate_about_axis(&Vector3::unit_y(), azimuth)
    }

    pub(crate) fn sample_launch<R: Rng + ?Sized>(&self, speed: f32, rng: &mut R) -> (Vector3, Vector3) {
        (self.position, self.sample_direction(rng) * speed)
    }
}
