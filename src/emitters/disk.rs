use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::Result;

/// Emits particles from a disk, all travelling along the disk axis.
///
/// The offset radius is drawn uniformly in `[0, radius)`, which concentrates
/// particles toward the center rather than spreading them evenly by area.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskEmitter {
    /// Center of the disk
    position: Vector3,

    /// Unit axis of the disk; also the launch direction
    direction: Vector3,

    radius: f32,

    /// Orthonormal in-plane basis
    basis_a: Vector3,
    basis_b: Vector3,
}

impl DiskEmitter {
    /// Creates a new disk emitter; `direction` is normalized
    pub fn new(position: Vector3, direction: Vector3, radius: f32) -> Result<Self> {
        if !position.is_finite() || !direction.is_finite() {
            return Err(PhysicsError::InvalidParameter(
                "disk emitter position and direction must be finite".into(),
            ));
        }
        if direction.is_zero() {
            return Err(PhysicsError::InvalidParameter(
                "disk emitter direction must be non-zero".into(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "disk emitter radius must be positive, got {radius}"
            )));
        }

        let direction = direction.normalize();
        let basis_a = direction.perpendicular();
        let basis_b = basis_a.rotate_about_axis(&direction, FRAC_PI_2);

        Ok(Self {
            position,
            direction,
            radius,
            basis_a,
            basis_b,
        })
    }

    /// Returns the center of the disk
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Returns the unit axis of the disk
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Returns the disk radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Draws a point on the disk
    pub fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        let r = rng.gen::<f32>() * self.radius;
        let angle = rng.gen::<f32>() * TAU;

        self.position
            .add_scaled(&self.basis_a, angle.cos() * r)
            .add_scaled(&self.basis_b, angle.sin() * r)
    }

    pub(crate) fn sample_launch<R: Rng + ?Sized>(&self, speed: f32, rng: &mut R) -> (Vector3, Vector3) {
        (self.sample_position(rng), self.direction * speed)
    }
}
