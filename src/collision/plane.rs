use crate::collision::{Collider, Side};
use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::particles::Particle;
use crate::Result;

/// An infinite plane defined by a point on it and a unit normal
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneCollider {
    /// A point on the plane
    point: Vector3,

    /// The normal vector of the plane (normalized)
    normal: Vector3,
}

impl PlaneCollider {
    /// Creates a new plane from a point and a normal; the normal is normalized
    pub fn new(point: Vector3, normal: Vector3) -> Result<Self> {
        if !point.is_finite() || !normal.is_finite() {
            return Err(PhysicsError::InvalidParameter(
                "plane point and normal must be finite".into(),
            ));
        }
        if normal.is_zero() {
            return Err(PhysicsError::InvalidParameter(
                "plane normal must be non-zero".into(),
            ));
        }
        Ok(Self {
            point,
            normal: normal.normalize(),
        })
    }

    /// Returns a point on the plane
    pub fn point(&self) -> Vector3 {
        self.point
    }

    /// Returns the unit normal of the plane
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns the signed distance from a point to the plane
    pub fn signed_distance_to(&self, position: Vector3) -> f32 {
        self.normal.dot(&(position - self.point))
    }
}

impl Collider for PlaneCollider {
    fn collider_type(&self) -> &'static str {
        "Plane"
    }

    fn which_side(&self, position: Vector3) -> Side {
        Side::from_signed_distance(self.signed_distance_to(position))
    }

    fn on_collide(&self, particle: &mut Particle) {
        particle.velocity = particle.velocity.reflect(&self.normal);
    }
}
