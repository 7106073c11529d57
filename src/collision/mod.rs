mod collider;
mod plane;

pub use self::collider::{Collider, Side};
pub use self::plane::PlaneCollider;

use crate::particles::Particle;

/// The closed set of collider shapes a simulation can be configured with
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    Plane(PlaneCollider),
}

impl Collider for ColliderShape {
    fn collider_type(&self) -> &'static str {
        match self {
            ColliderShape::Plane(plane) => plane.collider_type(),
        }
    }

    fn which_side(&self, position: crate::math::Vector3) -> Side {
        match self {
            ColliderShape::Plane(plane) => plane.which_side(position),
        }
    }

    fn on_collide(&self, particle: &mut Particle) {
        match self {
            ColliderShape::Plane(plane) => plane.on_collide(particle),
        }
    }
}

impl From<PlaneCollider> for ColliderShape {
    fn from(plane: PlaneCollider) -> Self {
        ColliderShape::Plane(plane)
    }
}
