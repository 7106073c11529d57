use crate::math::Vector3;
use crate::particles::Particle;

/// Which side of a collider boundary a point lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Negative,
    On,
    Positive,
}

impl Side {
    /// Classifies a signed distance
    pub fn from_signed_distance(distance: f32) -> Self {
        if distance > 0.0 {
            Side::Positive
        } else if distance < 0.0 {
            Side::Negative
        } else {
            Side::On
        }
    }

    /// Returns true if moving from `before` to `after` counts as crossing the boundary.
    ///
    /// Arriving on the boundary counts; leaving it does not, so a particle
    /// reflected while on the boundary is not reflected again on the way out.
    pub fn crossed(before: Side, after: Side) -> bool {
        before != Side::On && before != after
    }

    /// Returns the side as -1, 0 or +1
    pub fn sign(self) -> i8 {
        match self {
            Side::Negative => -1,
            Side::On => 0,
            Side::Positive => 1,
        }
    }
}

/// A static boundary that reflects particles crossing it.
///
/// Colliders hold no per-particle state; the simulator records each
/// particle's side before integration and compares it afterwards.
pub trait Collider: Send + Sync + std::fmt::Debug {
    /// Returns the type name of the collider
    fn collider_type(&self) -> &'static str;

    /// Classifies a position relative to the boundary
    fn which_side(&self, position: Vector3) -> Side;

    /// Applies the collision response to a particle that crossed the boundary
    fn on_collide(&self, particle: &mut Particle);
}
