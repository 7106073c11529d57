mod force_generator;
mod gravity;
mod drag;
mod radial;

pub use self::force_generator::{ForceGenerator, ConstantForce};
pub use self::gravity::GravityForce;
pub use self::drag::DragForce;
pub use self::radial::RadialForce;

use crate::math::Vector3;

/// The closed set of force fields a simulation can be configured with
#[derive(Debug, Clone, PartialEq)]
pub enum Force {
    Constant(ConstantForce),
    Gravity(GravityForce),
    Drag(DragForce),
    Radial(RadialForce),
}

impl Force {
    fn generator(&self) -> &dyn ForceGenerator {
        match self {
            Force::Constant(force) => force,
            Force::Gravity(force) => force,
            Force::Drag(force) => force,
            Force::Radial(force) => force,
        }
    }
}

impl ForceGenerator for Force {
    fn force_type(&self) -> &'static str {
        self.generator().force_type()
    }

    fn compute_force(&self, position: Vector3, velocity: Vector3, mass: f32) -> Vector3 {
        self.generator().compute_force(position, velocity, mass)
    }
}

impl From<ConstantForce> for Force {
    fn from(force: ConstantForce) -> Self {
        Force::Constant(force)
    }
}

impl From<GravityForce> for Force {
    fn from(force: GravityForce) -> Self {
        Force::Gravity(force)
    }
}

impl From<DragForce> for Force {
    fn from(force: DragForce) -> Self {
        Force::Drag(force)
    }
}

impl From<RadialForce> for Force {
    fn from(force: RadialForce) -> Self {
        Force::Radial(force)
    }
}

/// Sums every force acting on a particle and divides by its mass.
///
/// Returns `None` when the mass is zero, negative or not finite, since no
/// meaningful acceleration exists for such a particle.
pub fn net_acceleration<F: ForceGenerator>(
    forces: &[F],
    position: Vector3,
    velocity: Vector3,
    mass: f32,
) -> Option<Vector3> {
    if !mass.is_finite() || mass <= 0.0 {
        return None;
    }
    let total: Vector3 = forces
        .iter()
        .map(|force| force.compute_force(position, velocity, mass))
        .sum();
    Some(total / mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn net_acceleration_sums_and_divides() {
        let forces: Vec<Force> = vec![
            GravityForce::new(Vector3::new(0.0, -10.0, 0.0)).into(),
            ConstantForce::new(Vector3::new(4.0, 0.0, 0.0)).into(),
        ];
        let a = net_acceleration(&forces, Vector3::zero(), Vector3::zero(), 2.0).unwrap();
        assert_relative_eq!(a, Vector3::new(2.0, -10.0, 0.0));
    }

    #[test]
    fn net_acceleration_rejects_zero_mass() {
        let forces: Vec<Force> = vec![ConstantForce::new(Vector3::unit_x()).into()];
        assert!(net_acceleration(&forces, Vector3::zero(), Vector3::zero(), 0.0).is_none());
    }

    #[test]
    fn enum_dispatch_reports_type() {
        let force: Force = DragForce::new(Vector3::zero(), 0.1).into();
        assert_eq!(force.force_type(), "Drag");
    }
}
