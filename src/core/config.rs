use crate::collision::{ColliderShape, PlaneCollider};
use crate::emitters::{DiskEmitter, Emitter, EmitterShape, PointEmitter};
use crate::error::PhysicsError;
use crate::forces::{ConstantForce, DragForce, Force, GravityForce, RadialForce};
use crate::integration::{IntegrationMethod, Rk4Variant};
use crate::math::{UniformRange, Vector3};
use crate::particles::ParticleType;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration for a particle simulation, consumed once at construction
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Particle type table, referenced by index from emitters
    pub particles: Vec<ParticleType>,

    /// Emitters, in order
    #[cfg_attr(feature = "serialize", serde(default))]
    pub emitters: Vec<EmitterConfig>,

    /// Force fields, summed in order
    #[cfg_attr(feature = "serialize", serde(default))]
    pub forces: Vec<ForceConfig>,

    /// Colliders, resolved in order
    #[cfg_attr(feature = "serialize", serde(default))]
    pub colliders: Vec<ColliderConfig>,

    /// Integration method for the dynamics pass
    #[cfg_attr(feature = "serialize", serde(default))]
    pub method: IntegrationMethod,

    /// Fourth-stage variant used when `method` is RK4
    #[cfg_attr(feature = "serialize", serde(default))]
    pub rk4_variant: Rk4Variant,
}

/// Configuration of a single emitter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EmitterConfig {
    /// Emission geometry (`"type"` and `"parameters"` in serialized form)
    #[cfg_attr(feature = "serialize", serde(flatten))]
    pub kind: EmitterKind,

    /// Indices into the particle type table
    pub particles: Vec<usize>,

    /// Expected spawns per second
    pub rate: f32,

    /// Maximum number of live particles
    pub limit: usize,

    /// Launch speed range
    pub velocity: UniformRange,
}

/// Emitter geometry parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "type", content = "parameters", rename_all = "lowercase"))]
pub enum EmitterKind {
    Point {
        position: Vector3,
    },
    Disk {
        position: Vector3,
        direction: Vector3,
        radius: f32,
    },
}

/// Force field parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "type", content = "parameters", rename_all = "lowercase"))]
pub enum ForceConfig {
    Constant {
        force: Vector3,
    },
    Gravity {
        acceleration: Vector3,
    },
    Drag {
        /// Velocity of the medium
        wind: Vector3,
        /// Linear drag coefficient
        drag: f32,
    },
    Radial {
        position: Vector3,
        strength: f32,
    },
}

/// Collider parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "type", content = "parameters", rename_all = "lowercase"))]
pub enum ColliderConfig {
    Plane {
        position: Vector3,
        normal: Vector3,
    },
}

impl SimulationConfig {
    /// Creates an empty configuration using RK4
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from its JSON form
    #[cfg(feature = "serialize")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PhysicsError::InvalidConfig(e.to_string()))
    }

    /// Appends a particle type to the table
    pub fn with_particle_type(mut self, particle_type: ParticleType) -> Self {
        self.particles.push(particle_type);
        self
    }

    /// Appends an emitter
    pub fn with_emitter(mut self, emitter: EmitterConfig) -> Self {
        self.emitters.push(emitter);
        self
    }

    /// Appends a force field
    pub fn with_force(mut self, force: ForceConfig) -> Self {
        self.forces.push(force);
        self
    }

    /// Appends a collider
    pub fn with_collider(mut self, collider: ColliderConfig) -> Self {
        self.colliders.push(collider);
        self
    }

    /// Selects the integration method
    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    /// Selects the RK4 fourth-stage variant
    pub fn with_rk4_variant(mut self, variant: Rk4Variant) -> Self {
        self.rk4_variant = variant;
        self
    }

    /// Checks the whole configuration without building a simulator
    pub fn validate(&self) -> Result<()> {
        self.build_particle_types()?;
        self.build_emitters()?;
        self.build_forces()?;
        self.build_colliders()?;
        Ok(())
    }

    pub(crate) fn build_particle_types(&self) -> Result<Vec<ParticleType>> {
        if self.particles.is_empty() {
            return Err(PhysicsError::InvalidConfig(
                "particle type table is empty".into(),
            ));
        }
        for (index, particle_type) in self.particles.iter().enumerate() {
            particle_type.validate().map_err(|e| {
                PhysicsError::InvalidConfig(format!("particle type {index}: {e}"))
            })?;
        }
        Ok(self.particles.clone())
    }

    pub(crate) fn build_emitters(&self) -> Result<Vec<Emitter>> {
        let table = self.build_particle_types()?;
        self.emitters
            .iter()
            .enumerate()
            .map(|(index, emitter)| {
                emitter
                    .build(&table)
                    .map_err(|e| PhysicsError::InvalidConfig(format!("emitter {index}: {e}")))
            })
            .collect()
    }

    pub(crate) fn build_forces(&self) -> Result<Vec<Force>> {
        self.forces
            .iter()
            .enumerate()
            .map(|(index, force)| {
                force
                    .build()
                    .map_err(|e| PhysicsError::InvalidConfig(format!("force {index}: {e}")))
            })
            .collect()
    }

    pub(crate) fn build_colliders(&self) -> Result<Vec<ColliderShape>> {
        self.colliders
            .iter()
            .enumerate()
            .map(|(index, collider)| {
                collider
                    .build()
                    .map_err(|e| PhysicsError::InvalidConfig(format!("collider {index}: {e}")))
            })
            .collect()
    }
}

impl EmitterConfig {
    /// Creates a point emitter configuration
    pub fn point(
        position: Vector3,
        particles: Vec<usize>,
        rate: f32,
        limit: usize,
        velocity: UniformRange,
    ) -> Self {
        Self {
            kind: EmitterKind::Point { position },
            particles,
            rate,
            limit,
            velocity,
        }
    }

    /// Creates a disk emitter configuration
    pub fn disk(
        position: Vector3,
        direction: Vector3,
        radius: f32,
        particles: Vec<usize>,
        rate: f32,
        limit: usize,
        velocity: UniformRange,
    ) -> Self {
        Self {
            kind: EmitterKind::Disk {
                position,
                direction,
                radius,
            },
            particles,
            rate,
            limit,
            velocity,
        }
    }

    /// Builds the emitter against a particle type table
    pub fn build(&self, type_table: &[ParticleType]) -> Result<Emitter> {
        let shape: EmitterShape = match self.kind {
            EmitterKind::Point { position } => PointEmitter::new(position)?.into(),
            EmitterKind::Disk {
                position,
                direction,
                radius,
            } => DiskEmitter::new(position, direction, radius)?.into(),
        };
        Emitter::new(
            shape,
            type_table,
            self.particles.clone(),
            self.rate,
            self.limit,
            self.velocity,
        )
    }
}

impl ForceConfig {
    /// Builds the force field
    pub fn build(&self) -> Result<Force> {
        let force: Force = match *self {
            ForceConfig::Constant { force } => {
                require_finite_vector("constant force", force)?;
                ConstantForce::new(force).into()
            }
            ForceConfig::Gravity { acceleration } => {
                require_finite_vector("gravity acceleration", acceleration)?;
                GravityForce::new(acceleration).into()
            }
            ForceConfig::Drag { wind, drag } => {
                require_finite_vector("drag wind", wind)?;
                require_finite_scalar("drag coefficient", drag)?;
                DragForce::new(wind, drag).into()
            }
            ForceConfig::Radial { position, strength } => {
                require_finite_vector("radial origin", position)?;
                require_finite_scalar("radial strength", strength)?;
                RadialForce::new(position, strength).into()
            }
        };
        Ok(force)
    }
}

impl ColliderConfig {
    /// Builds the collider
    pub fn build(&self) -> Result<ColliderShape> {
        match *self {
            ColliderConfig::Plane { position, normal } => {
                Ok(PlaneCollider::new(position, normal)?.into())
            }
        }
    }
}

fn require_finite_vector(what: &str, value: Vector3) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidParameter(format!("{what} must be finite, got {value}")))
    }
}

fn require_finite_scalar(what: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidParameter(format!("{what} must be finite, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_type() -> ParticleType {
        ParticleType::new(UniformRange::constant(1.0), UniformRange::new(0.5, 1.5))
    }

    #[test]
    fn empty_type_table_is_rejected() {
        let config = SimulationConfig::new();
        assert!(matches!(config.validate(), Err(PhysicsError::InvalidConfig(_))));
    }

    #[test]
    fn bad_emitter_reports_its_index() {
        let config = SimulationConfig::new()
            .with_particle_type(unit_type())
            .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], 10.0, 10, UniformRange::new(1.0, 2.0)))
            .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], -1.0, 10, UniformRange::new(1.0, 2.0)));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("emitter 1"), "{err}");
    }

    #[test]
    fn non_finite_force_is_rejected() {
        let config = SimulationConfig::new()
            .with_particle_type(unit_type())
            .with_force(ForceConfig::Drag { wind: Vector3::zero(), drag: f32::NAN });
        assert!(config.validate().is_err());
    }

    #[test]
    fn valid_config_passes() {
        let config = SimulationConfig::new()
            .with_particle_type(unit_type())
            .with_emitter(EmitterConfig::disk(
                Vector3::new(10.0, 0.0, 0.0),
                Vector3::new(-1.0, 1.2, -0.5),
                3.0,
                vec![0],
                30.0,
                10_000,
                UniformRange::new(10.0, 20.0),
            ))
            .with_force(ForceConfig::Gravity { acceleration: Vector3::new(0.0, -9.81, 0.0) })
            .with_collider(ColliderConfig::Plane {
                position: Vector3::new(0.0, -5.0, 0.0),
                normal: Vector3::new(0.3, 0.9, 0.0),
            })
            .with_method(IntegrationMethod::Euler);
        assert!(config.validate().is_ok());
    }
}
