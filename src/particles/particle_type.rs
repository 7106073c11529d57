use rand::Rng;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

use crate::error::PhysicsError;
use crate::math::UniformRange;
use crate::Result;

/// A kind of particle, referenced by index from emitter configurations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ParticleType {
    /// Range the particle mass is drawn from
    pub mass: UniformRange,

    /// Range the particle lifetime (seconds) is drawn from
    pub lifetime: UniformRange,
}

impl ParticleType {
    /// Creates a new particle type
    pub fn new(mass: UniformRange, lifetime: UniformRange) -> Self {
        Self { mass, lifetime }
    }

    /// Draws a mass for a newly emitted particle
    pub fn sample_mass<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.mass.sample(rng)
    }

    /// Draws a lifetime for a newly emitted particle
    pub fn sample_lifetime<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.lifetime.sample(rng)
    }

    /// Checks the ranges; masses must be strictly positive
    pub fn validate(&self) -> Result<()> {
        self.mass.validate("mass")?;
        self.lifetime.validate("lifetime")?;
        if self.mass.min <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "particle mass must be positive, got minimum {}",
                self.mass.min
            )));
        }
        Ok(())
    }
}
