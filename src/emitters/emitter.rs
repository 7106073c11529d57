use rand::Rng;

use crate::core::EmitterHandle;
use crate::emitters::EmitterShape;
use crate::error::PhysicsError;
use crate::math::sampling::{random_index, sample_exponential};
use crate::math::{UniformRange, Vector3};
use crate::particles::{Particle, ParticleType};
use crate::Result;

/// A particle source with a Poisson spawn rate and a cap on live particles
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Emission geometry
    shape: EmitterShape,

    /// Indices into the simulation's particle type table
    type_indices: Vec<usize>,

    /// The particle types resolved from `type_indices`
    particle_types: Vec<ParticleType>,

    /// Expected spawns per second
    rate: f32,

    /// Maximum number of particles alive at once
    limit: usize,

    /// Launch speed range
    speed: UniformRange,

    /// Number of live particles owned by this emitter, never above `limit`
    live_count: usize,
}

impl Emitter {
    /// Creates a new emitter, resolving `type_indices` against the particle type table
    pub fn new(
        shape: EmitterShape,
        type_table: &[ParticleType],
        type_indices: Vec<usize>,
        rate: f32,
        limit: usize,
        speed: UniformRange,
    ) -> Result<Self> {
        if type_indices.is_empty() {
            return Err(PhysicsError::InvalidConfig(
                "emitter must reference at least one particle type".into(),
            ));
        }
        let particle_types = type_indices
            .iter()
            .map(|&index| {
                type_table.get(index).copied().ok_or_else(|| {
                    PhysicsError::ResourceNotFound(format!(
                        "particle type {index} (table has {} entries)",
                        type_table.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "emitter rate must be positive, got {rate}"
            )));
        }
        if limit == 0 {
            return Err(PhysicsError::InvalidParameter(
                "emitter limit must be positive".into(),
            ));
        }
        speed.validate("velocity")?;

        Ok(Self {
            shape,
            type_indices,
            particle_types,
            rate,
            limit,
            speed,
            live_count: 0,
        })
    }

    /// Returns the emission geometry
    pub fn shape(&self) -> &EmitterShape {
        &self.shape
    }

    /// Returns the anchor position of the emitter
    pub fn position(&self) -> Vector3 {
        self.shape.position()
    }

    /// Returns the particle type indices this emitter draws from
    pub fn type_indices(&self) -> &[usize] {
        &self.type_indices
    }

    /// Returns the expected spawn rate (per second)
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Returns the maximum number of concurrently live particles
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the launch speed range
    pub fn speed(&self) -> UniformRange {
        self.speed
    }

    /// Returns the number of live particles owned by this emitter
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Returns how many more particles may be admitted before reaching `limit`
    pub fn capacity(&self) -> usize {
        self.limit - self.live_count
    }

    /// Samples the number of spawn events in an interval of length `dt`, capped at `max`.
    ///
    /// Accumulates exponential inter-arrival times until they exceed `dt`,
    /// which yields a Poisson-distributed count with mean `rate * dt`. Drawing
    /// stops at `max`, so the result is distributed as `min(max, N)`.
    pub fn sample_emitted<R: Rng + ?Sized>(&self, dt: f32, max: usize, rng: &mut R) -> usize {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        let dt = f64::from(dt);
        let rate = f64::from(self.rate);
        let mut elapsed = 0.0;
        let mut count = 0;
        while count < max {
            elapsed += sample_exponential(rng, rate);
            if elapsed > dt {
                break;
            }
            count += 1;
        }
        count
    }

    /// Reserves room for up to `requested` new particles and returns how many were admitted
    pub fn admit(&mut self, requested: usize) -> usize {
        let admitted = requested.min(self.capacity());
        self.live_count += admitted;
        admitted
    }

    /// Releases one live particle slot
    pub fn release(&mut self) {
        self.live_count = self.live_count.saturating_sub(1);
    }

    /// Creates a single new particle owned by `handle`
    pub fn emit<R: Rng + ?Sized>(&self, handle: EmitterHandle, rng: &mut R) -> Particle {
        let speed = self.speed.sample(rng);
        let particle_type = &self.particle_types[random_index(rng, self.particle_types.len())];
        let mass = particle_type.sample_mass(rng);
        let lifetime = particle_type.sample_lifetime(rng);
        let (position, velocity) = self.shape.sample_launch(speed, rng);

        Particle::new(position, velocity, mass, lifetime, handle)
    }
}
