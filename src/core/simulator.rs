use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{Collider, ColliderShape, Side};
use crate::core::{EmitterHandle, SimulationConfig, StepStats};
use crate::emitters::Emitter;
use crate::error::PhysicsError;
use crate::forces::{net_acceleration, Force};
use crate::integration::{IntegrationMethod, Integrator, PhaseState};
use crate::math::Vector3;
use crate::particles::{Particle, ParticleSnapshot, ParticleType};
use crate::Result;

/// Owns every particle, emitter, force and collider and advances them in lockstep
pub struct ParticleSimulator {
    /// Particle type table the emitters were resolved against
    particle_types: Vec<ParticleType>,

    /// Active particles
    particles: Vec<Particle>,

    /// Emitters; append-only so particle handles stay valid
    emitters: Vec<Emitter>,

    /// Force fields summed for every particle
    forces: Vec<Force>,

    /// Colliders resolved after integration
    colliders: Vec<ColliderShape>,

    /// The selected integration method
    method: IntegrationMethod,

    /// Integrator built from `method`
    integrator: Box<dyn Integrator>,

    /// Random source for emission
    rng: StdRng,

    /// Total simulated time
    time: f32,

    /// Counters from the most recent step
    last_stats: StepStats,
}

impl ParticleSimulator {
    /// Creates a new simulator from a configuration, seeding emission from OS entropy
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a new simulator drawing emission randomness from `rng`
    pub fn with_rng(config: &SimulationConfig, rng: StdRng) -> Result<Self> {
        let particle_types = config.build_particle_types()?;
        let emitters = config.build_emitters()?;
        let forces = config.build_forces()?;
        let colliders = config.build_colliders()?;
        let integrator = config.method.integrator(config.rk4_variant);

        log::debug!(
            "particle simulator: {} particle types, {} emitters, {} forces, {} colliders, integrator {}",
            particle_types.len(),
            emitters.len(),
            forces.len(),
            colliders.len(),
            integrator.name(),
        );

        Ok(Self {
            particle_types,
            particles: Vec::new(),
            emitters,
            forces,
            colliders,
            method: config.method,
            integrator,
            rng,
            time: 0.0,
            last_stats: StepStats::default(),
        })
    }

    /// Advances the simulation by `dt` seconds and returns the active particles.
    ///
    /// Runs, in order: lifetime expiry, emission, dynamics, collision
    /// resolution. `dt` must be finite and non-negative.
    pub fn update(&mut self, dt: f32) -> Result<&[Particle]> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "time step must be finite and non-negative, got {dt}"
            )));
        }

        let mut stats = StepStats {
            expired: self.expire_particles(dt),
            emitted: self.emit_particles(dt),
            ..StepStats::default()
        };

        let sides_before = self.record_sides();
        self.integrate_particles(dt);
        stats.collisions = self.resolve_collisions(&sides_before);
        stats.dropped = self.drop_non_finite();
        stats.active = self.particles.len();

        self.time += dt;
        self.last_stats = stats;
        log::trace!("step dt={dt}: {stats:?}");

        Ok(&self.particles)
    }

    /// Decrements lifetimes and removes expired particles, releasing their emitter slots
    fn expire_particles(&mut self, dt: f32) -> usize {
        let before = self.particles.len();
        let emitters = &mut self.emitters;

        self.particles.retain_mut(|particle| {
            particle.lifetime -= dt;
            if particle.is_expired() {
                if let Some(emitter) = emitters.get_mut(particle.emitter().index()) {
                    emitter.release();
                }
                false
            } else {
                true
            }
        });

        before - self.particles.len()
    }

    /// Samples each emitter once and appends the admitted particles
    fn emit_particles(&mut self, dt: f32) -> usize {
        let mut emitted = 0;

        for (index, emitter) in self.emitters.iter_mut().enumerate() {
            let sampled = emitter.sample_emitted(dt, emitter.capacity(), &mut self.rng);
            let admitted = emitter.admit(sampled);
            let handle = EmitterHandle::new(index);

            self.particles.reserve(admitted);
            for _ in 0..admitted {
                self.particles.push(emitter.emit(handle, &mut self.rng));
            }
            emitted += admitted;
        }

        emitted
    }

    /// Classifies every particle against every collider
    fn record_sides(&self) -> Vec<Vec<Side>> {
        self.colliders
            .iter()
            .map(|collider| {
                self.particles
                    .iter()
                    .map(|particle| collider.which_side(particle.position))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Advances every particle under the summed force field
    fn integrate_particles(&mut self, dt: f32) {
        let forces = self.forces.as_slice();
        let integrator = &self.integrator;

        for particle in &mut self.particles {
            let mass = particle.mass;
            // A particle without a usable mass coasts instead of picking up NaN
            let derivative = |state: &PhaseState| {
                let acceleration = net_acceleration(forces, state.position, state.velocity, mass)
                    .unwrap_or(Vector3::ZERO);
                PhaseState::new(state.velocity, acceleration)
            };

            let next = integrator.integrate(
                &derivative,
                PhaseState::new(particle.position, particle.velocity),
                dt,
            );
            particle.position = next.position;
            particle.velocity = next.velocity;
        }
    }

    /// Reflects particles whose side changed for any collider
    fn resolve_collisions(&mut self, sides_before: &[Vec<Side>]) -> usize {
        let mut collisions = 0;

        for (collider, before) in self.colliders.iter().zip(sides_before) {
            for (particle, &side) in self.particles.iter_mut().zip(before) {
                if Side::crossed(side, collider.which_side(particle.position)) {
                    collider.on_collide(particle);
                    collisions += 1;
                }
            }
        }

        collisions
    }

    /// Removes particles whose state is no longer finite
    fn drop_non_finite(&mut self) -> usize {
        let before = self.particles.len();
        let emitters = &mut self.emitters;

        self.particles.retain(|particle| {
            if particle.is_finite() {
                return true;
            }
            log::warn!(
                "dropping particle from emitter {} with non-finite state: position {}, velocity {}",
                particle.emitter().index(),
                particle.position,
                particle.velocity,
            );
            if let Some(emitter) = emitters.get_mut(particle.emitter().index()) {
                emitter.release();
            }
            false
        });

        before - self.particles.len()
    }

    /// Returns the active particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Copies the renderer-facing attributes of every active particle
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.particles.iter().map(Particle::snapshot).collect()
    }

    /// Returns the number of active particles
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Returns the particle type table
    pub fn particle_types(&self) -> &[ParticleType] {
        &self.particle_types
    }

    /// Returns the emitters
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// Gets an emitter by its handle
    pub fn emitter(&self, handle: EmitterHandle) -> Result<&Emitter> {
        self.emitters
            .get(handle.index())
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("emitter {}", handle.index())))
    }

    /// Returns the number of live particles owned by an emitter
    pub fn live_count(&self, handle: EmitterHandle) -> Result<usize> {
        self.emitter(handle).map(Emitter::live_count)
    }

    /// Returns the force fields
    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Returns the colliders
    pub fn colliders(&self) -> &[ColliderShape] {
        &self.colliders
    }

    /// Returns the integration method
    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    /// Returns the total simulated time
    pub fn elapsed_time(&self) -> f32 {
        self.time
    }

    /// Returns the counters from the most recent step
    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }
}

impl std::fmt::Debug for ParticleSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSimulator")
            .field("particles", &self.particles.len())
            .field("emitters", &self.emitters.len())
            .field("forces", &self.forces.len())
            .field("colliders", &self.colliders.len())
            .field("integrator", &self.integrator.name())
            .field("time", &self.time)
            .finish()
    }
}
