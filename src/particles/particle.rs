use crate::core::EmitterHandle;
use crate::integration::PhaseState;
use crate::math::Vector3;

/// A point particle advanced by the simulator
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in world space
    pub position: Vector3,

    /// Linear velocity
    pub velocity: Vector3,

    /// Mass, always positive for emitted particles
    pub mass: f32,

    /// Remaining lifetime in seconds, decremented each step
    pub lifetime: f32,

    /// The emitter that spawned this particle
    emitter: EmitterHandle,
}

impl Particle {
    /// Creates a new particle owned by `emitter`
    pub fn new(
        position: Vector3,
        velocity: Vector3,
        mass: f32,
        lifetime: f32,
        emitter: EmitterHandle,
    ) -> Self {
        Self {
            position,
            velocity,
            mass,
            lifetime,
            emitter,
        }
    }

    /// Returns the handle of the emitter that spawned this particle
    pub fn emitter(&self) -> EmitterHandle {
        self.emitter
    }

    /// Returns true once the remaining lifetime has run out
    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }

    /// Returns true if position and velocity are finite
    pub fn is_finite(&self) -> bool {
        PhaseState::new(self.position, self.velocity).is_finite()
    }

    /// Copies the attributes a renderer needs
    pub fn snapshot(&self) -> ParticleSnapshot {
        ParticleSnapshot {
            position: self.position,
            velocity: self.velocity,
            mass: self.mass,
        }
    }
}

/// Read-only view of a particle for visualization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshot {
    /// Position in world space
    pub position: Vector3,

    /// Linear velocity
    pub velocity: Vector3,

    /// Mass of the particle
    pub mass: f32,
}
