mod particle;
mod particle_type;

pub use self::particle::{Particle, ParticleSnapshot};
pub use self::particle_type::ParticleType;
