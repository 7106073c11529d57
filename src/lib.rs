pub mod math;
pub mod core;
pub mod particles;
pub mod emitters;
pub mod forces;
pub mod collision;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{ParticleSimulator, SimulationConfig, EmitterHandle, StepStats};
pub use crate::particles::{Particle, ParticleSnapshot, ParticleType};
pub use crate::integration::IntegrationMethod;
pub use crate::math::{Vector3, UniformRange};

/// Error types for the particle simulation
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Unknown {kind} type: {name:?}")]
        UnknownType { kind: &'static str, name: String },

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for particle simulation operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
