pub mod config;
mod simulator;
mod stats;

pub use self::config::{SimulationConfig, EmitterConfig, EmitterKind, ForceConfig, ColliderConfig};
pub use self::simulator::ParticleSimulator;
pub use self::stats::StepStats;

/// Non-owning reference from a particle to the emitter that spawned it.
///
/// An index into the simulator's emitter table, which is never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterHandle(usize);

impl EmitterHandle {
    /// Creates a handle for the emitter at `index`
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index into the emitter table
    pub fn index(self) -> usize {
        self.0
    }
}
