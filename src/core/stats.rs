/// Counters describing what happened during the most recent step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Particles removed because their lifetime ran out
    pub expired: usize,

    /// Particles spawned by emitters
    pub emitted: usize,

    /// Particles removed because their state became non-finite
    pub dropped: usize,

    /// Collider reactions applied
    pub collisions: usize,

    /// Particles alive after the step
    pub active: usize,
}
