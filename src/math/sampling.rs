//! Random sampling helpers shared by emitters.
//!
//! Every helper is generic over the random source so the simulator can own a
//! single generator and tests can inject their own.

use rand::Rng;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

use crate::error::PhysicsError;
use crate::Result;

/// A closed interval `[min, max]` sampled uniformly.
///
/// Serialized as a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(from = "[f32; 2]", into = "[f32; 2]"))]
pub struct UniformRange {
    pub min: f32,
    pub max: f32,
}

impl UniformRange {
    /// Creates a new range
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A degenerate range that always samples `value`
    pub fn constant(value: f32) -> Self {
        Self { min: value, max: value }
    }

    /// Draws a value uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        sample_uniform(rng, self.min, self.max)
    }

    /// Returns true if `value` lies inside the range
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks that both bounds are finite and ordered
    pub fn validate(&self, what: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "{what} range must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(PhysicsError::InvalidParameter(format!(
                "{what} range is inverted: [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl From<[f32; 2]> for UniformRange {
    fn from(pair: [f32; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<UniformRange> for [f32; 2] {
    fn from(range: UniformRange) -> Self {
        [range.min, range.max]
    }
}

/// Draws a value uniformly from `[min, max)`
#[inline]
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Draws an exponentially distributed inter-arrival time for a process with the given rate
#[inline]
pub fn sample_exponential<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> f64 {
    // 1 - U lies in (0, 1], so the logarithm stays finite
    let u: f64 = rng.gen();
    -(1.0 / rate) * (1.0 - u).ln()
}

/// Draws an index uniformly from `0..len`. `len` must be non-zero.
#[inline]
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}
