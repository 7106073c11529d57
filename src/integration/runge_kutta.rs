use crate::integration::{Derivative, Integrator, PhaseState};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Which state the fourth RK4 stage is evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "kebab-case"))]
pub enum Rk4Variant {
    /// Classical RK4: `k4 = F(s + h k3)`
    #[default]
    Standard,

    /// Compatibility mode: `k4 = F(s + h k1)`.
    ///
    /// Only second-order accurate; kept to reproduce older trajectories.
    LegacyFirstStageOffset,
}

/// Fourth-order Runge-Kutta integrator on the paired state `(x, v)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaIntegrator {
    variant: Rk4Variant,
}

impl RungeKuttaIntegrator {
    /// Creates a new classical Runge-Kutta integrator
    pub fn new() -> Self {
        Self::with_variant(Rk4Variant::Standard)
    }

    /// Creates a Runge-Kutta integrator using the given fourth-stage variant
    pub fn with_variant(variant: Rk4Variant) -> Self {
        Self { variant }
    }

    /// Returns the fourth-stage variant in use
    pub fn variant(&self) -> Rk4Variant {
        self.variant
    }
}

impl Integrator for RungeKuttaIntegrator {
    fn integrate(&self, derivative: &Derivative<'_>, state: PhaseState, dt: f32) -> PhaseState {
        let half = dt * 0.5;

        let k1 = derivative(&state);
        let k2 = derivative(&state.offset(&k1, half));
        let k3 = derivative(&state.offset(&k2, half));
        let k4 = match self.variant {
            Rk4Variant::Standard => derivative(&state.offset(&k3, dt)),
            Rk4Variant::LegacyFirstStageOffset => derivative(&state.offset(&k1, dt)),
        };

        // Weighted average of the stage slopes, weights 1, 2, 2, 1
        let slope = PhaseState {
            position: (k1.position + k2.position * 2.0 + k3.position * 2.0 + k4.position) / 6.0,
            velocity: (k1.velocity + k2.velocity * 2.0 + k3.velocity * 2.0 + k4.velocity) / 6.0,
        };

        state.offset(&slope, dt)
    }

    fn name(&self) -> &str {
        match self.variant {
            Rk4Variant::Standard => "RungeKutta4",
            Rk4Variant::LegacyFirstStageOffset => "RungeKutta4Legacy",
        }
    }
}
