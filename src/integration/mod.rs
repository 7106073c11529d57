mod integrator;
mod euler;
mod runge_kutta;
mod basic;

pub use self::integrator::{Integrator, Derivative, PhaseState};
pub use self::euler::EulerIntegrator;
pub use self::runge_kutta::{RungeKuttaIntegrator, Rk4Variant};
pub use self::basic::{BasicIntegrator, BASIC_FORCE_SCALE, BASIC_VELOCITY_SCALE};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

use crate::error::PhysicsError;

/// Integration method, chosen once when the simulator is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum IntegrationMethod {
    /// Legacy dt-independent scheme, see [`BasicIntegrator`]
    Basic,

    /// Explicit Euler
    Euler,

    /// Classical fourth-order Runge-Kutta
    #[default]
    #[cfg_attr(feature = "serialize", serde(alias = "rk", alias = "runge-kutta"))]
    Rk4,
}

impl IntegrationMethod {
    /// Builds the integrator for this method
    pub fn integrator(self, rk4_variant: Rk4Variant) -> Box<dyn Integrator> {
        match self {
            IntegrationMethod::Basic => Box::new(BasicIntegrator::new()),
            IntegrationMethod::Euler => Box::new(EulerIntegrator::new()),
            IntegrationMethod::Rk4 => Box::new(RungeKuttaIntegrator::with_variant(rk4_variant)),
        }
    }

    /// Returns the canonical name of the method
    pub fn as_str(self) -> &'static str {
        match self {
            IntegrationMethod::Basic => "basic",
            IntegrationMethod::Euler => "euler",
            IntegrationMethod::Rk4 => "rk4",
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntegrationMethod {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(IntegrationMethod::Basic),
            "euler" => Ok(IntegrationMethod::Euler),
            "rk4" | "rk" | "runge-kutta" => Ok(IntegrationMethod::Rk4),
            other => Err(PhysicsError::UnknownType {
                kind: "integration method",
                name: other.to_string(),
            }),
        }
    }
}
