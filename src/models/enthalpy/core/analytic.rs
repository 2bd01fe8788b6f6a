//! Closed-form solutions of column conduction with mixed boundary conditions.
//!
//! Each solution is a decaying eigenmode on top of the linear steady state:
//!
//! ```text
//! E(z, t) = A·exp(−λ²α²t)·sin(λ·φ(z)) + steady(z)
//! ```
//!
//! with `A = 25·L` J/kg and the first mode `n = 1` of the homogeneous problem.

use std::{f64::consts::PI, fmt};

use thiserror::Error;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Length, Time},
    length::meter,
    time::second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{SpecificEnthalpy, SpecificEnthalpyGradient, ThermalDiffusivity},
};

/// Eigenmode index of the transient component.
const MODE: f64 = 1.0;

/// Transient amplitude per meter of column, so `A = 25·L` J/kg.
const AMPLITUDE_PER_METER: f64 = 25.0;

/// Amplitude `A` of the transient mode on a column of height `length`.
#[must_use]
pub fn transient_amplitude(length: Length) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<joule_per_kilogram>(AMPLITUDE_PER_METER * length.get::<meter>())
}

/// Boundary condition arrangement of a verification scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Dirichlet at the base, Neumann at the surface.
    DirichletNeumann,
    /// Neumann at the base, Dirichlet at the surface.
    NeumannDirichlet,
}

impl Regime {
    /// Short tag (`DN` or `ND`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::DirichletNeumann => "DN",
            Self::NeumannDirichlet => "ND",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirichletNeumann => f.write_str("Dirichlet at the base, Neumann at the surface"),
            Self::NeumannDirichlet => f.write_str("Neumann at the base, Dirichlet at the surface"),
        }
    }
}

/// Errors constructing an [`AnalyticSolution`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticError {
    #[error("invalid domain length: {length:?}")]
    Length { length: Length },
    #[error("invalid thermal diffusivity: {diffusivity:?}")]
    Diffusivity { diffusivity: ThermalDiffusivity },
}

/// Exact enthalpy `E(z, t)` for one boundary regime.
///
/// Immutable and stateless: it can be evaluated at any `(z, t)` in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticSolution {
    regime: Regime,
    /// Domain length `L`, m.
    length: f64,
    /// Dirichlet value `U0` (DN) or `UL` (ND), J/kg.
    reference: f64,
    /// Steady-state gradient `Q`, J/(kg·m).
    gradient: f64,
    /// `α²`, m²/s.
    diffusivity: f64,
    /// Eigenvalue `λ`, 1/m.
    lambda: f64,
    /// Amplitude `A`, J/kg.
    amplitude: f64,
}

impl AnalyticSolution {
    /// Solution with enthalpy `base` held at `z = 0` and gradient `gradient` at `z = L`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticError`] if the length or diffusivity is not strictly positive.
    pub fn dirichlet_neumann(
        length: Length,
        base: SpecificEnthalpy,
        gradient: SpecificEnthalpyGradient,
        diffusivity: ThermalDiffusivity,
    ) -> Result<Self, AnalyticError> {
        Self::new(
            Regime::DirichletNeumann,
            length,
            base.get::<joule_per_kilogram>(),
            gradient.value,
            diffusivity,
        )
    }

    /// Solution with gradient `gradient` at `z = 0` and enthalpy `surface` held at `z = L`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticError`] if the length or diffusivity is not strictly positive.
    pub fn neumann_dirichlet(
        length: Length,
        gradient: SpecificEnthalpyGradient,
        surface: SpecificEnthalpy,
        diffusivity: ThermalDiffusivity,
    ) -> Result<Self, AnalyticError> {
        Self::new(
            Regime::NeumannDirichlet,
            length,
            surface.get::<joule_per_kilogram>(),
            gradient.value,
            diffusivity,
        )
    }

    fn new(
        regime: Regime,
        length: Length,
        reference: f64,
        gradient: f64,
        diffusivity: ThermalDiffusivity,
    ) -> Result<Self, AnalyticError> {
        if StrictlyPositive::check(&length.value).is_err() {
            return Err(AnalyticError::Length { length });
        }
        if StrictlyPositive::check(&diffusivity.value).is_err() {
            return Err(AnalyticError::Diffusivity { diffusivity });
        }

        let l = length.get::<meter>();
        let lambda = match regime {
            Regime::DirichletNeumann => (PI / 2.0 + MODE * PI) / l,
            Regime::NeumannDirichlet => (-PI / 2.0 + MODE * PI) / l,
        };

        Ok(Self {
            regime,
            length: l,
            reference,
            gradient,
            diffusivity: diffusivity.value,
            lambda,
            amplitude: AMPLITUDE_PER_METER * l,
        })
    }

    #[must_use]
    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Eigenvalue `λ` of the transient mode, 1/m.
    #[must_use]
    pub fn eigenvalue(&self) -> f64 {
        self.lambda
    }

    /// E-folding time `1/(λ²α²)` of the transient mode.
    #[must_use]
    pub fn decay_time(&self) -> Time {
        Time::new::<second>(1.0 / self.decay_rate())
    }

    /// Exact enthalpy at height `z` and time `t`.
    #[must_use]
    pub fn enthalpy(&self, z: Length, t: Time) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<joule_per_kilogram>(
            self.evaluate(z.get::<meter>(), t.get::<second>()),
        )
    }

    /// Long-time limit of the solution at height `z`.
    #[must_use]
    pub fn steady(&self, z: Length) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<joule_per_kilogram>(self.steady_at(z.get::<meter>()))
    }

    /// Vertical derivative `∂E/∂z` at height `z` and time `t`.
    #[must_use]
    pub fn gradient(&self, z: Length, t: Time) -> SpecificEnthalpyGradient {
        let z = z.get::<meter>();
        let scale = self.amplitude * self.envelope(t.get::<second>()) * self.lambda;
        let transient = match self.regime {
            Regime::DirichletNeumann => scale * (self.lambda * z).cos(),
            Regime::NeumannDirichlet => -scale * (self.lambda * (self.length - z)).cos(),
        };
        SpecificEnthalpy::new::<joule_per_kilogram>(transient + self.gradient)
            / Length::new::<meter>(1.0)
    }

    /// Exact enthalpies (J/kg) at heights `z` (m) and time `t`.
    #[must_use]
    pub fn profile(&self, z: &[f64], t: Time) -> Vec<f64> {
        let t = t.get::<second>();
        z.iter().map(|&z| self.evaluate(z, t)).collect()
    }

    /// Steady-state enthalpies (J/kg) at heights `z` (m).
    #[must_use]
    pub fn steady_profile(&self, z: &[f64]) -> Vec<f64> {
        z.iter().map(|&z| self.steady_at(z)).collect()
    }

    fn evaluate(&self, z: f64, t: f64) -> f64 {
        let phase = match self.regime {
            Regime::DirichletNeumann => z,
            Regime::NeumannDirichlet => self.length - z,
        };
        self.amplitude * self.envelope(t) * (self.lambda * phase).sin() + self.steady_at(z)
    }

    fn steady_at(&self, z: f64) -> f64 {
        match self.regime {
            Regime::DirichletNeumann => self.reference + self.gradient * z,
            Regime::NeumannDirichlet => self.reference + self.gradient * (z - self.length),
        }
    }

    fn envelope(&self, t: f64) -> f64 {
        (-self.decay_rate() * t).exp()
    }

    fn decay_rate(&self) -> f64 {
        self.lambda * self.lambda * self.diffusivity
    }
}
