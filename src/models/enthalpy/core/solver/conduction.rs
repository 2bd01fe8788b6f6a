//! Implicit finite-difference solver for pure vertical conduction.
//!
//! Cold ice without advection or strain heating obeys `∂E/∂t = α²·∂²E/∂z²`.
//! The solver discretizes it with centered second differences on an equally
//! spaced internal grid (optionally finer than the column) and a θ-scheme in
//! time. Flux boundaries use a ghost level, so linear profiles are reproduced
//! exactly.

use tracing::trace;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{HeatFluxDensity, Length, Time},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    time::second,
};

use crate::{
    models::enthalpy::core::column::{Column, ColumnGrid},
    support::{
        constraint::{Constraint, StrictlyPositive},
        ice::IceProperties,
        units::SpecificEnthalpy,
    },
};

use super::{Boundary, EnthalpySolver, SolverError, SolverFactory, remap, tridiagonal};

/// Relative tolerance when comparing the ice thickness with the column height.
const THICKNESS_TOLERANCE: f64 = 1e-9;

/// Time discretization of the conduction solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeScheme {
    /// Fully implicit, first order in time.
    #[default]
    BackwardEuler,
    /// Trapezoidal rule, second order in time.
    CrankNicolson,
}

impl TimeScheme {
    /// Weight `θ` of the new time level.
    fn theta(self) -> f64 {
        match self {
            Self::BackwardEuler => 1.0,
            Self::CrankNicolson => 0.5,
        }
    }
}

/// Settings for [`ConductionSolver`].
///
/// Also acts as the [`SolverFactory`] for conduction solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConductionConfig {
    pub scheme: TimeScheme,

    /// Number of internal intervals per column interval.
    pub refinement: usize,
}

impl Default for ConductionConfig {
    fn default() -> Self {
        Self {
            scheme: TimeScheme::BackwardEuler,
            refinement: 1,
        }
    }
}

impl SolverFactory for ConductionConfig {
    type Solver = ConductionSolver;

    fn build(
        &self,
        grid: &ColumnGrid,
        dt: Time,
        properties: &IceProperties,
    ) -> Result<ConductionSolver, SolverError> {
        ConductionSolver::new(grid, dt, properties, *self)
    }
}

/// Condition on one end of the internal system.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Edge {
    /// Fixed enthalpy, J/kg.
    Value(f64),
    /// Fixed `∂E/∂z`, J/(kg·m).
    Gradient(f64),
}

/// Pure-conduction [`EnthalpySolver`].
#[derive(Debug, Clone)]
pub struct ConductionSolver {
    dt: Time,
    scheme: TimeScheme,
    /// `α²`, m²/s.
    diffusivity: f64,
    /// `K = k/c`, kg/(m·s).
    conductivity: f64,
    height: Length,
    column_z: Vec<f64>,
    z: Vec<f64>,
    enthalpy: Vec<f64>,
    base: Option<Edge>,
    surface: Option<Edge>,
    prepared: bool,
}

impl ConductionSolver {
    /// Creates a solver for columns on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if `dt` is not strictly positive, the refinement is
    /// zero, or the ice properties are invalid.
    pub fn new(
        grid: &ColumnGrid,
        dt: Time,
        properties: &IceProperties,
        config: ConductionConfig,
    ) -> Result<Self, SolverError> {
        if StrictlyPositive::check(&dt.value).is_err() {
            return Err(SolverError::TimeStep { dt });
        }
        if config.refinement == 0 {
            return Err(SolverError::Configuration {
                context: "refinement must be at least 1".into(),
            });
        }
        properties.validate()?;

        let levels = (grid.levels() - 1) * config.refinement + 1;
        let internal = ColumnGrid::new(levels, grid.height())?;

        Ok(Self {
            dt,
            scheme: config.scheme,
            diffusivity: properties.diffusivity().value,
            conductivity: properties.enthalpy_conductivity().value,
            height: grid.height(),
            column_z: grid.z().to_vec(),
            z: internal.z().to_vec(),
            enthalpy: vec![0.0; levels],
            base: None,
            surface: None,
            prepared: false,
        })
    }

    /// Heights of the internal grid, m.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    fn set(&mut self, boundary: Boundary, edge: Edge) -> Result<(), SolverError> {
        if !self.prepared {
            return Err(SolverError::NotPrepared);
        }
        let slot = match boundary {
            Boundary::Base => &mut self.base,
            Boundary::Surface => &mut self.surface,
        };
        if slot.is_some() {
            return Err(SolverError::BoundaryConditionAlreadySet { boundary });
        }
        *slot = Some(edge);
        Ok(())
    }

    fn gradient(&self, flux: HeatFluxDensity) -> f64 {
        flux.get::<watt_per_square_meter>() / self.conductivity
    }

    fn check_column(&self, column: &Column) -> Result<(), SolverError> {
        let actual = column.grid().levels();
        if actual != self.column_z.len() {
            return Err(SolverError::GridMismatch {
                expected: self.column_z.len(),
                actual,
            });
        }
        Ok(())
    }
}

impl EnthalpySolver for ConductionSolver {
    fn time_step(&self) -> Time {
        self.dt
    }

    fn prepare(
        &mut self,
        column: &Column,
        marginal: bool,
        ice_thickness: Length,
    ) -> Result<(), SolverError> {
        self.check_column(column)?;

        let height = self.height.get::<meter>();
        if (ice_thickness.get::<meter>() - height).abs() > THICKNESS_TOLERANCE * height {
            return Err(SolverError::IceThickness {
                thickness: ice_thickness,
                height: self.height,
            });
        }

        let (u, v, w) = column.velocity();
        for (field, values) in [
            ("u", u),
            ("v", v),
            ("w", w),
            ("strain heating", column.strain_heating()),
        ] {
            if values.iter().any(|&x| x != 0.0) {
                return Err(SolverError::UnsupportedPhysics { field });
            }
        }

        self.enthalpy = remap::interpolate(&self.column_z, column.enthalpy(), &self.z);
        self.base = None;
        self.surface = None;
        self.prepared = true;

        trace!(marginal, levels = self.z.len(), "prepared conduction column");
        Ok(())
    }

    fn set_basal_dirichlet(&mut self, enthalpy: SpecificEnthalpy) -> Result<(), SolverError> {
        self.set(
            Boundary::Base,
            Edge::Value(enthalpy.get::<joule_per_kilogram>()),
        )
    }

    fn set_basal_heat_flux(&mut self, flux: HeatFluxDensity) -> Result<(), SolverError> {
        let gradient = self.gradient(flux);
        self.set(Boundary::Base, Edge::Gradient(gradient))
    }

    fn set_surface_dirichlet(&mut self, enthalpy: SpecificEnthalpy) -> Result<(), SolverError> {
        self.set(
            Boundary::Surface,
            Edge::Value(enthalpy.get::<joule_per_kilogram>()),
        )
    }

    fn set_surface_heat_flux(&mut self, flux: HeatFluxDensity) -> Result<(), SolverError> {
        let gradient = self.gradient(flux);
        self.set(Boundary::Surface, Edge::Gradient(gradient))
    }

    fn solve(&mut self) -> Result<Vec<f64>, SolverError> {
        if !self.prepared {
            return Err(SolverError::NotPrepared);
        }
        let base = self.base.ok_or(SolverError::MissingBoundaryCondition {
            boundary: Boundary::Base,
        })?;
        let surface = self.surface.ok_or(SolverError::MissingBoundaryCondition {
            boundary: Boundary::Surface,
        })?;

        let n = self.z.len();
        let top = n - 1;
        let dz = self.z[1] - self.z[0];
        let r = self.diffusivity * self.dt.get::<second>() / (dz * dz);
        let theta = self.scheme.theta();
        let implicit = r * theta;
        let explicit = r * (1.0 - theta);
        let e = &self.enthalpy;

        let mut lower = vec![-implicit; n];
        let mut diag = vec![1.0 + 2.0 * implicit; n];
        let mut upper = vec![-implicit; n];
        let mut rhs: Vec<f64> = (0..n)
            .map(|i| {
                if i == 0 || i == top {
                    e[i]
                } else {
                    e[i] + explicit * (e[i - 1] - 2.0 * e[i] + e[i + 1])
                }
            })
            .collect();

        match base {
            Edge::Value(value) => {
                diag[0] = 1.0;
                upper[0] = 0.0;
                rhs[0] = value;
            }
            Edge::Gradient(g) => {
                // Ghost level: E[-1] = E[1] - 2·dz·g.
                upper[0] = -2.0 * implicit;
                rhs[0] += explicit * (2.0 * e[1] - 2.0 * e[0] - 2.0 * dz * g)
                    - implicit * 2.0 * dz * g;
            }
        }

        match surface {
            Edge::Value(value) => {
                diag[top] = 1.0;
                lower[top] = 0.0;
                rhs[top] = value;
            }
            Edge::Gradient(g) => {
                // Ghost level: E[n] = E[n-2] + 2·dz·g.
                lower[top] = -2.0 * implicit;
                rhs[top] += explicit * (2.0 * e[top - 1] - 2.0 * e[top] + 2.0 * dz * g)
                    + implicit * 2.0 * dz * g;
            }
        }

        let solution = tridiagonal::solve(&lower, &diag, &upper, &rhs)?;

        self.enthalpy.clone_from(&solution);
        self.base = None;
        self.surface = None;
        self.prepared = false;

        trace!(r, theta, "conduction step solved");
        Ok(solution)
    }

    fn remap_to_column(&self, profile: &[f64], column: &mut Column) -> Result<(), SolverError> {
        if profile.len() != self.z.len() {
            return Err(SolverError::ProfileLength {
                expected: self.z.len(),
                actual: profile.len(),
            });
        }
        self.check_column(column)?;

        let values = remap::interpolate(&self.z, profile, column.z());
        column.set_profile(&values)?;
        Ok(())
    }
}
