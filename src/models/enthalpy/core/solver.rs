//! The column solver contract and a pure-conduction implementation.
//!
//! The verification harness only talks to solvers through [`EnthalpySolver`].
//! A production solver with advection, strain heating and phase tracking can be
//! plugged in by implementing the same trait and a matching [`SolverFactory`].

mod conduction;
mod error;
mod remap;
mod tridiagonal;

pub use conduction::{ConductionConfig, ConductionSolver, TimeScheme};
pub use error::{Boundary, SolverError};

use uom::si::f64::{HeatFluxDensity, Length, Time};

use crate::support::{ice::IceProperties, units::SpecificEnthalpy};

use super::column::{Column, ColumnGrid};

/// Boundary condition for one end of the column.
///
/// A heat flux `F` prescribes `K·∂E/∂z = F` at the boundary, where `K = k/c`.
/// Positive flux means enthalpy increases upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    Dirichlet(SpecificEnthalpy),
    HeatFlux(HeatFluxDensity),
}

/// The pair of conditions applied before every solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    pub base: BoundaryCondition,
    pub surface: BoundaryCondition,
}

/// One implicit time step of column enthalpy transport.
///
/// Each step must follow the same order: [`prepare`](Self::prepare), exactly one
/// condition per boundary, [`solve`](Self::solve), then
/// [`remap_to_column`](Self::remap_to_column). Implementations report ordering
/// violations as [`SolverError`]s rather than panicking.
pub trait EnthalpySolver {
    /// Time step length, fixed at construction.
    fn time_step(&self) -> Time;

    /// Reads the column state and clears previously set boundary conditions.
    ///
    /// `marginal` flags thin ice near a margin; `ice_thickness` is the height of
    /// the ice surface above the base.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the column cannot be handled by this solver.
    fn prepare(
        &mut self,
        column: &Column,
        marginal: bool,
        ice_thickness: Length,
    ) -> Result<(), SolverError>;

    /// Holds the basal enthalpy fixed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the solver is not prepared or the base already has a condition.
    fn set_basal_dirichlet(&mut self, enthalpy: SpecificEnthalpy) -> Result<(), SolverError>;

    /// Prescribes the basal heat flux.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the solver is not prepared or the base already has a condition.
    fn set_basal_heat_flux(&mut self, flux: HeatFluxDensity) -> Result<(), SolverError>;

    /// Holds the surface enthalpy fixed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the solver is not prepared or the surface already has a condition.
    fn set_surface_dirichlet(&mut self, enthalpy: SpecificEnthalpy) -> Result<(), SolverError>;

    /// Prescribes the surface heat flux.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the solver is not prepared or the surface already has a condition.
    fn set_surface_heat_flux(&mut self, flux: HeatFluxDensity) -> Result<(), SolverError>;

    /// Advances one time step and returns the enthalpy on the solver's own grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NonConvergence`] if the step cannot be solved, or an
    /// ordering error if the solver is not ready.
    fn solve(&mut self) -> Result<Vec<f64>, SolverError>;

    /// Projects a profile from the solver's grid onto the column, in place.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the profile or column does not match this solver's grids.
    fn remap_to_column(&self, profile: &[f64], column: &mut Column) -> Result<(), SolverError>;

    /// Applies both boundary conditions through the matching setters.
    ///
    /// # Errors
    ///
    /// Propagates errors from the setters.
    fn apply(&mut self, conditions: &BoundaryConditions) -> Result<(), SolverError> {
        match conditions.base {
            BoundaryCondition::Dirichlet(value) => self.set_basal_dirichlet(value)?,
            BoundaryCondition::HeatFlux(flux) => self.set_basal_heat_flux(flux)?,
        }
        match conditions.surface {
            BoundaryCondition::Dirichlet(value) => self.set_surface_dirichlet(value),
            BoundaryCondition::HeatFlux(flux) => self.set_surface_heat_flux(flux),
        }
    }
}

/// Builds a fresh solver session for one column.
pub trait SolverFactory {
    type Solver: EnthalpySolver;

    /// Creates a solver for columns on `grid` stepping by `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the solver cannot be configured.
    fn build(
        &self,
        grid: &ColumnGrid,
        dt: Time,
        properties: &IceProperties,
    ) -> Result<Self::Solver, SolverError>;
}
