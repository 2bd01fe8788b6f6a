//! Verification of column enthalpy solvers against closed-form solutions.
//!
//! The pieces compose bottom-up: an [`AnalyticSolution`] supplies the exact
//! profile, a [`Column`] holds the state, [`run`] drives an [`EnthalpySolver`]
//! through fixed steps, [`ErrorNorms`] compares the result with the exact
//! profile, and [`estimate_order`] turns a sweep of such runs into empirical
//! convergence orders. [`run_scenario`] wires the first four together for the
//! two reference regimes.

mod analytic;
mod column;
mod driver;
mod metrics;
mod scenario;
mod solver;
mod study;

#[cfg(test)]
mod test_support;

pub use analytic::{AnalyticError, AnalyticSolution, Regime, transient_amplitude};
pub use column::{Column, ColumnError, ColumnGrid};
pub use driver::{DriverError, RunOutcome, run};
pub use metrics::{ErrorNorms, MetricsError};
pub use scenario::{
    Scenario, ScenarioError, ScenarioOutcome, VerificationConfig, run_scenario, setup,
};
pub use solver::{
    Boundary, BoundaryCondition, BoundaryConditions, ConductionConfig, ConductionSolver,
    EnthalpySolver, SolverError, SolverFactory, TimeScheme,
};
pub use study::{
    ConvergenceResult, FitError, PowerLawFit, SamplePoint, StudyError, StudySample, Sweep,
    SweepKind, estimate_order, fit_power_law,
};
