//! Column enthalpy solver verification.
//!
//! This module provides [`ColumnVerification`], a [`twine_core::Model`] that
//! runs a verification [`Scenario`] and reports how far the solver lands from
//! the analytic solution. The computational core is in the internal `core`
//! module; its public types are re-exported here.
//!
//! Two regimes are supported, each pairing a decaying eigenmode with a linear
//! steady state:
//!
//! - [`Regime::DirichletNeumann`]: enthalpy held at the base, heat flux at the surface.
//! - [`Regime::NeumannDirichlet`]: heat flux at the base, enthalpy held at the surface.
//!
//! Convergence studies sweep the time step or the number of levels and fit a
//! power law to the error norms:
//!
//! ```
//! use twine_enthalpy_verification::models::enthalpy::{
//!     ColumnVerification, ConductionConfig, Regime, Sweep, TimeScheme, VerificationConfig,
//! };
//! use uom::si::{f64::Time, time::year};
//!
//! let verification = ColumnVerification::new(
//!     VerificationConfig::default(),
//!     ConductionConfig {
//!         scheme: TimeScheme::BackwardEuler,
//!         refinement: 1,
//!     },
//! );
//!
//! let sweep = Sweep::time(
//!     [100.0, 200.0, 400.0].map(|t| Time::new::<year>(t)),
//!     41,
//!     Time::new::<year>(800.0),
//! );
//! let result = verification
//!     .convergence(Regime::DirichletNeumann, &sweep)
//!     .unwrap();
//!
//! assert!(result.slope_max() > 0.5);
//! println!("{result}");
//! ```

mod core;
mod verification;

pub use self::core::{
    AnalyticError, AnalyticSolution, Boundary, BoundaryCondition, BoundaryConditions, Column,
    ColumnError, ColumnGrid, ConductionConfig, ConductionSolver, ConvergenceResult, DriverError,
    EnthalpySolver, ErrorNorms, FitError, MetricsError, PowerLawFit, Regime, RunOutcome,
    SamplePoint, Scenario, ScenarioError, ScenarioOutcome, SolverError, SolverFactory,
    StudyError, StudySample, Sweep, SweepKind, TimeScheme, VerificationConfig, estimate_order,
    fit_power_law, run, run_scenario, setup, transient_amplitude,
};
pub use verification::ColumnVerification;
