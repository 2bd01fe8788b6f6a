use thiserror::Error;

use crate::{
    models::enthalpy::core::{
        analytic::AnalyticError, column::ColumnError, driver::DriverError, metrics::MetricsError,
        solver::SolverError,
    },
    support::{
        constraint::ConstraintError,
        ice::{IcePropertiesError, PropertyError},
    },
};

/// Errors that can occur while running a verification scenario.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    /// A time step or final time violates its sign constraint.
    #[error("invalid scenario time")]
    Time(#[from] ConstraintError),

    #[error("invalid ice properties")]
    Properties(#[from] IcePropertiesError),

    /// Boundary enthalpies could not be evaluated.
    #[error("boundary enthalpy evaluation failed")]
    Property(#[from] PropertyError),

    #[error("invalid analytic solution")]
    Analytic(#[from] AnalyticError),

    #[error("invalid column")]
    Column(#[from] ColumnError),

    /// The solver could not be built for this column.
    #[error("solver construction failed")]
    Solver(#[from] SolverError),

    #[error("simulation failed")]
    Driver(#[from] DriverError),

    #[error("error norms failed")]
    Metrics(#[from] MetricsError),
}
