use std::fmt;

use thiserror::Error;
use uom::si::f64::{Length, Time};

use crate::{
    models::enthalpy::core::column::ColumnError, support::ice::IcePropertiesError,
};

/// End of the column a boundary condition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Base,
    Surface,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Surface => f.write_str("surface"),
        }
    }
}

/// Errors reported by column solvers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// A boundary condition or solve was requested before `prepare`.
    #[error("solver used before prepare")]
    NotPrepared,

    /// `solve` was called without a condition on one boundary.
    #[error("no boundary condition set at the {boundary}")]
    MissingBoundaryCondition { boundary: Boundary },

    /// A second condition was set on the same boundary within one step.
    #[error("boundary condition at the {boundary} was already set")]
    BoundaryConditionAlreadySet { boundary: Boundary },

    /// The linear system could not be solved.
    #[error("solve did not converge: {context}")]
    NonConvergence { context: String },

    /// The column carries physics this solver does not model.
    #[error("unsupported physics: non-zero {field}")]
    UnsupportedPhysics { field: &'static str },

    /// The ice surface does not coincide with the top of the column.
    #[error("ice thickness {thickness:?} does not match column height {height:?}")]
    IceThickness { thickness: Length, height: Length },

    /// The column was built on a different grid than the solver.
    #[error("column has {actual} levels, solver expects {expected}")]
    GridMismatch { expected: usize, actual: usize },

    /// A profile handed to `remap_to_column` has the wrong length.
    #[error("profile has {actual} values, solver grid has {expected}")]
    ProfileLength { expected: usize, actual: usize },

    #[error("invalid time step: {dt:?}")]
    TimeStep { dt: Time },

    #[error("invalid solver configuration: {context}")]
    Configuration { context: String },

    #[error(transparent)]
    Properties(#[from] IcePropertiesError),

    #[error(transparent)]
    Column(#[from] ColumnError),
}
