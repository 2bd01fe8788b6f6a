//! # Twine Enthalpy Verification
//!
//! Analytic verification and convergence studies for column enthalpy solvers,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations that run verification
//!   scenarios and convergence studies.
//! - [`support`]: Supporting utilities used by models (constraints, units,
//!   ice properties).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful outside that model. The ice enthalpy
//! formulation in [`support::ice`] is an example: both the scenarios and any
//! production solver need it.

pub mod models;
pub mod support;
