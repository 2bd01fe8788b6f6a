//! Physical properties of glacier ice and the enthalpy formulation built on them.
//!
//! [`IceProperties`] is the explicit physical configuration every study is built
//! from; nothing in this crate reads process-wide constants.
//! [`EnthalpyConverter`] evaluates enthalpy from temperature and water content,
//! and the pressure-dependent melting point that defines the cold-temperate
//! transition surface (CTS).

mod converter;
mod error;
mod properties;

pub use converter::EnthalpyConverter;
pub use error::PropertyError;
pub use properties::{IceProperties, IcePropertiesError};
