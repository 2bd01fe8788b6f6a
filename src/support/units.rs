//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities at API boundaries (lengths,
//! times, heat fluxes, material properties). This module adds the quantities
//! that enthalpy transport needs but [`uom`] does not name:
//!
//! - [`SpecificEnthalpy`] and its vertical gradient [`SpecificEnthalpyGradient`]
//! - [`ThermalDiffusivity`] (`α² = k / (c·ρ)`)
//! - [`EnthalpyConductivity`] (`K = k / c`), which turns an enthalpy gradient
//!   into a heat flux density
//!
//! ```
//! use uom::si::{
//!     f64::{HeatFluxDensity, Length, SpecificHeatCapacity, ThermalConductivity},
//!     available_energy::joule_per_kilogram,
//!     heat_flux_density::watt_per_square_meter,
//!     length::meter,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//! use twine_enthalpy_verification::support::units::{
//!     EnthalpyConductivity, SpecificEnthalpy, SpecificEnthalpyGradient,
//! };
//!
//! let k = ThermalConductivity::new::<watt_per_meter_kelvin>(2.0);
//! let c = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2000.0);
//! let big_k: EnthalpyConductivity = k / c;
//!
//! let gradient: SpecificEnthalpyGradient =
//!     SpecificEnthalpy::new::<joule_per_kilogram>(500.0) / Length::new::<meter>(10.0);
//! let flux: HeatFluxDensity = big_k * gradient;
//! assert!((flux.get::<watt_per_square_meter>() - 0.05).abs() < 1e-15);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{
    EnthalpyConductivity, SpecificEnthalpy, SpecificEnthalpyGradient, ThermalDiffusivity,
};
pub use temperature_difference::TemperatureDifference;
