use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    available_energy::joule_per_kilogram,
    f64::{
        Acceleration, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::{EnthalpyConductivity, SpecificEnthalpy, ThermalDiffusivity},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IcePropertiesError {
    #[error("invalid thermal conductivity: {conductivity:?}")]
    Conductivity { conductivity: ThermalConductivity },
    #[error("invalid specific heat capacity: {specific_heat:?}")]
    SpecificHeat { specific_heat: SpecificHeatCapacity },
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
    #[error("invalid gravitational acceleration: {gravity:?}")]
    Gravity { gravity: Acceleration },
    #[error("invalid latent heat of fusion: {latent_heat:?}")]
    LatentHeat { latent_heat: SpecificEnthalpy },
    #[error("invalid Clausius-Clapeyron slope: {beta} K/Pa")]
    ClausiusClapeyron { beta: f64 },
    #[error("reference temperature {reference:?} must be below the melting point {melting:?}")]
    ReferenceTemperature {
        reference: ThermodynamicTemperature,
        melting: ThermodynamicTemperature,
    },
}

/// Physical constants of glacier ice.
///
/// The defaults are the standard values for polar ice sheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceProperties {
    /// Thermal conductivity `k`.
    pub conductivity: ThermalConductivity,

    /// Specific heat capacity `c`.
    pub specific_heat: SpecificHeatCapacity,

    /// Density `ρ`.
    pub density: MassDensity,

    /// Gravitational acceleration used for overburden pressure.
    pub gravity: Acceleration,

    /// Clausius-Clapeyron slope `β` of the melting point, K/Pa.
    pub clausius_clapeyron: f64,

    /// Melting point at zero pressure.
    pub melting_point: ThermodynamicTemperature,

    /// Temperature at which the enthalpy of cold ice is zero.
    pub reference_temperature: ThermodynamicTemperature,

    /// Latent heat of fusion `L`.
    pub latent_heat: SpecificEnthalpy,

    /// Pressure at the ice surface.
    pub surface_pressure: Pressure,
}

impl Default for IceProperties {
    fn default() -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(2.10),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2009.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(910.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            clausius_clapeyron: 7.9e-8,
            melting_point: ThermodynamicTemperature::new::<kelvin>(273.15),
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(223.15),
            latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(3.34e5),
            surface_pressure: Pressure::new::<pascal>(0.0),
        }
    }
}

impl IceProperties {
    /// Checks that every constant is physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`IcePropertiesError`] naming the first invalid constant.
    pub fn validate(&self) -> Result<(), IcePropertiesError> {
        let conductivity = self.conductivity;
        if StrictlyPositive::check(&conductivity.value).is_err() {
            return Err(IcePropertiesError::Conductivity { conductivity });
        }

        let specific_heat = self.specific_heat;
        if StrictlyPositive::check(&specific_heat.value).is_err() {
            return Err(IcePropertiesError::SpecificHeat { specific_heat });
        }

        let density = self.density;
        if StrictlyPositive::check(&density.value).is_err() {
            return Err(IcePropertiesError::Density { density });
        }

        let gravity = self.gravity;
        if NonNegative::check(&gravity.value).is_err() {
            return Err(IcePropertiesError::Gravity { gravity });
        }

        let latent_heat = self.latent_heat;
        if StrictlyPositive::check(&latent_heat.value).is_err() {
            return Err(IcePropertiesError::LatentHeat { latent_heat });
        }

        let beta = self.clausius_clapeyron;
        if NonNegative::check(&beta).is_err() {
            return Err(IcePropertiesError::ClausiusClapeyron { beta });
        }

        if self.reference_temperature.get::<kelvin>() >= self.melting_point.get::<kelvin>() {
            return Err(IcePropertiesError::ReferenceTemperature {
                reference: self.reference_temperature,
                melting: self.melting_point,
            });
        }

        Ok(())
    }

    /// Thermal diffusivity `α² = k / (c·ρ)`.
    #[must_use]
    pub fn diffusivity(&self) -> ThermalDiffusivity {
        self.conductivity / (self.specific_heat * self.density)
    }

    /// Conductivity per unit heat capacity `K = k / c`.
    ///
    /// Scales an enthalpy gradient into the heat flux a solver boundary expects.
    #[must_use]
    pub fn enthalpy_conductivity(&self) -> EnthalpyConductivity {
        self.conductivity / self.specific_heat
    }
}
