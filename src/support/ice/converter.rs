use uom::si::{
    f64::{Length, Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{SpecificEnthalpy, TemperatureDifference};

use super::{IceProperties, IcePropertiesError, PropertyError};

/// Evaluates the enthalpy of ice from its temperature and liquid water fraction.
///
/// Cold ice has `E = c·(T − T₀)`. At the pressure melting point `T_m(p)` the
/// enthalpy reaches the CTS value `E_cts(p) = c·(T_m(p) − T₀)`; above it the
/// ice is temperate and `E = E_cts(p) + ω·L`, where `ω` is the liquid water
/// fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyConverter {
    properties: IceProperties,
}

impl EnthalpyConverter {
    /// Creates a converter for the given ice properties.
    ///
    /// # Errors
    ///
    /// Returns [`IcePropertiesError`] if the properties are not physical.
    pub fn new(properties: IceProperties) -> Result<Self, IcePropertiesError> {
        properties.validate()?;
        Ok(Self { properties })
    }

    /// Hydrostatic pressure at `depth` below the ice surface.
    #[must_use]
    pub fn pressure(&self, depth: Length) -> Pressure {
        let ice = &self.properties;
        let overburden: Pressure = ice.density * ice.gravity * depth;
        ice.surface_pressure + overburden
    }

    /// Pressure melting point `T_m(p) = T_m − β·p`.
    #[must_use]
    pub fn melting_temperature(&self, pressure: Pressure) -> ThermodynamicTemperature {
        let ice = &self.properties;
        ThermodynamicTemperature::new::<kelvin>(
            ice.melting_point.get::<kelvin>() - ice.clausius_clapeyron * pressure.get::<pascal>(),
        )
    }

    /// Enthalpy at the cold-temperate transition for the given pressure.
    #[must_use]
    pub fn enthalpy_cts(&self, pressure: Pressure) -> SpecificEnthalpy {
        let ice = &self.properties;
        ice.specific_heat
            * self
                .melting_temperature(pressure)
                .minus(ice.reference_temperature)
    }

    /// Enthalpy of ice at `temperature` with liquid water fraction `omega`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the temperature is above the
    /// pressure melting point or `omega` is outside `[0, 1]`, and
    /// [`PropertyError::InvalidState`] if liquid water is present below the
    /// melting point.
    pub fn enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
        omega: Ratio,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let ice = &self.properties;
        let t_m = self.melting_temperature(pressure);
        let omega = omega.get::<ratio>();

        if !(0.0..=1.0).contains(&omega) {
            return Err(PropertyError::OutOfDomain {
                context: format!("water fraction {omega} is outside [0, 1]"),
            });
        }

        if temperature > t_m {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {} K exceeds the pressure melting point {} K",
                    temperature.get::<kelvin>(),
                    t_m.get::<kelvin>()
                ),
            });
        }

        if temperature < t_m {
            if omega > 0.0 {
                return Err(PropertyError::InvalidState {
                    context: format!(
                        "cold ice at {} K cannot hold liquid water",
                        temperature.get::<kelvin>()
                    ),
                });
            }
            return Ok(ice.specific_heat * temperature.minus(ice.reference_temperature));
        }

        Ok(self.enthalpy_cts(pressure) + ice.latent_heat * omega)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{available_energy::joule_per_kilogram, length::meter};

    fn converter() -> EnthalpyConverter {
        EnthalpyConverter::new(IceProperties::default()).unwrap()
    }

    fn temp(k: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(k)
    }

    fn zero_water() -> Ratio {
        Ratio::new::<ratio>(0.0)
    }

    #[test]
    fn overburden_pressure() {
        let ec = converter();
        let p = ec.pressure(Length::new::<meter>(1000.0));

        assert_relative_eq!(p.get::<pascal>(), 910.0 * 9.81 * 1000.0);
        assert_relative_eq!(ec.pressure(Length::new::<meter>(0.0)).get::<pascal>(), 0.0);
    }

    #[test]
    fn cold_ice_enthalpy() {
        let ec = converter();
        let base_pressure = ec.pressure(Length::new::<meter>(1000.0));

        let e = ec.enthalpy(temp(230.0), zero_water(), base_pressure).unwrap();

        assert_relative_eq!(
            e.get::<joule_per_kilogram>(),
            2009.0 * (230.0 - 223.15),
            epsilon = 1e-9
        );
        assert!(e < ec.enthalpy_cts(base_pressure));
    }

    #[test]
    fn melting_point_drops_with_pressure() {
        let ec = converter();
        let deep = ec.pressure(Length::new::<meter>(3000.0));

        let t_m = ec.melting_temperature(deep).get::<kelvin>();
        assert_relative_eq!(t_m, 273.15 - 7.9e-8 * 910.0 * 9.81 * 3000.0);
        assert!(ec.enthalpy_cts(deep) < ec.enthalpy_cts(Pressure::new::<pascal>(0.0)));
    }

    #[test]
    fn temperate_ice_holds_water() {
        let ec = converter();
        let p = Pressure::new::<pascal>(0.0);

        let e = ec
            .enthalpy(temp(273.15), Ratio::new::<ratio>(0.01), p)
            .unwrap();

        assert_relative_eq!(
            (e - ec.enthalpy_cts(p)).get::<joule_per_kilogram>(),
            3340.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn rejects_inconsistent_states() {
        let ec = converter();
        let p = Pressure::new::<pascal>(0.0);

        assert!(matches!(
            ec.enthalpy(temp(280.0), zero_water(), p),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            ec.enthalpy(temp(250.0), Ratio::new::<ratio>(0.1), p),
            Err(PropertyError::InvalidState { .. })
        ));
        assert!(matches!(
            ec.enthalpy(temp(273.15), Ratio::new::<ratio>(1.5), p),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }
}
