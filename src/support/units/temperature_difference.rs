use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not yield a
/// [`TemperatureInterval`], which is what enthalpy relations such as `c·(T − T₀)`
/// need. See [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn below_reference_is_negative() {
        let reference = ThermodynamicTemperature::new::<abs_kelvin>(223.15);
        let cold = ThermodynamicTemperature::new::<abs_kelvin>(213.15);

        assert_relative_eq!(cold.minus(reference).get::<delta_kelvin>(), -10.0);
        assert_relative_eq!(reference.minus(cold).get::<delta_kelvin>(), 10.0);
    }

    #[test]
    fn mixed_scales() {
        let melting = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        let basal = ThermodynamicTemperature::new::<abs_kelvin>(230.0);

        assert_relative_eq!(
            melting.minus(basal).get::<delta_kelvin>(),
            43.15,
            epsilon = 1e-12
        );
    }
}
