use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Vertical gradient of specific enthalpy, J/(kg·m) in SI.
pub type SpecificEnthalpyGradient = Quantity<ISQ<P1, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal diffusivity `k / (c·ρ)`, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Conductivity per unit heat capacity `k / c`, kg/(m·s) in SI.
///
/// Multiplying a [`SpecificEnthalpyGradient`] by this quantity gives a heat flux density.
pub type EnthalpyConductivity = Quantity<ISQ<N1, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
