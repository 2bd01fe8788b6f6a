//! The two reference verification scenarios.
//!
//! A scenario pairs an [`AnalyticSolution`] with the boundary conditions that
//! keep a column on it. Boundary values come from cold-ice enthalpies at fixed
//! temperatures, so the column stays well below the CTS for the whole run:
//!
//! | Regime | Base | Surface |
//! |--------|------|---------|
//! | DN | `E(230 K, p(Lz))` held fixed | flux `K·Q`, `Q = (E(270 K, p(0)) − A − E_base)/Lz` |
//! | ND | flux `K·Q`, `Q = (E_surface − E(240 K, p(Lz)))/Lz` | `E(260 K, p(0))` held fixed |
//!
//! where `A = 25·Lz` is the transient amplitude and pressures are evaluated at
//! depth below the surface.

mod error;

pub use error::ScenarioError;

use tracing::debug;
use uom::si::{
    f64::{HeatFluxDensity, Length, Ratio, ThermodynamicTemperature, Time},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    time::year,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    ice::{EnthalpyConverter, IceProperties},
    units::{SpecificEnthalpy, SpecificEnthalpyGradient},
};

use super::{
    analytic::{AnalyticSolution, Regime, transient_amplitude},
    column::{Column, ColumnGrid},
    driver,
    metrics::ErrorNorms,
    solver::{BoundaryCondition, BoundaryConditions, SolverFactory},
};

/// DN base temperature, K.
const DN_BASE_TEMPERATURE: f64 = 230.0;
/// Temperature that sets the DN surface gradient, K.
const DN_SURFACE_TEMPERATURE: f64 = 270.0;
/// ND surface temperature, K.
const ND_SURFACE_TEMPERATURE: f64 = 260.0;
/// ND base temperature of the steady state, K.
const ND_BASE_TEMPERATURE: f64 = 240.0;

/// Physical setup shared by every scenario in a study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationConfig {
    pub properties: IceProperties,

    /// Column height `Lz`, equal to the ice thickness.
    pub column_height: Length,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            properties: IceProperties::default(),
            column_height: Length::new::<meter>(1000.0),
        }
    }
}

/// One verification run: a regime on a column of `levels` levels, stepped by
/// `dt` until `t_final`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub regime: Regime,
    pub levels: usize,
    pub dt: Constrained<Time, StrictlyPositive>,
    pub t_final: Constrained<Time, NonNegative>,
}

impl Scenario {
    #[must_use]
    pub fn new(
        regime: Regime,
        levels: usize,
        dt: Constrained<Time, StrictlyPositive>,
        t_final: Constrained<Time, NonNegative>,
    ) -> Self {
        Self {
            regime,
            levels,
            dt,
            t_final,
        }
    }

    /// Builds a scenario from times given in years.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if `dt` is not strictly positive or `t_final` is negative.
    pub fn from_years(
        regime: Regime,
        levels: usize,
        dt: f64,
        t_final: f64,
    ) -> Result<Self, ConstraintError> {
        Ok(Self::new(
            regime,
            levels,
            StrictlyPositive::new(Time::new::<year>(dt))?,
            NonNegative::new(Time::new::<year>(t_final))?,
        ))
    }
}

/// Everything a completed scenario produced.
///
/// Profiles are in J/kg at the column heights `z` (m).
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub regime: Regime,
    pub norms: ErrorNorms,

    /// Accumulated simulated time; the exact profile is evaluated here.
    pub elapsed: Time,

    pub steps: usize,
    pub z: Vec<f64>,
    pub initial: Vec<f64>,
    pub exact: Vec<f64>,
    pub steady: Vec<f64>,
    pub computed: Vec<f64>,

    /// Enthalpy of the cold-temperate transition at each level.
    pub cts: Vec<f64>,
}

/// Analytic solution and matching boundary conditions for `regime`.
///
/// # Errors
///
/// Returns [`ScenarioError`] if the properties are invalid or a boundary
/// enthalpy cannot be evaluated.
pub fn setup(
    regime: Regime,
    config: &VerificationConfig,
) -> Result<(AnalyticSolution, BoundaryConditions), ScenarioError> {
    let ice = &config.properties;
    let converter = EnthalpyConverter::new(*ice)?;
    let height = config.column_height;

    let p_surface = converter.pressure(Length::new::<meter>(0.0));
    let p_base = converter.pressure(height);
    let cold = |t: f64, p| {
        converter.enthalpy(
            ThermodynamicTemperature::new::<kelvin>(t),
            Ratio::new::<ratio>(0.0),
            p,
        )
    };

    let diffusivity = ice.diffusivity();
    let k = ice.enthalpy_conductivity();

    match regime {
        Regime::DirichletNeumann => {
            let base = cold(DN_BASE_TEMPERATURE, p_base)?;
            let surface = cold(DN_SURFACE_TEMPERATURE, p_surface)?;
            let gradient: SpecificEnthalpyGradient =
                (surface - transient_amplitude(height) - base) / height;
            let flux: HeatFluxDensity = k * gradient;

            let exact = AnalyticSolution::dirichlet_neumann(height, base, gradient, diffusivity)?;
            let conditions = BoundaryConditions {
                base: BoundaryCondition::Dirichlet(base),
                surface: BoundaryCondition::HeatFlux(flux),
            };
            Ok((exact, conditions))
        }
        Regime::NeumannDirichlet => {
            let surface: SpecificEnthalpy = cold(ND_SURFACE_TEMPERATURE, p_surface)?;
            let base = cold(ND_BASE_TEMPERATURE, p_base)?;
            let gradient: SpecificEnthalpyGradient = (surface - base) / height;
            let flux: HeatFluxDensity = k * gradient;

            let exact = AnalyticSolution::neumann_dirichlet(height, gradient, surface, diffusivity)?;
            let conditions = BoundaryConditions {
                base: BoundaryCondition::HeatFlux(flux),
                surface: BoundaryCondition::Dirichlet(surface),
            };
            Ok((exact, conditions))
        }
    }
}

/// Runs `scenario` with a fresh solver from `factory` and compares the result
/// with the analytic solution at the elapsed time.
///
/// # Errors
///
/// Returns [`ScenarioError`] if setup, solver construction, any time step or
/// the error evaluation fails.
pub fn run_scenario<F: SolverFactory>(
    scenario: &Scenario,
    config: &VerificationConfig,
    factory: &F,
) -> Result<ScenarioOutcome, ScenarioError> {
    let (exact, conditions) = setup(scenario.regime, config)?;

    let grid = ColumnGrid::new(scenario.levels, config.column_height)?;
    let z = grid.z().to_vec();
    let mut column = Column::new(grid);

    let initial = exact.profile(&z, Time::new::<year>(0.0));
    column.set_profile(&initial)?;
    column.reset_velocity();
    column.reset_strain_heating();

    let dt = *scenario.dt.as_ref();
    let mut solver = factory.build(column.grid(), dt, &config.properties)?;

    let run = driver::run(
        &mut column,
        &mut solver,
        &conditions,
        scenario.dt,
        scenario.t_final,
    )?;

    let computed = column.enthalpy().to_vec();
    let exact_final = exact.profile(&z, run.elapsed);
    let norms = ErrorNorms::compute(&computed, &exact_final)?;

    let converter = EnthalpyConverter::new(config.properties)?;
    let height = config.column_height.get::<meter>();
    let cts = z
        .iter()
        .map(|&z| {
            let depth = Length::new::<meter>(height - z);
            converter.enthalpy_cts(converter.pressure(depth)).value
        })
        .collect();

    debug!(
        regime = scenario.regime.tag(),
        levels = scenario.levels,
        dt_years = dt.get::<year>(),
        steps = run.steps,
        max_error = norms.max_error,
        avg_error = norms.avg_error,
        "scenario complete"
    );

    Ok(ScenarioOutcome {
        regime: scenario.regime,
        norms,
        elapsed: run.elapsed,
        steps: run.steps,
        steady: exact.steady_profile(&z),
        z,
        initial,
        exact: exact_final,
        computed,
        cts,
    })
}
