//! Fixed-step time integration of a column.

use thiserror::Error;
use tracing::{debug, trace};
use uom::si::{
    f64::{Length, Time},
    time::{second, year},
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{
    column::Column,
    solver::{BoundaryConditions, EnthalpySolver, SolverError},
};

/// Relative tolerance when matching the requested step with the solver's.
const STEP_TOLERANCE: f64 = 1e-12;

/// Errors that abort a run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DriverError {
    #[error("time step {requested:?} does not match the solver's {solver:?}")]
    TimeStepMismatch { requested: Time, solver: Time },

    #[error("step {step} failed")]
    Step {
        step: usize,
        #[source]
        source: SolverError,
    },
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Final enthalpy on the solver's grid, J/kg.
    pub profile: Vec<f64>,

    /// Accumulated simulated time, which may overshoot the requested final time.
    pub elapsed: Time,

    pub steps: usize,
}

/// Advances `column` with `solver` until the accumulated time reaches `t_final`.
///
/// Every step runs `prepare`, both boundary conditions, `solve` and
/// `remap_to_column`, in that order. Time accumulates as a running sum of `dt`,
/// so the last step may carry the clock past `t_final`. A zero `t_final` takes
/// no steps and returns the column's current profile.
///
/// # Errors
///
/// Returns [`DriverError::TimeStepMismatch`] if `dt` differs from the solver's
/// time step, or [`DriverError::Step`] with the failing step index.
pub fn run<S: EnthalpySolver>(
    column: &mut Column,
    solver: &mut S,
    conditions: &BoundaryConditions,
    dt: Constrained<Time, StrictlyPositive>,
    t_final: Constrained<Time, NonNegative>,
) -> Result<RunOutcome, DriverError> {
    let dt = dt.into_inner();
    let t_final = t_final.into_inner();

    let expected = solver.time_step();
    let step = dt.get::<second>();
    if (step - expected.get::<second>()).abs() > STEP_TOLERANCE * step {
        return Err(DriverError::TimeStepMismatch {
            requested: dt,
            solver: expected,
        });
    }

    let thickness: Length = column.grid().height();
    let end = t_final.get::<second>();

    let mut t = 0.0;
    let mut steps = 0;
    let mut profile = column.enthalpy().to_vec();

    while t < end {
        let fail = |source| DriverError::Step {
            step: steps,
            source,
        };

        solver.prepare(column, false, thickness).map_err(fail)?;
        solver.apply(conditions).map_err(fail)?;
        profile = solver.solve().map_err(fail)?;
        solver.remap_to_column(&profile, column).map_err(fail)?;

        t += step;
        steps += 1;
        trace!(step = steps, t_years = Time::new::<second>(t).get::<year>(), "advanced column");
    }

    let elapsed = Time::new::<second>(t);
    debug!(steps, elapsed_years = elapsed.get::<year>(), "run complete");

    Ok(RunOutcome {
        profile,
        elapsed,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, f64::HeatFluxDensity, length::meter,
        heat_flux_density::watt_per_square_meter,
    };

    use crate::{
        models::enthalpy::core::{
            solver::BoundaryCondition,
            test_support::{Call, RecordingSolver},
        },
        support::units::SpecificEnthalpy,
    };

    fn column() -> Column {
        let mut column = Column::build(5, Length::new::<meter>(1000.0)).unwrap();
        column.set_profile(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        column
    }

    fn dn() -> BoundaryConditions {
        BoundaryConditions {
            base: BoundaryCondition::Dirichlet(SpecificEnthalpy::new::<joule_per_kilogram>(1.0)),
            surface: BoundaryCondition::HeatFlux(HeatFluxDensity::new::<
                watt_per_square_meter,
            >(0.0)),
        }
    }

    fn years(t: f64) -> Time {
        Time::new::<year>(t)
    }

    #[test]
    fn overshoots_final_time() {
        let mut column = column();
        let mut solver = RecordingSolver::new(300.0);

        let outcome = run(
            &mut column,
            &mut solver,
            &dn(),
            StrictlyPositive::new(years(300.0)).unwrap(),
            NonNegative::new(years(1000.0)).unwrap(),
        )
        .unwrap();

        assert_eq!(outcome.steps, 4);
        assert_relative_eq!(outcome.elapsed.get::<year>(), 1200.0, max_relative = 1e-12);
        assert_eq!(outcome.profile, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn exact_multiple_stops_on_final_time() {
        let mut column = column();
        let mut solver = RecordingSolver::new(1.0);

        let outcome = run(
            &mut column,
            &mut solver,
            &dn(),
            StrictlyPositive::new(years(1.0)).unwrap(),
            NonNegative::new(years(8.0)).unwrap(),
        )
        .unwrap();

        assert_eq!(outcome.steps, 8);
        assert_relative_eq!(outcome.elapsed.get::<year>(), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_final_time_takes_no_steps() {
        let mut column = column();
        let mut solver = RecordingSolver::new(1.0);

        let outcome = run(
            &mut column,
            &mut solver,
            &dn(),
            StrictlyPositive::new(years(1.0)).unwrap(),
            NonNegative::new(years(0.0)).unwrap(),
        )
        .unwrap();

        assert_eq!(outcome.steps, 0);
        assert_eq!(outcome.elapsed.get::<year>(), 0.0);
        assert_eq!(outcome.profile, column.enthalpy());
        assert!(solver.calls().is_empty());
    }

    #[test]
    fn calls_solver_in_order() {
        let mut column = column();
        let mut solver = RecordingSolver::new(1.0);

        run(
            &mut column,
            &mut solver,
            &dn(),
            StrictlyPositive::new(years(1.0)).unwrap(),
            NonNegative::new(years(2.0)).unwrap(),
        )
        .unwrap();

        let step = [
            Call::Prepare,
            Call::BasalDirichlet,
            Call::SurfaceHeatFlux,
            Call::Solve,
            Call::Remap,
        ];
        assert_eq!(solver.calls(), [step, step].concat());
        assert_eq!(solver.count(Call::Remap), 2);
    }

    #[test]
    fn aborts_on_failed_step() {
        let mut column = column();
        let mut solver = RecordingSolver::new(1.0).failing_on(2);

        let error = run(
            &mut column,
            &mut solver,
            &dn(),
            StrictlyPositive::new(years(1.0)).unwrap(),
            NonNegative::new(years(10.0)).unwrap(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            DriverError::Step {
                step: 2,
                source: SolverError::NonConvergence { .. }
            }
        ));
        assert_eq!(solver.count(Call::Solve), 3);
        assert_eq!(solver.count(Call::Remap), 2);
    }

    #[test]
    fn rejects_mismatched_time_step() {
        let mut column = column();
        let mut solver = RecordingSolver::new(2.0);

        let error = run(
            &mut column,
            &mut solver,
            &dn(),
            StrictlyPositive::new(years(1.0)).unwrap(),
            NonNegative::new(years(10.0)).unwrap(),
        )
        .unwrap_err();

        assert!(matches!(error, DriverError::TimeStepMismatch { .. }));
        assert!(solver.calls().is_empty());
    }
}
