use std::cell::RefCell;

use uom::si::{
    f64::{HeatFluxDensity, Length, Time},
    time::year,
};

use crate::support::units::SpecificEnthalpy;

use super::{
    column::Column,
    solver::{EnthalpySolver, SolverError},
};

/// A solver call observed by [`RecordingSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Call {
    Prepare,
    BasalDirichlet,
    BasalHeatFlux,
    SurfaceDirichlet,
    SurfaceHeatFlux,
    Solve,
    Remap,
}

/// Solver double that records the call sequence and returns the column unchanged.
#[derive(Debug, Clone)]
pub(super) struct RecordingSolver {
    dt: Time,
    profile: Vec<f64>,
    solves: usize,
    fail_on_solve: Option<usize>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingSolver {
    pub(super) fn new(dt_years: f64) -> Self {
        Self {
            dt: Time::new::<year>(dt_years),
            profile: Vec::new(),
            solves: 0,
            fail_on_solve: None,
            calls: RefCell::default(),
        }
    }

    /// Makes the `n`th call to `solve` (zero-based) fail.
    pub(super) fn failing_on(mut self, n: usize) -> Self {
        self.fail_on_solve = Some(n);
        self
    }

    pub(super) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(super) fn count(&self, call: Call) -> usize {
        self.calls.borrow().iter().filter(|&&c| c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl EnthalpySolver for RecordingSolver {
    fn time_step(&self) -> Time {
        self.dt
    }

    fn prepare(
        &mut self,
        column: &Column,
        _marginal: bool,
        _ice_thickness: Length,
    ) -> Result<(), SolverError> {
        self.record(Call::Prepare);
        self.profile = column.enthalpy().to_vec();
        Ok(())
    }

    fn set_basal_dirichlet(&mut self, _enthalpy: SpecificEnthalpy) -> Result<(), SolverError> {
        self.record(Call::BasalDirichlet);
        Ok(())
    }

    fn set_basal_heat_flux(&mut self, _flux: HeatFluxDensity) -> Result<(), SolverError> {
        self.record(Call::BasalHeatFlux);
        Ok(())
    }

    fn set_surface_dirichlet(&mut self, _enthalpy: SpecificEnthalpy) -> Result<(), SolverError> {
        self.record(Call::SurfaceDirichlet);
        Ok(())
    }

    fn set_surface_heat_flux(&mut self, _flux: HeatFluxDensity) -> Result<(), SolverError> {
        self.record(Call::SurfaceHeatFlux);
        Ok(())
    }

    fn solve(&mut self) -> Result<Vec<f64>, SolverError> {
        self.record(Call::Solve);
        let index = self.solves;
        self.solves += 1;
        if self.fail_on_solve == Some(index) {
            return Err(SolverError::NonConvergence {
                context: format!("solve {index} rejected"),
            });
        }
        Ok(self.profile.clone())
    }

    fn remap_to_column(&self, profile: &[f64], column: &mut Column) -> Result<(), SolverError> {
        self.record(Call::Remap);
        column.set_profile(profile)?;
        Ok(())
    }
}
