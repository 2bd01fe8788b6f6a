use twine_core::Model;

use super::core::{
    ConductionConfig, ConvergenceResult, Regime, Scenario, ScenarioError, ScenarioOutcome,
    SolverFactory, StudyError, Sweep, VerificationConfig, estimate_order, run_scenario,
};

/// Runs verification scenarios against solvers built by `F`.
///
/// Each call builds a fresh column and solver, so calls are independent and
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct ColumnVerification<F: SolverFactory = ConductionConfig> {
    config: VerificationConfig,
    factory: F,
}

impl<F: SolverFactory> ColumnVerification<F> {
    pub fn new(config: VerificationConfig, factory: F) -> Self {
        Self { config, factory }
    }

    #[must_use]
    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Estimates the convergence order of `regime` over `sweep`.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError`] if any sample fails or the errors cannot be fitted.
    pub fn convergence(
        &self,
        regime: Regime,
        sweep: &Sweep,
    ) -> Result<ConvergenceResult, StudyError> {
        estimate_order(sweep, |point| -> Result<_, ScenarioError> {
            let scenario = point.scenario(regime)?;
            self.call(&scenario).map(|outcome| outcome.norms)
        })
    }
}

impl<F: SolverFactory> Model for ColumnVerification<F> {
    type Input = Scenario;
    type Output = ScenarioOutcome;
    type Error = ScenarioError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        run_scenario(input, &self.config, &self.factory)
    }
}
