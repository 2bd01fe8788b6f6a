//! Empirical convergence order from a sweep of discretizations.
//!
//! A study runs one sample per [`SamplePoint`] of a [`Sweep`], collects the
//! error norms, and fits `error ∝ parameter^p` separately for the max and mean
//! norms. The caller supplies the run function, so the same estimator serves
//! any solver and regime.

mod error;
mod fit;
mod report;
mod sweep;

pub use error::StudyError;
pub use fit::{FitError, PowerLawFit, fit_power_law};
pub use sweep::{SamplePoint, Sweep, SweepKind};

use std::error::Error as StdError;

use tracing::{debug, info};

use super::metrics::ErrorNorms;

/// Error norms of one sample, keyed by the swept parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudySample {
    pub parameter: f64,
    pub max_error: f64,
    pub avg_error: f64,
}

/// Fitted convergence orders and the samples they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceResult {
    pub kind: SweepKind,
    pub samples: Vec<StudySample>,

    /// Fit of the max-norm errors.
    pub max: PowerLawFit,

    /// Fit of the mean-norm errors.
    pub avg: PowerLawFit,
}

impl ConvergenceResult {
    /// Empirical order in the max norm.
    #[must_use]
    pub fn slope_max(&self) -> f64 {
        self.max.slope
    }

    /// Empirical order in the mean norm.
    #[must_use]
    pub fn slope_avg(&self) -> f64 {
        self.avg.slope
    }
}

/// Runs every point of `sweep` through `run` and fits both error norms.
///
/// Samples run in sweep order. The first failing sample aborts the study.
///
/// # Errors
///
/// Returns [`StudyError::Sample`] with the failing index and parameter, or
/// [`StudyError::Fit`] if the collected errors cannot be fitted.
pub fn estimate_order<F, E>(sweep: &Sweep, mut run: F) -> Result<ConvergenceResult, StudyError>
where
    F: FnMut(&SamplePoint) -> Result<ErrorNorms, E>,
    E: StdError + Send + Sync + 'static,
{
    let mut samples = Vec::with_capacity(sweep.points().len());

    for (index, point) in sweep.points().iter().enumerate() {
        let norms = run(point).map_err(|source| StudyError::Sample {
            index,
            parameter: point.parameter,
            source: Box::new(source),
        })?;

        debug!(
            index,
            parameter = point.parameter,
            levels = point.levels,
            max_error = norms.max_error,
            avg_error = norms.avg_error,
            "sample complete"
        );

        samples.push(StudySample {
            parameter: point.parameter,
            max_error: norms.max_error,
            avg_error: norms.avg_error,
        });
    }

    let parameters: Vec<f64> = samples.iter().map(|s| s.parameter).collect();
    let max_errors: Vec<f64> = samples.iter().map(|s| s.max_error).collect();
    let avg_errors: Vec<f64> = samples.iter().map(|s| s.avg_error).collect();

    let max = fit_power_law(&parameters, &max_errors)?;
    let avg = fit_power_law(&parameters, &avg_errors)?;

    info!(
        kind = %sweep.kind(),
        slope_max = max.slope,
        slope_avg = avg.slope,
        "fitted convergence order"
    );

    Ok(ConvergenceResult {
        kind: sweep.kind(),
        samples,
        max,
        avg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Time, time::year};

    use crate::models::enthalpy::core::metrics::MetricsError;

    fn synthetic(order: f64) -> impl FnMut(&SamplePoint) -> Result<ErrorNorms, MetricsError> {
        move |point| {
            Ok(ErrorNorms {
                max_error: 2.0 * point.parameter.powf(order),
                avg_error: 0.5 * point.parameter.powf(order),
            })
        }
    }

    #[test]
    fn recovers_synthetic_order() {
        let result = estimate_order(&Sweep::reference_time(), synthetic(1.5)).unwrap();

        assert_eq!(result.kind, SweepKind::Time);
        assert_eq!(result.samples.len(), 10);
        assert_relative_eq!(result.slope_max(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(result.slope_avg(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(result.max.intercept, 2f64.log10(), epsilon = 1e-12);
    }

    #[test]
    fn runs_samples_in_order() {
        let mut seen = Vec::new();
        let sweep = Sweep::time(
            [4.0, 2.0, 1.0].map(|t| Time::new::<year>(t)),
            11,
            Time::new::<year>(8.0),
        );

        estimate_order(&sweep, |point| {
            seen.push(point.parameter);
            synthetic(1.0)(point)
        })
        .unwrap();

        assert_eq!(seen, [4.0, 2.0, 1.0]);
    }

    #[test]
    fn failing_sample_aborts() {
        let mut calls = 0;
        let error = estimate_order(&Sweep::reference_time(), |point| {
            calls += 1;
            if point.parameter > 5.0 {
                return Err(MetricsError::Empty);
            }
            synthetic(1.0)(point)
        })
        .unwrap_err();

        let StudyError::Sample {
            index,
            parameter,
            source,
        } = error
        else {
            panic!("expected a sample failure");
        };
        assert_eq!(index, 3);
        assert_relative_eq!(parameter, 8.0);
        assert_eq!(source.to_string(), MetricsError::Empty.to_string());
        assert_eq!(calls, 4);
    }

    #[test]
    fn single_sample_cannot_be_fitted() {
        let sweep = Sweep::time([Time::new::<year>(1.0)], 11, Time::new::<year>(1.0));
        assert!(matches!(
            estimate_order(&sweep, synthetic(1.0)),
            Err(StudyError::Fit(FitError::TooFewPoints { count: 1 }))
        ));
    }
}
