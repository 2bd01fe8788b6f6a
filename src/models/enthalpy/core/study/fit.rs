use thiserror::Error;

/// Errors fitting a power law to convergence data.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("a fit needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("{parameters} parameters but {errors} errors")]
    LengthMismatch { parameters: usize, errors: usize },

    #[error("parameter {value} at index {index} is not positive and finite")]
    InvalidParameter { index: usize, value: f64 },

    #[error("error {value} at index {index} is not positive and finite")]
    InvalidError { index: usize, value: f64 },

    #[error("all parameters are equal")]
    DegenerateParameters,

    #[error("all errors are equal")]
    ConstantError,
}

/// `error ≈ 10^intercept · parameter^slope`, fitted in log-log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    pub slope: f64,
    pub intercept: f64,
}

impl PowerLawFit {
    /// Error predicted by the fit at `parameter`.
    ///
    /// ```
    /// use twine_enthalpy_verification::models::enthalpy::fit_power_law;
    ///
    /// let fit = fit_power_law(&[1.0, 2.0, 4.0], &[0.5, 1.0, 2.0]).unwrap();
    /// assert!((fit.evaluate(8.0) - 4.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn evaluate(&self, parameter: f64) -> f64 {
        10f64.powf(self.intercept) * parameter.powf(self.slope)
    }
}

/// Least-squares fit of `log10(error) = slope·log10(parameter) + intercept`.
///
/// # Errors
///
/// Returns [`FitError`] if there are fewer than two points, any value is not
/// positive and finite, or either series is constant.
pub fn fit_power_law(parameters: &[f64], errors: &[f64]) -> Result<PowerLawFit, FitError> {
    if parameters.len() != errors.len() {
        return Err(FitError::LengthMismatch {
            parameters: parameters.len(),
            errors: errors.len(),
        });
    }
    if parameters.len() < 2 {
        return Err(FitError::TooFewPoints {
            count: parameters.len(),
        });
    }

    let x = logs(parameters).map_err(|(index, value)| FitError::InvalidParameter { index, value })?;
    let y = logs(errors).map_err(|(index, value)| FitError::InvalidError { index, value })?;

    if x.iter().all(|&v| v == x[0]) {
        return Err(FitError::DegenerateParameters);
    }
    if y.iter().all(|&v| v == y[0]) {
        return Err(FitError::ConstantError);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let (sxx, sxy) = x
        .iter()
        .zip(&y)
        .fold((0.0, 0.0), |(sxx, sxy), (xi, yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean))
        });

    let slope = sxy / sxx;
    Ok(PowerLawFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Base-10 logarithms, or the first value that is not positive and finite.
fn logs(values: &[f64]) -> Result<Vec<f64>, (usize, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if v > 0.0 && v.is_finite() {
                Ok(v.log10())
            } else {
                Err((i, v))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn recovers_exact_power_law() {
        let parameters = [1.0, 2.0, 4.0, 8.0, 16.0];
        let errors: Vec<f64> = parameters.iter().map(|p: &f64| 3.0 * p.powi(2)).collect();

        let fit = fit_power_law(&parameters, &errors).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 3f64.log10(), epsilon = 1e-12);
        assert_relative_eq!(fit.evaluate(32.0), 3072.0, max_relative = 1e-10);
    }

    #[test]
    fn least_squares_through_noise() {
        // Alternating ±10% noise around error = p^1.
        let parameters = [1.0, 2.0, 4.0, 8.0];
        let errors = [1.1, 1.8, 4.4, 7.2];

        let fit = fit_power_law(&parameters, &errors).unwrap();
        assert!((fit.slope - 1.0).abs() < 0.1);
    }

    #[test]
    fn rejects_degenerate_data() {
        assert_eq!(
            fit_power_law(&[1.0], &[1.0]),
            Err(FitError::TooFewPoints { count: 1 })
        );
        assert_eq!(
            fit_power_law(&[1.0, 2.0], &[1.0]),
            Err(FitError::LengthMismatch {
                parameters: 2,
                errors: 1
            })
        );
        assert_eq!(
            fit_power_law(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(FitError::DegenerateParameters)
        );
        assert_eq!(
            fit_power_law(&[1.0, 2.0], &[5.0, 5.0]),
            Err(FitError::ConstantError)
        );
        assert_eq!(
            fit_power_law(&[1.0, 0.0], &[1.0, 2.0]),
            Err(FitError::InvalidParameter {
                index: 1,
                value: 0.0
            })
        );
        assert_eq!(
            fit_power_law(&[1.0, 2.0], &[1.0, -3.0]),
            Err(FitError::InvalidError {
                index: 1,
                value: -3.0
            })
        );
        assert!(matches!(
            fit_power_law(&[1.0, 2.0], &[f64::NAN, 1.0]),
            Err(FitError::InvalidError { index: 0, .. })
        ));
    }
}
