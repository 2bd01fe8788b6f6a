//! Error norms between a computed and an exact profile.

use thiserror::Error;

/// Errors computing [`ErrorNorms`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    #[error("computed profile has {computed} values but exact profile has {exact}")]
    LengthMismatch { computed: usize, exact: usize },

    #[error("profiles are empty")]
    Empty,

    /// A profile value at `index` is NaN or infinite.
    #[error("non-finite difference at level {index}")]
    NonFinite { index: usize },
}

/// Maximum and mean absolute pointwise error, in J/kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorNorms {
    pub max_error: f64,
    pub avg_error: f64,
}

impl ErrorNorms {
    /// Compares two profiles sampled at the same levels.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] if the lengths differ, both profiles are empty,
    /// or any pointwise difference is not finite.
    pub fn compute(computed: &[f64], exact: &[f64]) -> Result<Self, MetricsError> {
        if computed.len() != exact.len() {
            return Err(MetricsError::LengthMismatch {
                computed: computed.len(),
                exact: exact.len(),
            });
        }
        if computed.is_empty() {
            return Err(MetricsError::Empty);
        }

        let mut max_error = 0.0_f64;
        let mut sum = 0.0;
        for (index, (c, e)) in computed.iter().zip(exact).enumerate() {
            let d = (c - e).abs();
            if !d.is_finite() {
                return Err(MetricsError::NonFinite { index });
            }
            max_error = max_error.max(d);
            sum += d;
        }

        #[allow(clippy::cast_precision_loss)]
        let avg_error = sum / computed.len() as f64;

        Ok(Self {
            max_error,
            avg_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn max_and_mean() {
        let norms = ErrorNorms::compute(&[1.0, 2.0, 3.0], &[1.5, 2.0, 2.0]).unwrap();
        assert_relative_eq!(norms.max_error, 1.0);
        assert_relative_eq!(norms.avg_error, 0.5);
        assert!(norms.max_error >= norms.avg_error);
    }

    #[test]
    fn identical_profiles() {
        let profile = [4.0, -2.0, 7.5];
        let norms = ErrorNorms::compute(&profile, &profile).unwrap();
        assert_eq!(norms.max_error, 0.0);
        assert_eq!(norms.avg_error, 0.0);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            ErrorNorms::compute(&[1.0, 2.0], &[1.0]),
            Err(MetricsError::LengthMismatch {
                computed: 2,
                exact: 1
            })
        );
        assert_eq!(ErrorNorms::compute(&[], &[]), Err(MetricsError::Empty));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            ErrorNorms::compute(&[f64::NAN, 1.0], &[0.0, 1.0]),
            Err(MetricsError::NonFinite { index: 0 })
        );
        assert_eq!(
            ErrorNorms::compute(&[0.0, 1.0, 2.0], &[0.0, 1.0, f64::INFINITY]),
            Err(MetricsError::NonFinite { index: 2 })
        );
    }
}
