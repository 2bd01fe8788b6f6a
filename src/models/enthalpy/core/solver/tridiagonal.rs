//! Thomas algorithm for tridiagonal systems.

use super::SolverError;

/// Solves `lower[i]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1] = rhs[i]`.
///
/// `lower[0]` and `upper[n-1]` are ignored. All slices must have the same length.
pub(super) fn solve(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, SolverError> {
    let n = diag.len();
    debug_assert!(lower.len() == n && upper.len() == n && rhs.len() == n);

    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    let mut pivot = diag[0];
    check_pivot(pivot, 0)?;
    c[0] = upper[0] / pivot;
    d[0] = rhs[0] / pivot;

    for i in 1..n {
        pivot = diag[i] - lower[i] * c[i - 1];
        check_pivot(pivot, i)?;
        c[i] = if i + 1 < n { upper[i] / pivot } else { 0.0 };
        d[i] = (rhs[i] - lower[i] * d[i - 1]) / pivot;
    }

    let mut x = d;
    for i in (0..n - 1).rev() {
        x[i] -= c[i] * x[i + 1];
    }

    if let Some(row) = x.iter().position(|v| !v.is_finite()) {
        return Err(SolverError::NonConvergence {
            context: format!("non-finite enthalpy at level {row}"),
        });
    }

    Ok(x)
}

fn check_pivot(pivot: f64, row: usize) -> Result<(), SolverError> {
    if pivot.abs() < f64::MIN_POSITIVE || !pivot.is_finite() {
        return Err(SolverError::NonConvergence {
            context: format!("singular pivot {pivot} at row {row}"),
        });
    }
    Ok(())
}
