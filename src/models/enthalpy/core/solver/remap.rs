//! Piecewise-linear transfer of profiles between vertical grids.

/// Interpolates `values` given at increasing heights `from` onto heights `to`.
///
/// Heights outside `from` take the nearest end value.
pub(super) fn interpolate(from: &[f64], values: &[f64], to: &[f64]) -> Vec<f64> {
    debug_assert_eq!(from.len(), values.len());
    let last = from.len() - 1;

    to.iter()
        .map(|&z| {
            let upper = from.partition_point(|&level| level <= z);
            if upper == 0 {
                return values[0];
            }
            if upper > last {
                return values[last];
            }
            let lower = upper - 1;
            let weight = (z - from[lower]) / (from[upper] - from[lower]);
            values[lower] + weight * (values[upper] - values[lower])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coinciding_levels_are_copied() {
        let z = [0.0, 250.0, 500.0, 750.0, 1000.0];
        let e = [10.0, 20.0, 15.0, 5.0, 1.0];

        assert_eq!(interpolate(&z, &e, &z), e.to_vec());
    }

    #[test]
    fn fine_to_coarse() {
        let fine = [0.0, 1.0, 2.0, 3.0, 4.0];
        let values = [0.0, 2.0, 4.0, 6.0, 8.0];

        assert_eq!(interpolate(&fine, &values, &[0.0, 2.0, 4.0]), vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn coarse_to_fine_is_linear() {
        let coarse = [0.0, 2.0, 4.0];
        let values = [1.0, 5.0, 3.0];

        assert_eq!(
            interpolate(&coarse, &values, &[0.0, 1.0, 2.0, 3.0, 4.0]),
            vec![1.0, 3.0, 5.0, 4.0, 3.0]
        );
    }

    #[test]
    fn clamps_outside_range() {
        let z = [0.0, 1.0];
        let values = [3.0, 7.0];

        assert_eq!(interpolate(&z, &values, &[-1.0, 2.0]), vec![3.0, 7.0]);
    }
}
