use std::fmt;

use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::year,
};

use crate::{
    models::enthalpy::core::{analytic::Regime, scenario::Scenario},
    support::constraint::{ConstraintError, NonNegative, StrictlyPositive},
};

/// Column levels used by the reference time sweep.
const REFERENCE_TIME_LEVELS: usize = 101;

/// Final time of the reference time sweep, years.
const REFERENCE_TIME_FINAL: f64 = 1000.0;

/// Which discretization parameter a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepKind {
    /// Time step `dt`, in years.
    Time,
    /// Grid spacing `dz = Lz/Mz`, in meters.
    Space,
}

impl SweepKind {
    /// Short symbol of the swept parameter.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Time => "dt",
            Self::Space => "dz",
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Time => "years",
            Self::Space => "m",
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => f.write_str("time"),
            Self::Space => f.write_str("space"),
        }
    }
}

/// One discretization to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Value of the swept parameter, in the units of [`SweepKind::unit`].
    pub parameter: f64,
    pub levels: usize,
    pub dt: Time,
    pub t_final: Time,
}

impl SamplePoint {
    /// The scenario that runs this sample for `regime`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if `dt` is not strictly positive or `t_final` is negative.
    pub fn scenario(&self, regime: Regime) -> Result<Scenario, ConstraintError> {
        Ok(Scenario::new(
            regime,
            self.levels,
            StrictlyPositive::new(self.dt)?,
            NonNegative::new(self.t_final)?,
        ))
    }
}

/// An ordered set of discretizations varying one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    kind: SweepKind,
    points: Vec<SamplePoint>,
}

impl Sweep {
    /// Time steps `2⁰ … 2⁹` years on 101 levels, run to 1000 years.
    #[must_use]
    pub fn reference_time() -> Self {
        let dts = (0..10).map(|k| Time::new::<year>(2f64.powi(k)));
        Self::time(dts, REFERENCE_TIME_LEVELS, Time::new::<year>(REFERENCE_TIME_FINAL))
    }

    /// Columns of `2³ … 2⁹` levels, each advanced by a single one-year step.
    #[must_use]
    pub fn reference_space(height: Length) -> Self {
        let levels = (3..10).map(|k| 1_usize << k);
        Self::space(levels, height, Time::new::<year>(1.0))
    }

    /// Varies the time step on a fixed column.
    pub fn time(dts: impl IntoIterator<Item = Time>, levels: usize, t_final: Time) -> Self {
        let points = dts
            .into_iter()
            .map(|dt| SamplePoint {
                parameter: dt.get::<year>(),
                levels,
                dt,
                t_final,
            })
            .collect();
        Self {
            kind: SweepKind::Time,
            points,
        }
    }

    /// Varies the number of levels, running one step of `dt` each.
    ///
    /// The parameter is `Lz/Mz`.
    pub fn space(levels: impl IntoIterator<Item = usize>, height: Length, dt: Time) -> Self {
        let lz = height.get::<meter>();
        #[allow(clippy::cast_precision_loss)]
        let points = levels
            .into_iter()
            .map(|levels| SamplePoint {
                parameter: lz / levels as f64,
                levels,
                dt,
                t_final: dt,
            })
            .collect();
        Self {
            kind: SweepKind::Space,
            points,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SweepKind {
        self.kind
    }

    #[must_use]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_time_sweep() {
        let sweep = Sweep::reference_time();
        assert_eq!(sweep.kind(), SweepKind::Time);

        let points = sweep.points();
        assert_eq!(points.len(), 10);
        assert_relative_eq!(points[0].parameter, 1.0);
        assert_relative_eq!(points[9].parameter, 512.0);
        for point in points {
            assert_eq!(point.levels, 101);
            assert_relative_eq!(point.t_final.get::<year>(), 1000.0);
            assert_relative_eq!(point.dt.get::<year>(), point.parameter);
        }
    }

    #[test]
    fn reference_space_sweep() {
        let sweep = Sweep::reference_space(Length::new::<meter>(1000.0));
        assert_eq!(sweep.kind(), SweepKind::Space);

        let levels: Vec<usize> = sweep.points().iter().map(|p| p.levels).collect();
        assert_eq!(levels, [8, 16, 32, 64, 128, 256, 512]);

        let first = sweep.points()[0];
        assert_relative_eq!(first.parameter, 125.0);
        assert_relative_eq!(first.dt.get::<year>(), 1.0);
        assert_relative_eq!(first.t_final.get::<year>(), 1.0);
    }

    #[test]
    fn sample_scenario_checks_times() {
        let point = SamplePoint {
            parameter: 1.0,
            levels: 11,
            dt: Time::new::<year>(-1.0),
            t_final: Time::new::<year>(1.0),
        };
        assert_eq!(
            point.scenario(Regime::DirichletNeumann),
            Err(ConstraintError::Negative)
        );

        let point = SamplePoint {
            dt: Time::new::<year>(1.0),
            ..point
        };
        let scenario = point.scenario(Regime::NeumannDirichlet).unwrap();
        assert_eq!(scenario.levels, 11);
        assert_eq!(scenario.regime, Regime::NeumannDirichlet);
    }
}
