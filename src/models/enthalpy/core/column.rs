//! Single-column discretization.

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constraint, StrictlyPositive};

/// Errors building or updating a [`Column`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColumnError {
    #[error("a column needs at least 2 levels, got {levels}")]
    TooFewLevels { levels: usize },

    #[error("invalid column height: {height:?}")]
    Height { height: Length },

    #[error("{field} has {actual} values but the column has {expected} levels")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Equally spaced vertical levels from the base (`z = 0`) to the surface (`z = Lz`).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGrid {
    height: Length,
    z: Vec<f64>,
}

impl ColumnGrid {
    /// Builds `levels` equally spaced levels spanning `height`.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError`] if `levels < 2` or `height` is not strictly positive.
    pub fn new(levels: usize, height: Length) -> Result<Self, ColumnError> {
        if levels < 2 {
            return Err(ColumnError::TooFewLevels { levels });
        }
        if StrictlyPositive::check(&height.value).is_err() {
            return Err(ColumnError::Height { height });
        }

        let lz = height.get::<meter>();
        let last = levels - 1;
        #[allow(clippy::cast_precision_loss)]
        let z = (0..levels)
            .map(|k| {
                if k == last {
                    lz
                } else {
                    lz * k as f64 / last as f64
                }
            })
            .collect();

        Ok(Self { height, z })
    }

    /// Number of levels `Mz`.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.z.len()
    }

    /// Column height `Lz`.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    /// Level heights in meters, strictly increasing.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Distance between adjacent levels.
    #[must_use]
    pub fn spacing(&self) -> Length {
        Length::new::<meter>(self.z[1] - self.z[0])
    }
}

/// Enthalpy column and the auxiliary fields a column solver reads.
///
/// Velocities and strain heating are zero for pure-conduction verification; they
/// exist so that full-physics solvers can consume the same column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    grid: ColumnGrid,
    /// Enthalpy, J/kg.
    enthalpy: Vec<f64>,
    /// Horizontal velocity components, m/s.
    u: Vec<f64>,
    v: Vec<f64>,
    /// Vertical velocity, m/s.
    w: Vec<f64>,
    /// Strain heating, W/m³.
    strain_heating: Vec<f64>,
}

impl Column {
    /// Creates a column on `grid` with every field zeroed.
    #[must_use]
    pub fn new(grid: ColumnGrid) -> Self {
        let zeros = vec![0.0; grid.levels()];
        Self {
            enthalpy: zeros.clone(),
            u: zeros.clone(),
            v: zeros.clone(),
            w: zeros.clone(),
            strain_heating: zeros,
            grid,
        }
    }

    /// Builds a grid of `levels` levels spanning `height` and a zeroed column on it.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError`] if the grid is invalid.
    pub fn build(levels: usize, height: Length) -> Result<Self, ColumnError> {
        Ok(Self::new(ColumnGrid::new(levels, height)?))
    }

    #[must_use]
    pub fn grid(&self) -> &ColumnGrid {
        &self.grid
    }

    #[must_use]
    pub fn z(&self) -> &[f64] {
        self.grid.z()
    }

    #[must_use]
    pub fn enthalpy(&self) -> &[f64] {
        &self.enthalpy
    }

    /// Velocity components `(u, v, w)`.
    #[must_use]
    pub fn velocity(&self) -> (&[f64], &[f64], &[f64]) {
        (&self.u, &self.v, &self.w)
    }

    #[must_use]
    pub fn strain_heating(&self) -> &[f64] {
        &self.strain_heating
    }

    /// Overwrites the enthalpy at every level.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::LengthMismatch`] unless `values` has one entry per level.
    pub fn set_profile(&mut self, values: &[f64]) -> Result<(), ColumnError> {
        self.check_len("enthalpy", values)?;
        self.enthalpy.copy_from_slice(values);
        Ok(())
    }

    /// Overwrites the velocity field.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::LengthMismatch`] unless each component has one entry per level.
    pub fn set_velocity(&mut self, u: &[f64], v: &[f64], w: &[f64]) -> Result<(), ColumnError> {
        self.check_len("u", u)?;
        self.check_len("v", v)?;
        self.check_len("w", w)?;
        self.u.copy_from_slice(u);
        self.v.copy_from_slice(v);
        self.w.copy_from_slice(w);
        Ok(())
    }

    /// Overwrites the strain heating.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::LengthMismatch`] unless `values` has one entry per level.
    pub fn set_strain_heating(&mut self, values: &[f64]) -> Result<(), ColumnError> {
        self.check_len("strain heating", values)?;
        self.strain_heating.copy_from_slice(values);
        Ok(())
    }

    /// Zeroes all velocity components.
    pub fn reset_velocity(&mut self) {
        self.u.fill(0.0);
        self.v.fill(0.0);
        self.w.fill(0.0);
    }

    /// Zeroes the strain heating.
    pub fn reset_strain_heating(&mut self) {
        self.strain_heating.fill(0.0);
    }

    fn check_len(&self, field: &'static str, values: &[f64]) -> Result<(), ColumnError> {
        let expected = self.grid.levels();
        if values.len() != expected {
            return Err(ColumnError::LengthMismatch {
                field,
                expected,
                actual: values.len(),
            });
        }
        Ok(())
    }
}
