use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use twine_enthalpy_verification::support::constraint::NonNegative;
/// use uom::si::{f64::Time, time::year};
///
/// let t_final = NonNegative::new(Time::new::<year>(0.0)).unwrap();
/// assert_eq!(t_final.into_inner().get::<year>(), 0.0);
///
/// assert!(NonNegative::new(Time::new::<year>(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Time, time::year};

    #[test]
    fn final_times() {
        assert!(NonNegative::new(Time::new::<year>(1000.0)).is_ok());
        assert!(NonNegative::new(Time::new::<year>(0.0)).is_ok());
        assert_eq!(
            NonNegative::new(Time::new::<year>(-0.5)),
            Err(ConstraintError::Negative)
        );
    }
}
