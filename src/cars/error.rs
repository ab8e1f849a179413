//! Error types for the car domain.
//!
//! Every constructor in this crate validates its arguments and reports a
//! violation through [`CarError`]. Construction either fully succeeds or
//! returns an error; no partially-initialized value is ever observable.

/// Represents an invalid domain value rejected at construction.
///
/// # Examples
///
/// ```rust
/// use taxi_fleet::cars::{Car, CarError};
///
/// let error = Car::new("Broken", -1.0, 100.0, 20000.0).unwrap_err();
/// assert!(matches!(error, CarError::InvalidAttributes { .. }));
/// assert_eq!(
///     format!("{error}"),
///     "Invalid car attributes: fuel consumption, speed, and price must be non-negative"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarError {
    /// One of the shared numeric attributes is negative or NaN.
    InvalidAttributes {
        /// The rejected fuel consumption, in liters per 100 km.
        fuel_consumption: f64,
        /// The rejected speed, in km/h.
        speed: f64,
        /// The rejected price.
        price: f64,
    },
    /// The energy consumption of an electric car is negative or NaN.
    InvalidElectricAttribute {
        /// The rejected energy consumption, in kWh per 100 km.
        kilowatt: f64,
    },
    /// A taxi fleet was built from an empty sequence of cars.
    EmptyFleet,
}

impl std::fmt::Display for CarError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAttributes { .. } => write!(
                formatter,
                "Invalid car attributes: fuel consumption, speed, and price must be non-negative"
            ),
            Self::InvalidElectricAttribute { .. } => write!(
                formatter,
                "Invalid electric car attribute: kilowatt consumption must be non-negative"
            ),
            Self::EmptyFleet => write!(
                formatter,
                "Invalid taxi fleet: must contain at least one car"
            ),
        }
    }
}

impl std::error::Error for CarError {}

/// Result alias used by every fallible constructor in the crate.
pub type CarResult<T> = Result<T, CarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    #[case(
        CarError::InvalidAttributes { fuel_consumption: -1.0, speed: 0.0, price: 0.0 },
        "Invalid car attributes: fuel consumption, speed, and price must be non-negative"
    )]
    #[case(
        CarError::InvalidElectricAttribute { kilowatt: -5.0 },
        "Invalid electric car attribute: kilowatt consumption must be non-negative"
    )]
    #[case(CarError::EmptyFleet, "Invalid taxi fleet: must contain at least one car")]
    fn test_display(#[case] error: CarError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        let error: Box<dyn Error> = Box::new(CarError::EmptyFleet);
        assert!(error.source().is_none());
    }
}
