//! Validated car values.
//!
//! A [`Car`] is an immutable record of a model name and three non-negative
//! numeric attributes. The category of a car (generic, electric, sedan or SUV)
//! is a closed set of variants carried in [`CarKind`], so every category shares
//! the same accessors, validation, equality and textual form.
//!
//! # Examples
//!
//! ```rust
//! use taxi_fleet::cars::{Car, CarKind};
//!
//! let car = Car::new("Model", 10.0, 100.0, 20000.0).unwrap();
//! assert_eq!(
//!     car.to_string(),
//!     "Car{model='Model', fuelConsumption=10.0, speed=100.0, price=20000.0}"
//! );
//!
//! let electric = Car::electric("Volt", 18.5, 150.0, 35000.0).unwrap();
//! assert_eq!(electric.fuel_consumption(), 0.0);
//! assert_eq!(electric.kilowatt(), Some(18.5));
//! assert_eq!(electric.kind(), CarKind::Electric { kilowatt: 18.5 });
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use super::{CarError, CarResult, ReferenceCounter};

/// The category a car belongs to.
///
/// Only the electric category carries extra data: its energy consumption in
/// kWh per 100 km.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CarKind {
    /// A car with no particular category.
    Generic,
    /// An electric car. Its fuel consumption is always zero.
    Electric {
        /// Energy consumption in kWh per 100 km.
        kilowatt: f64,
    },
    /// A sedan.
    Sedan,
    /// A sports utility vehicle.
    Suv,
}

impl CarKind {
    /// Returns a short lowercase name for the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Electric { .. } => "electric",
            Self::Sedan => "sedan",
            Self::Suv => "suv",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// An immutable car value.
///
/// All numeric attributes are validated to be non-negative at construction.
/// There are no setters: a car never changes after it has been built.
///
/// # Equality
///
/// Two cars are equal when they belong to the same category and their model,
/// fuel consumption, speed and price all match. Numbers are compared by their
/// bit pattern, so `0.0` and `-0.0` are different values. The energy
/// consumption of an electric car does not take part in equality or hashing.
///
/// # Sharing
///
/// The model name is stored behind a reference counter, so cloning a car into
/// a [`CarsSet`](crate::fleet::CarsSet) and a
/// [`TaxiFleet`](crate::fleet::TaxiFleet) at the same time shares the text.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CarRecord", into = "CarRecord")
)]
pub struct Car {
    model: ReferenceCounter<str>,
    fuel_consumption: f64,
    speed: f64,
    price: f64,
    kind: CarKind,
}

#[inline]
fn is_non_negative(value: f64) -> bool {
    // NaN fails this comparison as well.
    value >= 0.0
}

impl Car {
    /// Creates a generic car.
    ///
    /// # Arguments
    ///
    /// * `model` - The model name
    /// * `fuel_consumption` - Fuel consumption in liters per 100 km
    /// * `speed` - Speed in km/h
    /// * `price` - Price in currency units
    ///
    /// # Errors
    ///
    /// Returns [`CarError::InvalidAttributes`] if any numeric attribute is
    /// negative or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::cars::Car;
    ///
    /// let car = Car::new("Model", 10.0, 100.0, 20000.0).unwrap();
    /// assert_eq!(car.model(), "Model");
    /// assert!(Car::new("Model", 10.0, -1.0, 20000.0).is_err());
    /// ```
    pub fn new(
        model: impl Into<String>,
        fuel_consumption: f64,
        speed: f64,
        price: f64,
    ) -> CarResult<Self> {
        Self::with_kind(model.into(), fuel_consumption, speed, price, CarKind::Generic)
    }

    /// Creates an electric car.
    ///
    /// The fuel consumption is fixed to zero. The shared attributes are
    /// validated first, then the energy consumption.
    ///
    /// # Errors
    ///
    /// Returns [`CarError::InvalidAttributes`] if `speed` or `price` is
    /// invalid, and [`CarError::InvalidElectricAttribute`] if `kilowatt` is
    /// negative or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::cars::{Car, CarError};
    ///
    /// let error = Car::electric("Volt", -1.0, 150.0, 35000.0).unwrap_err();
    /// assert_eq!(error, CarError::InvalidElectricAttribute { kilowatt: -1.0 });
    /// ```
    pub fn electric(
        model: impl Into<String>,
        kilowatt: f64,
        speed: f64,
        price: f64,
    ) -> CarResult<Self> {
        let car = Self::with_kind(
            model.into(),
            0.0,
            speed,
            price,
            CarKind::Electric { kilowatt },
        )?;
        if is_non_negative(kilowatt) {
            Ok(car)
        } else {
            tracing::debug!(model = %car.model, kilowatt, "rejected electric car attribute");
            Err(CarError::InvalidElectricAttribute { kilowatt })
        }
    }

    /// Creates a sedan.
    ///
    /// # Errors
    ///
    /// Same as [`Car::new`].
    pub fn sedan(
        model: impl Into<String>,
        fuel_consumption: f64,
        speed: f64,
        price: f64,
    ) -> CarResult<Self> {
        Self::with_kind(model.into(), fuel_consumption, speed, price, CarKind::Sedan)
    }

    /// Creates an SUV.
    ///
    /// # Errors
    ///
    /// Same as [`Car::new`].
    pub fn suv(
        model: impl Into<String>,
        fuel_consumption: f64,
        speed: f64,
        price: f64,
    ) -> CarResult<Self> {
        Self::with_kind(model.into(), fuel_consumption, speed, price, CarKind::Suv)
    }

    fn with_kind(
        model: String,
        fuel_consumption: f64,
        speed: f64,
        price: f64,
        kind: CarKind,
    ) -> CarResult<Self> {
        if is_non_negative(fuel_consumption) && is_non_negative(speed) && is_non_negative(price) {
            Ok(Self {
                model: ReferenceCounter::from(model),
                fuel_consumption,
                speed,
                price,
                kind,
            })
        } else {
            tracing::debug!(
                model = %model,
                kind = %kind,
                fuel_consumption,
                speed,
                price,
                "rejected car attributes"
            );
            Err(CarError::InvalidAttributes {
                fuel_consumption,
                speed,
                price,
            })
        }
    }

    /// Returns the model name.
    #[inline]
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the fuel consumption in liters per 100 km.
    #[inline]
    #[must_use]
    pub const fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    /// Returns the speed in km/h.
    #[inline]
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the category of the car.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CarKind {
        self.kind
    }

    /// Returns the energy consumption in kWh per 100 km for electric cars,
    /// `None` for every other category.
    #[inline]
    #[must_use]
    pub const fn kilowatt(&self) -> Option<f64> {
        match self.kind {
            CarKind::Electric { kilowatt } => Some(kilowatt),
            _ => None,
        }
    }

    /// Returns `true` if the car is electric.
    #[inline]
    #[must_use]
    pub const fn is_electric(&self) -> bool {
        matches!(self.kind, CarKind::Electric { .. })
    }
}

/// Renders `Car{model='<model>', fuelConsumption=<f>, speed=<s>, price=<p>}`.
///
/// The same format is used for every category. In particular an electric car
/// shows `fuelConsumption=0.0` and does not mention its energy consumption.
impl fmt::Display for Car {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Car{{model='{}', fuelConsumption=", self.model)?;
        write_decimal(formatter, self.fuel_consumption)?;
        formatter.write_str(", speed=")?;
        write_decimal(formatter, self.speed)?;
        formatter.write_str(", price=")?;
        write_decimal(formatter, self.price)?;
        formatter.write_str("}")
    }
}

/// Writes `value` in plain decimal notation, never with an exponent, keeping
/// a trailing `.0` on whole numbers.
fn write_decimal(formatter: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    write!(formatter, "{value}")?;
    if value.fract() == 0.0 {
        formatter.write_str(".0")?;
    }
    Ok(())
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(&self.kind) == mem::discriminant(&other.kind)
            && self.fuel_consumption.to_bits() == other.fuel_consumption.to_bits()
            && self.speed.to_bits() == other.speed.to_bits()
            && self.price.to_bits() == other.price.to_bits()
            && self.model == other.model
    }
}

impl Eq for Car {}

impl Hash for Car {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(&self.kind).hash(state);
        self.model.hash(state);
        self.fuel_consumption.to_bits().hash(state);
        self.speed.to_bits().hash(state);
        self.price.to_bits().hash(state);
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CarRecord {
    model: String,
    fuel_consumption: f64,
    speed: f64,
    price: f64,
    kind: CarKind,
}

#[cfg(feature = "serde")]
impl From<Car> for CarRecord {
    fn from(car: Car) -> Self {
        Self {
            model: car.model.to_string(),
            fuel_consumption: car.fuel_consumption,
            speed: car.speed,
            price: car.price,
            kind: car.kind,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<CarRecord> for Car {
    type Error = CarError;

    fn try_from(record: CarRecord) -> CarResult<Self> {
        match record.kind {
            CarKind::Electric { kilowatt } => {
                Self::electric(record.model, kilowatt, record.speed, record.price)
            }
            kind => Self::with_kind(
                record.model,
                record.fuel_consumption,
                record.speed,
                record.price,
                kind,
            ),
        }
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Car: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Car: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
