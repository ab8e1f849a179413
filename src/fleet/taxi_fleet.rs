//! A fixed roster of taxi cars with aggregate queries.
//!
//! # Examples
//!
//! ```rust
//! use taxi_fleet::cars::Car;
//! use taxi_fleet::fleet::TaxiFleet;
//!
//! let mut fleet = TaxiFleet::new(vec![
//!     Car::suv("RAV4", 9.0, 120.0, 25000.0).unwrap(),
//!     Car::sedan("Camry", 7.5, 100.0, 20000.0).unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(fleet.calculate_fleet_cost(), 45000.0);
//! assert_eq!(fleet.find_car_by_speed_range(110.0, 130.0).unwrap().model(), "RAV4");
//!
//! fleet.sort_by_fuel_consumption();
//! assert_eq!(fleet.cars()[0].model(), "Camry");
//! ```

use crate::cars::{Car, CarError, CarResult};

use super::CarsSet;

/// A non-empty, ordered collection of cars.
///
/// The fleet owns its ordering: [`TaxiFleet::sort_by_fuel_consumption`]
/// reorders it in place, which in turn changes which car
/// [`TaxiFleet::find_car_by_speed_range`] finds first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Car>", into = "Vec<Car>")
)]
pub struct TaxiFleet {
    cars: Vec<Car>,
}

#[allow(clippy::len_without_is_empty)]
impl TaxiFleet {
    /// Creates a fleet from a sequence of cars.
    ///
    /// # Errors
    ///
    /// Returns [`CarError::EmptyFleet`] if `cars` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::cars::{Car, CarError};
    /// use taxi_fleet::fleet::TaxiFleet;
    ///
    /// assert_eq!(TaxiFleet::new(Vec::<Car>::new()), Err(CarError::EmptyFleet));
    /// ```
    pub fn new(cars: impl Into<Vec<Car>>) -> CarResult<Self> {
        let cars = cars.into();
        if cars.is_empty() {
            tracing::debug!("rejected empty taxi fleet");
            return Err(CarError::EmptyFleet);
        }
        Ok(Self { cars })
    }

    /// Returns a copy of the cars in their current order.
    ///
    /// Changing the returned vector never affects the fleet.
    #[must_use]
    pub fn cars(&self) -> Vec<Car> {
        self.cars.clone()
    }

    /// Returns an iterator over the cars in their current order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Car> {
        self.cars.iter()
    }

    /// Returns the number of cars. Always at least one.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Returns the sum of the prices of all cars.
    ///
    /// Uses compensated summation, so the result is far less sensitive to
    /// the order of the fleet than a plain running sum.
    #[must_use]
    pub fn calculate_fleet_cost(&self) -> f64 {
        let (sum, compensation) =
            self.cars
                .iter()
                .map(Car::price)
                .fold((0.0_f64, 0.0_f64), |(sum, compensation), price| {
                    let total = sum + price;
                    let lost = if sum.abs() >= price.abs() {
                        (sum - total) + price
                    } else {
                        (price - total) + sum
                    };
                    (total, compensation + lost)
                });
        sum + compensation
    }

    /// Sorts the fleet in place by ascending fuel consumption.
    ///
    /// The sort is stable: cars with equal fuel consumption keep their
    /// relative order.
    pub fn sort_by_fuel_consumption(&mut self) {
        self.cars
            .sort_by(|left, right| left.fuel_consumption().total_cmp(&right.fuel_consumption()));
        tracing::trace!(cars = self.cars.len(), "sorted fleet by fuel consumption");
    }

    /// Returns the first car, in current order, whose speed lies in
    /// `[min_speed, max_speed]`.
    ///
    /// Returns `None` if no car matches, including when `min_speed` is greater
    /// than `max_speed`.
    #[must_use]
    pub fn find_car_by_speed_range(&self, min_speed: f64, max_speed: f64) -> Option<&Car> {
        self.cars
            .iter()
            .find(|car| (min_speed..=max_speed).contains(&car.speed()))
    }
}

impl TryFrom<Vec<Car>> for TaxiFleet {
    type Error = CarError;

    fn try_from(cars: Vec<Car>) -> CarResult<Self> {
        Self::new(cars)
    }
}

/// Builds a fleet from the elements of a set, in the set's insertion order.
impl TryFrom<CarsSet<Car>> for TaxiFleet {
    type Error = CarError;

    fn try_from(set: CarsSet<Car>) -> CarResult<Self> {
        Self::new(set.into_iter().collect::<Vec<_>>())
    }
}

impl From<TaxiFleet> for Vec<Car> {
    fn from(fleet: TaxiFleet) -> Self {
        fleet.cars
    }
}

impl<'a> IntoIterator for &'a TaxiFleet {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(TaxiFleet: Send, Sync);
