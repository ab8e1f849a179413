//! # taxi-fleet
//!
//! A small taxi-fleet domain model for Rust.
//!
//! ## Overview
//!
//! - **Cars**: immutable, validated car values in four categories (generic,
//!   electric, sedan, SUV) sharing one set of accessors
//! - **`CarsSet`**: a duplicate-free, insertion-ordered set over a growable
//!   array, using only `PartialEq` for uniqueness
//! - **`TaxiFleet`**: a non-empty roster of cars with cost summation, in-place
//!   sorting by fuel consumption, and speed range search
//!
//! Every fallible constructor returns [`cars::CarResult`]; nothing panics on
//! invalid input.
//!
//! ## Feature Flags
//!
//! - `arc`: share car data through `Arc` instead of `Rc`, making cars and
//!   collections of cars `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for cars, sets and fleets, with
//!   validation on deserialization
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use taxi_fleet::prelude::*;
//!
//! let cars = vec![
//!     Car::new("Model", 10.0, 100.0, 20000.0).unwrap(),
//!     Car::electric("Volt", 18.5, 120.0, 25000.0).unwrap(),
//! ];
//!
//! let mut fleet = TaxiFleet::new(cars).unwrap();
//! assert_eq!(fleet.calculate_fleet_cost(), 45000.0);
//!
//! fleet.sort_by_fuel_consumption();
//! assert!(fleet.cars()[0].is_electric());
//! assert!(fleet.find_car_by_speed_range(130.0, 140.0).is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use taxi_fleet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cars::*;
    pub use crate::fleet::*;
}

pub mod cars;
pub mod fleet;
