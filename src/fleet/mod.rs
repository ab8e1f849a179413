//! Collections of cars.
//!
//! - [`CarsSet`]: duplicate-free, insertion-ordered set backed by a growable array
//! - [`TaxiFleet`]: non-empty roster of cars with cost, sort and search queries
//! - [`Membership`]: the membership question bulk set operations ask of their argument
//!
//! # Examples
//!
//! ```rust
//! use taxi_fleet::cars::Car;
//! use taxi_fleet::fleet::{CarsSet, TaxiFleet};
//!
//! let camry = Car::sedan("Camry", 7.5, 100.0, 20000.0).unwrap();
//! let rav4 = Car::suv("RAV4", 9.0, 120.0, 25000.0).unwrap();
//!
//! // The same car may be held by a set and a fleet at once
//! let set: CarsSet = vec![camry.clone(), rav4.clone(), camry.clone()].into();
//! assert_eq!(set.len(), 2);
//!
//! let fleet = TaxiFleet::try_from(set).unwrap();
//! assert_eq!(fleet.calculate_fleet_cost(), 45000.0);
//! ```

mod cars_set;
mod membership;
mod taxi_fleet;

pub use cars_set::CarsSet;
pub use cars_set::CarsSetIntoIterator;
pub use cars_set::CarsSetIterator;
pub use cars_set::INITIAL_CAPACITY;
pub use membership::Membership;
pub use taxi_fleet::TaxiFleet;
