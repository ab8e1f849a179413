//! Car values and their validation errors.
//!
//! - [`Car`]: immutable car value, one of four categories
//! - [`CarKind`]: the closed set of categories (generic, electric, sedan, SUV)
//! - [`CarError`]: the error returned by every fallible constructor
//!
//! # Examples
//!
//! ```rust
//! use taxi_fleet::cars::{Car, CarError};
//!
//! let sedan = Car::sedan("Camry", 7.5, 180.0, 28000.0).unwrap();
//! let suv = Car::suv("RAV4", 9.0, 170.0, 32000.0).unwrap();
//! assert_ne!(sedan, suv);
//!
//! // Validation happens once, at construction
//! let error = Car::suv("Broken", 9.0, 170.0, -1.0).unwrap_err();
//! assert!(matches!(error, CarError::InvalidAttributes { .. }));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which makes cars shareable across threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod car;
mod error;

pub use car::Car;
pub use car::CarKind;
pub use error::CarError;
pub use error::CarResult;

// =============================================================================
// Tests
// =============================================================================
