//! Property-based tests for Car laws.
//!
//! These tests verify validation, accessors and the equality/hash contract
//! for every car category.

use std::hash::{DefaultHasher, Hash, Hasher};

use proptest::prelude::*;
use taxi_fleet::cars::{Car, CarError, CarResult};

type Constructor = fn(String, f64, f64, f64) -> CarResult<Car>;

fn generic(model: String, consumption: f64, speed: f64, price: f64) -> CarResult<Car> {
    Car::new(model, consumption, speed, price)
}

fn electric(model: String, consumption: f64, speed: f64, price: f64) -> CarResult<Car> {
    Car::electric(model, consumption, speed, price)
}

fn sedan(model: String, consumption: f64, speed: f64, price: f64) -> CarResult<Car> {
    Car::sedan(model, consumption, speed, price)
}

fn suv(model: String, consumption: f64, speed: f64, price: f64) -> CarResult<Car> {
    Car::suv(model, consumption, speed, price)
}

fn any_constructor() -> impl Strategy<Value = Constructor> {
    prop_oneof![
        Just(generic as Constructor),
        Just(electric as Constructor),
        Just(sedan as Constructor),
        Just(suv as Constructor),
    ]
}

fn non_negative() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..1.0e9f64]
}

fn negative() -> impl Strategy<Value = f64> {
    -1.0e9..-1.0e-9f64
}

fn model_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,12}"
}

fn hash_of(car: &Car) -> u64 {
    let mut hasher = DefaultHasher::new();
    car.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Accessor Law
// Description: non-negative attributes are accepted and read back unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_accessors_return_supplied_values(
        constructor in any_constructor(),
        model in model_name(),
        consumption in non_negative(),
        speed in non_negative(),
        price in non_negative()
    ) {
        let car = constructor(model.clone(), consumption, speed, price).unwrap();

        prop_assert_eq!(car.model(), model.as_str());
        prop_assert_eq!(car.speed().to_bits(), speed.to_bits());
        prop_assert_eq!(car.price().to_bits(), price.to_bits());
        if car.is_electric() {
            prop_assert_eq!(car.fuel_consumption().to_bits(), 0.0f64.to_bits());
            prop_assert_eq!(car.kilowatt().map(f64::to_bits), Some(consumption.to_bits()));
        } else {
            prop_assert_eq!(car.fuel_consumption().to_bits(), consumption.to_bits());
            prop_assert_eq!(car.kilowatt(), None);
        }
    }
}

// =============================================================================
// Rejection Law
// Description: any single negative attribute makes construction fail
// =============================================================================

proptest! {
    #[test]
    fn prop_negative_attribute_is_rejected(
        constructor in any_constructor(),
        consumption in non_negative(),
        speed in non_negative(),
        price in non_negative(),
        bad_value in negative(),
        bad_position in 0usize..3
    ) {
        let mut attributes = [consumption, speed, price];
        attributes[bad_position] = bad_value;
        let [consumption, speed, price] = attributes;

        let result = constructor(String::from("Model"), consumption, speed, price);

        let is_invalid = matches!(
            result,
            Err(CarError::InvalidAttributes { .. } | CarError::InvalidElectricAttribute { .. })
        );
        prop_assert!(is_invalid);
    }
}

// =============================================================================
// Hash Law
// Description: cars built from the same arguments are equal and hash alike
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_cars_hash_identically(
        constructor in any_constructor(),
        model in model_name(),
        consumption in non_negative(),
        speed in non_negative(),
        price in non_negative()
    ) {
        let left = constructor(model.clone(), consumption, speed, price).unwrap();
        let right = constructor(model, consumption, speed, price).unwrap();

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash_of(&left), hash_of(&right));
    }
}

// =============================================================================
// Inequality Law
// Description: changing any single compared field breaks equality
// =============================================================================

proptest! {
    #[test]
    fn prop_single_field_change_breaks_equality(
        constructor in any_constructor(),
        model in model_name(),
        consumption in non_negative(),
        speed in non_negative(),
        price in non_negative(),
        delta in 1.0..100.0f64,
        changed_field in 0usize..4
    ) {
        let original = constructor(model.clone(), consumption, speed, price).unwrap();
        let changed = match changed_field {
            0 => constructor(format!("{model}x"), consumption, speed, price),
            1 => constructor(model, consumption + delta, speed, price),
            2 => constructor(model, consumption, speed + delta, price),
            _ => constructor(model, consumption, speed, price + delta),
        }
        .unwrap();

        if original.is_electric() && changed_field == 1 {
            // Energy consumption is not part of equality.
            prop_assert_eq!(original, changed);
        } else {
            prop_assert_ne!(original, changed);
        }
    }
}
