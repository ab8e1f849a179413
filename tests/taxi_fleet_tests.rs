//! Integration tests for TaxiFleet.

use rstest::rstest;
use taxi_fleet::cars::{Car, CarError};
use taxi_fleet::fleet::TaxiFleet;

fn model1() -> Car {
    Car::new("Model1", 10.0, 100.0, 20000.0).unwrap()
}

fn model2() -> Car {
    Car::new("Model2", 12.0, 120.0, 25000.0).unwrap()
}

#[rstest]
fn test_constructor_with_valid_cars() {
    let cars = vec![model1(), model2()];
    let fleet = TaxiFleet::new(cars.clone()).unwrap();
    assert_eq!(fleet.cars(), cars);
}

#[rstest]
fn test_constructor_with_empty_cars() {
    let result = TaxiFleet::new(Vec::<Car>::new());
    assert_eq!(result, Err(CarError::EmptyFleet));
}

#[rstest]
fn test_try_from_vec() {
    let fleet = TaxiFleet::try_from(vec![model1()]).unwrap();
    assert_eq!(fleet.len(), 1);
    assert!(TaxiFleet::try_from(Vec::<Car>::new()).is_err());
}

#[rstest]
fn test_calculate_fleet_cost() {
    let fleet = TaxiFleet::new(vec![model1(), model2()]).unwrap();
    assert_eq!(fleet.calculate_fleet_cost(), 45000.0);
}

#[rstest]
fn test_sort_by_fuel_consumption() {
    let mut fleet = TaxiFleet::new(vec![
        model2(),
        Car::electric("Volt", 18.0, 150.0, 35000.0).unwrap(),
        model1(),
    ])
    .unwrap();

    fleet.sort_by_fuel_consumption();

    let consumptions: Vec<f64> = fleet.iter().map(Car::fuel_consumption).collect();
    assert_eq!(consumptions, vec![0.0, 10.0, 12.0]);
}

#[rstest]
fn test_cars_copy_does_not_observe_later_sort() {
    let mut fleet = TaxiFleet::new(vec![model2(), model1()]).unwrap();
    let before = fleet.cars();
    fleet.sort_by_fuel_consumption();
    assert_eq!(before, vec![model2(), model1()]);
    assert_eq!(fleet.cars(), vec![model1(), model2()]);
}

#[rstest]
#[case(110.0, 130.0, Some("Model2"))]
#[case(100.0, 100.0, Some("Model1"))]
#[case(90.0, 130.0, Some("Model1"))]
#[case(130.0, 140.0, None)]
fn test_find_car_by_speed_range(
    #[case] min_speed: f64,
    #[case] max_speed: f64,
    #[case] expected: Option<&str>,
) {
    let fleet = TaxiFleet::new(vec![model1(), model2()]).unwrap();
    let found = fleet.find_car_by_speed_range(min_speed, max_speed);
    assert_eq!(found.map(Car::model), expected);
}

#[rstest]
fn test_find_follows_current_order() {
    let fast_thirsty = Car::suv("Thirsty", 14.0, 120.0, 30000.0).unwrap();
    let fast_frugal = Car::sedan("Frugal", 6.0, 125.0, 22000.0).unwrap();
    let mut fleet = TaxiFleet::new(vec![fast_thirsty, fast_frugal]).unwrap();

    let first = fleet.find_car_by_speed_range(110.0, 130.0).map(Car::model);
    assert_eq!(first, Some("Thirsty"));

    fleet.sort_by_fuel_consumption();
    let first = fleet.find_car_by_speed_range(110.0, 130.0).map(Car::model);
    assert_eq!(first, Some("Frugal"));
}
