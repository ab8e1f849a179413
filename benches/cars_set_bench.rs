//! CarsSet benchmarks.
//!
//! Measures insertion (duplicate scan plus amortized growth), membership
//! lookups, and bulk retain against a fleet-sized input.
//!
//! Pre-generated cars are reused via clone() in setup to avoid regeneration
//! overhead.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taxi_fleet::cars::Car;
use taxi_fleet::fleet::CarsSet;

const SIZES: [usize; 3] = [10, 100, 1000];

fn generate_cars(size: usize) -> Vec<Car> {
    (0..size)
        .map(|index| {
            let value = f64::from(u32::try_from(index).unwrap_or(u32::MAX));
            Car::new(format!("Car{index}"), value % 20.0, value % 250.0, value * 100.0).unwrap()
        })
        .collect()
}

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cars_set_add");

    for size in SIZES {
        let cars = generate_cars(size);
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, _| {
            bencher.iter_batched(
                || cars.clone(),
                |cars| {
                    let mut set = CarsSet::new();
                    for car in cars {
                        set.add(black_box(car));
                    }
                    black_box(set)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cars_set_contains");

    for size in SIZES {
        let cars = generate_cars(size);
        let set: CarsSet = cars.iter().cloned().collect();
        let last = cars[size - 1].clone();
        group.bench_with_input(BenchmarkId::new("contains_last", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.contains(black_box(&last))));
        });
    }

    group.finish();
}

fn benchmark_retain_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cars_set_retain_all");

    for size in SIZES {
        let cars = generate_cars(size);
        let set: CarsSet = cars.iter().cloned().collect();
        let keep: Vec<Car> = cars.iter().step_by(2).cloned().collect();
        group.bench_with_input(BenchmarkId::new("retain_half", size), &size, |bencher, _| {
            bencher.iter_batched(
                || set.clone(),
                |mut set| {
                    set.retain_all(black_box(&keep));
                    black_box(set)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_add, benchmark_contains, benchmark_retain_all);
criterion_main!(benches);
