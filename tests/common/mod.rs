#![allow(dead_code)]

use approx::assert_relative_eq;
use findangular::{
    aggregator::SeparationSummary,
    catalog::{Catalog, Point},
};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Four points whose six separations are 90°, 180°, 90°, 90°, 90°, 90°.
pub fn four_point_catalog() -> Catalog {
    Catalog::from_points(vec![
        Point::new(1, 0.0, 0.0),
        Point::new(2, 90.0, 0.0),
        Point::new(3, 180.0, 0.0),
        Point::new(4, 0.0, 90.0),
    ])
}

/// Reproducible catalog of `n` points spread over the whole sphere.
pub fn random_catalog(n: usize, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n as i64)
        .map(|id| {
            Point::new(
                id,
                rng.random_range(0.0..360.0),
                rng.random_range(-90.0..=90.0),
            )
        })
        .collect()
}

/// Sequential reference over `tuple_combinations`, `None` below two points.
pub fn brute_force_summary(catalog: &Catalog) -> Option<SeparationSummary> {
    let distances: Vec<f64> = catalog
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.separation(b))
        .collect();
    if distances.is_empty() {
        return None;
    }

    let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
    let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    Some(SeparationSummary {
        count: distances.len() as u64,
        min,
        max,
        mean,
    })
}

pub fn assert_summary_close(actual: &SeparationSummary, expected: &SeparationSummary, epsilon: f64) {
    assert_eq!(actual.count, expected.count);
    // min and max are order-independent, they must match exactly.
    assert_eq!(actual.min, expected.min);
    assert_eq!(actual.max, expected.max);
    assert_relative_eq!(actual.mean, expected.mean, epsilon = epsilon);
}
