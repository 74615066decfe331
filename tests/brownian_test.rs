// tests/brownian_test.rs
use ito_path::brownian::{donsker, naive, schauder};
use ito_path::math_utils::norm_cdf;
use ito_path::path::TimeGrid;
use ito_path::rng::GaussianSampler;

#[test]
fn test_naive_path_starts_at_zero_for_all_seeds() {
    let grid = TimeGrid::new(1.0, 0.01).unwrap();
    for seed in 0..20 {
        let mut sampler = GaussianSampler::from_seed(seed);
        let path = naive::sample_path(&grid, &mut sampler);
        assert_eq!(path[0], 0.0);
        assert_eq!(path.len(), grid.steps() + 1);
    }
}

#[test]
fn test_naive_increment_statistics() {
    // Increments are N(0, dt): pool them over many independent paths and
    // check the first two sample moments.
    let dt = 0.01;
    let grid = TimeGrid::new(1.0, dt).unwrap();
    let mut sampler = GaussianSampler::from_seed(42);

    let mut increments = Vec::new();
    for _ in 0..200 {
        let path = naive::sample_path(&grid, &mut sampler);
        increments.extend(path.increments());
    }

    let n = increments.len() as f64;
    let mean = increments.iter().sum::<f64>() / n;
    let variance = increments.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    assert!(
        mean.abs() < 0.005,
        "increment mean {} too far from 0",
        mean
    );
    assert!(
        (variance - dt).abs() < 0.001,
        "increment variance {} too far from dt = {}",
        variance,
        dt
    );
}

#[test]
fn test_sampler_kolmogorov_smirnov() {
    // One-sample KS statistic against the standard normal CDF. The 5%
    // critical value at n = 10,000 is about 0.0136; the fixed seed keeps
    // this deterministic, the slack keeps it honest.
    let mut sampler = GaussianSampler::from_seed(1234);
    let mut draws = sampler.sample_many(10_000);
    draws.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = draws.len() as f64;
    let mut d_stat: f64 = 0.0;
    for (i, &x) in draws.iter().enumerate() {
        let cdf = norm_cdf(x);
        let below = (i as f64 / n - cdf).abs();
        let above = ((i + 1) as f64 / n - cdf).abs();
        d_stat = d_stat.max(below).max(above);
    }

    assert!(
        d_stat < 0.02,
        "KS statistic {} rejects standard normality",
        d_stat
    );
}

#[test]
fn test_triangle_reference_values() {
    assert_eq!(schauder::triangle(0.0), 0.0);
    assert_eq!(schauder::triangle(0.25), 0.25);
    assert_eq!(schauder::triangle(0.5), 0.5);
    assert_eq!(schauder::triangle(0.75), 0.25);
    assert_eq!(schauder::triangle(1.0), 0.0);
    assert_eq!(schauder::triangle(-3.0), 0.0);
    assert_eq!(schauder::triangle(2.0), 0.0);
}

#[test]
fn test_schauder_variance_at_dyadic_time() {
    // At t = 0.5 every basis function of scale ≥ 1 vanishes, so the
    // truncated series is ψ₀₀(0.5)·Z + 0.5·Z' with variance exactly 0.5.
    let mut sampler = GaussianSampler::from_seed(8);
    let runs = 4000;

    let draws: Vec<f64> = (0..runs)
        .map(|_| schauder::evaluate(4, 0.5, &mut sampler))
        .collect();

    let mean = draws.iter().sum::<f64>() / runs as f64;
    let variance = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / runs as f64;

    assert!(mean.abs() < 0.05, "mean {} too far from 0", mean);
    assert!(
        (variance - 0.5).abs() < 0.06,
        "variance {} too far from 0.5",
        variance
    );
}

#[test]
fn test_donsker_and_schauder_vanish_at_origin() {
    let mut sampler = GaussianSampler::from_seed(8);
    assert_eq!(schauder::evaluate(5, 0.0, &mut sampler), 0.0);
    assert_eq!(donsker::evaluate(256, 0.0, &mut sampler), 0.0);
}

#[test]
fn test_donsker_matches_brownian_variance() {
    // Var W_n(1) = 1 exactly when n·t is integral.
    let mut sampler = GaussianSampler::from_seed(9);
    let runs = 4000;

    let draws: Vec<f64> = (0..runs)
        .map(|_| donsker::evaluate(32, 1.0, &mut sampler))
        .collect();

    let mean = draws.iter().sum::<f64>() / runs as f64;
    let variance = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / runs as f64;

    assert!(mean.abs() < 0.06, "mean {} too far from 0", mean);
    assert!(
        (variance - 1.0).abs() < 0.1,
        "variance {} too far from 1",
        variance
    );
}
