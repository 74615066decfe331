// demos/compare_ou.rs
//! Compare a coarse Euler-Maruyama approximation of `dX = -X dt + dW`
//! against its closed form `X(t) = e^{-t}(X0 + ∫ e^s dW)` built on a finer
//! Brownian grid, and write the aligned columns to `data/compare_1.csv`.
//!
//! Run with: cargo run --example compare_ou

use ito_path::brownian::naive;
use ito_path::calculus::truncate_path;
use ito_path::math_utils::Timer;
use ito_path::models::Coefficients;
use ito_path::output::write_comparison_to_csv;
use ito_path::path::TimeGrid;
use ito_path::reference::{compare_on_grid, ou_reference};
use ito_path::rng::{GaussianSampler, InitialCondition};
use ito_path::solvers::euler_maruyama::EulerMaruyama;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = 37;
    let factor = 8;
    let fine_grid = TimeGrid::new(1.0, 2f64.powi(-10))?;
    let coarse_grid = TimeGrid::new(1.0, 2f64.powi(-7))?;

    println!("=== ito-path demo: coarse scheme vs exact OU reference ===\n");
    println!("Brownian step size: {}", fine_grid.dt());
    println!("Scheme step size:   {}", coarse_grid.dt());
    println!("Refinement factor:  {}\n", factor);

    std::fs::create_dir_all("data")?;
    let mut sampler = GaussianSampler::from_seed(seed);
    let timer = Timer::new();

    let brownian = naive::sample_path(&fine_grid, &mut sampler);
    let coarse_brownian = truncate_path(&brownian, factor)?;
    let x0 = InitialCondition::Fixed(1.0).draw(&mut sampler)?;

    let process = Coefficients::new(|_t, x: f64| -x, |_t, _x| 1.0);
    let approx = EulerMaruyama::solve_along(&coarse_grid, x0, &process, &coarse_brownian)?;
    let reference = ou_reference(&fine_grid, x0, &brownian)?;

    let comparison = compare_on_grid(&approx, &reference, factor)?;
    write_comparison_to_csv("data/compare_1.csv", &comparison)?;

    println!("Rows written:       {}", comparison.len());
    println!("Sup error:          {:.6}", comparison.sup_error());
    println!("Total time:         {:.2} ms", timer.elapsed_ms());
    println!("Results stored in 'data/compare_1.csv'");
    Ok(())
}
