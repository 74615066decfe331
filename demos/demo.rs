// demos/demo.rs
//! Simulate one Ornstein-Uhlenbeck path with Euler-Maruyama and write it
//! to `data/path_1.csv`.
//!
//! Run with: cargo run --example demo

use ito_path::brownian::naive;
use ito_path::math_utils::Timer;
use ito_path::models::OuProcess;
use ito_path::output::write_path_to_csv;
use ito_path::path::TimeGrid;
use ito_path::rng::{GaussianSampler, InitialCondition};
use ito_path::solvers::euler_maruyama::EulerMaruyama;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = 37;
    let iterations = 3;
    let grid = TimeGrid::new(1.0, 2f64.powi(-7))?;
    let process = OuProcess::new(0.5, 0.1, 0.2);
    let init = InitialCondition::Fixed(1.0);

    println!("=== ito-path demo: Euler-Maruyama on an OU process ===\n");
    println!("Seed:                   {}", seed);
    println!("Simulations:            {}", iterations);
    println!("Step size:              {}", grid.dt());
    println!("Interval of simulation: [0, {}]\n", grid.t_max());

    std::fs::create_dir_all("data")?;
    let mut sampler = GaussianSampler::from_seed(seed);
    let timer = Timer::new();

    for i in 1..=iterations {
        let brownian = naive::sample_path(&grid, &mut sampler);
        let x0 = init.draw(&mut sampler)?;
        let path = EulerMaruyama::solve_along(&grid, x0, &process, &brownian)?;

        let filename = format!("data/path_{}.csv", i);
        write_path_to_csv(&filename, &path)?;
        println!(
            "Computation {}/{} done, terminal value {:.6}, stored in '{}'",
            i,
            iterations,
            path.last().unwrap_or(x0),
            filename
        );
    }

    println!("\nTotal time: {:.2} ms", timer.elapsed_ms());
    Ok(())
}
