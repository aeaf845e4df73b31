//! Finds the point of a box closest to the parabola `y = x² - 10`.
//!
//! Run with:
//!
//! ```text
//! cargo run --example grid_search
//! ```

use std::error::Error;

use boxgrid::solver::{
    GridSearch, ParabolaProblem, Problem, RandomSearch, Solver, SolverConfig,
};
use boxgrid::{Region, Vector};

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let mut problem = ParabolaProblem::new();
    problem.set_params(&Vector::from_slice(&[10.0, 100.0])?)?;

    let region = Region::from_coords(&[0.0, 0.0], &[5.0, 4.0])?;
    let config: SolverConfig = "dim = 2; step = 0.01, 0.02".parse()?;

    let solvers: Vec<Box<dyn Solver>> = vec![
        Box::new(GridSearch::new(config)),
        Box::new(RandomSearch::new(10_000).with_seed(2024)),
    ];

    for solver in &solvers {
        let solution = solver.solve(&mut problem, &region)?;
        println!(
            "{:<12} f = {:.6} at {} ({} evaluations)",
            solver.name(),
            solution.value,
            solution.point,
            solution.evaluated
        );
    }

    Ok(())
}
