//! Searching a region for the minimum of an objective.
//!
//! A [`Problem`] supplies the objective and decides which regions make sense
//! for it; a [`Solver`] walks a region and reports the best point it found.
//! [`GridSearch`] is the exhaustive strategy built on [`Cursor`], and
//! [`RandomSearch`] is a sampling baseline.
//!
//! [`Cursor`]: crate::region::Cursor

mod config;
mod error;
mod grid;
mod parabola;
mod random;

pub use config::{ConfigError, SolverConfig};
pub use error::{SolveError, SolveResult};
pub use grid::GridSearch;
pub use parabola::ParabolaProblem;
pub use random::RandomSearch;

use log::warn;

use crate::region::{BoxRegion, Region};
use crate::vector::Vector;

/// An objective over `args_dim` arguments, tuned by `params_dim` parameters.
pub trait Problem {
    fn args_dim(&self) -> usize;

    fn params_dim(&self) -> usize;

    /// Stores a copy of `params` for later calls to [`Problem::objective`].
    fn set_params(&mut self, params: &Vector) -> SolveResult<()>;

    /// The stored parameters, if any have been set.
    fn params(&self) -> Option<&Vector>;

    /// Evaluates the objective with explicit parameters.
    fn objective_with(&self, args: &Vector, params: &Vector) -> SolveResult<f64>;

    /// Evaluates the objective with the stored parameters.
    fn objective(&self, args: &Vector) -> SolveResult<f64> {
        let params = self.params().ok_or(SolveError::MissingParams)?;
        self.objective_with(args, params)
    }

    /// Returns true if searching `region` can give a meaningful answer.
    fn is_region_valid(&self, region: &Region) -> bool;
}

/// Best point reported by a [`Solver`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub point: Vector,
    pub value: f64,
    /// Number of objective evaluations spent.
    pub evaluated: usize,
}

/// A search strategy.
pub trait Solver {
    /// Searches `region` for the point minimizing `problem`'s objective.
    fn solve(&self, problem: &mut dyn Problem, region: &Region) -> SolveResult<Solution>;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;
}

/// Checks shared by every strategy before it evaluates anything.
fn check_region(solver: &str, problem: &dyn Problem, region: &Region) -> SolveResult<()> {
    if region.dim() != problem.args_dim() {
        warn!("in {}::solve: region dimension mismatch", solver);
        return Err(SolveError::WrongDim {
            expected: problem.args_dim(),
            found: region.dim(),
        });
    }
    if !problem.is_region_valid(region) {
        warn!("in {}::solve: region {} is not valid", solver, region);
        return Err(SolveError::InvalidRegion(region.to_string()));
    }
    Ok(())
}

/// Keeps the first point with the smallest comparable value.
#[derive(Debug, Default)]
struct Best {
    found: Option<(Vector, f64)>,
    evaluated: usize,
}

impl Best {
    fn offer(&mut self, point: Vector, value: f64) {
        self.evaluated += 1;
        if value.is_nan() {
            return;
        }
        if self.found.as_ref().map_or(true, |(_, best)| value < *best) {
            self.found = Some((point, value));
        }
    }

    fn into_solution(self) -> SolveResult<Solution> {
        let (point, value) = self.found.ok_or(SolveError::NotFound)?;
        Ok(Solution {
            point,
            value,
            evaluated: self.evaluated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::from_slice(coords).unwrap()
    }

    #[test]
    fn test_best_keeps_first_minimum() {
        let mut best = Best::default();
        best.offer(v(&[0.0]), 2.0);
        best.offer(v(&[1.0]), 1.0);
        best.offer(v(&[2.0]), 1.0);
        best.offer(v(&[3.0]), f64::NAN);
        let solution = best.into_solution().unwrap();
        assert_eq!(solution.point, v(&[1.0]));
        assert_eq!(solution.value, 1.0);
        assert_eq!(solution.evaluated, 4);
    }

    #[test]
    fn test_best_without_comparable_values() {
        let mut best = Best::default();
        best.offer(v(&[0.0]), f64::NAN);
        assert_eq!(best.into_solution(), Err(SolveError::NotFound));
    }

    #[test]
    fn test_objective_requires_params() {
        let problem = ParabolaProblem::new();
        assert_eq!(
            problem.objective(&v(&[0.0, 0.0])),
            Err(SolveError::MissingParams)
        );
    }
}
