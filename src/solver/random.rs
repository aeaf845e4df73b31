use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{check_region, Best, Problem, SolveError, SolveResult, Solution, Solver};
use crate::region::Region;

/// Baseline that evaluates uniformly sampled points of the region.
///
/// With a seed the run is reproducible.
#[derive(Debug, Clone)]
pub struct RandomSearch {
    samples: usize,
    seed: Option<u64>,
}

impl RandomSearch {
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl Solver for RandomSearch {
    fn solve(&self, problem: &mut dyn Problem, region: &Region) -> SolveResult<Solution> {
        check_region("RandomSearch", problem, region)?;
        if self.samples == 0 {
            warn!("in RandomSearch::solve: nothing to sample");
            return Err(SolveError::NotFound);
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut best = Best::default();
        for _ in 0..self.samples {
            let point = region.sample(&mut rng)?;
            let value = problem.objective(&point)?;
            best.offer(point, value);
        }

        let solution = best.into_solution()?;
        info!(
            "RandomSearch: best value {} at {} after {} samples",
            solution.value, solution.point, solution.evaluated
        );
        Ok(solution)
    }

    fn name(&self) -> &str {
        "RandomSearch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::BoxRegion;
    use crate::solver::ParabolaProblem;
    use crate::vector::Vector;

    fn problem() -> ParabolaProblem {
        ParabolaProblem::with_params(&Vector::from_slice(&[10.0, 100.0]).unwrap()).unwrap()
    }

    fn region() -> Region {
        Region::from_coords(&[0.0, 0.0], &[5.0, 4.0]).unwrap()
    }

    #[test]
    fn test_samples_stay_inside_and_are_counted() {
        let solution = RandomSearch::new(200)
            .with_seed(7)
            .solve(&mut problem(), &region())
            .unwrap();
        assert_eq!(solution.evaluated, 200);
        assert!(region().contains(&solution.point).unwrap());
        assert!(solution.value >= 0.0);
    }

    #[test]
    fn test_seed_makes_runs_repeatable() {
        let search = RandomSearch::new(50).with_seed(42);
        let a = search.solve(&mut problem(), &region()).unwrap();
        let b = search.solve(&mut problem(), &region()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_samples_finds_nothing() {
        assert_eq!(
            RandomSearch::new(0).solve(&mut problem(), &region()),
            Err(SolveError::NotFound)
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(RandomSearch::new(1).name(), "RandomSearch");
    }
}
