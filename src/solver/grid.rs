use log::{debug, info, warn};

use super::config::SolverConfig;
use super::{check_region, Best, Problem, SolveError, SolveResult, Solution, Solver};
use crate::region::{BoxRegion, Region};

/// Exhaustive search over the lattice points of a region.
///
/// The sign of the first step coordinate picks the direction: positive steps
/// walk forward from `low`, negative steps walk back from `high`. Ties keep
/// the point visited first.
///
/// Problem parameters from the config are applied before the region is
/// validated, since validity may depend on them. They stay applied even when
/// the region is then rejected.
#[derive(Debug, Clone)]
pub struct GridSearch {
    config: SolverConfig,
}

impl GridSearch {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Solver for GridSearch {
    fn solve(&self, problem: &mut dyn Problem, region: &Region) -> SolveResult<Solution> {
        let step = &self.config.step;
        if step.dim() != region.dim() {
            warn!("in GridSearch::solve: step dimension mismatch");
            return Err(SolveError::WrongDim {
                expected: region.dim(),
                found: step.dim(),
            });
        }
        if let Some(params) = &self.config.problem_params {
            problem.set_params(params)?;
        }
        check_region("GridSearch", problem, region)?;

        let mut cursor = if step[0] > 0.0 {
            region.begin(step)?
        } else {
            region.end(step)?
        };
        if let Some(order) = &self.config.order {
            cursor.set_order(order)?;
        }
        debug!(
            "GridSearch: walking {} with step {} (reverse: {})",
            region,
            step,
            cursor.is_reverse()
        );

        let mut best = Best::default();
        loop {
            let point = cursor.point();
            let value = problem.objective(&point)?;
            best.offer(point, value);
            match cursor.step() {
                Ok(()) => {}
                Err(e) if e.is_exhausted() => break,
                Err(e) => return Err(e.into()),
            }
        }

        let solution = best.into_solution()?;
        info!(
            "GridSearch: best value {} at {} after {} evaluations",
            solution.value, solution.point, solution.evaluated
        );
        Ok(solution)
    }

    fn name(&self) -> &str {
        "GridSearch"
    }
}
