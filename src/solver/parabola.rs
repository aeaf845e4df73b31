use log::warn;

use super::{Problem, SolveError, SolveResult};
use crate::region::{BoxRegion, Region};
use crate::vector::Vector;
use crate::TOLERANCE;

/// Distance of a point from the parabola `y = x² - a`.
///
/// Arguments are `(x, y)`; only the first of the two parameters is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParabolaProblem {
    params: Option<Vector>,
}

impl ParabolaProblem {
    const DIM: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: &Vector) -> SolveResult<Self> {
        let mut problem = Self::new();
        problem.set_params(params)?;
        Ok(problem)
    }

    /// Signed value `y - x² + a`; zero on the parabola.
    fn signed(args: &Vector, params: &Vector) -> f64 {
        let (x, y, a) = (args[0], args[1], params[0]);
        y - x * x + a
    }
}

impl Problem for ParabolaProblem {
    fn args_dim(&self) -> usize {
        Self::DIM
    }

    fn params_dim(&self) -> usize {
        Self::DIM
    }

    fn set_params(&mut self, params: &Vector) -> SolveResult<()> {
        if params.dim() != Self::DIM {
            warn!("in ParabolaProblem::set_params: wrong dimension of param");
            return Err(SolveError::WrongDim {
                expected: Self::DIM,
                found: params.dim(),
            });
        }
        self.params = Some(params.clone());
        Ok(())
    }

    fn params(&self) -> Option<&Vector> {
        self.params.as_ref()
    }

    fn objective_with(&self, args: &Vector, params: &Vector) -> SolveResult<f64> {
        if args.dim() != Self::DIM || params.dim() != Self::DIM {
            warn!("in ParabolaProblem::objective_with: wrong dimension of arg or param");
            let found = if args.dim() != Self::DIM {
                args.dim()
            } else {
                params.dim()
            };
            return Err(SolveError::WrongDim {
                expected: Self::DIM,
                found,
            });
        }
        Ok(Self::signed(args, params).abs())
    }

    /// The parabola must cross the region: the signed value changes sign
    /// between the two corners, or vanishes at one of them.
    fn is_region_valid(&self, region: &Region) -> bool {
        if region.dim() != Self::DIM {
            warn!("in ParabolaProblem::is_region_valid: wrong dim");
            return false;
        }
        let Some(params) = &self.params else {
            warn!("in ParabolaProblem::is_region_valid: params not set");
            return false;
        };
        let product = Self::signed(region.low(), params) * Self::signed(region.high(), params);
        product < 0.0 || product.abs() < TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::from_slice(coords).unwrap()
    }

    #[test]
    fn test_objective_is_distance_from_parabola() {
        let problem = ParabolaProblem::with_params(&v(&[10.0, 100.0])).unwrap();
        assert_eq!(problem.objective(&v(&[0.0, 0.0])), Ok(10.0));
        assert_eq!(problem.objective(&v(&[5.0, 4.0])), Ok(11.0));
        assert_eq!(problem.objective(&v(&[4.0, 6.0])), Ok(0.0));
    }

    #[test]
    fn test_objective_with_explicit_params() {
        let problem = ParabolaProblem::new();
        assert_eq!(
            problem.objective_with(&v(&[1.0, 1.0]), &v(&[0.0, 0.0])),
            Ok(0.0)
        );
        assert!(matches!(
            problem.objective_with(&v(&[1.0]), &v(&[0.0, 0.0])),
            Err(SolveError::WrongDim { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_set_params_checks_dimension() {
        let mut problem = ParabolaProblem::new();
        assert_eq!(
            problem.set_params(&v(&[1.0])),
            Err(SolveError::WrongDim {
                expected: 2,
                found: 1
            })
        );
        assert!(problem.params().is_none());
    }

    #[test]
    fn test_region_validity() {
        let problem = ParabolaProblem::with_params(&v(&[10.0, 100.0])).unwrap();
        let crossing = Region::from_coords(&[0.0, 0.0], &[5.0, 4.0]).unwrap();
        let below = Region::from_coords(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        // high corner lies on the parabola
        let touching = Region::from_coords(&[0.0, 0.0], &[4.0, 6.0]).unwrap();
        assert!(problem.is_region_valid(&crossing));
        assert!(!problem.is_region_valid(&below));
        assert!(problem.is_region_valid(&touching));

        let flat = Region::from_coords(&[0.0], &[1.0]).unwrap();
        assert!(!problem.is_region_valid(&flat));
        assert!(!ParabolaProblem::new().is_region_valid(&crossing));
    }
}
