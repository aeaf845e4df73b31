//! Search configuration and its one-line textual form.
//!
//! ```text
//! dim = 3; step = 0.01, 0.02, 0.03
//! ```
//!
//! Keys may come in either order and whitespace is ignored. The step list
//! must have exactly `dim` entries.

use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::error::{GeometryError, Result};
use crate::vector::Vector;

/// Errors raised while parsing a [`SolverConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected KEY = VALUE, found `{0}`")]
    Malformed(String),

    #[error("Unknown key `{0}`")]
    UnknownKey(String),

    #[error("Key `{0}` given more than once")]
    DuplicateKey(&'static str),

    #[error("Missing key `{0}`")]
    MissingKey(&'static str),

    #[error("Cannot parse `{0}` as a number")]
    BadNumber(String),

    #[error("Step has {found} coordinates but dim is {expected}")]
    StepCount { expected: usize, found: usize },

    #[error("Invalid step: {0}")]
    InvalidStep(#[from] GeometryError),
}

/// Configuration shared by the search strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Per-axis spacing of the search grid. Its sign picks the direction.
    pub step: Vector,
    /// Axis visiting order for the cursor, fastest axis first.
    pub order: Option<Vector>,
    /// Parameters handed to the problem before the search starts.
    pub problem_params: Option<Vector>,
}

impl SolverConfig {
    pub fn new(step: Vector) -> Self {
        Self {
            step,
            order: None,
            problem_params: None,
        }
    }

    /// Same spacing on every axis.
    pub fn uniform(dim: usize, spacing: f64) -> Result<Self> {
        Ok(Self::new(Vector::filled(dim, spacing)?))
    }

    pub fn with_order(mut self, order: Vector) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_problem_params(mut self, params: Vector) -> Self {
        self.problem_params = Some(params);
        self
    }

    pub fn dim(&self) -> usize {
        self.step.dim()
    }
}

fn parse_number<T: FromStr>(text: &str) -> std::result::Result<T, ConfigError> {
    let text = text.trim();
    text.parse().map_err(|_| {
        warn!("in SolverConfig::from_str: bad number `{}`", text);
        ConfigError::BadNumber(text.to_string())
    })
}

impl FromStr for SolverConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut dim: Option<usize> = None;
        let mut step: Option<&str> = None;

        for entry in s.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((key, value)) = entry.split_once('=') else {
                warn!("in SolverConfig::from_str: bad param grammar (should be KEY = VALUE)");
                return Err(ConfigError::Malformed(entry.to_string()));
            };
            let key: String = key.chars().filter(|c| !c.is_whitespace()).collect();
            match key.as_str() {
                "dim" if dim.is_some() => return Err(ConfigError::DuplicateKey("dim")),
                "dim" => dim = Some(parse_number(value)?),
                "step" if step.is_some() => return Err(ConfigError::DuplicateKey("step")),
                "step" => step = Some(value),
                _ => {
                    warn!("in SolverConfig::from_str: wrong param name `{}`", key);
                    return Err(ConfigError::UnknownKey(key));
                }
            }
        }

        let dim = dim.ok_or(ConfigError::MissingKey("dim"))?;
        let step = step.ok_or(ConfigError::MissingKey("step"))?;
        let coords = step
            .split(',')
            .map(parse_number::<f64>)
            .collect::<std::result::Result<Vec<f64>, _>>()?;
        if coords.len() != dim {
            warn!("in SolverConfig::from_str: step doesn't have required dimension");
            return Err(ConfigError::StepCount {
                expected: dim,
                found: coords.len(),
            });
        }
        Ok(Self::new(Vector::new(coords)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_documented_example() {
        let config: SolverConfig = "dim = 3; step = 0.01, 0.02, 0.03".parse().unwrap();
        assert_eq!(config.dim(), 3);
        assert_eq!(config.step.as_slice(), &[0.01, 0.02, 0.03]);
        assert_eq!(config.order, None);
        assert_eq!(config.problem_params, None);
    }

    #[test]
    fn test_parse_ignores_order_and_whitespace() {
        let config: SolverConfig = "  step=-0.5 ,-0.25;d im =2 ;".parse().unwrap();
        assert_eq!(config.step.as_slice(), &[-0.5, -0.25]);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            "dim 3; step = 1".parse::<SolverConfig>(),
            Err(ConfigError::Malformed("dim 3".into()))
        );
        assert_eq!(
            "dim = 1; stride = 1".parse::<SolverConfig>(),
            Err(ConfigError::UnknownKey("stride".into()))
        );
        assert_eq!(
            "dim = x; step = 1".parse::<SolverConfig>(),
            Err(ConfigError::BadNumber("x".into()))
        );
        assert_eq!(
            "dim = 1; step = 1; dim = 1".parse::<SolverConfig>(),
            Err(ConfigError::DuplicateKey("dim"))
        );
        assert_eq!(
            "step = 1".parse::<SolverConfig>(),
            Err(ConfigError::MissingKey("dim"))
        );
        assert_eq!(
            "dim = 2".parse::<SolverConfig>(),
            Err(ConfigError::MissingKey("step"))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_step_count() {
        assert_eq!(
            "dim = 3; step = 0.1, 0.2".parse::<SolverConfig>(),
            Err(ConfigError::StepCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_rejects_nan_step() {
        assert_eq!(
            "dim = 1; step = NaN".parse::<SolverConfig>(),
            Err(ConfigError::InvalidStep(GeometryError::NanValue))
        );
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::uniform(2, 0.1)
            .unwrap()
            .with_order(Vector::from_slice(&[1.0, 0.0]).unwrap())
            .with_problem_params(Vector::from_slice(&[10.0, 100.0]).unwrap());
        assert_eq!(config.step.as_slice(), &[0.1, 0.1]);
        assert_eq!(config.order.unwrap().as_slice(), &[1.0, 0.0]);
        assert_eq!(config.problem_params.unwrap().as_slice(), &[10.0, 100.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = SolverConfig::uniform(2, 0.5)
            .unwrap()
            .with_problem_params(Vector::from_slice(&[10.0, 100.0]).unwrap());
        let json = serde_json::to_string(&config).unwrap();
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
