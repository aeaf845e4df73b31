use thiserror::Error;

use crate::error::GeometryError;

/// Errors raised while setting up or running a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Region {0} is not valid for this problem")]
    InvalidRegion(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    WrongDim { expected: usize, found: usize },

    #[error("Problem parameters have not been set")]
    MissingParams,

    #[error("No point produced a comparable objective value")]
    NotFound,
}

pub type SolveResult<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_errors_convert_transparently() {
        let e: SolveError = GeometryError::OutOfBounds.into();
        assert_eq!(e, SolveError::Geometry(GeometryError::OutOfBounds));
        assert_eq!(e.to_string(), "Out of bounds");
    }

    #[test]
    fn invalid_region_display() {
        let e = SolveError::InvalidRegion("[[0.000000], [1.000000]]".into());
        assert_eq!(
            e.to_string(),
            "Region [[0.000000], [1.000000]] is not valid for this problem"
        );
    }
}
