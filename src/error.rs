use thiserror::Error;

/// Failure kinds shared by vectors, regions, cursors and point sets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Bad reference: {0}")]
    BadReference(&'static str),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    WrongDim { expected: usize, found: usize },

    #[error("Wrong argument: {0}")]
    WrongArgument(&'static str),

    #[error("Value is not a number")]
    NanValue,

    #[error("Out of bounds")]
    OutOfBounds,

    #[error("No matching element")]
    NotFound,

    #[error("An element within tolerance is already present")]
    MultipleDefinition,
}

impl GeometryError {
    /// Returns true for the signal a cursor uses to report the end of a walk.
    ///
    /// Search loops stop on this one and propagate everything else.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, GeometryError::OutOfBounds)
    }

    pub(crate) fn wrong_dim(expected: usize, found: usize) -> Self {
        GeometryError::WrongDim { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
