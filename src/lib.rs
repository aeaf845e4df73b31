//! boxgrid - axis-aligned boxes and grid search over them
//!
//! Closed boxes in d-dimensional real space with containment and algebra
//! queries, an odometer-style cursor enumerating their lattice points,
//! tolerance-aware point sets, and a small solver layer that uses the cursor
//! to minimize an objective over a box.

pub mod error;
pub mod point_set;
pub mod region;
pub mod solver;
pub mod vector;

pub use error::{GeometryError, Result};
pub use point_set::PointSet;
pub use region::{BoxRegion, Cursor, CursorState, Region};
pub use vector::{Norm, Vector};

/// Absolute tolerance for boundary and equality comparisons.
pub const TOLERANCE: f64 = 1e-6;
