//! Axis-aligned box regions and the grid cursor that walks them.
//!
//! A [`Region`] is the closed box `{x : low_i <= x_i <= high_i}` spanned by two
//! corner vectors. Queries are exposed through the [`BoxRegion`] trait, the
//! algebra ([`intersection`], [`union`], [`convex_hull`]) builds new regions
//! from two existing ones, and [`Cursor`] enumerates the lattice points of a
//! region at a fixed spacing.

mod cursor;
mod ops;


pub use cursor::{Cursor, CursorState, Points};
pub use ops::{convex_hull, intersection, union};

use std::fmt::Display;

use log::warn;
use rand::Rng;

use crate::error::{GeometryError, Result};
use crate::vector::Vector;

// ─────────────────────────────────────────────────────────────────────────────
// Core trait
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only contract of an axis-aligned box.
///
/// Implementors only provide the two corners; every predicate is derived from
/// them. All predicates fail instead of answering when the dimensions of the
/// operands disagree.
pub trait BoxRegion {
    /// The most negative corner.
    fn low(&self) -> &Vector;

    /// The most positive corner.
    fn high(&self) -> &Vector;

    fn dim(&self) -> usize {
        self.low().dim()
    }

    /// Returns true if `low ⪯ point ⪯ high`.
    fn contains(&self, point: &Vector) -> Result<bool> {
        if point.dim() != self.dim() {
            warn!("in BoxRegion::contains: dimension mismatch");
            return Err(GeometryError::wrong_dim(self.dim(), point.dim()));
        }
        Ok(Vector::dominated_by(self.low(), point) && Vector::dominated_by(point, self.high()))
    }

    /// Returns true if `other` lies entirely inside this box.
    ///
    /// Checking both corners is enough for axis-aligned boxes.
    fn contains_region(&self, other: &dyn BoxRegion) -> Result<bool> {
        if other.dim() != self.dim() {
            warn!("in BoxRegion::contains_region: inconsistent <other> param");
            return Err(GeometryError::BadReference("region dimensions differ"));
        }
        Ok(self.contains(other.low())? && self.contains(other.high())?)
    }

    /// Returns true if this box lies entirely inside `other`.
    fn is_subset_of(&self, other: &dyn BoxRegion) -> Result<bool> {
        if other.dim() != self.dim() {
            warn!("in BoxRegion::is_subset_of: inconsistent <other> param");
            return Err(GeometryError::BadReference("region dimensions differ"));
        }
        Ok(other.contains(self.low())? && other.contains(self.high())?)
    }

    /// Returns true if the two boxes share at least one point.
    fn intersects(&self, other: &dyn BoxRegion) -> Result<bool> {
        if other.dim() != self.dim() {
            warn!("in BoxRegion::intersects: null param or dimension mismatch");
            return Err(GeometryError::BadReference("region dimensions differ"));
        }
        let l = Vector::max(self.low(), other.low())?;
        let r = Vector::min(self.high(), other.high())?;
        Ok(Vector::dominated_by(&l, &r))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Region
// ─────────────────────────────────────────────────────────────────────────────

/// Closed axis-aligned box `[low, high]` in d-dimensional real space.
///
/// The bounds are private copies; nothing the caller holds aliases them.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    low: Vector,
    high: Vector,
}

impl Region {
    /// Creates the region spanned by `low` and `high`.
    ///
    /// Fails with [`GeometryError::BadReference`] when the corners have
    /// different dimensions and [`GeometryError::WrongArgument`] unless
    /// `low ⪯ high`.
    pub fn new(low: &Vector, high: &Vector) -> Result<Self> {
        if low.dim() != high.dim() {
            warn!("in Region::new: vector dimension mismatch");
            return Err(GeometryError::BadReference("corner dimensions differ"));
        }
        if !Vector::dominated_by(low, high) {
            warn!("in Region::new: bounds are not comparable");
            return Err(GeometryError::WrongArgument("low corner is not below high corner"));
        }
        Ok(Self {
            low: low.clone(),
            high: high.clone(),
        })
    }

    /// Creates a region straight from corner coordinates.
    pub fn from_coords(low: &[f64], high: &[f64]) -> Result<Self> {
        Self::new(&Vector::from_slice(low)?, &Vector::from_slice(high)?)
    }

    /// Draws a point uniformly at random from the region.
    ///
    /// Fails with [`GeometryError::WrongArgument`] if a bound is infinite.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vector> {
        let mut coords = Vec::with_capacity(self.dim());
        for (lo, hi) in self.low.iter().zip(self.high.iter()) {
            if !lo.is_finite() || !hi.is_finite() {
                warn!("in Region::sample: unbounded axis");
                return Err(GeometryError::WrongArgument("cannot sample an unbounded region"));
            }
            coords.push(if lo == hi { lo } else { rng.gen_range(lo..=hi) });
        }
        Vector::new(coords)
    }
}

impl BoxRegion for Region {
    fn low(&self) -> &Vector {
        &self.low
    }

    fn high(&self) -> &Vector {
        &self.high
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

// =============================================================================
// Region Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Region", 2)?;
        s.serialize_field("low", &self.low)?;
        s.serialize_field("high", &self.high)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            low: Vector,
            high: Vector,
        }

        let raw = Raw::deserialize(deserializer)?;
        Region::new(&raw.low, &raw.high).map_err(serde::de::Error::custom)
    }
}
