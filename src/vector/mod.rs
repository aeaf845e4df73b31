//! Fixed-dimension real vectors.
//!
//! A [`Vector`] owns a single contiguous buffer of coordinates. Its dimension
//! is fixed at construction and is never zero, and no coordinate is ever NaN:
//! every constructor and mutator validates its input and leaves the vector
//! untouched on failure.

mod norm;

pub use norm::Norm;

use std::fmt::Display;
use std::ops::Index;

use log::warn;

use crate::error::{GeometryError, Result};

/// A point (or displacement) in d-dimensional real space.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(Box<[f64]>);

impl Vector {
    /// Creates a vector from owned coordinates.
    ///
    /// Fails with [`GeometryError::WrongDim`] for an empty input and
    /// [`GeometryError::NanValue`] if any coordinate is NaN.
    pub fn new(coords: Vec<f64>) -> Result<Self> {
        if coords.is_empty() {
            warn!("in Vector::new: zero dimension");
            return Err(GeometryError::wrong_dim(1, 0));
        }
        if coords.iter().any(|c| c.is_nan()) {
            warn!("in Vector::new: nan in data");
            return Err(GeometryError::NanValue);
        }
        Ok(Self(coords.into_boxed_slice()))
    }

    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        Self::new(coords.to_vec())
    }

    /// Creates a vector with every coordinate set to `value`.
    pub fn filled(dim: usize, value: f64) -> Result<Self> {
        Self::new(vec![value; dim])
    }

    pub fn zeros(dim: usize) -> Result<Self> {
        Self::filled(dim, 0.0)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns coordinate `index`, or NaN when `index >= dim`.
    pub fn coord(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(f64::NAN)
    }

    /// Overwrites coordinate `index`.
    pub fn set_coord(&mut self, index: usize, value: f64) -> Result<()> {
        if index >= self.dim() {
            warn!("in Vector::set_coord: index {} out of {}", index, self.dim());
            return Err(GeometryError::wrong_dim(self.dim(), index + 1));
        }
        if value.is_nan() {
            warn!("in Vector::set_coord: value is not a number");
            return Err(GeometryError::NanValue);
        }
        self.0[index] = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn norm(&self, norm: Norm) -> f64 {
        norm.of(&self.0)
    }

    /// Consumes the vector and returns its coordinates.
    pub fn into_vec(self) -> Vec<f64> {
        self.0.into_vec()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Elementwise arithmetic
// ─────────────────────────────────────────────────────────────────────

impl Vector {
    fn check_dims(op: &str, a: &Vector, b: &Vector) -> Result<()> {
        if a.dim() != b.dim() {
            warn!("in Vector::{}: unequal dimensions", op);
            return Err(GeometryError::wrong_dim(a.dim(), b.dim()));
        }
        Ok(())
    }

    fn zip_with(op: &str, a: &Vector, b: &Vector, f: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        Self::check_dims(op, a, b)?;
        let coords: Box<[f64]> = a.0.iter().zip(b.0.iter()).map(|(&x, &y)| f(x, y)).collect();
        // inf - inf and friends
        if coords.iter().any(|c| c.is_nan()) {
            warn!("in Vector::{}: result is not a number", op);
            return Err(GeometryError::NanValue);
        }
        Ok(Vector(coords))
    }

    /// Returns `a + b`.
    pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
        Self::zip_with("add", a, b, |x, y| x + y)
    }

    /// Returns `a - b`.
    pub fn sub(a: &Vector, b: &Vector) -> Result<Vector> {
        Self::zip_with("sub", a, b, |x, y| x - y)
    }

    /// Returns the elementwise (Hadamard) product `a ⊙ b`.
    pub fn mul(a: &Vector, b: &Vector) -> Result<Vector> {
        Self::zip_with("mul", a, b, |x, y| x * y)
    }

    /// Returns `k * a`.
    pub fn scale(a: &Vector, k: f64) -> Result<Vector> {
        if k.is_nan() {
            warn!("in Vector::scale: factor is not a number");
            return Err(GeometryError::NanValue);
        }
        let scaled: Box<[f64]> = a.0.iter().map(|x| x * k).collect();
        // inf * 0 is the only way to produce NaN here
        if scaled.iter().any(|c| c.is_nan()) {
            warn!("in Vector::scale: result is not a number");
            return Err(GeometryError::NanValue);
        }
        Ok(Vector(scaled))
    }

    /// Returns the dot product of `a` and `b`.
    pub fn dot(a: &Vector, b: &Vector) -> Result<f64> {
        Self::check_dims("dot", a, b)?;
        Ok(a.0.iter().zip(b.0.iter()).map(|(x, y)| x * y).sum())
    }

    /// Componentwise minimum.
    pub fn min(a: &Vector, b: &Vector) -> Result<Vector> {
        Self::zip_with("min", a, b, f64::min)
    }

    /// Componentwise maximum.
    pub fn max(a: &Vector, b: &Vector) -> Result<Vector> {
        Self::zip_with("max", a, b, f64::max)
    }

    /// Returns true if `a ⪯ b`, i.e. `a_i <= b_i` on every axis.
    ///
    /// Vectors of different dimension are never comparable.
    pub fn dominated_by(a: &Vector, b: &Vector) -> bool {
        a.dim() == b.dim() && a.0.iter().zip(b.0.iter()).all(|(x, y)| x <= y)
    }

    /// Returns true if `‖a - b‖ < tolerance` under `norm`.
    pub fn equals(a: &Vector, b: &Vector, norm: Norm, tolerance: f64) -> Result<bool> {
        if tolerance.is_nan() || tolerance < 0.0 {
            warn!("in Vector::equals: tolerance is not a non-negative number");
            return Err(GeometryError::NanValue);
        }
        let diff = Self::sub(a, b)?;
        Ok(diff.norm(norm) < tolerance)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = GeometryError;

    fn try_from(coords: Vec<f64>) -> Result<Self> {
        Self::new(coords)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = GeometryError;

    fn try_from(coords: &[f64]) -> Result<Self> {
        Self::from_slice(coords)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.6}", c)?;
        }
        write!(f, "]")
    }
}

// =============================================================================
// Vector Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.dim()))?;
        for c in self.0.iter() {
            seq.serialize_element(c)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coords = Vec::<f64>::deserialize(deserializer)?;
        Vector::new(coords).map_err(serde::de::Error::custom)
    }
}
