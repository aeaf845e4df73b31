//! Tolerance-deduplicated collections of points.
//!
//! A [`PointSet`] behaves like a set of vectors where "equal" means "closer
//! than the tolerance under the set's norm". The norm and tolerance are fixed
//! when the set is created and carried over to the results of set algebra.

use log::warn;

use crate::error::{GeometryError, Result};
use crate::vector::{Norm, Vector};

/// An unordered bag of same-dimension vectors, no two within tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Vector>,
    norm: Norm,
    tolerance: f64,
}

impl PointSet {
    /// Creates an empty set.
    ///
    /// Fails with [`GeometryError::NanValue`] if `tolerance` is NaN or
    /// negative.
    pub fn new(norm: Norm, tolerance: f64) -> Result<Self> {
        if tolerance.is_nan() || tolerance < 0.0 {
            warn!("in PointSet::new: NAN tolerance");
            return Err(GeometryError::NanValue);
        }
        Ok(Self {
            points: Vec::new(),
            norm,
            tolerance,
        })
    }

    pub fn norm(&self) -> Norm {
        self.norm
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Dimension of the stored points, or 0 for an empty set.
    pub fn dim(&self) -> usize {
        self.points.first().map(Vector::dim).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.points.iter()
    }

    fn check_sample(&self, op: &str, sample: &Vector) -> Result<()> {
        if !self.is_empty() && sample.dim() != self.dim() {
            warn!("in PointSet::{}: dimension mismatch", op);
            return Err(GeometryError::wrong_dim(self.dim(), sample.dim()));
        }
        Ok(())
    }

    fn position(&self, sample: &Vector) -> Result<Option<usize>> {
        for (i, p) in self.points.iter().enumerate() {
            if Vector::equals(sample, p, self.norm, self.tolerance)? {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Stores a copy of `point`.
    ///
    /// Fails with [`GeometryError::MultipleDefinition`] if a point within
    /// tolerance is already present.
    pub fn insert(&mut self, point: &Vector) -> Result<()> {
        self.check_sample("insert", point)?;
        if self.position(point)?.is_some() {
            warn!("in PointSet::insert: {} is already present", point);
            return Err(GeometryError::MultipleDefinition);
        }
        self.points.push(point.clone());
        Ok(())
    }

    /// Returns a copy of the point at `index`.
    pub fn get(&self, index: usize) -> Result<Vector> {
        self.points.get(index).cloned().ok_or_else(|| {
            warn!("in PointSet::get: index {} out of {}", index, self.len());
            GeometryError::OutOfBounds
        })
    }

    /// Returns a copy of the stored point matching `sample`.
    pub fn find(&self, sample: &Vector) -> Result<Vector> {
        self.check_sample("find", sample)?;
        match self.position(sample)? {
            Some(i) => Ok(self.points[i].clone()),
            None => {
                warn!("in PointSet::find: no match for {}", sample);
                Err(GeometryError::NotFound)
            }
        }
    }

    pub fn contains(&self, sample: &Vector) -> bool {
        !self.is_empty() && sample.dim() == self.dim() && matches!(self.position(sample), Ok(Some(_)))
    }

    /// Removes and returns the point at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Vector> {
        if index >= self.len() {
            warn!("in PointSet::remove: index {} out of {}", index, self.len());
            return Err(GeometryError::OutOfBounds);
        }
        Ok(self.points.remove(index))
    }

    /// Removes and returns the stored point matching `sample`.
    pub fn remove_matching(&mut self, sample: &Vector) -> Result<Vector> {
        self.check_sample("remove_matching", sample)?;
        match self.position(sample)? {
            Some(i) => Ok(self.points.remove(i)),
            None => {
                warn!("in PointSet::remove_matching: no match for {}", sample);
                Err(GeometryError::NotFound)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl PointSet {
    fn check_operands(op: &str, a: &PointSet, b: &PointSet) -> Result<()> {
        if !a.is_empty() && !b.is_empty() && a.dim() != b.dim() {
            warn!("in PointSet::{}: dim mismatch", op);
            return Err(GeometryError::wrong_dim(a.dim(), b.dim()));
        }
        Ok(())
    }

    fn empty_like(&self) -> PointSet {
        PointSet {
            points: Vec::new(),
            norm: self.norm,
            tolerance: self.tolerance,
        }
    }

    /// Points of `a`, followed by the points of `b` that `a` lacks.
    pub fn union(a: &PointSet, b: &PointSet) -> Result<PointSet> {
        Self::check_operands("union", a, b)?;
        let mut sum = a.clone();
        for p in &b.points {
            if sum.position(p)?.is_none() {
                sum.points.push(p.clone());
            }
        }
        Ok(sum)
    }

    /// Points of `b` that have a match in `a`.
    pub fn intersection(a: &PointSet, b: &PointSet) -> Result<PointSet> {
        Self::check_operands("intersection", a, b)?;
        let mut common = a.empty_like();
        for p in &b.points {
            if a.position(p)?.is_some() && common.position(p)?.is_none() {
                common.points.push(p.clone());
            }
        }
        Ok(common)
    }

    /// Points of `a` that have no match in `b`.
    pub fn difference(a: &PointSet, b: &PointSet) -> Result<PointSet> {
        Self::check_operands("difference", a, b)?;
        let mut diff = a.empty_like();
        for p in &a.points {
            if b.position(p)?.is_none() {
                diff.points.push(p.clone());
            }
        }
        Ok(diff)
    }

    /// Points in exactly one of `a` and `b`.
    pub fn symmetric_difference(a: &PointSet, b: &PointSet) -> Result<PointSet> {
        let sum = Self::union(a, b)?;
        let common = Self::intersection(a, b)?;
        Self::difference(&sum, &common)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
