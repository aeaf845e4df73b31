//! Operations combining two regions into a new one.
//!
//! Every operation accepts any [`BoxRegion`] and returns a freshly validated
//! [`Region`]; neither operand is modified.

use log::warn;

use super::{BoxRegion, Region};
use crate::error::{GeometryError, Result};
use crate::vector::{Norm, Vector};
use crate::TOLERANCE;

fn check_dims(op: &str, a: &dyn BoxRegion, b: &dyn BoxRegion) -> Result<()> {
    if a.dim() != b.dim() {
        warn!("in region::{}: null param or dimension mismatch", op);
        return Err(GeometryError::BadReference("region dimensions differ"));
    }
    Ok(())
}

fn copy_of(region: &dyn BoxRegion) -> Result<Region> {
    Region::new(region.low(), region.high())
}

/// Returns the common part of `a` and `b`.
///
/// Fails with [`GeometryError::WrongArgument`] when the regions do not
/// intersect. Regions touching along a face intersect in that face.
pub fn intersection(a: &dyn BoxRegion, b: &dyn BoxRegion) -> Result<Region> {
    check_dims("intersection", a, b)?;
    if !a.intersects(b)? {
        warn!("in region::intersection: cannot intersect");
        return Err(GeometryError::WrongArgument("regions do not intersect"));
    }
    let low = Vector::max(a.low(), b.low())?;
    let high = Vector::min(a.high(), b.high())?;
    Region::new(&low, &high)
}

/// Which axis a corner displacement is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confinement {
    /// The displacement is zero; compatible with any axis.
    None,
    /// Only this axis carries a (relatively) nonzero component.
    Axis(usize),
    /// Two or more axes carry nonzero components.
    Spread,
}

/// Classifies `v` by its nonzero components, measured relative to `‖v‖∞`.
fn confinement(v: &Vector) -> Confinement {
    let scale = v.norm(Norm::Inf);
    if scale == 0.0 {
        return Confinement::None;
    }
    let mut found = Confinement::None;
    for (i, c) in v.iter().enumerate() {
        if (c / scale).abs() > TOLERANCE {
            if found != Confinement::None {
                return Confinement::Spread;
            }
            found = Confinement::Axis(i);
        }
    }
    found
}

/// Returns the union of `a` and `b` when it is itself a box.
///
/// Nested regions yield the outer one. Otherwise the union is a box only when
/// the low corners differ along at most one axis, the high corners differ along
/// at most one axis, and it is the same axis for both. Any other pair fails
/// with [`GeometryError::WrongArgument`]; [`convex_hull`] always succeeds.
pub fn union(a: &dyn BoxRegion, b: &dyn BoxRegion) -> Result<Region> {
    check_dims("union", a, b)?;
    if !a.intersects(b)? {
        warn!("in region::union: regions are separated by a gap");
        return Err(GeometryError::WrongArgument("regions are disjoint"));
    }

    if a.contains_region(b)? {
        return copy_of(a);
    }
    if b.contains_region(a)? {
        return copy_of(b);
    }

    let low_shift = confinement(&Vector::sub(a.low(), b.low())?);
    let high_shift = confinement(&Vector::sub(a.high(), b.high())?);
    let mergeable = match (low_shift, high_shift) {
        (Confinement::Spread, _) | (_, Confinement::Spread) => false,
        (Confinement::Axis(i), Confinement::Axis(j)) => i == j,
        _ => true,
    };
    if !mergeable {
        warn!("in region::union: cannot create convex union, try convex_hull instead");
        return Err(GeometryError::WrongArgument(
            "not a convex union; use convex hull",
        ));
    }

    let low = Vector::min(a.low(), b.low())?;
    let high = Vector::max(a.high(), b.high())?;
    Region::new(&low, &high)
}

/// Returns the smallest region enclosing both `a` and `b`.
pub fn convex_hull(a: &dyn BoxRegion, b: &dyn BoxRegion) -> Result<Region> {
    check_dims("convex_hull", a, b)?;
    let low = Vector::min(a.low(), b.low())?;
    let high = Vector::max(a.high(), b.high())?;
    Region::new(&low, &high)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::from_slice(coords).unwrap()
    }

    #[test]
    fn test_confinement() {
        assert_eq!(confinement(&v(&[0.0, 0.0])), Confinement::None);
        assert_eq!(confinement(&v(&[0.0, -0.5, 0.0])), Confinement::Axis(1));
        assert_eq!(confinement(&v(&[0.1, 0.2])), Confinement::Spread);
    }

    #[test]
    fn test_confinement_ignores_relatively_tiny_components() {
        assert_eq!(confinement(&v(&[1.0, 1e-9])), Confinement::Axis(0));
    }

    #[test]
    fn test_union_translated_along_one_axis() {
        let a = Region::from_coords(&[0.0, 0.0], &[2.0, 1.0]).unwrap();
        let b = Region::from_coords(&[1.0, 0.0], &[3.0, 1.0]).unwrap();
        let u = union(&a, &b).unwrap();
        assert_eq!(u, Region::from_coords(&[0.0, 0.0], &[3.0, 1.0]).unwrap());
    }

    #[test]
    fn test_union_touching_faces() {
        let a = Region::from_coords(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        let b = Region::from_coords(&[1.0, 0.0], &[2.0, 1.0]).unwrap();
        let u = union(&a, &b).unwrap();
        assert_eq!(u, Region::from_coords(&[0.0, 0.0], &[2.0, 1.0]).unwrap());
    }

    #[test]
    fn test_union_l_shape_fails() {
        let a = Region::from_coords(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        let b = Region::from_coords(&[0.0, 0.0], &[2.0, 1.0]).unwrap();
        assert!(matches!(union(&a, &b), Err(GeometryError::WrongArgument(_))));
    }

    #[test]
    fn test_union_different_axes_fails() {
        // low corners differ on axis 0, high corners on axis 1
        let a = Region::from_coords(&[0.0, 0.0], &[2.0, 1.0]).unwrap();
        let b = Region::from_coords(&[1.0, 0.0], &[2.0, 2.0]).unwrap();
        assert!(matches!(union(&a, &b), Err(GeometryError::WrongArgument(_))));
    }

    #[test]
    fn test_union_nested_returns_outer() {
        let outer = Region::from_coords(&[0.0, 0.0], &[4.0, 4.0]).unwrap();
        let inner = Region::from_coords(&[1.0, 1.0], &[2.0, 3.0]).unwrap();
        assert_eq!(union(&outer, &inner).unwrap(), outer);
        assert_eq!(union(&inner, &outer).unwrap(), outer);
    }

    #[test]
    fn test_union_with_gap_fails() {
        let a = Region::from_coords(&[0.0], &[1.0]).unwrap();
        let b = Region::from_coords(&[2.0], &[3.0]).unwrap();
        assert!(matches!(union(&a, &b), Err(GeometryError::WrongArgument(_))));
    }

    #[test]
    fn test_dimension_mismatch_is_bad_reference() {
        let a = Region::from_coords(&[0.0], &[1.0]).unwrap();
        let b = Region::from_coords(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        assert!(matches!(intersection(&a, &b), Err(GeometryError::BadReference(_))));
        assert!(matches!(union(&a, &b), Err(GeometryError::BadReference(_))));
        assert!(matches!(convex_hull(&a, &b), Err(GeometryError::BadReference(_))));
    }

    #[test]
    fn test_intersection_of_touching_regions_is_a_face() {
        let a = Region::from_coords(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        let b = Region::from_coords(&[1.0, 0.5], &[2.0, 2.0]).unwrap();
        let i = intersection(&a, &b).unwrap();
        assert_eq!(i, Region::from_coords(&[1.0, 0.5], &[1.0, 1.0]).unwrap());
    }

    #[test]
    fn test_convex_hull_of_disjoint_regions() {
        let a = Region::from_coords(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        let b = Region::from_coords(&[5.0, -1.0], &[6.0, 0.5]).unwrap();
        let hull = convex_hull(&a, &b).unwrap();
        assert_eq!(hull, Region::from_coords(&[0.0, -1.0], &[6.0, 1.0]).unwrap());
    }
}
