//! Grid traversal over a region.
//!
//! A [`Cursor`] walks the lattice `start + k ⊙ step` of a [`Region`] like an
//! odometer: the first axis of its visiting order turns fastest, and when an
//! axis reaches the far face it wheels back to the near face and carries into
//! the next axis. A step that would overshoot the far face lands exactly on it,
//! so both faces of every axis are always visited.

use log::{trace, warn};

use super::{BoxRegion, Region};
use crate::error::{GeometryError, Result};
use crate::vector::{Norm, Vector};
use crate::TOLERANCE;

/// Lifecycle of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// More points remain.
    Active,
    /// The terminal corner has been passed; every further step fails.
    Exhausted,
}

/// Stateful walker over the lattice points of a region.
///
/// Forward cursors (from [`Region::begin`]) start at `low` and finish at
/// `high`; reverse cursors (from [`Region::end`]) run the other way with a
/// negative step.
#[derive(Debug, Clone)]
pub struct Cursor {
    region: Region,
    current: Vector,
    step: Vector,
    order: Vec<usize>,
    reverse: bool,
    state: CursorState,
}

impl Region {
    /// Opens a forward cursor at `low`. Every coordinate of `step` must be
    /// at least [`TOLERANCE`].
    pub fn begin(&self, step: &Vector) -> Result<Cursor> {
        Cursor::open(self, step, false)
    }

    /// Opens a reverse cursor at `high`. Every coordinate of `step` must be
    /// at most `-TOLERANCE`.
    pub fn end(&self, step: &Vector) -> Result<Cursor> {
        Cursor::open(self, step, true)
    }
}

impl Cursor {
    fn open(region: &Region, step: &Vector, reverse: bool) -> Result<Self> {
        if step.dim() != region.dim() {
            warn!("in Cursor::open: step dimension mismatch");
            return Err(GeometryError::wrong_dim(region.dim(), step.dim()));
        }
        let wrong_sign = step
            .iter()
            .any(|c| (c < 0.0 && !reverse) || (c > 0.0 && reverse) || c.abs() < TOLERANCE);
        if wrong_sign {
            warn!("in Cursor::open: incorrect step {}", step);
            return Err(GeometryError::WrongArgument("incorrect step"));
        }
        let unbounded = region.low().iter().chain(region.high().iter()).any(|c| !c.is_finite());
        if unbounded {
            warn!("in Cursor::open: unbounded region {}", region);
            return Err(GeometryError::WrongArgument("cannot walk an unbounded region"));
        }

        let current = if reverse {
            region.high().clone()
        } else {
            region.low().clone()
        };
        Ok(Self {
            region: region.clone(),
            current,
            step: step.clone(),
            order: (0..region.dim()).collect(),
            reverse,
            state: CursorState::Active,
        })
    }

    fn start_corner(&self) -> &Vector {
        if self.reverse {
            self.region.high()
        } else {
            self.region.low()
        }
    }

    fn terminal_corner(&self) -> &Vector {
        if self.reverse {
            self.region.low()
        } else {
            self.region.high()
        }
    }

    /// Returns a copy of the current point.
    pub fn point(&self) -> Vector {
        self.current.clone()
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn step_vector(&self) -> &Vector {
        &self.step
    }

    /// Axis visiting order, fastest axis first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Replaces the axis visiting order and restarts the walk.
    ///
    /// `order` holds axis indices as numbers; each entry must be within
    /// [`TOLERANCE`] of an integer in `0..dim` and no two entries may be
    /// closer than [`TOLERANCE`]. On success the cursor moves back to its start
    /// corner and becomes active again, even if it was exhausted.
    pub fn set_order(&mut self, order: &Vector) -> Result<()> {
        let dim = self.region.dim();
        if order.dim() != dim {
            warn!("in Cursor::set_order: dimension mismatch");
            return Err(GeometryError::wrong_dim(dim, order.dim()));
        }

        let max_axis = (dim - 1) as f64;
        let mut axes = Vec::with_capacity(dim);
        for (i, c) in order.iter().enumerate() {
            if c < -TOLERANCE || c > max_axis + TOLERANCE {
                warn!("in Cursor::set_order: axis {} out of range", c);
                return Err(GeometryError::WrongArgument("axis index out of range"));
            }
            if (c - c.round()).abs() > TOLERANCE {
                warn!("in Cursor::set_order: order entries must be integers");
                return Err(GeometryError::WrongArgument("axis index is not an integer"));
            }
            let repeated = order
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && (other - c).abs() < TOLERANCE);
            if repeated {
                warn!("in Cursor::set_order: order with repeated axes");
                return Err(GeometryError::WrongArgument("repeated axis index"));
            }
            axes.push(c.round() as usize);
        }

        self.order = axes;
        self.current = self.start_corner().clone();
        self.state = CursorState::Active;
        Ok(())
    }

    /// Advances to the next lattice point.
    ///
    /// Returns [`GeometryError::OutOfBounds`] once the terminal corner has been
    /// visited; that is the normal end of a walk, not a failure. The cursor
    /// stays exhausted until [`Cursor::set_order`] restarts it.
    pub fn step(&mut self) -> Result<()> {
        if self.is_exhausted() {
            trace!("in Cursor::step: cursor already exhausted");
            return Err(GeometryError::OutOfBounds);
        }
        if Vector::equals(&self.current, self.terminal_corner(), Norm::L2, TOLERANCE)? {
            trace!("in Cursor::step: reached terminal corner {}", self.current);
            self.state = CursorState::Exhausted;
            return Err(GeometryError::OutOfBounds);
        }

        let mut next = self.current.clone();
        let mut ticked = false;
        for &axis in &self.order {
            let start = self.start_corner()[axis];
            let stop = self.terminal_corner()[axis];

            if (next[axis] - stop).abs() < TOLERANCE {
                // carry into the next axis
                next.set_coord(axis, start)?;
                continue;
            }

            let moved = next[axis] + self.step[axis];
            let overshoot = if self.reverse { moved < stop } else { moved > stop };
            // a step lost to rounding still has to move the point
            let stalled = moved == next[axis];
            next.set_coord(axis, if overshoot || stalled { stop } else { moved })?;
            ticked = true;
            break;
        }

        if !ticked {
            warn!("in Cursor::step: no axis could advance from {}", self.current);
            self.state = CursorState::Exhausted;
            return Err(GeometryError::OutOfBounds);
        }

        self.current = next;
        Ok(())
    }

    /// Turns the cursor into an iterator over the remaining points, starting
    /// with the current one.
    pub fn points(self) -> Points {
        Points {
            cursor: self,
            primed: false,
            failure: None,
        }
    }
}

/// Iterator over the points of a [`Cursor`], see [`Cursor::points`].
///
/// Iteration ends when the cursor is exhausted or when a step fails for any
/// other reason. The two are told apart by [`Points::error`].
#[derive(Debug, Clone)]
pub struct Points {
    cursor: Cursor,
    primed: bool,
    failure: Option<GeometryError>,
}

impl Points {
    /// The error that ended the walk early, if any. `None` after a complete
    /// walk.
    pub fn error(&self) -> Option<&GeometryError> {
        self.failure.as_ref()
    }
}

impl Iterator for Points {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.failure.is_some() {
            return None;
        }
        if self.primed {
            match self.cursor.step() {
                Ok(()) => {}
                Err(e) if e.is_exhausted() => return None,
                Err(e) => {
                    warn!("in Points::next: walk stopped early: {}", e);
                    self.failure = Some(e);
                    return None;
                }
            }
        } else {
            if self.cursor.is_exhausted() {
                return None;
            }
            self.primed = true;
        }
        Some(self.cursor.point())
    }
}

impl std::iter::FusedIterator for Points {}
