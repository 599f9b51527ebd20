//! Axis-aligned bounding boxes.
//!
//! The sort takes the bounding box of the whole point set from the caller and
//! never widens it; [`Bbox::from_vertices`] computes a tight box for callers
//! that don't already have one.
use array_init::array_init;

use crate::traits::{Axis, Payload};
use crate::vertex::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box with `min[k] <= max[k]` on every axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox<A> {
    /// Lower corner.
    pub min: [A; 3],
    /// Upper corner.
    pub max: [A; 3],
}

impl<A: Axis> Bbox<A> {
    /// Creates a box from its two corners.
    #[inline]
    pub fn new(min: [A; 3], max: [A; 3]) -> Self {
        debug_assert!((0..3).all(|k| min[k] <= max[k]));
        Self { min, max }
    }

    /// Computes the tight bounding box of a set of vertices.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brio::{Bbox, Vertex};
    ///
    /// let vertices: Vec<Vertex<f64, u32>> = vec![
    ///     Vertex::from_coord([0.0, 2.0, -1.0]),
    ///     Vertex::from_coord([1.0, 0.5, 3.0]),
    /// ];
    /// let bbox = Bbox::from_vertices(&vertices).unwrap();
    ///
    /// assert_eq!(bbox.min, [0.0, 0.5, -1.0]);
    /// assert_eq!(bbox.max, [1.0, 2.0, 3.0]);
    /// ```
    pub fn from_vertices<T: Payload>(vertices: &[Vertex<A, T>]) -> Option<Self> {
        let first = vertices.first()?;
        let mut bbox = Self {
            min: first.coord,
            max: first.coord,
        };
        for vertex in &vertices[1..] {
            for k in 0..3 {
                bbox.min[k] = bbox.min[k].min(vertex.coord[k]);
                bbox.max[k] = bbox.max[k].max(vertex.coord[k]);
            }
        }
        Some(bbox)
    }

    /// Side lengths along x, y, z.
    #[inline]
    pub fn extents(&self) -> [A; 3] {
        array_init(|k| self.max[k] - self.min[k])
    }

    /// The axis along which the box is longest.
    ///
    /// Ties go to the lower axis index (x over y over z), so a box that is
    /// degenerate on every axis reports x.
    #[inline]
    pub fn longest_axis(&self) -> usize {
        let [dx, dy, dz] = self.extents();
        if dx >= dy {
            if dx >= dz {
                0
            } else {
                2
            }
        } else if dy >= dz {
            1
        } else {
            2
        }
    }

    /// Whether `coord` lies inside the box (boundary included).
    #[inline]
    pub fn contains(&self, coord: &[A; 3]) -> bool {
        (0..3).all(|k| self.min[k] <= coord[k] && coord[k] <= self.max[k])
    }

    /// Product of the three extents.
    #[inline]
    pub fn volume(&self) -> A {
        let [dx, dy, dz] = self.extents();
        dx * dy * dz
    }

    /// Splits the box along `axis` at `value`, producing the half below and
    /// the half above. The cut plane belongs to both halves.
    #[inline]
    pub(crate) fn split_at(&self, axis: usize, value: A) -> (Self, Self) {
        let mut below = *self;
        let mut above = *self;
        below.max[axis] = value;
        above.min[axis] = value;
        (below, above)
    }
}
