//! The vertex record that gets permuted: three co-ordinates plus an opaque
//! payload that travels with them
use crate::traits::{Axis, Payload};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point to be sorted: a fixed 3-co-ordinate position and a payload.
///
/// Swaps performed by the sort always exchange whole records, so the payload
/// ends up wherever its co-ordinates do. Use the payload to keep track of
/// original indices, ids, or anything else the downstream consumer needs.
///
/// # Examples
///
/// ```rust
/// use brio::Vertex;
///
/// let v: Vertex<f64, u32> = Vertex::new([0.25, 0.5, 0.75], 42);
///
/// assert_eq!(v.coord[1], 0.5);
/// assert_eq!(v.data, 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex<A, T> {
    /// Position, indexed x = 0, y = 1, z = 2.
    pub coord: [A; 3],
    /// Opaque payload, preserved across the permutation.
    pub data: T,
}

impl<A: Axis, T: Payload> Vertex<A, T> {
    /// Creates a vertex from a position and a payload.
    #[inline]
    pub fn new(coord: [A; 3], data: T) -> Self {
        Self { coord, data }
    }

    /// Creates a vertex from a position, with a default payload.
    #[inline]
    pub fn from_coord(coord: [A; 3]) -> Self {
        Self {
            coord,
            data: T::default(),
        }
    }
}

impl<A: Axis, T: Payload> From<([A; 3], T)> for Vertex<A, T> {
    fn from((coord, data): ([A; 3], T)) -> Self {
        Self::new(coord, data)
    }
}
