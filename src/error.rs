//! Error type returned by the sort entry points
use std::collections::TryReserveError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a sort could not complete.
///
/// On failure the input slice still holds a valid arrangement of the original
/// vertices, but in an unspecified order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The node arena, the traversal queue, or the scratch buffer could not
    /// be allocated.
    OutOfMemory,
    /// The build failed to place a median for some sub-range, so the walk
    /// cannot cover the input. Unreachable for a well-formed build.
    MedianNotFound,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "allocation failed during spatial sort"),
            Self::MedianNotFound => write!(f, "kd-tree failed to place a median"),
        }
    }
}

impl std::error::Error for SortError {}

impl From<TryReserveError> for SortError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
