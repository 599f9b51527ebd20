//! Cut-longest-edge kd-tree construction.
//!
//! The tree is transient: it exists only to drive the level-order walk that
//! follows, so nodes live in a flat arena of `(vertex, left, right)` index
//! triples rather than boxed allocations. Child slots hold [`NONE`] when
//! absent. One node is created per vertex, and each node pins the slot its
//! median occupied at the moment of the split: later recursion only permutes
//! strictly inside the two sub-ranges, so the pinned slots never move again.
use az::Az;
use rand::Rng;

use crate::bbox::Bbox;
use crate::error::SortError;
use crate::traits::{Axis, Payload};
use crate::vertex::Vertex;

/// Sentinel for an absent child.
pub(crate) const NONE: u32 = u32::MAX;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    /// Index of the pinned median into the full input slice.
    pub(crate) vertex: u32,
    pub(crate) left: u32,
    pub(crate) right: u32,
}

/// Arena-backed kd-tree over one input slice. The root is always node 0
/// when the tree is non-empty, because the root's median is pushed first.
pub(crate) struct KdTree {
    nodes: Vec<Node>,
}

impl KdTree {
    /// Builds the tree for `vertices` inside `bbox` by recursive median
    /// splits along the current longest axis.
    ///
    /// Permutes `vertices` as a side effect. The arena is reserved up front,
    /// one node per vertex; reservation failure is the only error.
    pub(crate) fn build<A, T, R>(
        bbox: &Bbox<A>,
        vertices: &mut [Vertex<A, T>],
        rng: &mut R,
    ) -> Result<Self, SortError>
    where
        A: Axis,
        T: Payload,
        R: Rng + ?Sized,
    {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(vertices.len())?;

        let mut tree = Self { nodes };
        tree.build_recursive(bbox, vertices, 0, rng);
        debug_assert_eq!(tree.len(), vertices.len());

        Ok(tree)
    }

    /// Splits `vertices` around its median along the longest axis of `bbox`,
    /// records the node, and recurses into the two halves with the bbox cut
    /// at the median's co-ordinate. `base` is the offset of `vertices` within
    /// the full input slice. Returns the new node's arena index, or [`NONE`]
    /// for an empty range.
    fn build_recursive<A, T, R>(
        &mut self,
        bbox: &Bbox<A>,
        vertices: &mut [Vertex<A, T>],
        base: u32,
        rng: &mut R,
    ) -> u32
    where
        A: Axis,
        T: Payload,
        R: Rng + ?Sized,
    {
        if vertices.is_empty() {
            return NONE;
        }

        let axis = bbox.longest_axis();
        let median = super::median::partition_around_median(vertices, axis, rng);
        let split_val = vertices[median].coord[axis];

        let idx: u32 = self.nodes.len().az::<u32>();
        self.nodes.push(Node {
            vertex: base + median.az::<u32>(),
            left: NONE,
            right: NONE,
        });

        let (below_bbox, above_bbox) = bbox.split_at(axis, split_val);
        let (below, rest) = vertices.split_at_mut(median);
        let above = &mut rest[1..];

        let left = self.build_recursive(&below_bbox, below, base, rng);
        let right = self.build_recursive(&above_bbox, above, base + median.az::<u32>() + 1, rng);
        self.nodes[idx.az::<usize>()].left = left;
        self.nodes[idx.az::<usize>()].right = right;

        idx
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Arena index of the root, if any.
    #[inline]
    pub(crate) fn root(&self) -> Option<u32> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: u32) -> &Node {
        &self.nodes[idx.az::<usize>()]
    }
}
