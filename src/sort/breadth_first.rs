//! Level-order emission of the kd-tree into a scratch buffer.
//!
//! The walk is what turns the tree into a biased randomized insertion order:
//! depth-d nodes form a median-spread sample of roughly n / 2^d vertices, so
//! concatenating levels yields a sequence whose every prefix already covers
//! the domain.
use az::Az;
use std::collections::VecDeque;

use crate::error::SortError;
use crate::traits::{Axis, Payload};
use crate::vertex::Vertex;

use super::tree::{KdTree, NONE};

/// Appends the vertices referenced by `tree` to `out` in strict level order:
/// root, then depth 1 left-to-right, then depth 2, and so on.
///
/// The queue peaks at the widest tree level, at most `len / 2 + 1` entries
/// for a median-balanced tree, and that bound is reserved up front.
pub(crate) fn emit_level_order<A, T>(
    tree: &KdTree,
    vertices: &[Vertex<A, T>],
    out: &mut Vec<Vertex<A, T>>,
) -> Result<(), SortError>
where
    A: Axis,
    T: Payload,
{
    let root = tree.root().ok_or(SortError::MedianNotFound)?;

    let mut queue = VecDeque::new();
    queue.try_reserve_exact(vertices.len().div_ceil(2) + 1)?;
    queue.push_back(root);

    while let Some(idx) = queue.pop_front() {
        let node = tree.node(idx);
        out.push(vertices[node.vertex.az::<usize>()]);

        if node.left != NONE {
            queue.push_back(node.left);
        }
        if node.right != NONE {
            queue.push_back(node.right);
        }
    }

    Ok(())
}
