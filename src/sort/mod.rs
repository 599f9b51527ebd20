//! The spatial sort: kd-tree build, level-order walk, copy-back.
//!
//! Insertion order matters enormously for incremental Delaunay construction:
//! inserting points in a random order makes every point-location walk start
//! cold, while inserting them in a space-filling order makes the walks short
//! but hands adversarial inputs a worst case. The biased randomized insertion
//! order produced here keeps both properties: coarse-to-fine locality from
//! the kd-tree levels, residual randomness from the median selection's random
//! pivots.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::bbox::Bbox;
use crate::error::SortError;
use crate::traits::{Axis, Payload};
use crate::vertex::Vertex;

mod breadth_first;
mod median;
mod tree;

use breadth_first::emit_level_order;
use tree::KdTree;

/// Permutes `vertices` in place into a biased randomized insertion order.
///
/// The order is the level-order enumeration of a cut-longest-edge kd-tree
/// built over `bbox`: each internal node splits its box along its longest
/// axis at the median of the contained points. `bbox` must bound every
/// vertex; it is typically [`Bbox::from_vertices`] but may be wider.
///
/// Pivot randomness comes from a small per-call RNG, so two sorts of the
/// same input can order equal-key groups differently. Use
/// [`brio_sort_with_rng`] to pin the stream.
///
/// On failure the slice still holds all original vertices, in an
/// unspecified order.
///
/// # Examples
///
/// ```rust
/// use brio::{brio_sort, Bbox, Vertex};
///
/// let mut vertices: Vec<Vertex<f64, u32>> = (0..100)
///     .map(|i| {
///         let t = f64::from(i) / 99.0;
///         Vertex::new([t, t * t, 0.5], i)
///     })
///     .collect();
/// let bbox = Bbox::from_vertices(&vertices).unwrap();
///
/// brio_sort(&bbox, &mut vertices).unwrap();
///
/// assert_eq!(vertices.len(), 100);
/// // The first vertex is the x median of the whole set.
/// assert_eq!(vertices[0].data, 50);
/// ```
pub fn brio_sort<A, T>(bbox: &Bbox<A>, vertices: &mut [Vertex<A, T>]) -> Result<(), SortError>
where
    A: Axis,
    T: Payload,
{
    let mut rng = SmallRng::from_rng(&mut rand::rng());
    brio_sort_with_rng(bbox, vertices, &mut rng)
}

/// [`brio_sort`] with an explicit pivot RNG.
///
/// Handy for reproducible orderings in tests and benchmarks: the permutation
/// is a pure function of the input and the RNG stream.
pub fn brio_sort_with_rng<A, T, R>(
    bbox: &Bbox<A>,
    vertices: &mut [Vertex<A, T>],
    rng: &mut R,
) -> Result<(), SortError>
where
    A: Axis,
    T: Payload,
    R: Rng + ?Sized,
{
    if vertices.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    event!(Level::TRACE, "spatial sort of {} vertices", vertices.len());

    let tree = KdTree::build(bbox, vertices, rng)?;
    if tree.len() != vertices.len() {
        return Err(SortError::MedianNotFound);
    }

    let mut scratch = Vec::new();
    scratch.try_reserve_exact(vertices.len())?;
    emit_level_order(&tree, vertices, &mut scratch)?;

    debug_assert_eq!(scratch.len(), vertices.len());
    vertices.copy_from_slice(&scratch);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{brio_sort, brio_sort_with_rng};
    use crate::bbox::Bbox;
    use crate::vertex::Vertex;
    use itertools::Itertools;
    use ordered_float::OrderedFloat;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn key(v: &Vertex<f64, u32>) -> ([OrderedFloat<f64>; 3], u32) {
        (v.coord.map(OrderedFloat), v.data)
    }

    fn assert_permutation(before: &[Vertex<f64, u32>], after: &[Vertex<f64, u32>]) {
        assert_eq!(before.len(), after.len());
        let lhs = before.iter().map(key).sorted().collect::<Vec<_>>();
        let rhs = after.iter().map(key).sorted().collect::<Vec<_>>();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn empty_input_is_ok_and_untouched() {
        let bbox = Bbox::new([0.0; 3], [1.0; 3]);
        let mut vertices: Vec<Vertex<f64, u32>> = vec![];
        assert!(brio_sort(&bbox, &mut vertices).is_ok());
        assert!(vertices.is_empty());
    }

    #[test]
    fn singleton_is_unchanged() {
        let bbox = Bbox::new([0.0; 3], [1.0; 3]);
        let mut vertices = vec![Vertex::new([0.5, 0.5, 0.5], 7u32)];
        brio_sort(&bbox, &mut vertices).unwrap();
        assert_eq!(vertices, vec![Vertex::new([0.5, 0.5, 0.5], 7u32)]);
    }

    #[test]
    fn pair_is_some_arrangement_of_itself() {
        let bbox = Bbox::new([0.0; 3], [1.0; 3]);
        let before = vec![
            Vertex::new([0.0, 0.0, 0.0], 0u32),
            Vertex::new([1.0, 1.0, 1.0], 1u32),
        ];
        let mut vertices = before.clone();
        brio_sort(&bbox, &mut vertices).unwrap();
        assert_permutation(&before, &vertices);
    }

    #[test]
    fn coincident_points_survive_unchanged() {
        let bbox = Bbox::new([0.0; 3], [1.0; 3]);
        let mut vertices: Vec<Vertex<f64, u32>> = (0..100)
            .map(|i| Vertex::new([0.3, 0.7, 0.1], i))
            .collect();
        let before = vertices.clone();

        brio_sort(&bbox, &mut vertices).unwrap();

        assert_permutation(&before, &vertices);
        assert!(vertices.iter().all(|v| v.coord == [0.3, 0.7, 0.1]));
    }

    #[test]
    fn permutes_random_input_within_its_bbox() {
        let mut rng = SmallRng::seed_from_u64(11);
        let before: Vec<Vertex<f64, u32>> = (0..2000)
            .map(|i| {
                let coord = [rng.random::<f64>(), rng.random(), rng.random()];
                Vertex::new(coord, i)
            })
            .collect();
        let bbox = Bbox::from_vertices(&before).unwrap();

        let mut vertices = before.clone();
        brio_sort(&bbox, &mut vertices).unwrap();

        assert_permutation(&before, &vertices);
        assert!(vertices.iter().all(|v| bbox.contains(&v.coord)));
    }

    #[test]
    fn sorting_twice_still_permutes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let before: Vec<Vertex<f64, u32>> = (0..512)
            .map(|i| {
                let coord = [rng.random::<f64>(), rng.random(), rng.random()];
                Vertex::new(coord, i)
            })
            .collect();
        let bbox = Bbox::from_vertices(&before).unwrap();

        let mut vertices = before.clone();
        brio_sort_with_rng(&bbox, &mut vertices, &mut rng).unwrap();
        brio_sort_with_rng(&bbox, &mut vertices, &mut rng).unwrap();

        assert_permutation(&before, &vertices);
    }

    #[test]
    fn same_rng_stream_reproduces_the_order() {
        let base: Vec<Vertex<f64, u32>> = {
            let mut rng = ChaCha8Rng::seed_from_u64(21);
            (0..777)
                .map(|i| {
                    let coord = [rng.random::<f64>(), rng.random(), rng.random()];
                    Vertex::new(coord, i)
                })
                .collect()
        };
        let bbox = Bbox::from_vertices(&base).unwrap();

        let mut a = base.clone();
        let mut b = base;
        brio_sort_with_rng(&bbox, &mut a, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        brio_sort_with_rng(&bbox, &mut b, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn collinear_input_leads_with_the_x_median() {
        let before: Vec<Vertex<f64, u32>> = (0..1000)
            .map(|i| Vertex::new([f64::from(i) / 999.0, 0.0, 0.0], i as u32))
            .collect();
        let bbox = Bbox::from_vertices(&before).unwrap();

        let mut vertices = before.clone();
        brio_sort(&bbox, &mut vertices).unwrap();

        assert_permutation(&before, &vertices);
        assert_eq!(vertices[0].data, 500);
    }

    #[test]
    fn prefix_bboxes_spread_across_the_domain() {
        // A power-of-two prefix spans complete tree levels, whose medians
        // are spread over the whole box; even a loose volume floor separates
        // this ordering from, say, a lexicographic sort.
        let mut rng = ChaCha8Rng::seed_from_u64(1234567890);
        let mut vertices: Vec<Vertex<f64, u32>> = (0..10_000)
            .map(|i| {
                let coord = [rng.random::<f64>(), rng.random(), rng.random()];
                Vertex::new(coord, i)
            })
            .collect();
        let bbox = Bbox::new([0.0; 3], [1.0; 3]);

        brio_sort_with_rng(&bbox, &mut vertices, &mut rng).unwrap();

        for d in 5..=10u32 {
            let len = 1usize << d;
            let prefix = Bbox::from_vertices(&vertices[..len]).unwrap();
            let floor = bbox.volume() / f64::from(1u32 << d);
            assert!(
                prefix.volume() >= floor,
                "prefix of {len} spans {} < {floor}",
                prefix.volume()
            );
        }
    }
}
