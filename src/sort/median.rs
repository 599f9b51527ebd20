//! Randomized median selection along one axis.
//!
//! A quickselect that stops as soon as the middle slot is pinned. Unlike
//! `select_nth_unstable_by`, pivots are drawn from a caller-supplied RNG, so
//! pre-sorted and adversarial inputs cannot force quadratic behaviour by
//! construction of the input alone.
use rand::Rng;
use std::cmp::Ordering;

use crate::traits::{Axis, Payload};
use crate::vertex::Vertex;

/// Rearranges `vertices` so that the slot at `len / 2` holds a median along
/// `axis`, everything before it compares `<=` and everything after it `>=` on
/// that axis. Returns `len / 2`.
///
/// Whole records move together, payloads included. Equal keys may land on
/// either side of the median slot.
///
/// The slice must be non-empty. A single-element slice returns without
/// consulting the RNG.
pub(crate) fn partition_around_median<A, T, R>(
    vertices: &mut [Vertex<A, T>],
    axis: usize,
    rng: &mut R,
) -> usize
where
    A: Axis,
    T: Payload,
    R: Rng + ?Sized,
{
    let n = vertices.len();
    debug_assert!(n > 0);
    let k = n / 2;
    if n == 1 {
        return 0;
    }

    let mut left = 0;
    let mut right = n - 1;
    while left < right {
        let p = partition(vertices, left, right, axis, rng);
        match p.cmp(&k) {
            Ordering::Equal => return k,
            Ordering::Greater => right = p - 1,
            Ordering::Less => left = p + 1,
        }
    }

    // left == right == k: the single remaining candidate is the median.
    k
}

/// One Lomuto pass over `[left, right]` around a uniformly random pivot.
/// Returns the pivot's final position.
fn partition<A, T, R>(
    vertices: &mut [Vertex<A, T>],
    left: usize,
    right: usize,
    axis: usize,
    rng: &mut R,
) -> usize
where
    A: Axis,
    T: Payload,
    R: Rng + ?Sized,
{
    let pivot_idx = rng.random_range(left..=right);
    vertices.swap(pivot_idx, right);
    let pivot_key = vertices[right].coord[axis];

    let mut store = left;
    for j in left..right {
        if vertices[j].coord[axis] <= pivot_key {
            vertices.swap(store, j);
            store += 1;
        }
    }
    vertices.swap(store, right);

    store
}

#[cfg(test)]
mod tests {
    use super::partition_around_median;
    use crate::vertex::Vertex;
    use ordered_float::OrderedFloat;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn vertices_from_xs(xs: &[f64]) -> Vec<Vertex<f64, u32>> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| Vertex::new([x, 0.0, 0.0], i as u32))
            .collect()
    }

    fn assert_median_pinned(vertices: &[Vertex<f64, u32>], axis: usize, m: usize) {
        let key = vertices[m].coord[axis];
        assert!(vertices[..m].iter().all(|v| v.coord[axis] <= key));
        assert!(vertices[m..].iter().all(|v| v.coord[axis] >= key));
    }

    #[test]
    fn single_element_returns_zero_without_rng() {
        struct PanicRng;
        impl rand::RngCore for PanicRng {
            fn next_u32(&mut self) -> u32 {
                panic!("rng consulted for a single-element slice")
            }
            fn next_u64(&mut self) -> u64 {
                panic!("rng consulted for a single-element slice")
            }
            fn fill_bytes(&mut self, _: &mut [u8]) {
                panic!("rng consulted for a single-element slice")
            }
        }

        let mut vertices = vertices_from_xs(&[0.5]);
        let m = partition_around_median(&mut vertices, 0, &mut PanicRng);
        assert_eq!(m, 0);
        assert_eq!(vertices[0].data, 0);
    }

    #[test]
    fn two_elements_pin_the_larger_in_the_middle_slot() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut vertices = vertices_from_xs(&[2.0, 1.0]);
        let m = partition_around_median(&mut vertices, 0, &mut rng);
        assert_eq!(m, 1);
        assert_eq!(vertices[1].coord[0], 2.0);
        assert_eq!(vertices[0].coord[0], 1.0);
    }

    #[test]
    fn pins_the_median_of_random_slices_on_every_axis() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in [2, 3, 5, 16, 63, 64, 257] {
            for axis in 0..3 {
                let mut vertices: Vec<Vertex<f64, u32>> = (0..n)
                    .map(|i| {
                        let coord = [rng.random::<f64>(), rng.random(), rng.random()];
                        Vertex::new(coord, i as u32)
                    })
                    .collect();

                let mut sorted: Vec<f64> = vertices.iter().map(|v| v.coord[axis]).collect();
                sorted.sort_by_key(|&c| OrderedFloat(c));

                let m = partition_around_median(&mut vertices, axis, &mut rng);
                assert_eq!(m, n / 2);
                assert_eq!(vertices[m].coord[axis], sorted[n / 2]);
                assert_median_pinned(&vertices, axis, m);
            }
        }
    }

    #[test]
    fn handles_heavy_duplication() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..50 {
            let n = rng.random_range(2..40);
            let mut vertices: Vec<Vertex<f64, u32>> = (0..n)
                .map(|i| {
                    let x = f64::from(rng.random_range(0..3));
                    Vertex::new([x, 0.0, 0.0], i as u32)
                })
                .collect();

            let m = partition_around_median(&mut vertices, 0, &mut rng);
            assert_eq!(m, n / 2);
            assert_median_pinned(&vertices, 0, m);
        }
    }

    #[test]
    fn moves_payloads_with_their_coordinates() {
        let mut rng = SmallRng::seed_from_u64(3);
        let xs: Vec<f64> = (0..31).rev().map(f64::from).collect();
        let mut vertices = vertices_from_xs(&xs);

        partition_around_median(&mut vertices, 0, &mut rng);

        // Each payload still records the original position of its x value.
        for v in &vertices {
            assert_eq!(xs[v.data as usize], v.coord[0]);
        }
    }
}
