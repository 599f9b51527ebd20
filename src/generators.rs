//! Synthetic point distributions for benchmarks and stress tests.
//!
//! Each generator returns `Vec<Vertex<f64, u32>>` with the payload set to
//! the point's position in the generated sequence, and is deterministic
//! given a seed. The shapes deliberately include highly anisotropic sets
//! (axes, planes, spirals) because those are exactly the inputs where a
//! round-robin kd-tree degrades and the cut-longest-edge rule earns its
//! keep.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

use crate::vertex::Vertex;

/// Seed used by the benchmarks when nothing else is specified.
pub const DEFAULT_SEED: u64 = 1_234_567_890;

fn stream(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn gauss(rng: &mut ChaCha8Rng) -> f64 {
    rng.sample(StandardNormal)
}

fn collect(coords: impl Iterator<Item = [f64; 3]>) -> Vec<Vertex<f64, u32>> {
    coords
        .enumerate()
        .map(|(i, coord)| Vertex::new(coord, i as u32))
        .collect()
}

/// Uniform points in the unit cube.
pub fn within_cube(npts: usize, seed: u64) -> Vec<Vertex<f64, u32>> {
    let mut rng = stream(seed);
    collect((0..npts).map(|_| [rng.random(), rng.random(), rng.random()]))
}

/// Points hugging the three co-ordinate axes, one third each, with
/// gaussian noise of deviation 1e-2 off-axis.
pub fn within_axes(npts: usize, seed: u64) -> Vec<Vertex<f64, u32>> {
    let sd = 1e-2;
    let third = npts / 3;
    let mut rng = stream(seed);

    collect((0..npts).map(move |i| {
        let along = rng.random::<f64>() + gauss(&mut rng) * sd;
        let off_a = gauss(&mut rng) * sd;
        let off_b = gauss(&mut rng) * sd;
        if i < third {
            [along, off_a, off_b]
        } else if i < 2 * third {
            [off_a, along, off_b]
        } else {
            [off_a, off_b, along]
        }
    }))
}

/// Points hugging the xy, yz and zx planes, one third each, with gaussian
/// noise of deviation 1e-2 off-plane.
pub fn within_planes(npts: usize, seed: u64) -> Vec<Vertex<f64, u32>> {
    let sd = 1e-2;
    let third = npts / 3;
    let mut rng = stream(seed);

    collect((0..npts).map(move |i| {
        let u = rng.random::<f64>() + gauss(&mut rng) * sd;
        let v = rng.random::<f64>() + gauss(&mut rng) * sd;
        let w = gauss(&mut rng) * sd;
        if i < third {
            [u, v, w]
        } else if i < 2 * third {
            [w, u, v]
        } else {
            [u, w, v]
        }
    }))
}

/// Uniform points in a radius-1 cylinder of height `h` centred on the
/// origin, with gaussian noise of deviation 1e-2. A small `h` gives a thin
/// disk, one of the classic hard cases for spatial sorting.
pub fn within_cylinder(npts: usize, h: f64, seed: u64) -> Vec<Vertex<f64, u32>> {
    let sd = 1e-2;
    let mut rng = stream(seed);

    collect((0..npts).map(move |_| {
        let theta = 2.0 * PI * rng.random::<f64>();
        let r = rng.random::<f64>().sqrt();
        [
            r * theta.sin() + sd * gauss(&mut rng),
            r * theta.cos() + sd * gauss(&mut rng),
            h * (rng.random::<f64>() - 0.5) + sd * gauss(&mut rng),
        ]
    }))
}

/// Points on the paraboloid z = x² + y² over the unit disk, with gaussian
/// noise of deviation 1e-2.
pub fn within_paraboloid(npts: usize, seed: u64) -> Vec<Vertex<f64, u32>> {
    let sd = 1e-2;
    let mut rng = stream(seed);

    collect((0..npts).map(move |_| {
        let theta = 2.0 * PI * rng.random::<f64>();
        let r = rng.random::<f64>().sqrt();
        let x = r * theta.sin();
        let y = r * theta.cos();
        let z = x * x + y * y;
        [
            x + sd * gauss(&mut rng),
            y + sd * gauss(&mut rng),
            z + sd * gauss(&mut rng),
        ]
    }))
}

/// Points along a rising logarithmic spiral, with strong gaussian noise.
pub fn within_spiral(npts: usize, seed: u64) -> Vec<Vertex<f64, u32>> {
    let a = 0.25 / PI;
    let b = 300.0;
    let step = if npts > 1 { (b - a) / (npts - 1) as f64 } else { 0.0 };
    let (sdx, sdy, sdz) = (5e-1, 5e-1, 1e0);
    let mut rng = stream(seed);

    collect((0..npts).map(move |i| {
        let theta = 2.0 * PI * (i as f64 * step).sqrt();
        let radius = 0.5 * theta * (0.01 * theta).exp();
        [
            radius * theta.sin() + sdx * gauss(&mut rng),
            radius * theta.cos() + sdy * gauss(&mut rng),
            theta + sdz * gauss(&mut rng),
        ]
    }))
}

/// Points around the saddle z = x² − y² over [−1, 1]², with gaussian noise
/// of deviation 1e-2.
pub fn around_saddle(npts: usize, seed: u64) -> Vec<Vertex<f64, u32>> {
    let sd = 1e-2;
    let mut rng = stream(seed);

    collect((0..npts).map(move |_| {
        let x = 2.0 * rng.random::<f64>() - 1.0;
        let y = 2.0 * rng.random::<f64>() - 1.0;
        let z = x * x - y * y;
        [
            x + sd * gauss(&mut rng),
            y + sd * gauss(&mut rng),
            z + sd * gauss(&mut rng),
        ]
    }))
}

/// The 15-point planar set from figure 5 of Liu & Snoeyink's spatial
/// sorting study, z = 0 throughout. Payloads number the points 1..=15 in
/// the published order.
pub fn liu_fig5() -> Vec<Vertex<f64, u32>> {
    const XY: [(f64, f64); 15] = [
        (2.880, 64.490),
        (22.320, 56.810),
        (38.640, 64.730),
        (47.520, 50.090),
        (64.920, 40.490),
        (66.480, 19.730),
        (90.840, 4.010),
        (98.280, 43.730),
        (102.840, 70.970),
        (119.760, 59.810),
        (125.400, 17.330),
        (142.680, 44.330),
        (162.480, 22.130),
        (182.400, 11.450),
        (199.680, 18.770),
    ];

    XY.iter()
        .enumerate()
        .map(|(i, &(x, y))| Vertex::new([x, y, 0.0], i as u32 + 1))
        .collect()
}
