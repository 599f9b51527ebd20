#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # Brio
//!
//! Spatial pre-sorting for 3D point sets: a
//! [BRIO](https://doi.org/10.1016/S0925-7721(02)00111-6) (biased randomized
//! insertion order) built from a cut-longest-edge kd-tree.
//!
//! Incremental Delaunay tetrahedralizers are dominated by point location:
//! each inserted point is found by walking from a recently created
//! tetrahedron. Feeding them points in the order produced by [`brio_sort`]
//! keeps consecutive insertions spatially close while retaining enough
//! randomness to defeat adversarial inputs, which in practice makes the
//! walks O(1) amortized.
//!
//! The sort works on any slice of [`Vertex`] records (three co-ordinates,
//! `f64` or `f32`, plus an opaque payload that travels with them) and
//! permutes it in place:
//!
//! ```rust
//! use brio::{brio_sort, Bbox, Vertex};
//!
//! let mut vertices: Vec<Vertex<f64, u32>> = vec![
//!     Vertex::new([0.1, 0.2, 0.3], 0),
//!     Vertex::new([0.9, 0.1, 0.6], 1),
//!     Vertex::new([0.4, 0.8, 0.2], 2),
//!     Vertex::new([0.7, 0.6, 0.9], 3),
//! ];
//! let bbox = Bbox::from_vertices(&vertices).unwrap();
//!
//! brio_sort(&bbox, &mut vertices).unwrap();
//!
//! // Same four vertices, in insertion order for the triangulator.
//! assert_eq!(vertices.len(), 4);
//! ```
//!
//! The ordering is the level-order enumeration of a kd-tree that always
//! splits a box along its currently longest axis, at the median point. The
//! longest-axis rule keeps the tree's cells cube-like even for badly
//! anisotropic inputs (thin disks, spirals, points on planes); the median
//! rule balances the tree, so every power-of-two prefix of the output is a
//! well-spread sample of the whole domain.
//!
//! The [`generators`] module provides the synthetic distributions used by
//! the benchmarks, including the hard anisotropic cases.
//!
//! ## Optional Features
//!
//! * **serde** - serialization / deserialization of [`Vertex`], [`Bbox`] and
//!   [`SortError`] via [`Serde`](https://docs.rs/serde/latest/serde/)
//! * **tracing** - emits an event per sort via
//!   [`tracing`](https://docs.rs/tracing/latest/tracing/)

pub mod bbox;
pub mod error;
pub mod generators;
pub mod sort;
pub mod traits;
pub mod vertex;

pub use bbox::Bbox;
pub use error::SortError;
pub use sort::{brio_sort, brio_sort_with_rng};
pub use traits::{Axis, Payload};
pub use vertex::Vertex;
