//! Definitions and implementations for the traits that bound the two generic
//! parameters of [`Vertex`](crate::vertex::Vertex): the co-ordinate float type
//! and the payload carried alongside it
use num_traits::Float;
use std::fmt::Debug;

/// Axis trait represents the traits that must be implemented
/// by the type that is used for vertex co-ordinates. This will
/// be `f64` or `f32`.
pub trait Axis: Float + Default + Debug + Copy + Sync + Send {}
impl<A: Float + Default + Debug + Copy + Sync + Send> Axis for A {}

/// Payload trait.
///
/// Must be implemented by any type that you want to carry through a sort
/// alongside the co-ordinates. Generally this will be `usize`, `u32`, or a
/// small `Copy` struct holding whatever the downstream triangulator needs to
/// identify the vertex (an id, a weight, a boundary tag). The sort never
/// inspects the payload; it only moves it together with its co-ordinates.
pub trait Payload: PartialEq + Default + Clone + Copy + Debug + Sync + Send {}
impl<T: PartialEq + Default + Clone + Copy + Debug + Sync + Send> Payload for T {}
