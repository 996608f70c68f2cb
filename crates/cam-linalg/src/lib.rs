//! A small `f32` linear algebra library for real-time graphics.
//!
//! # Overview
//!
//! The library provides 2, 3 and 4-dimensional vectors ([`Vec2`], [`Vec3`], [`Vec4`]), square
//! matrices of the same sizes ([`Mat2`], [`Mat3`], [`Mat4`]), and a handful of [`transform`]
//! constructors for building model, view and projection matrices.
//!
//! # Goals & Non-Goals
//!
//! - Only `f32` elements. Graphics pipelines consume single-precision data, and supporting other
//!   element types would complicate the API for no benefit to that use case.
//! - Only 2, 3 and 4 dimensions are part of the supported surface. The types are const-generic
//!   internally, but determinants, cross products and transforms exist only for these sizes.
//! - A single, column-major, unpadded data layout for matrices, so that they can be uploaded to
//!   the GPU as-is (see [`Matrix::as_bytes`]).
//! - No error reporting. Invalid input (normalizing a zero vector, degenerate projection
//!   volumes, ...) produces IEEE-754 infinities and NaNs, which the caller is expected to guard
//!   against if needed.
//! - No inversion, no quaternions, no serialization.
//!
//! # Cached Values
//!
//! [`Vector::magnitude`] and the `determinant` methods of [`Matrix`] are computed lazily and
//! cached inside the value. Every operation that can modify the contents (operators, index
//! writes, field writes through `v.x = ...`, [`Matrix::at_mut`]) clears the cache. Because of
//! this interior cache, vectors and matrices are [`Clone`] but not [`Copy`]; all operators are
//! implemented for both owned values and references.
//!
//! # SIMD
//!
//! Lanewise arithmetic and matrix products go through the [`simd`] backend. With the `simd`
//! Cargo feature enabled on x86 or ARM targets, the backend uses `wide::f32x4`; otherwise a
//! scalar implementation is used. Both backends produce bit-identical results.

#[macro_use]
mod macros;

mod cache;
mod matrix;
pub mod simd;
pub mod transform;
mod vector;

pub use matrix::*;
pub use vector::*;
