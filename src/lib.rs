//! # vecmat
//!
//! **vecmat** - vector, matrix and quaternion algebra for rendering with GPU-compatible
//! row-major layout.
//!
//! Crate is organized as follows:
//! * [`floats`] - scalar helpers (reciprocal division, angle conversion, approximate comparison);
//! * [`vectors`] - `f32` and `i32` vectors of two, three and four dimensions;
//! * [`matrices`] - 3x3 and 4x4 matrices with transform, projection and camera builders;
//! * [`quaternions`] - rotations that convert to and from matrices and interpolate.
//!
//! All types are `Copy` values with `#[repr(C)]` layout and implement `bytemuck::Pod`,
//! so they can be written into vertex and uniform buffers directly.
//!
//! Library does not print anything; rejected singular inversions are reported as `tracing`
//! events at `TRACE` level, which are visible only when the application installs a subscriber.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate approx;

extern crate bytemuck;

extern crate seq_macro;

extern crate serde;

extern crate tracing;

// algebra
pub mod floats;
pub mod matrices;
pub mod quaternions;
pub mod vectors;

pub mod prelude;
