//! Prelude module: `vecmat::prelude` re-exports all `vecmat` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use vecmat::prelude::*;
//! use approx::assert_abs_diff_eq;
//!
//! let model: Mat4 = Mat4::translate(0.0, 1.0, 0.0) * Mat4::rotate_z(45.0);
//! let normal: Vec3 = model.upper_left().transpose_inverse() * Vec3::new(0.0, 0.0, 1.0);
//! assert_abs_diff_eq!(normal, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
//! ```
//!

// re-exports
pub use crate::floats::*;
pub use crate::matrices::*;
pub use crate::quaternions::*;
pub use crate::vectors::*;
