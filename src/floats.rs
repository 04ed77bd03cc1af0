//! `floats` submodule implements consts and functions that help in work with `f32` scalars.
//!
//! [`reciprocal`] is the division primitive of float vectors and [`flint`] is the floor-to-int
//! conversion behind integer vectors.
//!
//! Vectors, matrices and quaternions implement `approx::AbsDiffEq` and `approx::RelativeEq`
//! with [`EPSILON`] as default tolerance (structural `PartialEq` on them is exact).
//!

use std::f32::consts::PI;

/// Constant that is used in approximate floating point comparison and as the
/// slerp degeneracy threshold.
///
pub const EPSILON: f32 = 0.00001;
/// Threshold under which a determinant or a quaternion norm is considered to be zero.
///
/// Equals to machine epsilon of `f32` (`FLT_EPSILON`).
///
pub const SINGULAR_EPSILON: f32 = f32::EPSILON;
/// Fixed factor that converts degrees into radians.
///
/// Rotation matrix builders take degrees and convert them with this constant.
///
pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;

/// Returns reciprocal of a scalar (`1.0 / s`).
///
/// Float vectors divide by scalar by multiplying with reciprocal, so there is exactly one
/// division per operation.
///
/// # Precondition
/// `s` must not be zero. That is checked only in debug builds; in release builds zero
/// produces infinity.
///
/// # Example
/// ```rust
/// # use vecmat::floats::reciprocal;
/// assert_eq!(reciprocal(4.0), 0.25);
/// ```
///
#[inline]
pub fn reciprocal(s: f32) -> f32 {
    debug_assert!(s != 0.0, "reciprocal of zero");
    1.0 / s
}

/// Converts degrees to radians with [`DEGREES_TO_RADIANS`].
///
/// # Example
/// ```rust
/// # use vecmat::floats::degrees_to_radians;
/// # use approx::assert_abs_diff_eq;
/// # use std::f32::consts::PI;
/// assert_abs_diff_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-6);
/// ```
///
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEGREES_TO_RADIANS
}
/// Converts radians to degrees.
///
/// # Example
/// ```rust
/// # use vecmat::floats::radians_to_degrees;
/// # use approx::assert_abs_diff_eq;
/// # use std::f32::consts::PI;
/// assert_abs_diff_eq!(radians_to_degrees(PI), 180.0, epsilon = 1e-4);
/// ```
///
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians / DEGREES_TO_RADIANS
}

/// Floors value and converts it to integer (rounding toward negative infinity, not toward zero).
///
/// # Example
/// ```rust
/// # use vecmat::floats::flint;
/// assert_eq!(flint(2.7), 2);
/// assert_eq!(flint(-0.5), -1);
/// ```
///
#[inline]
pub fn flint(x: f32) -> i32 {
    x.floor() as i32
}

/// [`impl_approx_eq`] macro implements `approx::AbsDiffEq` and `approx::RelativeEq` on float
/// based types by comparing their `as_array` elements pairwise.
///
/// Default epsilon and default relative tolerance are [`EPSILON`].
///
macro_rules! impl_approx_eq {
    ($($struct:ident),+ $(,)?) => {$(
        impl approx::AbsDiffEq for $struct {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                $crate::floats::EPSILON
            }
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.as_array()
                    .iter()
                    .zip(other.as_array())
                    .all(|(a, b)| <f32 as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
            }
        }
        impl approx::RelativeEq for $struct {
            fn default_max_relative() -> Self::Epsilon {
                $crate::floats::EPSILON
            }
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.as_array()
                    .iter()
                    .zip(other.as_array())
                    .all(|(a, b)| {
                        <f32 as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative)
                    })
            }
        }
    )+};
}
pub(crate) use impl_approx_eq;

#[cfg(test)]
mod tests {
    use super::{degrees_to_radians, flint, radians_to_degrees};
    use approx::assert_abs_diff_eq;

    #[test]
    fn flint_floors() {
        assert_eq!(flint(0.0), 0);
        assert_eq!(flint(1.999), 1);
        assert_eq!(flint(-1.001), -2);
        assert_eq!(flint(-3.0), -3);
    }

    #[test]
    fn angles() {
        assert_abs_diff_eq!(degrees_to_radians(90.0), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(radians_to_degrees(degrees_to_radians(37.5)), 37.5, epsilon = 1e-4);
    }
}
