//! `quaternions` submodule implements [`Quaternion`] - compact representation of rotation
//! that converts to and from rotation matrices and supports spherical interpolation.
//!
//! Note that [`Quaternion::default`] is the all-zero quaternion, which does not represent any
//! rotation; use [`Quaternion::identity`] for "no rotation".
//!

use crate::{
    floats::{impl_approx_eq, EPSILON, SINGULAR_EPSILON},
    matrices::{Mat3, Mat4},
    vectors::{Vec3, Vec4},
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::{
    f32::consts::PI,
    ops::{Add, Mul},
};

/// [`Quaternion`] struct represents rotation as `x*i + y*j + z*k + w`.
///
/// # Example
/// ```rust
/// # use vecmat::quaternions::Quaternion;
/// # use vecmat::vectors::Vec3;
/// # use approx::assert_abs_diff_eq;
/// # use std::f32::consts::FRAC_PI_2;
/// let rotation: Quaternion = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), FRAC_PI_2);
/// let rotated: Vec3 = rotation.rotate(Vec3::new(1.0, 0.0, 0.0));
/// assert_abs_diff_eq!(rotated, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
/// ```
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Quaternion {
    /// Coefficient of `i`.
    ///
    pub x: f32,
    /// Coefficient of `j`.
    ///
    pub y: f32,
    /// Coefficient of `k`.
    ///
    pub z: f32,
    /// Scalar part.
    ///
    pub w: f32,
}
impl Quaternion {
    /// Initializes quaternion from its components.
    ///
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quaternion { x, y, z, w }
    }
    /// Initializes quaternion that represents no rotation (`w = 1`).
    ///
    pub const fn identity() -> Self {
        Quaternion::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Initializes rotation by `radians` about `axis` (right-handed).
    ///
    /// Unlike rotation matrix builders, angle is in **radians**.
    ///
    /// # Precondition
    /// Axis must be non-zero (it is normalized internally). Zero axis panics in debug builds
    /// and produces NaNs in release builds.
    ///
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let (sin, cos): (f32, f32) = (radians / 2.0).sin_cos();
        let axis: Vec3 = axis.normalize() * sin;
        Quaternion::new(axis.x, axis.y, axis.z, cos)
    }

    /// Returns components as `[x, y, z, w]`.
    ///
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
    /// Returns quaternion as four-dimensional vector.
    ///
    pub fn to_vec4(self) -> Vec4 {
        bytemuck::cast(self)
    }

    /// Returns squared norm (sum of squared components).
    ///
    pub fn norm(&self) -> f32 {
        self.dot(self)
    }
    /// Returns four-dimensional dot product of quaternions.
    ///
    pub fn dot(&self, other: &Self) -> f32 {
        self.to_vec4().dot(other.to_vec4())
    }

    /// Returns rotation matrix that corresponds to quaternion.
    ///
    /// Quaternion does not have to be of unit length. When norm is under `f32::EPSILON`
    /// (e.g. [`Quaternion::default`]) the identity matrix is returned.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::quaternions::Quaternion;
    /// # use vecmat::matrices::Mat3;
    /// assert_eq!(Quaternion::default().to_mat3(), Mat3::identity());
    /// assert_eq!(Quaternion::identity().to_mat3(), Mat3::identity());
    /// ```
    ///
    pub fn to_mat3(&self) -> Mat3 {
        let norm: f32 = self.norm();
        if norm.abs() < SINGULAR_EPSILON {
            return Mat3::identity();
        }

        let s: f32 = 2.0 / norm;
        let (xs, ys, zs) = (self.x * s, self.y * s, self.z * s);
        let (wx, wy, wz) = (self.w * xs, self.w * ys, self.w * zs);
        let (xx, xy, xz) = (self.x * xs, self.x * ys, self.x * zs);
        let (yy, yz, zz) = (self.y * ys, self.y * zs, self.z * zs);
        Mat3::new(
            1.0 - (yy + zz),
            xy - wz,
            xz + wy,
            xy + wz,
            1.0 - (xx + zz),
            yz - wx,
            xz - wy,
            yz + wx,
            1.0 - (xx + yy),
        )
    }
    /// Returns rotation matrix lifted to 4x4.
    ///
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from(self.to_mat3())
    }

    /// Rotates vector.
    ///
    pub fn rotate(&self, vector: Vec3) -> Vec3 {
        self.to_mat3() * vector
    }
}
impl From<Mat3> for Quaternion {
    /// Extracts rotation from pure rotation matrix.
    ///
    /// When trace is non-negative, `w` is extracted first; otherwise extraction starts from
    /// the axis with the largest diagonal element (ties go to x, then y).
    ///
    fn from(m: Mat3) -> Self {
        let trace: f32 = m[0][0] + m[1][1] + m[2][2];
        if trace >= 0.0 {
            let w: f32 = (0.25 * (trace + 1.0)).sqrt();
            let s: f32 = 0.25 / w;
            return Quaternion::new(
                (m[2][1] - m[1][2]) * s,
                (m[0][2] - m[2][0]) * s,
                (m[1][0] - m[0][1]) * s,
                w,
            );
        }

        // returns (i, j, k, w) where i is the dominant axis and j, k follow it cyclically
        let extract = |i: usize, j: usize, k: usize| -> (f32, f32, f32, f32) {
            let dominant: f32 = (0.25 * (m[i][i] - m[j][j] - m[k][k] + 1.0)).sqrt();
            let s: f32 = 0.25 / dominant;
            (
                dominant,
                (m[i][j] + m[j][i]) * s,
                (m[k][i] + m[i][k]) * s,
                (m[k][j] - m[j][k]) * s,
            )
        };
        if m[0][0] >= m[1][1] && m[0][0] >= m[2][2] {
            let (x, y, z, w) = extract(0, 1, 2);
            Quaternion::new(x, y, z, w)
        } else if m[1][1] >= m[2][2] {
            let (y, z, x, w) = extract(1, 2, 0);
            Quaternion::new(x, y, z, w)
        } else {
            let (z, x, y, w) = extract(2, 0, 1);
            Quaternion::new(x, y, z, w)
        }
    }
}
impl From<Mat4> for Quaternion {
    /// Extracts rotation from upper-left block of matrix.
    ///
    /// Each basis column is normalized first, so uniform scale is removed.
    ///
    /// # Precondition
    /// Scale must be uniform; non-uniform scale is not detected and gives a wrong rotation.
    ///
    fn from(matrix: Mat4) -> Self {
        let block: Mat3 = matrix.upper_left();
        let lengths: Vec3 = Vec3::new(
            block.column(0).length(),
            block.column(1).length(),
            block.column(2).length(),
        );
        Quaternion::from(Mat3::from_rows(block.rows().map(|row| row / lengths)))
    }
}
impl_approx_eq!(Quaternion);
impl Add<Self> for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        bytemuck::cast(self.to_vec4() + rhs.to_vec4())
    }
}
impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        bytemuck::cast(self.to_vec4() * rhs)
    }
}
impl Mul<Self> for Quaternion {
    type Output = Self;

    /// Hamilton product: `(a * b).rotate(v) == a.rotate(b.rotate(v))`.
    ///
    fn mul(self, q: Self) -> Self::Output {
        Quaternion::new(
            self.x * q.w + self.y * q.z - self.z * q.y + self.w * q.x,
            -self.x * q.z + self.y * q.w + self.z * q.x + self.w * q.y,
            self.x * q.y - self.y * q.x + self.z * q.w + self.w * q.z,
            -self.x * q.x - self.y * q.y - self.z * q.z + self.w * q.w,
        )
    }
}

/// Spherically interpolates between two quaternions (`t = 0` gives `q0`, `t = 1` gives `q1`).
///
/// Shortest arc is not enforced: `q0` and `-q0` are interpolated through the opposite
/// hemisphere. Nearly identical endpoints are blended linearly. For nearly opposite endpoints
/// path goes through a companion quaternion orthogonal to `q0`.
///
/// # Example
/// ```rust
/// # use vecmat::quaternions::{slerp, Quaternion};
/// # use vecmat::vectors::Vec3;
/// # use approx::assert_abs_diff_eq;
/// let q0: Quaternion = Quaternion::identity();
/// let q1: Quaternion = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 1.0);
/// assert_abs_diff_eq!(
///     slerp(q0, q1, 0.5),
///     Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.5),
///     epsilon = 1e-5
/// );
/// ```
///
pub fn slerp(q0: Quaternion, q1: Quaternion, t: f32) -> Quaternion {
    let cos_omega: f32 = q0.dot(&q1);

    if 1.0 + cos_omega > EPSILON {
        let (scale0, scale1): (f32, f32) = if 1.0 - cos_omega > EPSILON {
            let omega: f32 = cos_omega.acos();
            let sin_omega: f32 = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sin_omega,
                (t * omega).sin() / sin_omega,
            )
        } else {
            (1.0 - t, t)
        };
        q0 * scale0 + q1 * scale1
    } else {
        let up: Quaternion = Quaternion::new(-q0.y, q0.x, -q0.w, q0.z);
        q0 * ((0.5 - t) * PI).sin() + up * (t * PI).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::{slerp, Quaternion};
    use crate::{
        matrices::{Mat3, Mat4},
        vectors::Vec3,
    };
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    #[test]
    fn construction() {
        assert_eq!(Quaternion::default(), Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert_ne!(Quaternion::default(), Quaternion::identity());
        assert_eq!(Quaternion::identity().norm(), 1.0);

        let q: Quaternion = Quaternion::from_axis_angle(Vec3::new(3.0, 0.0, 0.0), PI);
        assert_abs_diff_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-6);
        assert_eq!(q.as_array().len(), 4);
        assert_eq!(std::mem::size_of::<Quaternion>(), 16);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reciprocal of zero")]
    fn zero_axis_panics() {
        let _ = Quaternion::from_axis_angle(Vec3::zero(), 1.0);
    }

    #[test]
    fn matrices_agree_with_builders() {
        let q: Quaternion = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        assert_abs_diff_eq!(q.to_mat4(), Mat4::rotate_x(90.0), epsilon = 1e-6);
        let q: Quaternion = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.3);
        assert_abs_diff_eq!(q.to_mat4(), Mat4::rotate_y(0.3_f32.to_degrees()), epsilon = 1e-6);
        let q: Quaternion = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), -1.2);
        assert_abs_diff_eq!(q.to_mat4(), Mat4::rotate_z((-1.2_f32).to_degrees()), epsilon = 1e-6);
    }

    #[test]
    fn degenerate_quaternion_gives_identity() {
        assert_eq!(Quaternion::default().to_mat3(), Mat3::identity());
        assert_eq!(
            Quaternion::new(1e-5, 0.0, 0.0, 0.0).to_mat3(),
            Mat3::identity()
        );
    }

    #[test]
    fn extraction_branches() {
        // trace >= 0, then dominant x, y and z diagonals
        for rotation in [
            Mat4::rotate_x(30.0),
            Mat4::rotate_x(170.0),
            Mat4::rotate_y(170.0),
            Mat4::rotate_z(170.0),
            Mat4::rotate_y(-135.0),
        ] {
            let rotation: Mat3 = rotation.upper_left();
            let q: Quaternion = Quaternion::from(rotation);
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(q.to_mat3(), rotation, epsilon = 1e-5);
        }

        // half-turn about x: x diagonal is strictly the largest
        let q: Quaternion = Quaternion::from(Mat4::rotate_x(180.0).upper_left());
        assert_abs_diff_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn diagonal_ties_prefer_earlier_axis() {
        // half-turn about (1, -1, 0): x and y diagonals are equal, x wins
        let q: Quaternion = Quaternion::from(Mat3::new(
            0.0, -1.0, 0.0, //
            -1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0,
        ));
        assert!(q.x > 0.0 && q.y < 0.0);
        assert_abs_diff_eq!(
            q,
            Quaternion::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0, 0.0),
            epsilon = 1e-6
        );

        // half-turn about (0, 1, -1): y and z diagonals are equal, y wins
        let rotation: Mat3 = Mat3::new(
            -1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, //
            0.0, -1.0, 0.0,
        );
        let q: Quaternion = Quaternion::from(rotation);
        assert!(q.y > 0.0 && q.z < 0.0);
        assert_abs_diff_eq!(
            q,
            Quaternion::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(q.to_mat3(), rotation, epsilon = 1e-6);
    }

    #[test]
    fn scale_is_removed() {
        let rotation: Mat4 = Mat4::rotate_z(40.0) * Mat4::rotate_x(-25.0);
        let q: Quaternion = Quaternion::from(rotation * Mat4::scale_uniform(3.0));
        assert_abs_diff_eq!(q.to_mat4(), rotation, epsilon = 1e-5);
    }

    #[test]
    fn hamilton_product_composes_rotations() {
        let a: Quaternion = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 0.7);
        let b: Quaternion = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), -0.4);
        let v: Vec3 = Vec3::new(0.5, -2.0, 1.0);
        assert_abs_diff_eq!((a * b).rotate(v), a.rotate(b.rotate(v)), epsilon = 1e-5);
        assert_abs_diff_eq!((a * b).to_mat3(), a.to_mat3() * b.to_mat3(), epsilon = 1e-5);
        assert_eq!(a * Quaternion::identity(), a);
    }

    #[test]
    fn slerp_branches() {
        let q0: Quaternion = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.2);
        let q1: Quaternion = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), 2.0);
        assert_abs_diff_eq!(slerp(q0, q1, 0.0), q0, epsilon = 1e-6);
        assert_abs_diff_eq!(slerp(q0, q1, 1.0), q1, epsilon = 1e-6);
        assert_abs_diff_eq!(slerp(q0, q1, 0.5).norm(), 1.0, epsilon = 1e-5);

        // nearly identical
        assert_abs_diff_eq!(slerp(q0, q0, 0.25), q0, epsilon = 1e-6);

        // exactly opposite
        let opposite: Quaternion = q0 * -1.0;
        assert_abs_diff_eq!(slerp(q0, opposite, 0.0), q0, epsilon = 1e-6);
        assert_abs_diff_eq!(slerp(q0, opposite, 1.0), opposite, epsilon = 1e-6);
        let middle: Quaternion = slerp(q0, opposite, 0.5);
        assert_abs_diff_eq!(middle.dot(&q0), 0.0, epsilon = 1e-6);
    }
}
