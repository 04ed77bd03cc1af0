//! `matrices` submodule implements 3x3 and 4x4 matrices which are used to transform vectors.
//!
//! # Layout
//! Matrices are stored as rows: `m[i]` is row `i` and `m[i][j]` is the element at row `i`,
//! column `j`. Memory is row-major and tightly packed (`[f32; 9]` and `[f32; 16]`), see
//! `as_array`. Matrix is applied to a column vector on its right, `(M * v)[i] = dot(M[i], v)`,
//! so `A * B * v` applies `B` first.
//!
//! # Conventions
//! Rotation builders ([`Mat4::rotate_x`], [`Mat4::rotate_y`], [`Mat4::rotate_z`]) and
//! [`Mat4::perspective`] take angles in **degrees**.
//! Coordinate system is right-handed and camera looks down the negative z-axis.
//!

use crate::{
    floats::{degrees_to_radians, impl_approx_eq, reciprocal, SINGULAR_EPSILON},
    vectors::{Vec3, Vec4},
};
use bytemuck::{Pod, Zeroable};
use seq_macro::seq;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt,
    ops::{Index, IndexMut, Mul, MulAssign},
};
use tracing::trace;

/// [`SingularMatrixError`] is returned when matrix cannot be inverted.
///
/// 3x3 matrices are considered singular when `|det| < f32::EPSILON`, 4x4 matrices only when
/// determinant is exactly zero.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SingularMatrixError {
    /// Determinant that was rejected.
    ///
    determinant: f32,
}
impl SingularMatrixError {
    /// Returns determinant that was rejected.
    ///
    pub fn determinant(&self) -> f32 {
        self.determinant
    }
}
impl fmt::Display for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix is singular and cannot be inverted (determinant is {})",
            self.determinant
        )
    }
}
impl Error for SingularMatrixError {}

/// [`impl_matrix`] macro implements all common associated functions, methods and operations
/// on square matrices.
///
/// Matrix must be a `#[repr(C)]` struct with `rows: [$vec; $size]` field.
///
macro_rules! impl_matrix {
    ($struct:ident, $vec:ident, $size:literal, $count:literal) => {
        impl $struct {
            /// Initializes matrix from its rows.
            ///
            pub const fn from_rows(rows: [$vec; $size]) -> Self {
                Self { rows }
            }
            /// Initializes diagonal matrix with given value on the main diagonal and zeroes
            /// elsewhere.
            ///
            pub fn diagonal(value: f32) -> Self {
                let mut matrix: Self = Self::from_rows([$vec::zero(); $size]);
                for i in 0..$size {
                    matrix[i][i] = value;
                }
                matrix
            }
            /// Initializes identity matrix.
            ///
            pub fn identity() -> Self {
                Self::diagonal(1.0)
            }
            /// Initializes matrix with zeroes.
            ///
            pub fn zero() -> Self {
                Self::diagonal(0.0)
            }

            /// Returns rows of matrix.
            ///
            pub fn rows(&self) -> [$vec; $size] {
                self.rows
            }
            /// Returns row of matrix.
            ///
            pub fn row(&self, index: usize) -> $vec {
                self.rows[index]
            }
            /// Returns column of matrix.
            ///
            pub fn column(&self, index: usize) -> $vec {
                let mut column: $vec = $vec::zero();
                for (i, row) in self.rows.iter().enumerate() {
                    column[i] = row[index];
                }
                column
            }

            /// Returns matrix as a reference to contiguous row-major array of its elements.
            ///
            /// This is the buffer that is passed to uniform upload.
            ///
            pub fn as_array(&self) -> &[f32; $count] {
                bytemuck::cast_ref(self)
            }
            /// Returns matrix as a slice of its elements in row-major order.
            ///
            pub fn as_slice(&self) -> &[f32] {
                self.as_array()
            }
            /// Returns raw bytes of matrix (row-major, native endianness, no padding).
            ///
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            /// Applies function to every matrix element and returns changed matrix.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from_rows(self.rows.map(|row| row.map(&f)))
            }
        }
        impl Default for $struct {
            /// Default matrix is the identity.
            ///
            fn default() -> Self {
                Self::identity()
            }
        }
        impl From<[[f32; $size]; $size]> for $struct {
            fn from(arr: [[f32; $size]; $size]) -> Self {
                Self::from_rows(arr.map($vec::from))
            }
        }
        impl Index<usize> for $struct {
            type Output = $vec;

            fn index(&self, index: usize) -> &Self::Output {
                &self.rows[index]
            }
        }
        impl IndexMut<usize> for $struct {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.rows[index]
            }
        }
        impl Mul<Self> for $struct {
            type Output = Self;

            /// Performs matrix product (`O(n^3)` nested sum).
            ///
            fn mul(self, rhs: Self) -> Self::Output {
                let mut matrix: Self = Self::zero();
                for i in 0..$size {
                    for j in 0..$size {
                        for k in 0..$size {
                            matrix[i][j] += self[i][k] * rhs[k][j];
                        }
                    }
                }
                matrix
            }
        }
        impl MulAssign<Self> for $struct {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
        impl Mul<f32> for $struct {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self::Output {
                Self::from_rows(self.rows.map(|row| row * rhs))
            }
        }
        impl Mul<$struct> for f32 {
            type Output = $struct;

            fn mul(self, matrix: $struct) -> Self::Output {
                matrix * self
            }
        }
        impl MulAssign<f32> for $struct {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }
    };
}

/// [`Mat3`] struct represents 3x3 matrix (rotation and scale without translation).
///
/// # Example
/// ```rust
/// # use vecmat::matrices::Mat3;
/// # use vecmat::vectors::Vec3;
/// let matrix: Mat3 = Mat3::new(
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
/// );
/// assert_eq!(matrix[1][2], 6.0);
/// assert_eq!(matrix * Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 4.0, 7.0));
/// ```
///
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat3 {
    /// Rows of matrix.
    ///
    rows: [Vec3; 3],
}
impl_matrix!(Mat3, Vec3, 3, 9);
impl_approx_eq!(Mat3);
impl Mat3 {
    /// Initializes matrix from nine elements in row-major order.
    ///
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
        g: f32,
        h: f32,
        i: f32,
    ) -> Self {
        Mat3::from_rows([Vec3::new(a, b, c), Vec3::new(d, e, f), Vec3::new(g, h, i)])
    }

    /// Returns transpose of matrix (`m[i][j]` and `m[j][i]` are swapped).
    ///
    pub fn transpose(&self) -> Self {
        seq!(C in 0..3 {
            Mat3::from_rows([#(self.column(C),)*])
        })
    }

    /// Returns adjugate (adjoint) of matrix - transposed matrix of cofactors that are computed
    /// from 2x2 minors.
    ///
    pub fn adjoint(&self) -> Self {
        let m: &Mat3 = self;
        Mat3::new(
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
            -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        )
    }
    /// Expands determinant along the first column using already computed adjugate.
    ///
    fn expand_determinant(&self, adjoint: &Mat3) -> f32 {
        adjoint[0][0] * self[0][0] + adjoint[0][1] * self[1][0] + adjoint[0][2] * self[2][0]
    }
    /// Returns determinant of matrix.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::matrices::Mat3;
    /// let matrix: Mat3 = Mat3::new(
    ///     -3.0, 2.0, 2.0,
    ///     43.0, 1.0, -12.0,
    ///     5.0, 0.0, 5.0,
    /// );
    /// assert_eq!(matrix.determinant(), -575.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        self.expand_determinant(&self.adjoint())
    }

    /// Returns inverse of matrix (adjugate divided by determinant).
    ///
    /// Matrix is considered singular when `|det| < f32::EPSILON`: round-off rarely produces
    /// an exact zero determinant.
    ///
    /// # Examples
    /// ```rust
    /// # use vecmat::matrices::Mat3;
    /// # use approx::assert_abs_diff_eq;
    /// let matrix: Mat3 = Mat3::new(
    ///     3.0, 2.0, 2.0,
    ///     1.0, 2.0, 2.0,
    ///     1.0, 3.0, 2.0,
    /// );
    /// let inverse: Mat3 = matrix.invert().expect("determinant is -4");
    /// assert_abs_diff_eq!(
    ///     inverse,
    ///     Mat3::new(
    ///         0.5, -0.5, 0.0,
    ///         0.0, -1.0, 1.0,
    ///         -0.25, 1.75, -1.0,
    ///     ),
    ///     epsilon = 1e-6
    /// );
    /// ```
    ///
    /// ```rust
    /// # use vecmat::matrices::Mat3;
    /// let matrix: Mat3 = Mat3::new(
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// );
    /// assert!(matrix.invert().is_err());
    /// ```
    ///
    pub fn invert(&self) -> Result<Self, SingularMatrixError> {
        let adjoint: Mat3 = self.adjoint();
        let determinant: f32 = self.expand_determinant(&adjoint);
        if determinant.abs() < SINGULAR_EPSILON {
            trace!(determinant, "3x3 matrix is singular");
            return Err(SingularMatrixError { determinant });
        }
        Ok(adjoint * reciprocal(determinant))
    }
    /// Returns inverse of matrix without reporting singularity.
    ///
    /// For singular matrix the result is meaningless (it is the undivided adjugate);
    /// use [`Mat3::invert`] when that matters.
    ///
    pub fn inverse(&self) -> Self {
        self.invert().unwrap_or_else(|_| self.adjoint())
    }

    /// Returns transpose of inverse matrix (cofactors divided by determinant).
    ///
    /// It is used to transform surface normals under non-uniform scale.
    ///
    /// # Precondition
    /// Matrix must not be singular; there is no singularity check.
    ///
    pub fn transpose_inverse(&self) -> Self {
        let adjoint: Mat3 = self.adjoint();
        let determinant: f32 = self.expand_determinant(&adjoint);
        adjoint.transpose() * reciprocal(determinant)
    }
}
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    /// Transforms vector (`result[i] = dot(row[i], vector)`).
    ///
    fn mul(self, vector: Vec3) -> Self::Output {
        seq!(R in 0..3 {
            Vec3::new(#(self.rows[R].dot(vector),)*)
        })
    }
}

/// [`Mat4`] struct represents 4x4 matrix (affine and projective transforms).
///
/// # Example
/// ```rust
/// # use vecmat::matrices::Mat4;
/// # use vecmat::vectors::Vec4;
/// let matrix: Mat4 = Mat4::translate(1.0, 2.0, 3.0) * Mat4::scale(2.0, 2.0, 2.0);
/// assert_eq!(matrix * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(3.0, 4.0, 5.0, 1.0));
/// ```
///
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat4 {
    /// Rows of matrix.
    ///
    rows: [Vec4; 4],
}
impl_matrix!(Mat4, Vec4, 4, 16);
impl_approx_eq!(Mat4);
impl Mat4 {
    /// Initializes matrix from sixteen elements in row-major order.
    ///
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
        g: f32,
        h: f32,
        i: f32,
        j: f32,
        k: f32,
        l: f32,
        m: f32,
        n: f32,
        o: f32,
        p: f32,
    ) -> Self {
        Mat4::from_rows([
            Vec4::new(a, b, c, d),
            Vec4::new(e, f, g, h),
            Vec4::new(i, j, k, l),
            Vec4::new(m, n, o, p),
        ])
    }

    /// Returns upper-left 3x3 block of matrix.
    ///
    pub fn upper_left(&self) -> Mat3 {
        seq!(R in 0..3 {
            Mat3::from_rows([#(self.rows[R].truncate(),)*])
        })
    }

    /// Makes scaling matrix.
    ///
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut matrix: Mat4 = Mat4::identity();
        matrix[0][0] = x;
        matrix[1][1] = y;
        matrix[2][2] = z;
        matrix
    }
    /// Makes scaling matrix from vector of factors.
    ///
    pub fn scale_vec(factors: Vec3) -> Self {
        Mat4::scale(factors.x, factors.y, factors.z)
    }
    /// Makes uniform scaling matrix.
    ///
    pub fn scale_uniform(factor: f32) -> Self {
        Mat4::scale(factor, factor, factor)
    }

    /// Makes translation matrix (translation is stored in the last column).
    ///
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Mat4::new(
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }
    /// Makes translation matrix from vector.
    ///
    pub fn translate_vec(translation: Vec3) -> Self {
        Mat4::translate(translation.x, translation.y, translation.z)
    }

    /// Makes right-handed rotation about x-axis.
    ///
    /// Angle is in **degrees**.
    ///
    pub fn rotate_x(degrees: f32) -> Self {
        let (sin, cos): (f32, f32) = degrees_to_radians(degrees).sin_cos();
        let mut matrix: Mat4 = Mat4::identity();
        matrix[1][1] = cos;
        matrix[2][2] = cos;
        matrix[2][1] = sin;
        matrix[1][2] = -sin;
        matrix
    }
    /// Makes right-handed rotation about y-axis.
    ///
    /// Angle is in **degrees**.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::matrices::Mat4;
    /// # use vecmat::vectors::Vec4;
    /// # use approx::assert_abs_diff_eq;
    /// let rotated: Vec4 = Mat4::rotate_y(90.0) * Vec4::new(1.0, 0.0, 0.0, 0.0);
    /// assert_abs_diff_eq!(rotated, Vec4::new(0.0, 0.0, -1.0, 0.0), epsilon = 1e-6);
    /// ```
    ///
    pub fn rotate_y(degrees: f32) -> Self {
        let (sin, cos): (f32, f32) = degrees_to_radians(degrees).sin_cos();
        let mut matrix: Mat4 = Mat4::identity();
        matrix[0][0] = cos;
        matrix[2][2] = cos;
        matrix[0][2] = sin;
        matrix[2][0] = -sin;
        matrix
    }
    /// Makes right-handed rotation about z-axis.
    ///
    /// Angle is in **degrees**.
    ///
    pub fn rotate_z(degrees: f32) -> Self {
        let (sin, cos): (f32, f32) = degrees_to_radians(degrees).sin_cos();
        let mut matrix: Mat4 = Mat4::identity();
        matrix[0][0] = cos;
        matrix[1][1] = cos;
        matrix[1][0] = sin;
        matrix[0][1] = -sin;
        matrix
    }

    /// Makes orthographic projection that maps box
    /// `[left; right] x [bottom; top] x [z_near; z_far]` to the `[-1; 1]` clip cube
    /// (`z_near` goes to -1, `z_far` to +1).
    ///
    /// `z_near` and `z_far` are z-coordinates of the planes.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::matrices::Mat4;
    /// # use vecmat::vectors::Vec4;
    /// let projection: Mat4 = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
    /// assert_eq!(projection * Vec4::one(), Vec4::one());
    /// ```
    ///
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut matrix: Mat4 = Mat4::identity();
        matrix[0][0] = 2.0 / (right - left);
        matrix[1][1] = 2.0 / (top - bottom);
        matrix[2][2] = 2.0 / (z_far - z_near);
        matrix[0][3] = -(right + left) / (right - left);
        matrix[1][3] = -(top + bottom) / (top - bottom);
        matrix[2][3] = -(z_far + z_near) / (z_far - z_near);
        matrix
    }
    /// Makes orthographic projection with default depth range (`z_near = -1`, `z_far = 1`).
    ///
    pub fn orthographic_2d(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Mat4::orthographic(left, right, bottom, top, -1.0, 1.0)
    }

    /// Makes right-handed perspective projection.
    ///
    /// Vertical field of view is in **degrees**. `z_near` and `z_far` are positive
    /// distances, although camera looks down the negative z-axis; clip-space `w` equals `-z`.
    /// Near plane maps to -1 and far plane to +1 in normalized device coordinates.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::matrices::Mat4;
    /// # use vecmat::vectors::Vec4;
    /// let clip: Vec4 = Mat4::perspective(60.0, 1.0, 0.1, 100.0) * Vec4::new(0.0, 0.0, -0.1, 1.0);
    /// assert!(clip.w > 0.0);
    /// assert!((clip.z / clip.w + 1.0).abs() < 1e-4);
    /// ```
    ///
    pub fn perspective(vertical_fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let t: f32 = (degrees_to_radians(vertical_fov) / 2.0).tan();
        let depth: f32 = z_far - z_near;
        let mut matrix: Mat4 = Mat4::zero();
        matrix[0][0] = 1.0 / (aspect_ratio * t);
        matrix[1][1] = 1.0 / t;
        matrix[2][2] = -(z_far + z_near) / depth;
        matrix[2][3] = -2.0 * z_far * z_near / depth;
        matrix[3][2] = -1.0;
        matrix
    }

    /// Makes view matrix of a camera at `eye` looking along `look_direction`.
    ///
    /// Builds orthonormal right-handed basis (`z = normalize(look_direction)`,
    /// `x = normalize(cross(z, up))`, `y = cross(x, z)`). Upper 3x3 block is the transpose of
    /// that basis (inverse of pure rotation), translation column holds `-dot(axis, eye)` and
    /// z row is negated so that camera looks down -z.
    ///
    /// # Precondition
    /// `look_direction` must be non-zero and not parallel to `up`.
    ///
    pub fn look_towards(eye: Vec3, look_direction: Vec3, up: Vec3) -> Self {
        let z: Vec3 = look_direction.normalize();
        let x: Vec3 = z.cross(up).normalize();
        let y: Vec3 = x.cross(z);
        Mat4::from_rows([
            x.extend(-x.dot(eye)),
            y.extend(-y.dot(eye)),
            (-z).extend(z.dot(eye)),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }
    /// Makes view matrix of a camera at `eye` looking at `target` point.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::matrices::Mat4;
    /// # use vecmat::vectors::{Vec3, Vec4};
    /// let eye: Vec3 = Vec3::new(0.0, 0.0, 5.0);
    /// let view: Mat4 = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
    /// assert_eq!(view * Vec4::from(eye), Vec4::new(0.0, 0.0, 0.0, 1.0));
    /// ```
    ///
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Mat4::look_towards(eye, target - eye, up)
    }

    /// Makes placement matrix whose columns are given axes and origin.
    ///
    /// It maps `(1, 0, 0, 0)` to `x`, `(0, 0, 0, 1)` to `origin` and so on.
    ///
    pub fn reference_frame(x: Vec3, y: Vec3, z: Vec3, origin: Vec3) -> Self {
        Mat4::from_rows([x.extend(0.0), y.extend(0.0), z.extend(0.0), origin.extend(1.0)])
            .transpose()
    }

    /// Returns transpose of matrix (`m[i][j]` and `m[j][i]` are swapped).
    ///
    pub fn transpose(&self) -> Self {
        seq!(C in 0..4 {
            Mat4::from_rows([#(self.column(C),)*])
        })
    }

    /// Returns 3x3 matrix that remains after removing given row and column.
    ///
    fn minor(&self, row: usize, column: usize) -> Mat3 {
        let mut minor: Mat3 = Mat3::zero();
        for (i, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (j, c) in (0..4).filter(|&c| c != column).enumerate() {
                minor[i][j] = self[r][c];
            }
        }
        minor
    }
    /// Returns signed 3x3 minor.
    ///
    fn cofactor(&self, row: usize, column: usize) -> f32 {
        let minor: f32 = self.minor(row, column).determinant();
        if (row + column) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }
    /// Returns adjugate of matrix (transposed matrix of cofactors over 3x3 minors).
    ///
    pub fn adjugate(&self) -> Self {
        seq!(C in 0..4 {
            Mat4::from_rows([
                #(
                    Vec4::new(
                        self.cofactor(0, C),
                        self.cofactor(1, C),
                        self.cofactor(2, C),
                        self.cofactor(3, C),
                    ),
                )*
            ])
        })
    }
    /// Expands determinant along the first row in double precision.
    ///
    fn expand_determinant(&self, adjugate: &Mat4) -> f64 {
        (0..4)
            .map(|k| f64::from(self[0][k]) * f64::from(adjugate[k][0]))
            .sum()
    }
    /// Returns determinant of matrix.
    ///
    pub fn determinant(&self) -> f32 {
        self.expand_determinant(&self.adjugate()) as f32
    }

    /// Returns inverse of matrix (adjugate divided by determinant).
    ///
    /// Unlike [`Mat3::invert`], matrix is rejected only when its determinant is exactly zero;
    /// nearly singular matrices produce numerically unstable result.
    ///
    /// # Example
    /// ```rust
    /// # use vecmat::matrices::Mat4;
    /// # use approx::assert_abs_diff_eq;
    /// let matrix: Mat4 = Mat4::translate(1.0, 2.0, 3.0) * Mat4::rotate_z(30.0);
    /// let inverse: Mat4 = matrix.invert().expect("rigid transforms are invertible");
    /// assert_abs_diff_eq!(matrix * inverse, Mat4::identity(), epsilon = 1e-5);
    ///
    /// assert!(Mat4::scale(1.0, 0.0, 1.0).invert().is_err());
    /// ```
    ///
    pub fn invert(&self) -> Result<Self, SingularMatrixError> {
        let adjugate: Mat4 = self.adjugate();
        let determinant: f64 = self.expand_determinant(&adjugate);
        if determinant == 0.0 {
            trace!(determinant, "4x4 matrix is singular");
            return Err(SingularMatrixError { determinant: 0.0 });
        }
        let scale: f64 = 1.0 / determinant;
        Ok(adjugate.map(|element| (f64::from(element) * scale) as f32))
    }
    /// Returns inverse of matrix without reporting singularity.
    ///
    /// Singular matrix produces the identity; callers who need to know should use
    /// [`Mat4::invert`] or check [`Mat4::determinant`].
    ///
    pub fn inverse(&self) -> Self {
        self.invert().unwrap_or_else(|_| Mat4::identity())
    }
}
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    /// Transforms vector (`result[i] = dot(row[i], vector)`).
    ///
    fn mul(self, vector: Vec4) -> Self::Output {
        seq!(R in 0..4 {
            Vec4::new(#(self.rows[R].dot(vector),)*)
        })
    }
}
impl From<Mat3> for Mat4 {
    /// Places 3x3 matrix into upper-left block; `m[3][3]` is one, the rest is zero.
    ///
    fn from(matrix: Mat3) -> Self {
        Mat4::from_rows([
            matrix[0].extend(0.0),
            matrix[1].extend(0.0),
            matrix[2].extend(0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }
}
