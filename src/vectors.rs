//! `vectors` submodule implements two-, three- and four-dimensional vectors with `f32`
//! ([`Vec2`], [`Vec3`], [`Vec4`]) and `i32` ([`Int2`], [`Int3`], [`Int4`]) components.
//!
//! Every vector is `#[repr(C)]` and is bit-compatible with a tightly packed array of its
//! components (`[f32; N]` or `[i32; N]`), so it can be uploaded as a vertex attribute or uniform
//! as is (see `as_array` and `as_bytes`).
//!
//! `*` and `/` between two vectors are componentwise (Hadamard) operations;
//! dot product is available through [`dot`] and the `dot` method.
//!

use crate::floats::{flint, impl_approx_eq, reciprocal};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

// Traits with default implementations cannot name fields, and const generics cannot
// express `x, y, z` accessors, so common functionality is generated by macros.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// Vector must be `#[repr(C)]` and derive `Pod`, since array views are made with `bytemuck`.
///
macro_rules! impl_vector {
    ($struct:ident, $size:literal, $type:ty, $zero:literal, $one:literal, ($($field:ident),+)) => {
        impl $struct {
            /// Initializes vector from its components.
            ///
            pub const fn new($($field: $type),+) -> Self {
                Self { $($field),+ }
            }
            /// Initializes vector with every component set to given value.
            ///
            pub const fn splat(value: $type) -> Self {
                Self { $($field: value),+ }
            }
            /// Initializes vector with zeroes.
            ///
            pub const fn zero() -> Self {
                Self::splat($zero)
            }
            /// Initializes vector with ones.
            ///
            pub const fn one() -> Self {
                Self::splat($one)
            }

            /// Returns elements of vector.
            ///
            pub fn elements(&self) -> [$type; $size] {
                [$(self.$field),+]
            }
            /// Returns vector as a reference to contiguous array of its components.
            ///
            pub fn as_array(&self) -> &[$type; $size] {
                bytemuck::cast_ref(self)
            }
            /// Returns vector as a mutable reference to contiguous array of its components.
            ///
            pub fn as_mut_array(&mut self) -> &mut [$type; $size] {
                bytemuck::cast_mut(self)
            }
            /// Returns raw bytes of vector (native endianness, no padding).
            ///
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn($type) -> $type) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn($type, $type) -> $type) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot(self, other: Self) -> $type {
                $zero $(+ self.$field * other.$field)+
            }
            /// Returns squared length of a vector.
            ///
            pub fn length_squared(self) -> $type {
                self.dot(self)
            }
            /// Multiplies two vectors component-wise.
            ///
            /// This is not a dot product - result is a vector.
            ///
            pub fn hadamard(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }

            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, |a, b| if a < b { a } else { b })
            }
            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, |a, b| if a > b { a } else { b })
            }
        }
        impl From<[$type; $size]> for $struct {
            fn from(arr: [$type; $size]) -> Self {
                bytemuck::cast(arr)
            }
        }
        impl From<$struct> for [$type; $size] {
            fn from(vector: $struct) -> Self {
                vector.elements()
            }
        }
        impl Index<usize> for $struct {
            type Output = $type;

            fn index(&self, index: usize) -> &Self::Output {
                &self.as_array()[index]
            }
        }
        impl IndexMut<usize> for $struct {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.as_mut_array()[index]
            }
        }
        impl Neg for $struct {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Mul<$struct> for $type {
            type Output = $struct;

            fn mul(self, vector: $struct) -> Self::Output {
                vector * self
            }
        }
        impl_vector_vector_operations!($struct, ((Add, add, +), (Sub, sub, -), (Mul, mul, *),));
        impl_vector_rhs_operations!($struct, $type, ((Mul, mul, *),));
        impl_vector_assignoperations!($struct, Self, ((AddAssign, add_assign, +),
                                                      (SubAssign, sub_assign, -),
                                                      (MulAssign, mul_assign, *),
                                                      (DivAssign, div_assign, /),));
        impl_vector_assignoperations!($struct, $type, ((MulAssign, mul_assign, *),
                                                       (DivAssign, div_assign, /),));
    };
}

/// [`impl_vectorf`] macro implements methods that only make sense on vectors with `f32`
/// components.
///
/// This macro depends on [`impl_vector`] macro.
///
macro_rules! impl_vectorf {
    ($struct:ident, $istruct:ident, $size:literal) => {
        impl $struct {
            /// Returns length (magnitude) of vector.
            ///
            /// Zero vector has zero length.
            ///
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }
            /// Returns vector of unit length with the same direction.
            ///
            /// # Precondition
            /// Vector must have non-zero length. Zero vector panics in debug builds and
            /// produces NaNs in release builds.
            ///
            pub fn normalize(self) -> Self {
                self / self.length()
            }
            /// Linearly interpolates between vectors (`t = 0` gives `self`, `t = 1` gives `other`).
            ///
            /// `t` is not clamped.
            ///
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }
        }
        impl Div<f32> for $struct {
            type Output = Self;

            /// Divides vector by scalar (multiplication by reciprocal).
            ///
            /// # Precondition
            /// `rhs` must not be zero (checked only in debug builds).
            ///
            fn div(self, rhs: f32) -> Self::Output {
                self * reciprocal(rhs)
            }
        }
        impl Div<Self> for $struct {
            type Output = Self;

            /// Divides vectors component-wise.
            ///
            fn div(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a / b)
            }
        }
        impl FloatVector for $struct {
            fn splat(value: f32) -> Self {
                $struct::splat(value)
            }
            fn dot(self, other: Self) -> f32 {
                $struct::dot(self, other)
            }
            fn min(self, other: Self) -> Self {
                $struct::min(self, other)
            }
            fn max(self, other: Self) -> Self {
                $struct::max(self, other)
            }
            fn max_element(self) -> f32 {
                self.elements()
                    .into_iter()
                    .fold(f32::NEG_INFINITY, |acc, a| if a > acc { a } else { acc })
            }
        }
        impl From<$istruct> for $struct {
            fn from(value: $istruct) -> Self {
                $struct::from(value.elements().map(|elem| elem as f32))
            }
        }
    };
}
/// [`impl_vectori`] macro implements methods that only make sense on vectors with `i32`
/// components.
///
/// This macro depends on [`impl_vector`] macro.
///
macro_rules! impl_vectori {
    ($struct:ident, $fstruct:ident) => {
        impl Div<i32> for $struct {
            type Output = Self;

            /// Divides vector by integer (rounding toward zero).
            ///
            fn div(self, rhs: i32) -> Self::Output {
                self.map(|a| a / rhs)
            }
        }
        impl Div<Self> for $struct {
            type Output = Self;

            /// Divides vectors component-wise.
            ///
            fn div(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a / b)
            }
        }
        impl From<$fstruct> for $struct {
            /// Floors every component (rounds toward negative infinity).
            ///
            fn from(value: $fstruct) -> Self {
                $struct::from(value.elements().map(flint))
            }
        }
    };
}

/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` traits for vector by
/// delegating to corresponding binary operation.
///
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}

/// [`FloatVector`] trait unifies vectors with `f32` components, so that free functions
/// ([`dot`], [`length`], [`normalize`]) and [`Bounds`] can work with any of them.
///
pub trait FloatVector:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    /// Initializes vector with every component set to given value.
    ///
    fn splat(value: f32) -> Self;
    /// Performs dot product operation on two vectors.
    ///
    fn dot(self, other: Self) -> f32;
    /// Returns vector that is made from the smallest components of two vectors.
    ///
    fn min(self, other: Self) -> Self;
    /// Returns vector that is made from the largest components of two vectors.
    ///
    fn max(self, other: Self) -> Self;
    /// Returns the largest component.
    ///
    fn max_element(self) -> f32;
}
/// [`Cross`] trait defines cross product.
///
/// For two-dimensional vectors cross product is a scalar (signed area of parallelogram), for
/// three-dimensional vectors it is a right-handed vector product.
///
pub trait Cross {
    /// Type of cross product.
    ///
    type Output;

    /// Returns cross product of two vectors.
    ///
    fn cross(self, other: Self) -> Self::Output;
}

/// Performs dot product operation on two vectors.
///
/// # Example
/// ```rust
/// # use vecmat::vectors::{dot, Vec3};
/// assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -5.0, 6.0)), 12.0);
/// ```
///
pub fn dot<V: FloatVector>(a: V, b: V) -> f32 {
    a.dot(b)
}
/// Returns length of vector (`sqrt(dot(v, v))`).
///
/// # Example
/// ```rust
/// # use vecmat::vectors::{length, Vec2};
/// assert_eq!(length(Vec2::new(3.0, 4.0)), 5.0);
/// assert_eq!(length(Vec2::zero()), 0.0);
/// ```
///
pub fn length<V: FloatVector>(v: V) -> f32 {
    v.dot(v).sqrt()
}
/// Returns vector of unit length with the same direction.
///
/// # Precondition
/// Vector must have non-zero length (panics in debug builds, NaNs in release builds).
///
/// # Example
/// ```rust
/// # use vecmat::vectors::{normalize, Vec2};
/// assert_eq!(normalize(Vec2::new(0.0, 2.0)), Vec2::new(0.0, 1.0));
/// ```
///
pub fn normalize<V: FloatVector>(v: V) -> V {
    v / length(v)
}
/// Returns cross product of two vectors.
///
/// # Example
/// ```rust
/// # use vecmat::vectors::{cross, Vec2, Vec3};
/// assert_eq!(cross(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)), 1.0);
/// assert_eq!(
///     cross(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
///     Vec3::new(0.0, 0.0, 1.0)
/// );
/// ```
///
pub fn cross<V: Cross>(a: V, b: V) -> V::Output {
    a.cross(b)
}

/// [`Bounds`] struct represents axis-aligned extent of a set of points.
///
/// # Example
/// ```rust
/// # use vecmat::vectors::{Bounds, Vec2};
/// let bounds = Bounds::of(&[
///     Vec2::new(0.0, 0.0),
///     Vec2::new(2.0, 3.0),
///     Vec2::new(-1.0, 5.0),
/// ]);
/// assert_eq!(bounds.min, Vec2::new(-1.0, 0.0));
/// assert_eq!(bounds.max, Vec2::new(2.0, 5.0));
/// assert_eq!(bounds.span(), 5.0);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds<V> {
    /// Componentwise minimum.
    ///
    pub min: V,
    /// Componentwise maximum.
    ///
    pub max: V,
}
impl<V: FloatVector> Bounds<V> {
    /// Computes componentwise minimum and maximum over given points.
    ///
    /// Empty slice is not an error: `min` stays at `+inf` and `max` at `-inf`.
    ///
    pub fn of(points: &[V]) -> Self {
        points.iter().fold(
            Bounds {
                min: V::splat(f32::INFINITY),
                max: V::splat(f32::NEG_INFINITY),
            },
            |bounds, &point| Bounds {
                min: bounds.min.min(point),
                max: bounds.max.max(point),
            },
        )
    }

    /// Returns the largest extent across axes (`max - min` of the widest axis).
    ///
    pub fn span(&self) -> f32 {
        (self.max - self.min).max_element()
    }
}

/// [`Vec2`] struct represents two-dimensional vector with `f32` components.
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vec2 {
    /// Returns scalar that represents cross product of two-dimensional vectors
    /// (`x1 * y2 - y1 * x2`).
    ///
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns three-dimensional vector with given `z` component.
    ///
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}
impl_vector!(Vec2, 2, f32, 0.0, 1.0, (x, y));
impl_vectorf!(Vec2, Int2, 2);
impl Cross for Vec2 {
    type Output = f32;

    fn cross(self, other: Self) -> Self::Output {
        Vec2::cross(self, other)
    }
}

/// [`Vec3`] struct represents three-dimensional vector with `f32` components.
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vec3 {
    /// Returns right-handed cross product of two vectors.
    ///
    pub fn cross(self, other: Self) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns four-dimensional vector with given `w` component.
    ///
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
    /// Drops `z` component.
    ///
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
impl_vector!(Vec3, 3, f32, 0.0, 1.0, (x, y, z));
impl_vectorf!(Vec3, Int3, 3);
impl Cross for Vec3 {
    type Output = Vec3;

    fn cross(self, other: Self) -> Self::Output {
        Vec3::cross(self, other)
    }
}
impl From<Vec2> for Vec3 {
    /// Sets `z` to zero.
    ///
    fn from(vector: Vec2) -> Self {
        vector.extend(0.0)
    }
}

/// [`Vec4`] struct represents four-dimensional (homogeneous) vector with `f32` components.
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec4 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,

    /// W component of vector.
    ///
    pub w: f32,
}
impl Vec4 {
    /// Drops `w` component.
    ///
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
    /// Returns `x` and `y` components.
    ///
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
impl_vector!(Vec4, 4, f32, 0.0, 1.0, (x, y, z, w));
impl_vectorf!(Vec4, Int4, 4);
impl_approx_eq!(Vec2, Vec3, Vec4);
impl From<Vec3> for Vec4 {
    /// Makes a point: `w` is set to one.
    ///
    fn from(vector: Vec3) -> Self {
        vector.extend(1.0)
    }
}
impl From<Vec2> for Vec4 {
    /// Makes a point on `z = 0` plane: `z` is set to zero, `w` is set to one.
    ///
    fn from(vector: Vec2) -> Self {
        Vec4::new(vector.x, vector.y, 0.0, 1.0)
    }
}

/// [`Int2`] struct represents two-dimensional vector with `i32` components
/// (pixel coordinates, glyph metrics).
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
pub struct Int2 {
    /// X component of vector.
    ///
    pub x: i32,

    /// Y component of vector.
    ///
    pub y: i32,
}
impl_vector!(Int2, 2, i32, 0, 1, (x, y));
impl_vectori!(Int2, Vec2);

/// [`Int3`] struct represents three-dimensional vector with `i32` components.
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
pub struct Int3 {
    /// X component of vector.
    ///
    pub x: i32,

    /// Y component of vector.
    ///
    pub y: i32,

    /// Z component of vector.
    ///
    pub z: i32,
}
impl_vector!(Int3, 3, i32, 0, 1, (x, y, z));
impl_vectori!(Int3, Vec3);

/// [`Int4`] struct represents four-dimensional vector with `i32` components
/// (viewports are stored as `(x, y, width, height)`).
///
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
pub struct Int4 {
    /// X component of vector.
    ///
    pub x: i32,

    /// Y component of vector.
    ///
    pub y: i32,

    /// Z component of vector.
    ///
    pub z: i32,

    /// W component of vector.
    ///
    pub w: i32,
}
impl_vector!(Int4, 4, i32, 0, 1, (x, y, z, w));
impl_vectori!(Int4, Vec4);

#[cfg(test)]
mod tests {
    use super::{cross, dot, length, normalize, Bounds, Int2, Int3, Int4, Vec2, Vec3, Vec4};
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector() {
        assert_eq!(Vec2::zero(), Vec2 { x: 0.0, y: 0.0 });
        assert_eq!(Vec2::one(), Vec2 { x: 1.0, y: 1.0 });
        assert_eq!(Vec3::default(), Vec3::zero());

        let vec1: Vec2 = Vec2::from([3.0, 4.0]);
        assert_eq!(vec1.elements(), [3.0, 4.0]);
        assert_eq!(vec1.length_squared(), 25.0);
        assert_eq!(vec1[1], 4.0);

        let vec2: Vec2 = vec1.hadamard(Vec2::new(4.0, 3.0));
        assert_eq!(vec2, Vec2::new(12.0, 12.0));
        assert_eq!(vec1 * Vec2::new(4.0, 3.0), vec2);
        assert_eq!(vec2 / Vec2::new(4.0, 3.0), vec1);

        assert_eq!(Vec2::new(5.0, 2.0).max(Vec2::new(3.0, 6.0)), Vec2::new(5.0, 6.0));
        assert_eq!(Vec2::new(5.0, 2.0).min(Vec2::new(3.0, 6.0)), Vec2::new(3.0, 2.0));

        assert_eq!(vec1.map(|n| n * 2.0), Vec2::new(6.0, 8.0));
        assert_eq!(vec1.combine(vec2, |a, b| a * b), Vec2::new(36.0, 48.0));

        assert_eq!(vec1 + vec2, Vec2::new(15.0, 16.0));
        assert_eq!(vec1 - vec2, Vec2::new(-9.0, -8.0));
        assert_eq!(vec2 * 2.0, Vec2::new(24.0, 24.0));
        assert_eq!(2.0 * vec2, vec2 * 2.0);
        assert_eq!(vec2 / 4.0, Vec2::new(3.0, 3.0));
        assert_eq!(-vec1, Vec2::new(-3.0, -4.0));

        let mut vec3: Vec2 = vec1;
        vec3 += vec2;
        assert_eq!(vec3, Vec2::new(15.0, 16.0));
        vec3 -= vec1;
        assert_eq!(vec3, vec2);
        vec3 *= 0.5;
        assert_eq!(vec3, Vec2::new(6.0, 6.0));
        vec3 /= 2.0;
        assert_eq!(vec3, Vec2::new(3.0, 3.0));
        vec3 *= Vec2::new(2.0, 3.0);
        assert_eq!(vec3, Vec2::new(6.0, 9.0));
        vec3 /= Vec2::new(2.0, 3.0);
        assert_eq!(vec3, Vec2::new(3.0, 3.0));

        vec3[0] = 7.0;
        assert_eq!(vec3.x, 7.0);

        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0) * Vec4::splat(2.0), Vec4::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn vectorf() {
        let vec1: Vec2 = Vec2::new(3.0, 4.0);
        assert_eq!(vec1.length(), 5.0);
        assert_eq!(length(vec1), 5.0);
        assert_abs_diff_eq!(vec1.normalize(), Vec2::new(0.6, 0.8), epsilon = 1e-6);
        assert_abs_diff_eq!(
            normalize(Vec3::new(0.0, 0.0, -3.0)),
            Vec3::new(0.0, 0.0, -1.0),
            epsilon = 1e-6
        );
        assert_eq!(Vec3::zero().length(), 0.0);

        assert_eq!(dot(Vec4::one(), Vec4::new(1.0, 2.0, 3.0, 4.0)), 10.0);

        let halfway: Vec2 = Vec2::new(0.0, 2.0).lerp(Vec2::new(2.0, 0.0), 0.5);
        assert_eq!(halfway, Vec2::new(1.0, 1.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reciprocal of zero")]
    fn normalizing_zero_vector_panics() {
        let _ = Vec3::zero().normalize();
    }

    #[test]
    fn cross_products() {
        let vec1: Vec2 = Vec2::new(-3.0, 2.0);
        let vec2: Vec2 = Vec2::new(1.0, 2.0);
        assert_eq!(cross(vec1, vec2), -8.0);

        let x: Vec3 = Vec3::new(1.0, 0.0, 0.0);
        let y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), -x.cross(y));

        let a: Vec3 = Vec3::new(1.0, 2.0, 3.0);
        let b: Vec3 = Vec3::new(-4.0, 0.5, 2.0);
        let c: Vec3 = cross(a, b);
        assert_abs_diff_eq!(dot(c, a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(dot(c, b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn conversions() {
        assert_eq!(Vec2::new(1.0, 2.0).extend(3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(Vec2::new(1.0, 2.0)), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(Vec4::from(Vec3::new(1.0, 2.0, 3.0)), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vec4::from(Vec2::new(1.0, 2.0)), Vec4::new(1.0, 2.0, 0.0, 1.0));
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).xy(), Vec2::new(1.0, 2.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).truncate(), Vec2::new(1.0, 2.0));

        let arr: [f32; 3] = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn layout() {
        assert_eq!(std::mem::size_of::<Vec2>(), 2 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of::<Vec3>(), 3 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of::<Vec4>(), 4 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of::<Int3>(), 3 * std::mem::size_of::<i32>());

        let vector: Vec4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(vector.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(vector.as_bytes().len(), 16);
        assert_eq!(&vector.as_bytes()[4..8], &2.0_f32.to_ne_bytes());
    }

    #[test]
    fn vectori() {
        assert_eq!(Int2::zero(), Int2 { x: 0, y: 0 });
        assert_eq!(Int2::one(), Int2::new(1, 1));

        let vec1: Int2 = Int2::new(3, 4);
        assert_eq!(vec1.length_squared(), 25);
        assert_eq!(vec1 + Int2::new(1, 1), Int2::new(4, 5));
        assert_eq!(vec1 - Int2::new(1, 1), Int2::new(2, 3));
        assert_eq!(vec1 * 2, Int2::new(6, 8));
        assert_eq!(2 * vec1, Int2::new(6, 8));
        assert_eq!(Int2::new(-7, 7) / 2, Int2::new(-3, 3));
        assert_eq!(vec1 * Int2::new(2, 3), Int2::new(6, 12));
        assert_eq!(-vec1, Int2::new(-3, -4));
        assert_eq!(vec1.dot(Int2::new(5, 3)), 27);

        let mut vec2: Int3 = Int3::new(1, 2, 3);
        vec2 += Int3::one();
        assert_eq!(vec2, Int3::new(2, 3, 4));
        vec2 *= 3;
        assert_eq!(vec2, Int3::new(6, 9, 12));
        vec2 /= 3;
        assert_eq!(vec2, Int3::new(2, 3, 4));
        vec2[2] = 10;
        assert_eq!(vec2.z, 10);
    }

    #[test]
    fn floors_toward_negative_infinity() {
        assert_eq!(Int2::from(Vec2::new(2.7, -0.5)), Int2::new(2, -1));
        assert_eq!(Int3::from(Vec3::new(-1.0, -1.1, 0.9)), Int3::new(-1, -2, 0));
        assert_eq!(Int4::from(Vec4::new(3.99, -3.99, 0.0, -0.0)), Int4::new(3, -4, 0, 0));
        assert_eq!(Vec2::from(Int2::new(2, -2)), Vec2::new(2.0, -2.0));
    }

    #[test]
    fn bounds() {
        let points: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 3.0), Vec2::new(-1.0, 5.0)];
        let bounds: Bounds<Vec2> = Bounds::of(&points);
        assert_eq!(bounds.min, Vec2::new(-1.0, 0.0));
        assert_eq!(bounds.max, Vec2::new(2.0, 5.0));
        assert_eq!(bounds.span(), 5.0);

        let bounds: Bounds<Vec3> = Bounds::of(&[Vec3::new(1.0, -2.0, 4.0), Vec3::new(0.0, 2.0, 12.0)]);
        assert_eq!(bounds.min, Vec3::new(0.0, -2.0, 4.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 12.0));
        assert_eq!(bounds.span(), 8.0);

        let empty: Bounds<Vec2> = Bounds::of(&[]);
        assert_eq!(empty.min, Vec2::splat(f32::INFINITY));
        assert_eq!(empty.max, Vec2::splat(f32::NEG_INFINITY));
        assert_eq!(empty.span(), f32::NEG_INFINITY);
    }
}
