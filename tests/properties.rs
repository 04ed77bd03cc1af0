//! Property tests over randomly generated vectors, transforms and rotations.
//!

use approx::abs_diff_eq;
use proptest::prelude::*;

use vecmat::prelude::*;

/// Finite components in a range where `f32` keeps enough precision for the checks below.
fn component() -> impl Strategy<Value = f32> {
    -100.0_f32..100.0
}

/// Arbitrary three-dimensional vector.
fn vec3() -> impl Strategy<Value = Vec3> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// Rotation axis that is safely away from zero length.
fn axis() -> impl Strategy<Value = Vec3> {
    (-1.0_f32..1.0, -1.0_f32..1.0, -1.0_f32..1.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        .prop_filter("axis must not be degenerate", |axis| axis.length() > 0.1)
}

/// Unit quaternion built from axis and angle.
fn rotation() -> impl Strategy<Value = Quaternion> {
    (axis(), -std::f32::consts::PI..std::f32::consts::PI)
        .prop_map(|(axis, radians)| Quaternion::from_axis_angle(axis, radians))
}

/// Pure rotation matrix composed from rotations about every axis (angles in degrees).
fn rotation_matrix() -> impl Strategy<Value = Mat4> {
    (-180.0_f32..180.0, -180.0_f32..180.0, -180.0_f32..180.0)
        .prop_map(|(a, b, c)| Mat4::rotate_x(a) * Mat4::rotate_y(b) * Mat4::rotate_z(c))
}

proptest! {
    #[test]
    fn cross_product_is_orthogonal(a in vec3(), b in vec3()) {
        let c: Vec3 = a.cross(b);
        let tolerance: f32 = 1e-5 * a.length() * b.length() * (a.length() + b.length()) + 1e-3;
        prop_assert!(c.dot(a).abs() <= tolerance);
        prop_assert!(c.dot(b).abs() <= tolerance);
        prop_assert_eq!(c, -b.cross(a));
    }

    #[test]
    fn normalized_vector_has_unit_length(
        v in vec3().prop_filter("vector must have length", |v| v.length() > 1e-3)
    ) {
        prop_assert!(abs_diff_eq!(normalize(v).length(), 1.0, epsilon = 1e-5));
    }

    #[test]
    fn bounds_contain_every_point(points in prop::collection::vec(vec3(), 1..16)) {
        let bounds: Bounds<Vec3> = Bounds::of(&points);
        for point in points {
            prop_assert_eq!(bounds.min.min(point), bounds.min);
            prop_assert_eq!(bounds.max.max(point), bounds.max);
        }
        prop_assert!(bounds.span() >= 0.0);
    }

    #[test]
    fn affine_transform_is_inverted(
        translation in (-10.0_f32..10.0, -10.0_f32..10.0, -10.0_f32..10.0),
        rotation in rotation_matrix(),
        scale in (0.5_f32..2.0, 0.5_f32..2.0, 0.5_f32..2.0),
    ) {
        let matrix: Mat4 = Mat4::translate(translation.0, translation.1, translation.2)
            * rotation
            * Mat4::scale(scale.0, scale.1, scale.2);
        let inverse: Mat4 = matrix.invert().expect("scale is bounded away from zero");
        prop_assert!(abs_diff_eq!(matrix * inverse, Mat4::identity(), epsilon = 1e-3));
        prop_assert!(abs_diff_eq!(inverse * matrix, Mat4::identity(), epsilon = 1e-3));

        let block: Mat3 = matrix.upper_left();
        let block_inverse: Mat3 = block.invert().expect("scale is bounded away from zero");
        prop_assert!(abs_diff_eq!(block * block_inverse, Mat3::identity(), epsilon = 1e-4));
    }

    #[test]
    fn quaternion_round_trips_through_matrix(rotation in rotation_matrix()) {
        let block: Mat3 = rotation.upper_left();
        let quaternion: Quaternion = Quaternion::from(block);
        prop_assert!(abs_diff_eq!(quaternion.norm(), 1.0, epsilon = 1e-4));
        prop_assert!(abs_diff_eq!(quaternion.to_mat3(), block, epsilon = 1e-4));
        prop_assert!(abs_diff_eq!(
            Quaternion::from(rotation).to_mat4(),
            rotation,
            epsilon = 1e-4
        ));
    }

    #[test]
    fn slerp_hits_endpoints(q0 in rotation(), q1 in rotation()) {
        prop_assert!(abs_diff_eq!(slerp(q0, q1, 0.0), q0, epsilon = 1e-5));
        // nearly opposite endpoints arrive at -q0, which is within 5e-3 of q1 there
        prop_assert!(abs_diff_eq!(slerp(q0, q1, 1.0), q1, epsilon = 5e-3));
    }
}
