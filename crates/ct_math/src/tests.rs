use proptest::prelude::*;
use proptest::array::{uniform3, uniform4};
use crate::*;
use crate::transform::*;

fn small_int() -> impl Strategy<Value = i32> {
    -20i32..=20
}

fn int_mat3() -> impl Strategy<Value = i32m3> {
    uniform3(uniform3(small_int())).prop_map(i32m3::from_rows_array)
}

fn int_mat4() -> impl Strategy<Value = i32m4> {
    uniform4(uniform4(small_int())).prop_map(i32m4::from_rows_array)
}

fn int_vec3() -> impl Strategy<Value = i32v3> {
    uniform3(small_int()).prop_map(i32v3::from_array)
}

fn real_vec3() -> impl Strategy<Value = f64v3> {
    uniform3(-100.0f64..100.0).prop_map(f64v3::from_array)
}

proptest! {
    #[test]
    fn identity_keeps_vectors(v in int_vec3()) {
        prop_assert_eq!(i32m3::identity() * v, v);
    }

    #[test]
    fn product_is_associative_with_vectors(a in int_mat3(), b in int_mat3(), v in int_vec3()) {
        prop_assert_eq!((a * b) * v, a * (b * v));
    }

    #[test]
    fn transpose_is_an_involution(m in int_mat4()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_reverses_products(a in int_mat3(), b in int_mat3()) {
        prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
    }

    #[test]
    fn normalized_vectors_have_unit_length(v in real_vec3()) {
        prop_assume!(v.len() > 1e-6);
        prop_assert!(v.normalize().len().is_close_to(1.0, 1e-12));
    }

    #[test]
    fn quaternion_rotation_matches_matrix(axis in real_vec3(), angle in -6.0f64..6.0, v in real_vec3()) {
        prop_assume!(axis.len() > 1e-3);
        let q = f64quat::from_axis_angle(axis, angle);
        let by_quat = q.rotate(v);
        let by_mat3 = q.to_mat3() * v;
        let by_transform = (rotate(angle, axis) * v.extend(1.0)).xyz();
        prop_assert!(by_quat.is_close_to(by_mat3, 1e-9));
        prop_assert!(by_quat.is_close_to(by_transform, 1e-9));
    }

    #[test]
    fn integral_closed_form_matches_gauss(m in int_mat3()) {
        let det = m.cofactor_determinant();
        let gauss = m.cast::<f64>().gauss_determinant();
        prop_assert!(gauss.is_close_to(det as f64, 1e-6));
    }

    #[test]
    fn integral_elimination_is_exact(m in int_mat4()) {
        let m = m.cast::<i64>();
        prop_assert_eq!(m.gauss_determinant(), m.cofactor_determinant());
    }

    #[test]
    fn integral_equality_is_exact(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(i32v2::new(a, 0) == i32v2::new(b, 0), a == b);
    }
}

#[test]
fn rotate_z_quarter_turn() {
    let v = rotate_z(f32::HALF_PI) * f32v4::new(1.0, 0.0, 0.0, 1.0);
    assert!(v.is_close_to(f32v4::new(0.0, 1.0, 0.0, 1.0), 1e-6));
}

#[test]
fn quaternion_matrix_matches_rotate_z() {
    let q = f32quat::from_axis_angle(f32v3::unit_z(), f32::HALF_PI);
    assert!(q.to_mat4().is_close_to(rotate_z(f32::HALF_PI), 1e-6));
}

#[test]
fn model_view_projection() {
    let model = translate(f32v3::new(0.0, 0.0, -2.0)) * rotate_y(f32::PI);
    let view = look_at(f32v3::new(0.0, 0.0, 3.0), f32v3::zero(), f32v3::unit_y());
    let proj = perspective(radians(60.0f32), 16.0 / 9.0, 0.1, 100.0);

    let clip = proj * view * model * f32v4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.xyz() / clip.w();
    assert!(ndc.xy().is_close_to(f32v2::zero(), 1e-6));
    assert!(ndc.z() > -1.0 && ndc.z() < 1.0);

    let inv_view = view.inverse();
    assert!((inv_view * f32v4::new(0.0, 0.0, 0.0, 1.0)).is_close_to(f32v4::new(0.0, 0.0, 3.0, 1.0), 1e-5));
}
