//! Builders for homogeneous 4x4 transformation matrices
//!
//! All matrices are meant to transform column vectors (`m * v`), use a right-handed coordinate system
//! with the camera looking down `-z`, and map depth to the `[-1, 1]` clip range.

use crate::*;

/// Create a translation matrix
#[must_use]
pub fn translate<T: Real>(offset: Vec3<T>) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    Mat4::new(Layout::RowMajor, [
        l, o, o, offset.x(),
        o, l, o, offset.y(),
        o, o, l, offset.z(),
        o, o, o, l,
    ])
}

/// Create a non-uniform scale matrix
#[must_use]
pub fn scale<T: Real>(scale: Vec3<T>) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    Mat4::new(Layout::RowMajor, [
        scale.x(), o,         o,         o,
        o,         scale.y(), o,         o,
        o,         o,         scale.z(), o,
        o,         o,         o,         l,
    ])
}

/// Create a uniform scale matrix
#[inline]
#[must_use]
pub fn uniform_scale<T: Real>(scale: T) -> Mat4<T> {
    self::scale(Vec3::set(scale))
}

/// Create a matrix rotating `angle` radians around the x-axis
#[must_use]
pub fn rotate_x<T: Real>(angle: T) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let (s, c) = angle.sin_cos();
    Mat4::new(Layout::RowMajor, [
        l, o,  o, o,
        o, c, -s, o,
        o, s,  c, o,
        o, o,  o, l,
    ])
}

/// Create a matrix rotating `angle` radians around the y-axis
#[must_use]
pub fn rotate_y<T: Real>(angle: T) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let (s, c) = angle.sin_cos();
    Mat4::new(Layout::RowMajor, [
         c, o, s, o,
         o, l, o, o,
        -s, o, c, o,
         o, o, o, l,
    ])
}

/// Create a matrix rotating `angle` radians around the z-axis
#[must_use]
pub fn rotate_z<T: Real>(angle: T) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let (s, c) = angle.sin_cos();
    Mat4::new(Layout::RowMajor, [
        c, -s, o, o,
        s,  c, o, o,
        o,  o, l, o,
        o,  o, o, l,
    ])
}

/// Create a matrix rotating `angle` radians around an arbitrary axis (Rodrigues' rotation formula)
///
/// The axis does not need to be normalized.
#[must_use]
pub fn rotate<T: Real>(angle: T, axis: Vec3<T>) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let (s, c) = angle.sin_cos();
    let t = l - c;

    let axis = axis.normalize();
    let (x, y, z) = (axis.x(), axis.y(), axis.z());

    Mat4::new(Layout::RowMajor, [
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, o,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, o,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     o,
        o,                 o,                 o,                 l,
    ])
}

/// Create a rotation from euler angles in radians, applied as `rotate_x(x) * rotate_y(y) * rotate_z(z)`
#[must_use]
pub fn rotate_euler<T: Real>(angles: Vec3<T>) -> Mat4<T> {
    rotate_x(angles.x()) * rotate_y(angles.y()) * rotate_z(angles.z())
}

/// Create a view matrix for a camera at `eye`, looking at `center`
#[must_use]
pub fn look_at<T: Real>(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let forward = (center - eye).normalize();
    let side = forward.cross(up).normalize();
    let cam_up = side.cross(forward);

    Mat4::new(Layout::RowMajor, [
         side.x(),     side.y(),     side.z(),    -side.dot(eye),
         cam_up.x(),   cam_up.y(),   cam_up.z(),  -cam_up.dot(eye),
        -forward.x(), -forward.y(), -forward.z(),  forward.dot(eye),
         o,            o,            o,            l,
    ])
}

/// Create a perspective projection matrix
///
/// `fov_y` is the vertical field of view in radians, `aspect` is `width / height`.
#[must_use]
pub fn perspective<T: Real>(fov_y: T, aspect: T, near: T, far: T) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let two = T::from_i32(2);
    let tan_half_fov = (fov_y / two).tan();
    let depth = far - near;

    Mat4::new(Layout::RowMajor, [
        l / (aspect * tan_half_fov), o,                o,                      o,
        o,                           l / tan_half_fov, o,                      o,
        o,                           o,                -(far + near) / depth,  -(two * far * near) / depth,
        o,                           o,                -l,                     o,
    ])
}

/// Create an orthographic projection matrix
#[must_use]
pub fn ortho<T: Real>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    let (o, l) = (T::zero(), T::one());
    let two = T::from_i32(2);
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Mat4::new(Layout::RowMajor, [
        two / width, o,            o,            -(right + left) / width,
        o,           two / height, o,            -(top + bottom) / height,
        o,           o,            -two / depth, -(far + near) / depth,
        o,           o,            o,            l,
    ])
}

#[cfg(test)]
mod tests {
    use crate::*;
    use super::*;

    fn point(x: f32, y: f32, z: f32) -> f32v4 {
        f32v4::new(x, y, z, 1.0)
    }

    #[test]
    fn translate_and_scale() {
        let t = translate(f32v3::new(1.0, 2.0, 3.0));
        assert_eq!(t * point(1.0, 1.0, 1.0), point(2.0, 3.0, 4.0));
        assert_eq!(t * f32v4::new(1.0, 1.0, 1.0, 0.0), f32v4::new(1.0, 1.0, 1.0, 0.0));
        assert_eq!(t.translation(), f32v3::new(1.0, 2.0, 3.0));

        let s = scale(f32v3::new(2.0, 3.0, 4.0));
        assert_eq!(s * point(1.0, 1.0, 1.0), point(2.0, 3.0, 4.0));
        assert_eq!(uniform_scale(2.0f32) * point(1.0, -1.0, 0.5), point(2.0, -2.0, 1.0));
    }

    #[test]
    fn axis_rotations() {
        let half_pi = f32::HALF_PI;
        assert!((rotate_z(half_pi) * point(1.0, 0.0, 0.0)).is_close_to(point(0.0, 1.0, 0.0), 1e-6));
        assert!((rotate_x(half_pi) * point(0.0, 1.0, 0.0)).is_close_to(point(0.0, 0.0, 1.0), 1e-6));
        assert!((rotate_y(half_pi) * point(0.0, 0.0, 1.0)).is_close_to(point(1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn axis_angle_rotation_matches_axis_rotations() {
        let angle = 0.8f64;
        assert!(rotate(angle, f64v3::new(2.0, 0.0, 0.0)).is_close_to(rotate_x(angle), 1e-12));
        assert!(rotate(angle, f64v3::unit_y()).is_close_to(rotate_y(angle), 1e-12));
        assert!(rotate(angle, f64v3::unit_z()).is_close_to(rotate_z(angle), 1e-12));
    }

    #[test]
    fn euler_order() {
        let angles = f64v3::new(0.3, -1.1, 2.0);
        let expected = rotate_x(angles.x()) * rotate_y(angles.y()) * rotate_z(angles.z());
        assert_eq!(rotate_euler(angles), expected);
        assert!(!rotate_euler(angles).is_close_to(rotate_z(angles.z()) * rotate_y(angles.y()) * rotate_x(angles.x()), 1e-3));
    }

    #[test]
    fn look_at_origin() {
        let view = look_at(f32v3::new(0.0, 0.0, 5.0), f32v3::zero(), f32v3::unit_y());
        assert_eq!(view * point(0.0, 0.0, 0.0), point(0.0, 0.0, -5.0));
        assert_eq!(view * point(0.0, 0.0, 5.0), point(0.0, 0.0, 0.0));
        assert_eq!(view * point(1.0, 2.0, 0.0), point(1.0, 2.0, -5.0));
    }

    #[test]
    fn perspective_depth_range() {
        let proj = perspective(f64::HALF_PI, 1.0, 1.0, 10.0);
        assert_eq!(proj[(3, 2)], -1.0);

        let near = proj * f64v4::new(0.0, 0.0, -1.0, 1.0);
        let far = proj * f64v4::new(0.0, 0.0, -10.0, 1.0);
        assert!((near.z() / near.w()).is_close_to(-1.0, 1e-12));
        assert!((far.z() / far.w()).is_close_to(1.0, 1e-12));

        // 90 degree fov: the frustum edge at depth 1 projects onto the clip edge
        let edge = proj * f64v4::new(0.0, 1.0, -1.0, 1.0);
        assert!((edge.y() / edge.w()).is_close_to(1.0, 1e-12));
    }

    #[test]
    fn ortho_maps_box_to_clip_cube() {
        let proj = ortho(-2.0f32, 2.0, -1.0, 1.0, 0.1, 100.0);
        assert!((proj * point(2.0, 1.0, -0.1)).is_close_to(point(1.0, 1.0, -1.0), 1e-5));
        assert!((proj * point(-2.0, -1.0, -100.0)).is_close_to(point(-1.0, -1.0, 1.0), 1e-5));
    }

    #[test]
    fn transforms_invert() {
        let m = translate(f64v3::new(1.0, -2.0, 3.0)) * rotate(0.4, f64v3::new(1.0, 1.0, 1.0)) * uniform_scale(2.0);
        assert!((m.inverse() * m).is_close_to(f64m4::identity(), 1e-12));
    }
}
