use core::{
    fmt::Display,
    ops::*,
};
use crate::*;

/// Quaternion, `x`, `y` and `z` store the imaginary part and `w` the real part
///
/// Rotation quaternions are expected to be normalized, but all operations are valid for non-unit quaternions.
#[derive(Clone, Copy, Debug)]
pub struct Quat<T: Real> {
    pub x : T,
    pub y : T,
    pub z : T,
    pub w : T,
}

impl<T: Real> Quat<T> {
    /// Create a new quaternion
    #[inline(always)]
    #[must_use]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion with all components set to `val`
    #[inline(always)]
    #[must_use]
    pub fn set(val: T) -> Self {
        Self { x: val, y: val, z: val, w: val }
    }

    /// Create a quaternion from its imaginary and real parts
    #[inline(always)]
    #[must_use]
    pub fn from_parts(imaginary: Vec3<T>, real: T) -> Self {
        Self { x: imaginary.x(), y: imaginary.y(), z: imaginary.z(), w: real }
    }

    /// Create the identity quaternion, i.e. no rotation
    #[inline(always)]
    #[must_use]
    pub fn identity() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::zero(), w: T::one() }
    }

    /// Create a quaternion rotating `angle` radians around `axis`
    ///
    /// The axis does not need to be normalized.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let half_angle = angle / T::from_i32(2);
        let (sin, cos) = half_angle.sin_cos();
        Self::from_parts(axis.normalize() * sin, cos)
    }

    /// Create a quaternion from a 3x3 rotation matrix
    ///
    /// The matrix needs to be orthonormal, any scale will result in an invalid quaternion.
    #[must_use]
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        let e = |row: usize, col: usize| m[(row, col)];
        let one = T::one();
        let two = T::from_i32(2);
        let quarter = T::from_f32(0.25);

        let trace = m.trace();
        if trace > T::zero() {
            let s = (trace + one).sqrt() * two;
            Self {
                x: (e(2, 1) - e(1, 2)) / s,
                y: (e(0, 2) - e(2, 0)) / s,
                z: (e(1, 0) - e(0, 1)) / s,
                w: quarter * s,
            }
        } else if e(0, 0) > e(1, 1) && e(0, 0) > e(2, 2) {
            let s = (one + e(0, 0) - e(1, 1) - e(2, 2)).sqrt() * two;
            Self {
                x: quarter * s,
                y: (e(0, 1) + e(1, 0)) / s,
                z: (e(0, 2) + e(2, 0)) / s,
                w: (e(2, 1) - e(1, 2)) / s,
            }
        } else if e(1, 1) > e(2, 2) {
            let s = (one + e(1, 1) - e(0, 0) - e(2, 2)).sqrt() * two;
            Self {
                x: (e(0, 1) + e(1, 0)) / s,
                y: quarter * s,
                z: (e(1, 2) + e(2, 1)) / s,
                w: (e(0, 2) - e(2, 0)) / s,
            }
        } else {
            let s = (one + e(2, 2) - e(0, 0) - e(1, 1)).sqrt() * two;
            Self {
                x: (e(0, 2) + e(2, 0)) / s,
                y: (e(1, 2) + e(2, 1)) / s,
                z: quarter * s,
                w: (e(1, 0) - e(0, 1)) / s,
            }
        }
    }

    /// Get the rotation axis and angle in radians
    ///
    /// When there is no rotation, the x-axis is returned with an angle of 0.
    #[must_use]
    pub fn to_axis_angle(self) -> (Vec3<T>, T) {
        let q = self.normalize();
        let w = NumericBase::clamp(q.w, -T::one(), T::one());
        let angle = w.acos() * T::from_i32(2);
        let sin = (T::one() - w * w).sqrt();
        if sin <= T::EPSILON {
            (Vec3::unit_x(), angle)
        } else {
            (q.imaginary() / sin, angle)
        }
    }

    //------------------------------

    /// Get the imaginary part
    #[inline(always)]
    #[must_use]
    pub fn imaginary(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Get the real part
    #[inline(always)]
    #[must_use]
    pub fn real(self) -> T {
        self.w
    }

    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    #[must_use]
    pub fn len_sq(self) -> T {
        self.dot(self)
    }

    #[inline]
    #[must_use]
    pub fn len(self) -> T {
        self.len_sq().sqrt()
    }

    /// Get a normalized copy of the quaternion, or the identity if the length is `<= EPSILON`
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.len();
        if len <= T::EPSILON {
            Self::identity()
        } else {
            self / len
        }
    }

    /// Normalize the quaternion in place, it's set to identity if the length is `<= EPSILON`
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    #[inline]
    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.len_sq().is_close_to(T::one(), T::EPSILON)
    }

    /// Get the conjugate, i.e. the quaternion with a negated imaginary part
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Get the inverse, i.e. `conjugate / len_sq`, or the identity if the squared length is `<= EPSILON`
    ///
    /// For a normalized quaternion, this is equal to the conjugate.
    #[must_use]
    pub fn inverse(self) -> Self {
        let len_sq = self.len_sq();
        if len_sq <= T::EPSILON {
            Self::identity()
        } else {
            self.conjugate() / len_sq
        }
    }

    /// Rotate a vector, using `q * (v, 0) * q^-1`
    ///
    /// This uses the full inverse, so the quaternion does not need to be normalized.
    #[must_use]
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        let res = self * Self::from_parts(v, T::zero()) * self.inverse();
        res.imaginary()
    }

    /// Linearly interpolate between 2 rotations along the shortest path, the result is normalized
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self {
        let end = if self.dot(other) < T::zero() { -other } else { other };
        (self + (end - self) * t).normalize()
    }

    /// Spherical linear interpolation between 2 rotations along the shortest path
    ///
    /// Nearly parallel rotations fall back to [`Quat::lerp`].
    #[must_use]
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut cos = self.dot(other);
        let mut end = other;
        if cos < T::zero() {
            cos = -cos;
            end = -other;
        }

        if cos > T::from_f32(0.9995) {
            return self.lerp(end, t);
        }

        let theta = cos.acos();
        let sin = theta.sin();
        let from_scale = ((T::one() - t) * theta).sin() / sin;
        let to_scale = (t * theta).sin() / sin;
        self * from_scale + end * to_scale
    }

    //------------------------------

    /// Convert to a 3x3 rotation matrix, using a normalized copy of the quaternion
    #[must_use]
    pub fn to_mat3(self) -> Mat3<T> {
        let Self { x, y, z, w } = self.normalize();
        let one = T::one();
        let two = T::from_i32(2);

        Mat3::new(Layout::RowMajor, [
            one - two * (y * y + z * z),       two * (x * y - w * z),       two * (x * z + w * y),
                  two * (x * y + w * z), one - two * (x * x + z * z),       two * (y * z - w * x),
                  two * (x * z - w * y),       two * (y * z + w * x), one - two * (x * x + y * y),
        ])
    }

    /// Convert to a 4x4 rotation matrix, the rotation is stored in the upper-left 3x3 block
    #[inline]
    #[must_use]
    pub fn to_mat4(self) -> Mat4<T> {
        self.to_mat3().extend()
    }
}

//--------------------------------------------------------------

impl<T: Real> Default for Quat<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z, w: self.w + rhs.w }
    }
}

impl<T: Real> AddAssign for Quat<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z, w: self.w - rhs.w }
    }
}

impl<T: Real> SubAssign for Quat<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}

/// Hamilton product, `a * b` first applies the rotation of `b`, then `a`
impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self {
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        }
    }
}

impl<T: Real> MulAssign for Quat<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<T> for Quat<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs, w: self.w * rhs }
    }
}

impl<T: Real> MulAssign<T> for Quat<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real> Div<T> for Quat<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::zero(), "division by zero");
        Self { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs, w: self.w / rhs }
    }
}

impl<T: Real> DivAssign<T> for Quat<T> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_quat_premul {
    ($($ty:ty)*) => {
        $(
            impl Mul<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                #[inline(always)]
                fn mul(self, rhs: Quat<$ty>) -> Quat<$ty> {
                    rhs * self
                }
            }
        )*
    };
}
impl_quat_premul!{ f32 f64 }

impl<T: Real> ApproxEq for Quat<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.x.is_close_to(rhs.x, epsilon) &&
        self.y.is_close_to(rhs.y, epsilon) &&
        self.z.is_close_to(rhs.z, epsilon) &&
        self.w.is_close_to(rhs.w, epsilon)
    }
}

impl<T: Real> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_approx_eq(*other)
    }
}

impl<T: Real> Display for Quat<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "quat({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[allow(non_camel_case_types)] pub type f32quat = Quat<f32>;
#[allow(non_camel_case_types)] pub type f64quat = Quat<f64>;
