use core::{
    array,
    fmt::Display,
    ops::*,
};
use crate::*;

mod vec2;
mod vec3;
mod vec4;

/// Generate named component accessors over the canonical component array.
///
/// Every name maps onto an index, so `v.x()` and `v[0]` always observe the same storage.
macro_rules! component_accessors {
    {$($comp:ident, $set:ident, $mutable:ident => $idx:literal),+ $(,)?} => {
        $(
            #[doc = concat!("Get the `", stringify!($comp), "` component")]
            #[inline(always)]
            #[must_use]
            pub fn $comp(&self) -> T {
                self.data[$idx]
            }

            #[doc = concat!("Set the `", stringify!($comp), "` component")]
            #[inline(always)]
            pub fn $set(&mut self, val: T) {
                self.data[$idx] = val;
            }

            #[doc = concat!("Get a mutable reference to the `", stringify!($comp), "` component")]
            #[inline(always)]
            #[must_use]
            pub fn $mutable(&mut self) -> &mut T {
                &mut self.data[$idx]
            }
        )+
    };
}
pub(crate) use component_accessors;

/// A fixed-size vector with `N` components of type `T`
///
/// Components are stored contiguously in a single array; `N` must be at least 2.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Vector<T: Numeric, const N: usize> {
    data: [T; N],
}

impl<T: Numeric, const N: usize> Vector<T, N> {
    const DIM_CHECK: () = assert!(N >= 2, "a vector needs at least 2 components");

    /// Create a vector from an array of exactly `N` components
    #[inline(always)]
    #[must_use]
    pub fn from_array(data: [T; N]) -> Self {
        let () = Self::DIM_CHECK;
        Self { data }
    }

    /// Create a vector with all components set to `val`
    #[inline(always)]
    #[must_use]
    pub fn set(val: T) -> Self {
        Self::from_array([val; N])
    }

    /// Convert each component to another numeric type
    #[inline]
    #[must_use]
    pub fn cast<U: Numeric>(self) -> Vector<U, N> where
        T: NumericCast<U>
    {
        Vector::from_array(self.data.map(|val| val.cast()))
    }

    //------------------------------

    /// Get the components as an array
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Get a reference to the components
    #[inline(always)]
    #[must_use]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Get a mutable reference to the components
    #[inline(always)]
    #[must_use]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a pointer to the first of `N` contiguous components
    #[inline(always)]
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Get a mutable pointer to the first of `N` contiguous components
    #[inline(always)]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Iterate over the components
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    //------------------------------

    /// Calculate the dot product of 2 vectors
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        self.data.iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Calculate the squared length of the vector
    #[inline]
    #[must_use]
    pub fn len_sq(self) -> T {
        self.dot(self)
    }

    /// Calculate the length of the vector
    ///
    /// For integral component types, the length is truncated.
    #[inline]
    #[must_use]
    pub fn len(self) -> T {
        self.len_sq().sqrt()
    }

    /// Calculate the squared distance between 2 points
    #[inline]
    #[must_use]
    pub fn dist_sq(self, other: Self) -> T {
        (other - self).len_sq()
    }

    /// Calculate the distance between 2 points
    #[inline]
    #[must_use]
    pub fn dist(self, other: Self) -> T {
        (other - self).len()
    }

    //------------------------------

    /// Get the component-wise minimum of 2 vectors
    #[inline]
    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self::from_array(array::from_fn(|i| NumericBase::min(self.data[i], rhs.data[i])))
    }

    /// Get the component-wise maximum of 2 vectors
    #[inline]
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_array(array::from_fn(|i| NumericBase::max(self.data[i], rhs.data[i])))
    }

    /// Clamp each component between the matching components of `min` and `max`
    #[inline]
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Clamp each component between 2 scalars
    #[inline]
    #[must_use]
    pub fn clamp_scalar(self, min: T, max: T) -> Self {
        self.clamp(Self::set(min), Self::set(max))
    }

    /// Get the component-wise absolute value
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_array(self.data.map(NumericBase::abs))
    }

    /// Linearly interpolate between 2 vectors, `t` is not clamped
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::from_array(array::from_fn(|i| lerp(self.data[i], other.data[i], t)))
    }

    /// Get the smallest component
    #[must_use]
    pub fn min_component(self) -> T {
        self.data.iter().skip(1).fold(self.data[0], |acc, &val| NumericBase::min(acc, val))
    }

    /// Get the largest component
    #[must_use]
    pub fn max_component(self) -> T {
        self.data.iter().skip(1).fold(self.data[0], |acc, &val| NumericBase::max(acc, val))
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Get a unit-length copy of the vector
    ///
    /// A vector with an exact length of 0 has no direction and is returned as the zero vector.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        self.normalize_or(Self::zero())
    }

    /// Get a unit-length copy of the vector, or `default` if the length is exactly 0
    #[inline]
    #[must_use]
    pub fn normalize_or(self, default: Self) -> Self {
        let len = self.len();
        if len == T::zero() { default } else { self / len }
    }

    /// Normalize the vector in place
    #[inline]
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Check if the vector is normalized, given a tolerance on the squared length
    #[inline]
    #[must_use]
    pub fn is_close_to_normalized(self, epsilon: T) -> bool {
        self.len_sq().is_close_to(T::one(), epsilon)
    }

    /// Check if the vector is normalized
    #[inline]
    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.is_close_to_normalized(T::EPSILON)
    }

    /// Reflect the vector on a surface with normal `normal`: `v - n * 2(v . n)`
    ///
    /// `normal` is expected to be normalized.
    #[inline]
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (T::from_i32(2) * self.dot(normal))
    }
}

//--------------------------------------------------------------

impl<T: Numeric, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < N, "component index {index} out of bounds for vec{N}");
        &self.data[index]
    }
}

impl<T: Numeric, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < N, "component index {index} out of bounds for vec{N}");
        &mut self.data[index]
    }
}

//--------------------------------------------------------------

macro_rules! impl_vec_op {
    {$trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $op:tt} => {
        impl<T: Numeric, const N: usize> $trait for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $fun(self, rhs: Self) -> Self {
                Self::from_array(array::from_fn(|i| self.data[i] $op rhs.data[i]))
            }
        }

        impl<T: Numeric, const N: usize> $assign_trait for Vector<T, N> {
            #[inline(always)]
            fn $assign_fun(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
    {@scalar $trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $op:tt} => {
        impl<T: Numeric, const N: usize> $trait<T> for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $fun(self, rhs: T) -> Self {
                Self::from_array(self.data.map(|val| val $op rhs))
            }
        }

        impl<T: Numeric, const N: usize> $assign_trait<T> for Vector<T, N> {
            #[inline(always)]
            fn $assign_fun(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}
impl_vec_op!{ Add, add, AddAssign, add_assign, + }
impl_vec_op!{ Sub, sub, SubAssign, sub_assign, - }
impl_vec_op!{ Mul, mul, MulAssign, mul_assign, * }
impl_vec_op!{ @scalar Mul, mul, MulAssign, mul_assign, * }

impl<T: Numeric, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        debug_assert!(rhs.data.iter().all(|val| *val != T::zero()), "component-wise division by zero");
        Self::from_array(array::from_fn(|i| self.data[i] / rhs.data[i]))
    }
}

impl<T: Numeric, const N: usize> DivAssign for Vector<T, N> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Numeric, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::zero(), "division by zero");
        Self::from_array(self.data.map(|val| val / rhs))
    }
}

impl<T: Numeric, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Signed, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_array(self.data.map(|val| -val))
    }
}

// Scalar pre-multiplication can't be implemented generically over `T`, so it's generated per primitive
macro_rules! impl_vec_premul {
    ($($ty:ty)*) => {
        $(
            impl<const N: usize> Mul<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                #[inline(always)]
                fn mul(self, rhs: Vector<$ty, N>) -> Vector<$ty, N> {
                    rhs * self
                }
            }
        )*
    };
}
impl_vec_premul!{ i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }

//--------------------------------------------------------------

impl<T: Numeric, const N: usize> Zero for Vector<T, N> {
    #[inline(always)]
    fn zero() -> Self {
        Self::set(T::zero())
    }
}

impl<T: Numeric, const N: usize> Default for Vector<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Numeric, const N: usize> ApproxEq for Vector<T, N> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.data.iter()
            .zip(rhs.data.iter())
            .all(|(&a, &b)| a.is_close_to(b, epsilon))
    }
}

impl<T: Numeric, const N: usize> ApproxZero for Vector<T, N> {
    type Epsilon = T;

    fn is_close_to_zero(self, epsilon: T) -> bool {
        self.data.iter().all(|&val| val.is_close_to_zero(epsilon))
    }
}

/// Vectors compare component-wise within `T::EPSILON`, which makes the comparison exact for integral types
impl<T: Numeric, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.is_approx_eq(*other)
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline(always)]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Numeric, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline(always)]
    fn from(vec: Vector<T, N>) -> Self {
        vec.data
    }
}

impl<T: Numeric, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vec{N}(")?;
        for (i, val) in self.data.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{val}")?;
        }
        f.write_str(")")
    }
}

//--------------------------------------------------------------

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

#[allow(non_camel_case_types)] pub type i32v2 = Vec2<i32>;
#[allow(non_camel_case_types)] pub type i32v3 = Vec3<i32>;
#[allow(non_camel_case_types)] pub type i32v4 = Vec4<i32>;
#[allow(non_camel_case_types)] pub type u32v2 = Vec2<u32>;
#[allow(non_camel_case_types)] pub type u32v3 = Vec3<u32>;
#[allow(non_camel_case_types)] pub type u32v4 = Vec4<u32>;
#[allow(non_camel_case_types)] pub type f32v2 = Vec2<f32>;
#[allow(non_camel_case_types)] pub type f32v3 = Vec3<f32>;
#[allow(non_camel_case_types)] pub type f32v4 = Vec4<f32>;
#[allow(non_camel_case_types)] pub type f64v2 = Vec2<f64>;
#[allow(non_camel_case_types)] pub type f64v3 = Vec3<f64>;
#[allow(non_camel_case_types)] pub type f64v4 = Vec4<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_create() {
        let v = Vector::from_array([1, 2, 3, 4, 5]);
        assert_eq!(v.to_array(), [1, 2, 3, 4, 5]);
        assert_eq!(v[4], 5);

        let v = f32v3::set(2.5);
        assert_eq!(v.to_array(), [2.5; 3]);

        let v: i32v2 = [7, 8].into();
        assert_eq!(<[i32; 2]>::from(v), [7, 8]);

        assert_eq!(Vector::<u8, 6>::default(), Vector::set(0));
    }

    #[test]
    fn test_cast() {
        let v = f32v3::new(1.75, -2.5, 3.0);
        assert_eq!(v.cast::<i32>(), i32v3::new(1, -2, 3));
        assert_eq!(i32v2::new(3, 4).cast::<f64>(), f64v2::new(3.0, 4.0));
    }

    #[test]
    fn test_named_components_alias_storage() {
        let mut v = f32v4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), v[0]);
        assert_eq!(v.a(), v[3]);

        v.set_y(9.0);
        assert_eq!(v[1], 9.0);
        assert_eq!(v.g(), 9.0);

        v[2] = -1.0;
        assert_eq!(v.z(), -1.0);
        assert_eq!(v.b(), -1.0);

        *v.w_mut() = 0.5;
        assert_eq!(v.as_slice(), &[1.0, 9.0, -1.0, 0.5]);
    }

    #[test]
    fn test_raw_access() {
        let mut v = i32v3::new(4, 5, 6);
        unsafe {
            assert_eq!(*v.as_ptr().add(2), 6);
            *v.as_mut_ptr().add(1) = 10;
        }
        assert_eq!(v.y(), 10);
    }

    #[test]
    fn test_cmp() {
        let a = i32v2::new(1, 2);
        let b = i32v2::new(2, 3);

        assert_ne!(a, b);
        assert!(a.is_close_to(b, 1));
        assert!(!a.is_approx_eq(b));

        let c = f32v2::new(1.0, 2.0);
        let d = f32v2::new(1.0 + f32::EPSILON * 0.5, 2.0);
        assert_eq!(c, d);
        assert_ne!(c, f32v2::new(1.001, 2.0));
    }

    #[test]
    fn test_cmp_integral_extremes() {
        assert_ne!(Vector::<i8, 2>::from_array([-100, 0]), Vector::<i8, 2>::from_array([100, 0]));
        assert_ne!(i32v2::new(i32::MIN, 0), i32v2::new(i32::MAX, 0));
        assert_ne!(Vector::<i64, 3>::from_array([i64::MAX, 0, 0]), Vector::<i64, 3>::from_array([-1, 0, 0]));
        assert_eq!(i32v2::new(i32::MIN, i32::MAX), i32v2::new(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_add_sub() {
        let mut a = i32v2::new(1, 2);
        let b = i32v2::new(3, 5);

        assert_eq!(a + b, i32v2::new(4, 7));
        assert_eq!(a - b, i32v2::new(-2, -3));

        a += b;
        assert_eq!(a, i32v2::new(4, 7));

        a -= b;
        assert_eq!(a, i32v2::new(1, 2));
        assert_eq!(-a, i32v2::new(-1, -2));
    }

    #[test]
    fn test_scale() {
        let mut a = i32v2::new(2, 4);

        assert_eq!(a * 2, i32v2::new(4, 8));
        assert_eq!(2 * a, i32v2::new(4, 8));
        assert_eq!(a / 2, i32v2::new(1, 2));
        assert_eq!(a * i32v2::new(3, -1), i32v2::new(6, -4));
        assert_eq!(a / i32v2::new(2, 4), i32v2::new(1, 1));

        a *= 2;
        assert_eq!(a, i32v2::new(4, 8));

        a /= 4;
        assert_eq!(a, i32v2::new(1, 2));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_div_by_zero_component() {
        let _ = f32v3::set(1.0) / f32v3::new(1.0, 0.0, 1.0);
    }

    #[test]
    fn test_len_and_normalize() {
        let t0 = f32v2::new(3.0, 4.0);
        let t1 = f32v2::new(0.6, 0.8);

        assert_eq!(t0.len(), 5.0);
        assert_eq!(t0.len_sq(), 25.0);
        assert_eq!(t0.normalize(), t1);
        assert!(t0.normalize().len().is_close_to(1.0, 1e-6));
        assert!(!t0.is_normalized());
        assert!(t1.is_close_to_normalized(1e-6));

        assert_eq!(f32v3::zero().normalize(), f32v3::zero());
        assert_eq!(f32v2::zero().normalize_or(t1), t1);

        let mut t2 = f64v3::new(0.0, 0.0, -2.0);
        t2.normalize_in_place();
        assert_eq!(t2, f64v3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_dot_and_dist() {
        let v0 = f32v2::new(2.0, -3.0);
        let v1 = f32v2::new(4.0, 5.0);

        assert_eq!(v0.dot(v1), -7.0);
        assert_eq!(Vector::from_array([1, 2, 3, 4, 5]).dot(Vector::set(1)), 15);
        assert_eq!(f32v3::new(1.0, 1.0, 1.0).dist(f32v3::new(3.0, 1.0, 1.0)), 2.0);
        assert_eq!(i32v2::new(0, 0).dist_sq(i32v2::new(3, 4)), 25);
    }

    #[test]
    fn test_common_ops() {
        let a = i32v3::new(1, 5, -3);
        let b = i32v3::new(2, 0, -4);

        assert_eq!(a.min(b), i32v3::new(1, 0, -4));
        assert_eq!(a.max(b), i32v3::new(2, 5, -3));
        assert_eq!(a.abs(), i32v3::new(1, 5, 3));
        assert_eq!(a.clamp_scalar(0, 2), i32v3::new(1, 2, 0));
        assert_eq!(a.clamp(b, i32v3::set(3)), i32v3::new(2, 3, -3));
        assert_eq!(a.min_component(), -3);
        assert_eq!(a.max_component(), 5);

        let c = f32v2::new(0.0, 10.0);
        let d = f32v2::new(10.0, 20.0);
        assert_eq!(c.lerp(d, 0.5), f32v2::new(5.0, 15.0));
    }

    #[test]
    fn test_reflect() {
        let v = f32v3::new(1.0, -1.0, 0.0);
        let n = f32v3::new(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(n), f32v3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", i32v3::new(1, -2, 3)), "vec3(1, -2, 3)");
        assert_eq!(format!("{}", f32v2::new(0.5, 1.0)), "vec2(0.5, 1)");
    }
}
