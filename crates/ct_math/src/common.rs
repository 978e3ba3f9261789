use crate::*;

/// Convert an angle in degrees to radians
#[inline(always)]
#[must_use]
pub fn radians<T: Real>(degrees: T) -> T {
    degrees * T::DEG_TO_RAD
}

/// Convert an angle in radians to degrees
#[inline(always)]
#[must_use]
pub fn degrees<T: Real>(radians: T) -> T {
    radians * T::RAD_TO_DEG
}

/// Get the smallest of 2 values
#[inline(always)]
#[must_use]
pub fn min<T: Numeric>(a: T, b: T) -> T {
    NumericBase::min(a, b)
}

/// Get the largest of 2 values
#[inline(always)]
#[must_use]
pub fn max<T: Numeric>(a: T, b: T) -> T {
    NumericBase::max(a, b)
}

/// Clamp `val` to the range `[lo, hi]`, i.e. `min(max(val, lo), hi)`
#[inline(always)]
#[must_use]
pub fn clamp<T: Numeric>(val: T, lo: T, hi: T) -> T {
    min(max(val, lo), hi)
}

/// Get the absolute value
#[inline(always)]
#[must_use]
pub fn abs<T: Numeric>(val: T) -> T {
    NumericBase::abs(val)
}

/// Get the sign of a value: -1, 0 or 1
#[inline(always)]
#[must_use]
pub fn sign<T: Numeric>(val: T) -> T {
    NumericBase::sign(val)
}

/// Get the square root of a value
#[inline(always)]
#[must_use]
pub fn sqrt<T: Numeric>(val: T) -> T {
    NumericBase::sqrt(val)
}

/// Linearly interpolate from `a` to `b`: `a + t * (b - a)`
///
/// `t` is not clamped, values outside of `[0, 1]` extrapolate.
#[inline(always)]
#[must_use]
pub fn lerp<T: Numeric>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Check if 2 values are within `tolerance` of each other
#[inline(always)]
#[must_use]
pub fn approx_equal<T: Numeric>(a: T, b: T, tolerance: T) -> bool {
    a.is_close_to(b, tolerance)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn angle_conversion() {
        assert!(radians(180f32).is_close_to(f32::PI, 1e-6));
        assert!(radians(90f64).is_close_to(f64::HALF_PI, 1e-12));
        assert!(degrees(f32::QUARTER_PI).is_close_to(45.0, 1e-4));
    }

    #[test]
    fn scalar_helpers() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-2, 0, 3), 0);
        assert_eq!(clamp(1.5f32, 0.0, 3.0), 1.5);
        assert_eq!(min(2u32, 7), 2);
        assert_eq!(max(2u32, 7), 7);
        assert_eq!(abs(-3i16), 3);
        assert_eq!(sign(-2.5f64), -1.0);
        assert_eq!(sqrt(9.0f32), 3.0);
    }

    #[test]
    fn interpolation() {
        assert_eq!(lerp(2.0f32, 6.0, 0.25), 3.0);
        assert_eq!(lerp(0, 10, 2), 20);
    }

    #[test]
    fn tolerance_compare() {
        assert!(approx_equal(1.0f32, 1.05, 0.1));
        assert!(!approx_equal(1.0f32, 1.2, 0.1));
        assert!(approx_equal(4, 4, 0));
    }
}
