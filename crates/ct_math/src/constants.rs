/// Trait that defines common math constants
///
/// Integral types get the truncated value of each constant.
pub trait MathConsts {
    /// Minimum value
    const MIN : Self;
    /// Maximum value
    const MAX : Self;

    /// pi
    const PI : Self;
    /// 2 * pi
    const TWO_PI : Self;
    /// pi / 2
    const HALF_PI : Self;
    /// pi / 4
    const QUARTER_PI : Self;
    /// 1 / pi
    const ONE_OVER_PI : Self;

    /// sqrt(2)
    const ROOT_TWO : Self;
    /// 1 / sqrt(2)
    const ONE_OVER_ROOT_TWO : Self;
    /// sqrt(3)
    const ROOT_THREE : Self;

    /// e
    const E : Self;

    /// pi / 180
    const DEG_TO_RAD : Self;
    /// 180 / pi
    const RAD_TO_DEG : Self;
}

macro_rules! impl_math_constants {
    {$($ty:ty),*} => {
        $(
            impl MathConsts for $ty {
                const MIN               : $ty = <$ty>::MIN;
                const MAX               : $ty = <$ty>::MAX;

                const PI                : $ty = 3.14159265358979323846264338327950288 as $ty;
                const TWO_PI            : $ty = 6.28318530717958647692528676655900576 as $ty;
                const HALF_PI           : $ty = 1.57079632679489661923132169163975144 as $ty;
                const QUARTER_PI        : $ty = 0.785398163397448309615660845819875721 as $ty;
                const ONE_OVER_PI       : $ty = 0.318309886183790671537767526745028724 as $ty;

                const ROOT_TWO          : $ty = 1.41421356237309504880168872420969808 as $ty;
                const ONE_OVER_ROOT_TWO : $ty = 0.707106781186547524400844362104849039 as $ty;
                const ROOT_THREE        : $ty = 1.73205080756887729352744634150587236 as $ty;

                const E                 : $ty = 2.71828182845904523536 as $ty;

                const DEG_TO_RAD        : $ty = (3.14159265358979323846264338327950288f64 / 180.0) as $ty;
                const RAD_TO_DEG        : $ty = (180.0 / 3.14159265358979323846264338327950288f64) as $ty;
            }
        )*
    };
}
impl_math_constants!{ i8, i16, i32, i64, u8, u16, u32, u64, f32, f64 }

/// Constants that only exist for floating point types
pub trait MathRealConsts {
    /// Positive infinity
    const INFINITY : Self;
    /// Negative infinity
    const NEG_INFINITY : Self;
    /// Not a number
    const NAN : Self;
    /// Smallest positive normal value
    const MIN_POSITIVE : Self;
}

macro_rules! impl_math_real_constants {
    {$($ty:ty),*} => {
        $(
            impl MathRealConsts for $ty {
                const INFINITY     : $ty = <$ty>::INFINITY;
                const NEG_INFINITY : $ty = <$ty>::NEG_INFINITY;
                const NAN          : $ty = <$ty>::NAN;
                const MIN_POSITIVE : $ty = <$ty>::MIN_POSITIVE;
            }
        )*
    };
}
impl_math_real_constants!{ f32, f64 }
