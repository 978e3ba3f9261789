use crate::*;
use super::component_accessors;

impl<T: Numeric> Vec3<T> {
    /// Create a new 3d vector
    #[inline(always)]
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    component_accessors!{
        x, set_x, x_mut => 0,
        y, set_y, y_mut => 1,
        z, set_z, z_mut => 2,
        r, set_r, r_mut => 0,
        g, set_g, g_mut => 1,
        b, set_b, b_mut => 2,
    }

    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }

    /// Get the x and y components
    #[inline]
    #[must_use]
    pub fn xy(self) -> Vec2<T> {
        Vec2::new(self.x(), self.y())
    }

    /// Get the x and z components
    #[inline]
    #[must_use]
    pub fn xz(self) -> Vec2<T> {
        Vec2::new(self.x(), self.z())
    }

    /// Get the y and z components
    #[inline]
    #[must_use]
    pub fn yz(self) -> Vec2<T> {
        Vec2::new(self.y(), self.z())
    }

    /// Calculate the cross product of 2 vectors
    ///
    /// The result is perpendicular to both vectors, following the right-hand rule.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }

    /// Unit vector along the x-axis
    #[inline(always)]
    #[must_use]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along the y-axis
    #[inline(always)]
    #[must_use]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along the z-axis
    #[inline(always)]
    #[must_use]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }
}
