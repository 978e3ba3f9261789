use crate::*;
use super::component_accessors;

impl<T: Numeric> Vec2<T> {
    /// Create a new 2d vector
    #[inline(always)]
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    component_accessors!{
        x, set_x, x_mut => 0,
        y, set_y, y_mut => 1,
        r, set_r, r_mut => 0,
        g, set_g, g_mut => 1,
    }

    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), z)
    }

    /// Calculate the 2d cross product, i.e. the z-component of the 3d cross product of both vectors in the xy-plane
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> T {
        self.x() * rhs.y() - self.y() * rhs.x()
    }
}

impl<T: Signed> Vec2<T> {
    /// Get the vector rotated 90 degrees counter-clockwise
    #[inline]
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y(), self.x())
    }
}
