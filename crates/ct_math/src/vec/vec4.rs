use crate::*;
use super::component_accessors;

impl<T: Numeric> Vec4<T> {
    /// Create a new 4d vector
    #[inline(always)]
    #[must_use]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    component_accessors!{
        x, set_x, x_mut => 0,
        y, set_y, y_mut => 1,
        z, set_z, z_mut => 2,
        w, set_w, w_mut => 3,
        r, set_r, r_mut => 0,
        g, set_g, g_mut => 1,
        b, set_b, b_mut => 2,
        a, set_a, a_mut => 3,
    }

    #[inline]
    #[must_use]
    pub fn xy(self) -> Vec2<T> {
        Vec2::new(self.x(), self.y())
    }

    #[inline]
    #[must_use]
    pub fn xz(self) -> Vec2<T> {
        Vec2::new(self.x(), self.z())
    }

    #[inline]
    #[must_use]
    pub fn yz(self) -> Vec2<T> {
        Vec2::new(self.y(), self.z())
    }

    /// Shrink a `Vec4` to a `Vec3` by dropping the w component
    #[inline]
    #[must_use]
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }
}
