use core::{array, ops::Mul};
use crate::*;

/// Transform a column vector: `(R x C) * (C) -> (R)`
impl<T: Numeric, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::from_array(array::from_fn(|row| self.row(row).dot(rhs)))
    }
}

/// Transform a row vector: `(R) * (R x C) -> (C)`
impl<T: Numeric, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Vector<T, C> {
        Vector::from_array(array::from_fn(|col| self.dot(rhs.column(col))))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn identity_keeps_vector() {
        let v = f32v4::new(1.0, -2.0, 3.5, 1.0);
        assert_eq!(f32m4::identity() * v, v);
        assert_eq!(v * f32m4::identity(), v);
    }

    #[test]
    fn non_square() {
        let m = Matrix::<i32, 2, 3>::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6]);
        assert_eq!(m * i32v3::new(1, 0, -1), i32v2::new(-2, -2));
        assert_eq!(i32v2::new(1, 1) * m, i32v3::new(5, 7, 9));
    }

    #[test]
    fn row_vector_is_transposed_product() {
        let m = i32m3::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let v = i32v3::new(2, -1, 3);
        assert_eq!(v * m, m.transpose() * v);
    }
}
