use crate::*;

// 2x2 sub-determinants of the upper (`a`) and lower (`b`) row pairs, shared by the determinant and the inverse.
fn sub_determinants<T: Signed, const N: usize>(m: &Matrix<T, N, N>) -> ([T; 6], [T; 6]) {
    let e = |row: usize, col: usize| m[(row, col)];
    let a = [
        e(0, 0) * e(1, 1) - e(0, 1) * e(1, 0),
        e(0, 0) * e(1, 2) - e(0, 2) * e(1, 0),
        e(0, 0) * e(1, 3) - e(0, 3) * e(1, 0),
        e(0, 1) * e(1, 2) - e(0, 2) * e(1, 1),
        e(0, 1) * e(1, 3) - e(0, 3) * e(1, 1),
        e(0, 2) * e(1, 3) - e(0, 3) * e(1, 2),
    ];
    let b = [
        e(2, 0) * e(3, 1) - e(2, 1) * e(3, 0),
        e(2, 0) * e(3, 2) - e(2, 2) * e(3, 0),
        e(2, 0) * e(3, 3) - e(2, 3) * e(3, 0),
        e(2, 1) * e(3, 2) - e(2, 2) * e(3, 1),
        e(2, 1) * e(3, 3) - e(2, 3) * e(3, 1),
        e(2, 2) * e(3, 3) - e(2, 3) * e(3, 2),
    ];
    (a, b)
}

fn determinant_from<T: Signed>(a: &[T; 6], b: &[T; 6]) -> T {
    a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0]
}

// Only valid for `N == 4`, see `mat3.rs`.
pub(super) fn cofactor_determinant<T: Signed, const N: usize>(m: &Matrix<T, N, N>) -> T {
    debug_assert!(N == 4);
    let (a, b) = sub_determinants(m);
    determinant_from(&a, &b)
}

pub(super) fn adjugate_inverse<T: Real, const N: usize>(m: &Matrix<T, N, N>) -> Option<Matrix<T, N, N>> {
    debug_assert!(N == 4);
    let (a, b) = sub_determinants(m);
    let det = determinant_from(&a, &b);
    if det.abs() <= T::EPSILON {
        return None;
    }

    let e = |row: usize, col: usize| m[(row, col)];
    let adjugate = [
         e(1, 1) * b[5] - e(1, 2) * b[4] + e(1, 3) * b[3],
        -e(0, 1) * b[5] + e(0, 2) * b[4] - e(0, 3) * b[3],
         e(3, 1) * a[5] - e(3, 2) * a[4] + e(3, 3) * a[3],
        -e(2, 1) * a[5] + e(2, 2) * a[4] - e(2, 3) * a[3],

        -e(1, 0) * b[5] + e(1, 2) * b[2] - e(1, 3) * b[1],
         e(0, 0) * b[5] - e(0, 2) * b[2] + e(0, 3) * b[1],
        -e(3, 0) * a[5] + e(3, 2) * a[2] - e(3, 3) * a[1],
         e(2, 0) * a[5] - e(2, 2) * a[2] + e(2, 3) * a[1],

         e(1, 0) * b[4] - e(1, 1) * b[2] + e(1, 3) * b[0],
        -e(0, 0) * b[4] + e(0, 1) * b[2] - e(0, 3) * b[0],
         e(3, 0) * a[4] - e(3, 1) * a[2] + e(3, 3) * a[0],
        -e(2, 0) * a[4] + e(2, 1) * a[2] - e(2, 3) * a[0],

        -e(1, 0) * b[3] + e(1, 1) * b[1] - e(1, 2) * b[0],
         e(0, 0) * b[3] - e(0, 1) * b[1] + e(0, 2) * b[0],
        -e(3, 0) * a[3] + e(3, 1) * a[1] - e(3, 2) * a[0],
         e(2, 0) * a[3] - e(2, 1) * a[1] + e(2, 2) * a[0],
    ];

    let inv_det = det.rcp();
    let mut res = Matrix::zero();
    for (i, val) in adjugate.into_iter().enumerate() {
        res[(i / 4, i % 4)] = val * inv_det;
    }
    Some(res)
}

impl<T: Signed> Mat4<T> {
    /// Calculate the determinant using the 2x2 sub-determinant (Laplace) expansion
    #[must_use]
    pub fn cofactor_determinant(&self) -> T {
        cofactor_determinant(self)
    }
}

impl<T: Real> Mat4<T> {
    /// Calculate the inverse from the adjugate
    ///
    /// If `|det| <= EPSILON`, the identity matrix is returned.
    #[must_use]
    pub fn adjugate_inverse(&self) -> Self {
        adjugate_inverse(self).unwrap_or_else(Self::identity)
    }
}

impl<T: Numeric> Mat4<T> {
    /// Get the upper-left 3x3 block
    #[must_use]
    pub fn upper_left(&self) -> Mat3<T> {
        let mut res = Mat3::zero();
        for col in 0..3 {
            for row in 0..3 {
                res[(row, col)] = self[(row, col)];
            }
        }
        res
    }

    /// Get the translation stored in the last column
    #[must_use]
    pub fn translation(&self) -> Vec3<T> {
        self.column(3).xyz()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn sample() -> f64m4 {
        f64m4::new(Layout::RowMajor, [
            2.0, 1.0,  0.0, 3.0,
            1.0, 4.0, -1.0, 0.0,
            0.0, 2.0,  5.0, 1.0,
            1.0, 0.0,  1.0, 6.0,
        ])
    }

    #[test]
    fn closed_form_matches_gauss() {
        let m = sample();
        assert!(m.cofactor_determinant().is_close_to(m.gauss_determinant(), 1e-10));
        assert!(m.adjugate_inverse().is_close_to(m.gauss_inverse(), 1e-12));
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = sample();
        assert!((m.inverse() * m).is_close_to(f64m4::identity(), 1e-12));

        let m = m.cast::<f32>();
        assert!((m.inverse() * m).is_close_to(f32m4::identity(), 1e-5));
    }

    #[test]
    fn integral_determinant() {
        let m = i32m4::new(Layout::RowMajor, [1, 0, 2, -1, 3, 0, 0, 5, 2, 1, 4, -3, 1, 0, 5, 0]);
        assert_eq!(m.cofactor_determinant(), 30);
    }

    #[test]
    fn singular_gives_identity() {
        let mut m = sample();
        m.set_row(3, m.row(0) * 2.0);
        assert!(m.determinant().is_close_to(0.0, 1e-12));
        assert_eq!(m.adjugate_inverse(), f64m4::identity());
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn blocks() {
        let m = i32m4::new(Layout::RowMajor, [1, 2, 3, 10, 4, 5, 6, 20, 7, 8, 9, 30, 0, 0, 0, 1]);
        assert_eq!(m.upper_left(), i32m3::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(m.translation(), i32v3::new(10, 20, 30));
        assert_eq!(m.upper_left().extend().upper_left(), m.upper_left());
    }
}
