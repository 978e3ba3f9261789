use crate::*;

// The closed forms are written against a generic square matrix, so the size dispatch in `Matrix` can reach them.
// They are only valid for `N == 3`.

pub(super) fn cofactor_determinant<T: Signed, const N: usize>(m: &Matrix<T, N, N>) -> T {
    debug_assert!(N == 3);
    let e = |row: usize, col: usize| m[(row, col)];

    e(0, 0) * (e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1)) -
    e(0, 1) * (e(1, 0) * e(2, 2) - e(1, 2) * e(2, 0)) +
    e(0, 2) * (e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0))
}

pub(super) fn adjugate_inverse<T: Real, const N: usize>(m: &Matrix<T, N, N>) -> Option<Matrix<T, N, N>> {
    debug_assert!(N == 3);
    let det = cofactor_determinant(m);
    if det.abs() <= T::EPSILON {
        return None;
    }

    let e = |row: usize, col: usize| m[(row, col)];
    let adjugate = [
        e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1),
        e(0, 2) * e(2, 1) - e(0, 1) * e(2, 2),
        e(0, 1) * e(1, 2) - e(0, 2) * e(1, 1),

        e(1, 2) * e(2, 0) - e(1, 0) * e(2, 2),
        e(0, 0) * e(2, 2) - e(0, 2) * e(2, 0),
        e(0, 2) * e(1, 0) - e(0, 0) * e(1, 2),

        e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0),
        e(0, 1) * e(2, 0) - e(0, 0) * e(2, 1),
        e(0, 0) * e(1, 1) - e(0, 1) * e(1, 0),
    ];

    let inv_det = det.rcp();
    let mut res = Matrix::zero();
    for (i, val) in adjugate.into_iter().enumerate() {
        res[(i / 3, i % 3)] = val * inv_det;
    }
    Some(res)
}

impl<T: Signed> Mat3<T> {
    /// Calculate the determinant using the cofactor expansion along the first row
    #[must_use]
    pub fn cofactor_determinant(&self) -> T {
        cofactor_determinant(self)
    }
}

impl<T: Real> Mat3<T> {
    /// Calculate the inverse from the adjugate
    ///
    /// If `|det| <= EPSILON`, the identity matrix is returned.
    #[must_use]
    pub fn adjugate_inverse(&self) -> Self {
        adjugate_inverse(self).unwrap_or_else(Self::identity)
    }
}

impl<T: Numeric> Mat3<T> {
    /// Embed the matrix in the upper-left block of a 4x4 matrix, with the remaining row and column set to identity
    #[must_use]
    pub fn extend(&self) -> Mat4<T> {
        let mut res = Mat4::identity();
        for col in 0..3 {
            for row in 0..3 {
                res[(row, col)] = self[(row, col)];
            }
        }
        res
    }
}
