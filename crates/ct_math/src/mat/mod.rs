use core::{
    array,
    fmt::Display,
    ops::*,
};
use crate::*;

mod mat3;
mod mat4;

/// Order in which a flat list of scalars is read when constructing a matrix
///
/// The layout only affects construction, matrices are always stored column-major.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layout {
    /// The scalars are read row by row
    RowMajor,
    /// The scalars are read column by column
    ColumnMajor,
}

struct AssertLen<const L: usize, const R: usize, const C: usize>;

impl<const L: usize, const R: usize, const C: usize> AssertLen<L, R, C> {
    const OK: () = assert!(L == R * C, "the number of scalars needs to match the number of matrix elements");
}

/// A fixed-size matrix with `R` rows and `C` columns
///
/// Elements are stored column-major: element `(row, col)` lives in column `col`, at index `row`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Matrix<T: Numeric, const R: usize, const C: usize> {
    cols: [[T; R]; C],
}

impl<T: Numeric, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a flat list of exactly `R * C` scalars, read in the given layout
    #[must_use]
    pub fn new<const L: usize>(layout: Layout, vals: [T; L]) -> Self {
        let () = AssertLen::<L, R, C>::OK;
        let cols = match layout {
            Layout::RowMajor    => array::from_fn(|col| array::from_fn(|row| vals[row * C + col])),
            Layout::ColumnMajor => array::from_fn(|col| array::from_fn(|row| vals[col * R + row])),
        };
        Self { cols }
    }

    /// Create a matrix with all elements set to `val`
    #[inline(always)]
    #[must_use]
    pub fn set(val: T) -> Self {
        Self { cols: [[val; R]; C] }
    }

    /// Create a matrix from an array of columns
    #[inline(always)]
    #[must_use]
    pub fn from_columns_array(cols: [[T; R]; C]) -> Self {
        Self { cols }
    }

    /// Create a matrix from an array of rows
    #[inline]
    #[must_use]
    pub fn from_rows_array(rows: [[T; C]; R]) -> Self {
        Self { cols: array::from_fn(|col| array::from_fn(|row| rows[row][col])) }
    }

    /// Create a matrix from row vectors
    #[inline]
    #[must_use]
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self::from_rows_array(rows.map(Vector::to_array))
    }

    /// Create a matrix from column vectors
    #[inline]
    #[must_use]
    pub fn from_columns(cols: [Vector<T, R>; C]) -> Self {
        Self { cols: cols.map(Vector::to_array) }
    }

    /// Convert each element to another numeric type
    #[inline]
    #[must_use]
    pub fn cast<U: Numeric>(self) -> Matrix<U, R, C> where
        T: NumericCast<U>
    {
        Matrix { cols: self.cols.map(|col| col.map(|val| val.cast())) }
    }

    //------------------------------

    #[inline(always)]
    #[must_use]
    pub fn to_columns_array(self) -> [[T; R]; C] {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn to_rows_array(self) -> [[T; C]; R] {
        array::from_fn(|row| array::from_fn(|col| self.cols[col][row]))
    }

    /// Get the elements as a contiguous column-major slice of `R * C` scalars
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.cols.as_flattened()
    }

    #[inline(always)]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cols.as_flattened_mut()
    }

    /// Get a pointer to the first of `R * C` contiguous column-major elements
    #[inline(always)]
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.cols.as_ptr().cast()
    }

    #[inline(always)]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.cols.as_mut_ptr().cast()
    }

    //------------------------------

    /// Get a row
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Vector<T, C> {
        debug_assert!(row < R, "row {row} out of bounds for a matrix with {R} rows");
        Vector::from_array(array::from_fn(|col| self.cols[col][row]))
    }

    /// Get a column
    #[inline]
    #[must_use]
    pub fn column(&self, col: usize) -> Vector<T, R> {
        debug_assert!(col < C, "column {col} out of bounds for a matrix with {C} columns");
        Vector::from_array(self.cols[col])
    }

    /// Replace a row
    #[inline]
    pub fn set_row(&mut self, row: usize, vals: Vector<T, C>) {
        debug_assert!(row < R, "row {row} out of bounds for a matrix with {R} rows");
        for (col, val) in self.cols.iter_mut().zip(vals.iter()) {
            col[row] = *val;
        }
    }

    /// Replace a column
    #[inline]
    pub fn set_column(&mut self, col: usize, vals: Vector<T, R>) {
        debug_assert!(col < C, "column {col} out of bounds for a matrix with {C} columns");
        self.cols[col] = vals.to_array();
    }

    /// Get the transpose of the matrix
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Matrix<T, C, R> {
        Matrix::from_rows_array(self.cols)
    }
}

impl<T: Numeric, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix
    #[must_use]
    pub fn identity() -> Self {
        Self { cols: array::from_fn(|col| array::from_fn(|row| if row == col { T::one() } else { T::zero() })) }
    }

    /// Get the elements on the main diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_array(array::from_fn(|i| self.cols[i][i]))
    }

    /// Calculate the trace, i.e. the sum of the main diagonal
    #[inline]
    #[must_use]
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.cols[i][i])
    }
}

impl<T: Signed, const N: usize> Matrix<T, N, N> {
    /// Calculate the determinant
    ///
    /// 3x3 and 4x4 matrices use the closed-form cofactor expansion, all other sizes use [`Matrix::gauss_determinant`].
    /// The result is exact for integral types.
    #[must_use]
    pub fn determinant(&self) -> T {
        match N {
            3 => mat3::cofactor_determinant(self),
            4 => mat4::cofactor_determinant(self),
            _ => self.gauss_determinant(),
        }
    }

    /// Calculate the determinant using Gaussian elimination with partial pivoting
    ///
    /// Integral types use fraction-free elimination (Bareiss), every division in it is exact.
    #[must_use]
    pub fn gauss_determinant(&self) -> T {
        if T::IS_INTEGRAL {
            return self.fraction_free_determinant();
        }

        let mut a = self.to_rows_array();
        let mut det = T::one();

        for i in 0..N {
            let (pivot, maxv) = Self::find_pivot(&a, i);
            if maxv == T::zero() {
                return T::zero();
            }
            if pivot != i {
                a.swap(i, pivot);
                det = -det;
            }
            det *= a[i][i];

            let pivot_row = a[i];
            for row in &mut a[i + 1..] {
                let factor = row[i] / pivot_row[i];
                for col in i..N {
                    row[col] -= factor * pivot_row[col];
                }
            }
        }
        det
    }

    fn fraction_free_determinant(&self) -> T {
        let mut a = self.to_rows_array();
        let mut sign = T::one();
        let mut prev = T::one();

        for i in 0..N {
            let (pivot, maxv) = Self::find_pivot(&a, i);
            if maxv == T::zero() {
                return T::zero();
            }
            if pivot != i {
                a.swap(i, pivot);
                sign = -sign;
            }

            let pivot_row = a[i];
            for row in &mut a[i + 1..] {
                let lead = row[i];
                for col in i + 1..N {
                    row[col] = (row[col] * pivot_row[i] - lead * pivot_row[col]) / prev;
                }
            }
            prev = pivot_row[i];
        }
        sign * a[N - 1][N - 1]
    }

    // Row with the largest magnitude in column `col`, searching from row `col` downwards.
    fn find_pivot(a: &[[T; N]; N], col: usize) -> (usize, T) {
        let mut pivot = col;
        let mut maxv = a[col][col].abs();
        for row in col + 1..N {
            let val = a[row][col].abs();
            if val > maxv {
                maxv = val;
                pivot = row;
            }
        }
        (pivot, maxv)
    }
}

impl<T: Real, const N: usize> Matrix<T, N, N> {
    /// Calculate the inverse
    ///
    /// 3x3 and 4x4 matrices use the closed-form adjugate, and return the identity when `|det| <= EPSILON`.
    /// All other sizes use [`Matrix::gauss_inverse`], which returns its partially reduced result for a near-singular matrix.
    /// Use [`Matrix::try_inverse`] to detect singular matrices.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match N {
            3 | 4 => self.try_inverse().unwrap_or_else(Self::identity),
            _ => self.gauss_inverse(),
        }
    }

    /// Calculate the inverse, or `None` when the matrix is singular
    ///
    /// A matrix is singular when a pivot's magnitude is `<= EPSILON` (Gauss-Jordan),
    /// or when `|det| <= EPSILON` for the closed-form 3x3 and 4x4 paths.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        match N {
            3 => mat3::adjugate_inverse(self),
            4 => mat4::adjugate_inverse(self),
            _ => self.gauss_jordan().ok(),
        }
    }

    /// Calculate the inverse using Gauss-Jordan elimination
    ///
    /// When a pivot's magnitude is `<= EPSILON` the elimination stops, and the partially reduced inverse is returned as-is.
    #[must_use]
    pub fn gauss_inverse(&self) -> Self {
        match self.gauss_jordan() {
            Ok(inv) => inv,
            Err(partial) => partial,
        }
    }

    // Returns the partially reduced inverse as the error when the matrix is singular.
    fn gauss_jordan(&self) -> Result<Self, Self> {
        let mut a = self.to_rows_array();
        let mut inv = Self::identity().to_rows_array();

        for i in 0..N {
            let (pivot, maxv) = Self::find_pivot(&a, i);
            if maxv <= T::EPSILON {
                return Err(Self::from_rows_array(inv));
            }
            a.swap(i, pivot);
            inv.swap(i, pivot);

            let rcp = a[i][i].rcp();
            for col in 0..N {
                a[i][col] *= rcp;
                inv[i][col] *= rcp;
            }

            let pivot_row = a[i];
            let pivot_inv_row = inv[i];
            for row in (0..N).filter(|&row| row != i) {
                let factor = a[row][i];
                for col in 0..N {
                    a[row][col] -= factor * pivot_row[col];
                    inv[row][col] -= factor * pivot_inv_row[col];
                }
            }
        }
        Ok(Self::from_rows_array(inv))
    }
}

//--------------------------------------------------------------

impl<T: Numeric, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < R && col < C, "element ({row}, {col}) out of bounds for mat{R}x{C}");
        &self.cols[col][row]
    }
}

impl<T: Numeric, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < R && col < C, "element ({row}, {col}) out of bounds for mat{R}x{C}");
        &mut self.cols[col][row]
    }
}

/// Index a column
impl<T: Numeric, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; R];

    #[inline(always)]
    fn index(&self, col: usize) -> &Self::Output {
        debug_assert!(col < C, "column {col} out of bounds for mat{R}x{C}");
        &self.cols[col]
    }
}

impl<T: Numeric, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        debug_assert!(col < C, "column {col} out of bounds for mat{R}x{C}");
        &mut self.cols[col]
    }
}

//--------------------------------------------------------------

macro_rules! impl_mat_op {
    {$trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $op:tt} => {
        impl<T: Numeric, const R: usize, const C: usize> $trait for Matrix<T, R, C> {
            type Output = Self;

            #[inline]
            fn $fun(self, rhs: Self) -> Self {
                Self { cols: array::from_fn(|col| array::from_fn(|row| self.cols[col][row] $op rhs.cols[col][row])) }
            }
        }

        impl<T: Numeric, const R: usize, const C: usize> $assign_trait for Matrix<T, R, C> {
            #[inline]
            fn $assign_fun(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
    {@scalar $trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $op:tt} => {
        impl<T: Numeric, const R: usize, const C: usize> $trait<T> for Matrix<T, R, C> {
            type Output = Self;

            #[inline]
            fn $fun(self, rhs: T) -> Self {
                Self { cols: self.cols.map(|col| col.map(|val| val $op rhs)) }
            }
        }

        impl<T: Numeric, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C> {
            #[inline]
            fn $assign_fun(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}
impl_mat_op!{ Add, add, AddAssign, add_assign, + }
impl_mat_op!{ Sub, sub, SubAssign, sub_assign, - }
impl_mat_op!{ @scalar Mul, mul, MulAssign, mul_assign, * }

impl<T: Numeric, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::zero(), "division by zero");
        Self { cols: self.cols.map(|col| col.map(|val| val / rhs)) }
    }
}

impl<T: Numeric, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Signed, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self { cols: self.cols.map(|col| col.map(|val| -val)) }
    }
}

impl<T: Numeric, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        Matrix { cols: array::from_fn(|k| array::from_fn(|row| {
            (0..C).fold(T::zero(), |acc, col| acc + self.cols[col][row] * rhs.cols[k][col])
        })) }
    }
}

impl<T: Numeric, const N: usize> MulAssign for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Scalar pre-multiplication can't be implemented generically over `T`, so it's generated per primitive
macro_rules! impl_mat_premul {
    ($($ty:ty)*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$ty, R, C>> for $ty {
                type Output = Matrix<$ty, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$ty, R, C>) -> Matrix<$ty, R, C> {
                    rhs * self
                }
            }
        )*
    };
}
impl_mat_premul!{ i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }

//--------------------------------------------------------------

impl<T: Numeric, const R: usize, const C: usize> Zero for Matrix<T, R, C> {
    #[inline(always)]
    fn zero() -> Self {
        Self::set(T::zero())
    }
}

impl<T: Numeric, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Numeric, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.as_slice().iter()
            .zip(rhs.as_slice().iter())
            .all(|(&a, &b)| a.is_close_to(b, epsilon))
    }
}

/// Matrices compare element-wise within `T::EPSILON`, which makes the comparison exact for integral types
impl<T: Numeric, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.is_approx_eq(*other)
    }
}

impl<T: Numeric, const R: usize, const C: usize> Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "mat{R}x{C}(")?;
        for row in 0..R {
            f.write_str("  [")?;
            for col in 0..C {
                if col != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.cols[col][row])?;
            }
            f.write_str(if row + 1 == R { "]\n" } else { "],\n" })?;
        }
        f.write_str(")")
    }
}

//--------------------------------------------------------------

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;

#[allow(non_camel_case_types)] pub type f32m2 = Mat2<f32>;
#[allow(non_camel_case_types)] pub type f32m3 = Mat3<f32>;
#[allow(non_camel_case_types)] pub type f32m4 = Mat4<f32>;
#[allow(non_camel_case_types)] pub type f64m2 = Mat2<f64>;
#[allow(non_camel_case_types)] pub type f64m3 = Mat3<f64>;
#[allow(non_camel_case_types)] pub type f64m4 = Mat4<f64>;
#[allow(non_camel_case_types)] pub type i32m2 = Mat2<i32>;
#[allow(non_camel_case_types)] pub type i32m3 = Mat3<i32>;
#[allow(non_camel_case_types)] pub type i32m4 = Mat4<i32>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_layouts() {
        let r = Matrix::<i32, 2, 3>::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6]);
        assert_eq!(r[(0, 2)], 3);
        assert_eq!(r[(1, 0)], 4);
        assert_eq!(r.as_slice(), &[1, 4, 2, 5, 3, 6]);

        let c = Matrix::<i32, 2, 3>::new(Layout::ColumnMajor, [1, 4, 2, 5, 3, 6]);
        assert_eq!(r, c);
        assert_eq!(c.to_rows_array(), [[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn test_integral_determinant() {
        assert_eq!(i32m2::new(Layout::RowMajor, [3, 8, 4, 6]).determinant(), -14);
        assert_eq!(i32m2::new(Layout::RowMajor, [1, 2, 2, 4]).determinant(), 0);

        let m = Matrix::<i32, 5, 5>::new(Layout::RowMajor, [
            1, 1, 1, 1, 1,
            1, 3, 0, 0, 0,
            0, 1, 1, 0, 0,
            4, 0, 2, 5, 0,
            2, 0, 0, 0, 0,
        ]);
        assert_eq!(m.determinant(), -30);
        assert_eq!(m.transpose().gauss_determinant(), -30);
        assert!(m.cast::<f64>().determinant().is_close_to(-30.0, 1e-9));

        let m4 = i32m4::new(Layout::RowMajor, [
            2, -1, 0, 3,
            1, 4, 2, -2,
            0, 3, -1, 1,
            5, 0, 2, 1,
        ]);
        assert_eq!(m4.gauss_determinant(), m4.determinant());
    }

    #[test]
    fn test_cmp_integral_extremes() {
        let a = i32m2::new(Layout::RowMajor, [i32::MIN, 0, 0, 1]);
        let b = i32m2::new(Layout::RowMajor, [i32::MAX, 0, 0, 1]);
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert_ne!(Matrix::<i16, 2, 2>::set(-20000), Matrix::<i16, 2, 2>::set(20000));
    }

    #[test]
    fn test_rows_and_columns() {
        let mut m = i32m3::from_rows([
            i32v3::new(1, 2, 3),
            i32v3::new(4, 5, 6),
            i32v3::new(7, 8, 9),
        ]);
        assert_eq!(m.row(1), i32v3::new(4, 5, 6));
        assert_eq!(m.column(2), i32v3::new(3, 6, 9));
        assert_eq!(m[1], [2, 5, 8]);
        assert_eq!(m, i32m3::from_columns([m.column(0), m.column(1), m.column(2)]));

        m.set_row(0, i32v3::set(0));
        m.set_column(2, i32v3::new(-1, -2, -3));
        assert_eq!(m.to_rows_array(), [[0, 0, -1], [4, 5, -2], [7, 8, -3]]);

        m[(2, 0)] = 42;
        assert_eq!(m.row(2), i32v3::new(42, 8, -3));
    }

    #[test]
    fn test_raw_access() {
        let m = f32m2::new(Layout::RowMajor, [1.0, 2.0, 3.0, 4.0]);
        let ptr = m.as_ptr();
        unsafe {
            assert_eq!(*ptr, 1.0);
            assert_eq!(*ptr.add(1), 3.0);
            assert_eq!(*ptr.add(2), 2.0);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = i32m2::new(Layout::RowMajor, [1, 2, 3, 4]);
        let b = i32m2::new(Layout::RowMajor, [5, 6, 7, 8]);

        assert_eq!(a + b, i32m2::new(Layout::RowMajor, [6, 8, 10, 12]));
        assert_eq!(b - a, i32m2::set(4));
        assert_eq!(a * 2, 2 * a);
        assert_eq!((a * 3) / 3, a);
        assert_eq!(-a, i32m2::new(Layout::RowMajor, [-1, -2, -3, -4]));
        assert_eq!(a * b, i32m2::new(Layout::RowMajor, [19, 22, 43, 50]));

        let mut c = a;
        c *= b;
        c += a;
        assert_eq!(c, i32m2::new(Layout::RowMajor, [20, 24, 46, 54]));
    }

    #[test]
    fn test_rectangular_product() {
        let a = Matrix::<i32, 2, 3>::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6]);
        let b = Matrix::<i32, 3, 2>::new(Layout::RowMajor, [7, 8, 9, 10, 11, 12]);
        let ab: Matrix<i32, 2, 2> = a * b;
        assert_eq!(ab, i32m2::new(Layout::RowMajor, [58, 64, 139, 154]));
        assert_eq!(a.transpose(), Matrix::<i32, 3, 2>::new(Layout::RowMajor, [1, 4, 2, 5, 3, 6]));
    }

    #[test]
    fn test_trace_and_diagonal() {
        let m = i32m3::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.trace(), 15);
        assert_eq!(m.diagonal(), i32v3::new(1, 5, 9));
        assert_eq!(i32m4::identity().trace(), 4);
    }

    #[test]
    fn test_identity_determinant() {
        assert_eq!(f32m2::identity().determinant(), 1.0);
        assert_eq!(f32m3::identity().determinant(), 1.0);
        assert_eq!(f32m4::identity().determinant(), 1.0);
        assert_eq!(Matrix::<f64, 5, 5>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<f64, 7, 7>::identity().gauss_determinant(), 1.0);
    }

    #[test]
    fn test_gauss_determinant_pivots() {
        // Needs a row swap on the first column
        let m = f64m2::new(Layout::RowMajor, [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(m.gauss_determinant(), -1.0);

        let m = f64m3::new(Layout::RowMajor, [2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0]);
        assert!(m.gauss_determinant().is_close_to(49.0, 1e-12));
        assert!(m.determinant().is_close_to(49.0, 1e-12));
    }

    fn well_conditioned_5x5() -> Matrix<f64, 5, 5> {
        Matrix::new(Layout::RowMajor, [
            10.0,  1.0, -2.0,  0.5,  3.0,
             2.0, 12.0,  1.0, -1.0,  0.0,
            -1.0,  3.0,  9.0,  2.0,  1.5,
             0.0, -2.0,  1.0, 11.0, -3.0,
             4.0,  0.5,  0.0,  1.0,  8.0,
        ])
    }

    #[test]
    fn test_gauss_inverse() {
        let a = well_conditioned_5x5();
        let inv = a.inverse();
        let id = Matrix::<f64, 5, 5>::identity();

        assert!((inv * a).is_close_to(id, 1e-10));
        assert!((a * inv).is_close_to(id, 1e-10));
        assert!(a.try_inverse().is_some());
        assert!(a.gauss_determinant().is_close_to(a.transpose().gauss_determinant(), 1e-6));
    }

    #[test]
    fn test_singular_generic() {
        let m = f32m2::new(Layout::RowMajor, [1.0, 2.0, 2.0, 4.0]);
        assert_eq!(m.determinant(), 0.0);

        // The elimination stops at the second pivot, after the first column was reduced
        let partial = f32m2::new(Layout::RowMajor, [0.0, 0.5, 1.0, -0.5]);
        assert_eq!(m.gauss_inverse(), partial);
        assert_eq!(m.inverse(), partial);
        assert_eq!(m.try_inverse(), None);
    }

    #[test]
    fn test_display() {
        let m = i32m2::new(Layout::RowMajor, [1, 2, 3, 4]);
        assert_eq!(format!("{m}"), "mat2x2(\n  [1, 2],\n  [3, 4]\n)");

        let m = Matrix::<i32, 2, 3>::new(Layout::RowMajor, [1, 2, 3, 4, 5, 6]);
        assert_eq!(format!("{m}"), "mat2x3(\n  [1, 2, 3],\n  [4, 5, 6]\n)");
    }

    #[test]
    fn test_cast() {
        let m = f32m2::new(Layout::RowMajor, [1.5, -2.5, 3.0, 4.9]);
        assert_eq!(m.cast::<i32>(), i32m2::new(Layout::RowMajor, [1, -2, 3, 4]));
        assert_eq!(i32m2::identity().cast::<f64>(), f64m2::identity());
    }
}
