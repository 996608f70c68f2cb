use std::{array, fmt};

use crate::{cache::Cached, Vector};

mod ops;

/// A 2x2 matrix.
pub type Mat2 = Matrix<2>;
/// A 3x3 matrix.
pub type Mat3 = Matrix<3>;
/// A 4x4 matrix.
pub type Mat4 = Matrix<4>;

/// A square, column-major `N`x`N` matrix of [`f32`] values.
///
/// # Construction
///
/// - [`mat2`], [`mat3`] and [`mat4`] take their elements in column-major order, ie. the first `N`
///   arguments make up the first column.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix from an array of
///   row or column vectors (or arrays).
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::IDENTITY`] (also the [`Default`]) has 1 on its diagonal and 0 everywhere else.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - The [`transform`](crate::transform) module builds 4x4 transformation matrices.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use cam_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0.0, 1.0],
///     [2.0, 3.0],
/// ]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(0, 1)], 1.0);
/// assert_eq!(mat.at(1, 0), 2.0);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices.
///
/// Any write access clears the cached determinant.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone)]
pub struct Matrix<const N: usize> {
    columns: [[f32; N]; N],
    determinant: Cached,
}

#[allow(clippy::declare_interior_mutable_const)]
impl<const N: usize> Matrix<N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self::from_column_arrays([[0.0; N]; N]);

    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    pub const IDENTITY: Self = {
        let mut columns = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            columns[i][i] = 1.0;
            i += 1;
        }
        Self::from_column_arrays(columns)
    };
}

impl<const N: usize> Matrix<N> {
    const fn from_column_arrays(columns: [[f32; N]; N]) -> Self {
        Self {
            columns,
            determinant: Cached::UNSET,
        }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<[f32; N]>>(rows: [U; N]) -> Self {
        Self::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<[f32; N]>>(columns: [U; N]) -> Self {
        Self::from_column_arrays(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| (row * 10 + col) as f32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        Self::from_column_arrays(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self::from_column_arrays(self.columns.map(|column| column.map(&mut f)))
    }

    /// Returns the element at `row` and `col`.
    ///
    /// Equivalent to `self[(row, col)]`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }

    /// Returns a mutable reference to the element at `row` and `col`, clearing the cached
    /// determinant.
    ///
    /// Equivalent to `&mut self[(row, col)]`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self[(row, col)]
    }

    /// Returns column `col` as a [`Vector`].
    pub fn column(&self, col: usize) -> Vector<N> {
        Vector::from_array(self.columns[col])
    }

    /// Returns row `row` as a [`Vector`].
    pub fn row(&self, row: usize) -> Vector<N> {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let mat = mat2(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(mat.transpose(), mat2(1.0, 3.0, 2.0, 4.0));
    /// assert_eq!(mat.transpose().transpose(), mat);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(|row, col| self[(col, row)])
    }

    /// Multiplies every element by `s`.
    ///
    /// This is the same as `self * s`.
    #[inline]
    pub fn scale(&self, s: f32) -> Self {
        self * s
    }

    /// Returns whether this matrix is exactly equal to [`Matrix::IDENTITY`].
    pub fn is_identity(&self) -> bool {
        (0..N).all(|col| {
            (0..N).all(|row| {
                let expected = if row == col { 1.0 } else { 0.0 };
                self[(row, col)] == expected
            })
        })
    }

    /// Returns whether every element is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.columns.iter().flatten().all(|&e| e == 0.0)
    }

    /// Returns a reference to the columns of this matrix.
    #[inline]
    pub fn as_columns(&self) -> &[[f32; N]; N] {
        &self.columns
    }

    /// Returns the elements in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.columns)
    }

    /// Returns the native-endian byte representation of the elements in column-major order.
    ///
    /// This is the layout expected by graphics APIs for uniform and vertex data.
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let identity = Mat4::IDENTITY;
    /// let bytes = identity.as_bytes();
    /// assert_eq!(bytes.len(), 64);
    /// assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.columns)
    }

    /// Returns the matrix obtained by deleting `row` and `col`.
    ///
    /// `M` must be `N - 1`.
    fn minor<const M: usize>(&self, row: usize, col: usize) -> Matrix<M> {
        assert!(M + 1 == N);
        assert!(
            row < N && col < N,
            "submatrix ({row}, {col}) out of bounds for a {N}x{N} matrix"
        );
        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self[(r, c)]
        })
    }

    /// Laplace expansion along the first row, accumulating from column 0 with alternating signs.
    fn expand_first_row(&self, minor_determinant: impl Fn(usize) -> f32) -> f32 {
        (0..N).fold(0.0, |det, col| {
            let term = self[(0, col)] * minor_determinant(col);
            if col % 2 == 0 {
                det + term
            } else {
                det - term
            }
        })
    }
}

impl Matrix<2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// The value is computed on first use and cached until the matrix is modified.
    ///
    /// ```
    /// # use cam_linalg::*;
    /// assert_eq!(mat2(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> f32 {
        self.determinant
            .get_or_compute(|| self[(0, 0)] * self[(1, 1)] - self[(1, 0)] * self[(0, 1)])
    }
}

impl Matrix<3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row, and cached until the matrix is
    /// modified.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> f32 {
        self.determinant
            .get_or_compute(|| self.expand_first_row(|col| self.submatrix(0, col).determinant()))
    }

    /// Returns the 2x2 matrix obtained by deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// This method panics if `row` or `col` is out of bounds.
    pub fn submatrix(&self, row: usize, col: usize) -> Mat2 {
        self.minor(row, col)
    }
}

impl Matrix<4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row, and cached until the matrix is
    /// modified.
    ///
    /// ```
    /// # use cam_linalg::*;
    /// assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> f32 {
        self.determinant
            .get_or_compute(|| self.expand_first_row(|col| self.submatrix(0, col).determinant()))
    }

    /// Returns the 3x3 matrix obtained by deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// This method panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let m = Mat4::from_fn(|row, col| (row * 4 + col) as f32);
    /// assert_eq!(m.submatrix(0, 0), Mat3::from_rows([
    ///     [ 5.0,  6.0,  7.0],
    ///     [ 9.0, 10.0, 11.0],
    ///     [13.0, 14.0, 15.0],
    /// ]));
    /// ```
    pub fn submatrix(&self, row: usize, col: usize) -> Mat3 {
        self.minor(row, col)
    }
}

impl<const N: usize> Default for Matrix<N> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    /// Creates a matrix from an array of columns.
    #[inline]
    fn from(columns: [[f32; N]; N]) -> Self {
        Self::from_column_arrays(columns)
    }
}

/// Formats each row as a list, using `elem` to format the elements.
fn fmt_rows<const N: usize>(
    mat: &Matrix<N>,
    f: &mut fmt::Formatter<'_>,
    elem: fn(&f32, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    struct FormatRow<'a, const N: usize> {
        mat: &'a Matrix<N>,
        row: usize,
        elem: fn(&f32, &mut fmt::Formatter<'_>) -> fmt::Result,
    }
    impl<'a, const N: usize> fmt::Debug for FormatRow<'a, N> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[")?;
            for col in 0..N {
                if col != 0 {
                    write!(f, ", ")?;
                }
                (self.elem)(&self.mat[(self.row, col)], f)?;
            }
            write!(f, "]")?;
            Ok(())
        }
    }

    let mut list = f.debug_list();
    for row in 0..N {
        list.entry(&FormatRow { mat, row, elem });
    }
    list.finish()
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(self, f, <f32 as fmt::Debug>::fmt)
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(self, f, <f32 as fmt::Display>::fmt)
    }
}

/// Constructs a [`Mat2`] from its elements in column-major order.
#[inline]
pub fn mat2(m00: f32, m10: f32, m01: f32, m11: f32) -> Mat2 {
    Matrix::from_column_arrays([[m00, m10], [m01, m11]])
}

/// Constructs a [`Mat3`] from its elements in column-major order.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn mat3(
    m00: f32, m10: f32, m20: f32,
    m01: f32, m11: f32, m21: f32,
    m02: f32, m12: f32, m22: f32,
) -> Mat3 {
    Matrix::from_column_arrays([
        [m00, m10, m20],
        [m01, m11, m21],
        [m02, m12, m22],
    ])
}

/// Constructs a [`Mat4`] from its elements in column-major order.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn mat4(
    m00: f32, m10: f32, m20: f32, m30: f32,
    m01: f32, m11: f32, m21: f32, m31: f32,
    m02: f32, m12: f32, m22: f32, m32: f32,
    m03: f32, m13: f32, m23: f32, m33: f32,
) -> Mat4 {
    Matrix::from_column_arrays([
        [m00, m10, m20, m30],
        [m01, m11, m21, m31],
        [m02, m12, m22, m32],
        [m03, m13, m23, m33],
    ])
}
