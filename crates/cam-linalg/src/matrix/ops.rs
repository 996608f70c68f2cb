use std::{
    array,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{simd, Matrix, Vector};

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.columns[col][row]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        self.determinant.invalidate();
        &mut self.columns[col][row]
    }
}

/// Compares elements only; the cached determinant does not participate.
impl<const N: usize> PartialEq for Matrix<N> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl<const N: usize> AbsDiffEq for Matrix<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Matrix<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize> UlpsEq for Matrix<N> {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise addition.
impl<'a, 'b, const N: usize> Add<&'b Matrix<N>> for &'a Matrix<N> {
    type Output = Matrix<N>;

    fn add(self, rhs: &'b Matrix<N>) -> Matrix<N> {
        Matrix::from_column_arrays(array::from_fn(|col| {
            simd::add(&self.columns[col], &rhs.columns[col])
        }))
    }
}

/// Element-wise subtraction.
impl<'a, 'b, const N: usize> Sub<&'b Matrix<N>> for &'a Matrix<N> {
    type Output = Matrix<N>;

    fn sub(self, rhs: &'b Matrix<N>) -> Matrix<N> {
        Matrix::from_column_arrays(array::from_fn(|col| {
            simd::sub(&self.columns[col], &rhs.columns[col])
        }))
    }
}

/// Matrix * Matrix.
///
/// Column `j` of the product is `self` applied to column `j` of `rhs`.
impl<'a, 'b, const N: usize> Mul<&'b Matrix<N>> for &'a Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: &'b Matrix<N>) -> Matrix<N> {
        Matrix::from_column_arrays(array::from_fn(|col| {
            simd::combine(&self.columns, &rhs.columns[col])
        }))
    }
}

/// Matrix * Column Vector.
impl<'a, 'b, const N: usize> Mul<&'b Vector<N>> for &'a Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: &'b Vector<N>) -> Vector<N> {
        Vector::from_array(simd::combine(&self.columns, rhs.as_array()))
    }
}

forward_ref_binop!(impl Add, add for Matrix<N>, Matrix<N> => Matrix<N>);
forward_ref_binop!(impl Sub, sub for Matrix<N>, Matrix<N> => Matrix<N>);
forward_ref_binop!(impl Mul, mul for Matrix<N>, Matrix<N> => Matrix<N>);
forward_ref_binop!(impl Mul, mul for Matrix<N>, Vector<N> => Vector<N>);

assign_via_binop!(impl AddAssign, add_assign via Add::add for Matrix<N>, Matrix<N>);
assign_via_binop!(impl SubAssign, sub_assign via Sub::sub for Matrix<N>, Matrix<N>);
assign_via_binop!(impl MulAssign, mul_assign via Mul::mul for Matrix<N>, Matrix<N>);

/// Matrix * Scalar.
impl<const N: usize> Mul<f32> for &Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: f32) -> Matrix<N> {
        Matrix::from_column_arrays(self.columns.map(|column| simd::scale(&column, rhs)))
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: f32) -> Matrix<N> {
        &self * rhs
    }
}

/// Scalar * Matrix.
impl<const N: usize> Mul<&Matrix<N>> for f32 {
    type Output = Matrix<N>;

    fn mul(self, rhs: &Matrix<N>) -> Matrix<N> {
        rhs * self
    }
}

/// Scalar * Matrix.
impl<const N: usize> Mul<Matrix<N>> for f32 {
    type Output = Matrix<N>;

    fn mul(self, rhs: Matrix<N>) -> Matrix<N> {
        &rhs * self
    }
}

impl<const N: usize> MulAssign<f32> for Matrix<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = &*self * rhs;
    }
}
