//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::simd;

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.elems[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        self.magnitude.invalidate();
        &mut self.elems[index]
    }
}

/// Compares elements only; the cached magnitude does not participate.
impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector<N> {
    fn eq(&self, other: &[f32; N]) -> bool {
        self.elems == *other
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [f32; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.elems
    }
}

impl<const N: usize> AbsDiffEq for Vector<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elems
            .iter()
            .zip(&other.elems)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Vector<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.elems
            .iter()
            .zip(&other.elems)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize> UlpsEq for Vector<N> {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.elems
            .iter()
            .zip(&other.elems)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for &Vector<N> {
    type Output = Vector<N>;

    fn neg(self) -> Vector<N> {
        self.map(|e| -e)
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Vector<N>;

    fn neg(self) -> Vector<N> {
        -&self
    }
}

/// Element-wise addition.
impl<'a, 'b, const N: usize> Add<&'b Vector<N>> for &'a Vector<N> {
    type Output = Vector<N>;

    fn add(self, rhs: &'b Vector<N>) -> Vector<N> {
        Vector::from_array(simd::add(&self.elems, &rhs.elems))
    }
}

/// Element-wise subtraction.
impl<'a, 'b, const N: usize> Sub<&'b Vector<N>> for &'a Vector<N> {
    type Output = Vector<N>;

    fn sub(self, rhs: &'b Vector<N>) -> Vector<N> {
        Vector::from_array(simd::sub(&self.elems, &rhs.elems))
    }
}

/// Element-wise multiplication.
impl<'a, 'b, const N: usize> Mul<&'b Vector<N>> for &'a Vector<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: &'b Vector<N>) -> Vector<N> {
        Vector::from_array(simd::mul(&self.elems, &rhs.elems))
    }
}

/// Element-wise division.
impl<'a, 'b, const N: usize> Div<&'b Vector<N>> for &'a Vector<N> {
    type Output = Vector<N>;

    fn div(self, rhs: &'b Vector<N>) -> Vector<N> {
        Vector::from_array(simd::div(&self.elems, &rhs.elems))
    }
}

forward_ref_binop!(impl Add, add for Vector<N>, Vector<N> => Vector<N>);
forward_ref_binop!(impl Sub, sub for Vector<N>, Vector<N> => Vector<N>);
forward_ref_binop!(impl Mul, mul for Vector<N>, Vector<N> => Vector<N>);
forward_ref_binop!(impl Div, div for Vector<N>, Vector<N> => Vector<N>);

assign_via_binop!(impl AddAssign, add_assign via Add::add for Vector<N>, Vector<N>);
assign_via_binop!(impl SubAssign, sub_assign via Sub::sub for Vector<N>, Vector<N>);
assign_via_binop!(impl MulAssign, mul_assign via Mul::mul for Vector<N>, Vector<N>);
assign_via_binop!(impl DivAssign, div_assign via Div::div for Vector<N>, Vector<N>);

/// Scalar multiplication.
impl<const N: usize> Mul<f32> for &Vector<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: f32) -> Vector<N> {
        Vector::from_array(simd::scale(&self.elems, rhs))
    }
}

/// Scalar multiplication.
impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: f32) -> Vector<N> {
        &self * rhs
    }
}

/// Scalar multiplication.
impl<const N: usize> Mul<&Vector<N>> for f32 {
    type Output = Vector<N>;

    fn mul(self, rhs: &Vector<N>) -> Vector<N> {
        rhs * self
    }
}

/// Scalar multiplication.
impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        &rhs * self
    }
}

/// Scalar multiplication.
impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = &*self * rhs;
    }
}

/// Scalar division.
impl<const N: usize> Div<f32> for &Vector<N> {
    type Output = Vector<N>;

    fn div(self, rhs: f32) -> Vector<N> {
        Vector::from_array(simd::div(&self.elems, &[rhs; N]))
    }
}

/// Scalar division.
impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Vector<N>;

    fn div(self, rhs: f32) -> Vector<N> {
        &self / rhs
    }
}

/// Scalar division.
impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        *self = &*self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_relative_eq, assert_ulps_eq};

    use crate::{vec2, vec3, vec4, Vec3};

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(&a + &b, vec3(5.0, 7.0, 9.0));
        assert_eq!(&b - &a, [3.0, 3.0, 3.0]);
        assert_eq!(&a * &b, vec3(4.0, 10.0, 18.0));
        assert_eq!(&b / &a, vec3(4.0, 2.5, 2.0));
        assert_eq!(a.clone() + b.clone(), a.clone() + &b);
        assert_eq!(&a + b.clone(), a + b);
    }

    #[test]
    fn scalar() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(&v * 2.0, vec4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * &v, &v * 2.0);
        assert_eq!(&v / 2.0, vec4(0.5, 1.0, 1.5, 2.0));
        assert_eq!(v.clone() * 0.0, [0.0; 4]);
        assert_eq!(-v, vec4(-1.0, -2.0, -3.0, -4.0));

        let v = vec2(1.0, -1.0) / 0.0;
        assert_eq!(v, [f32::INFINITY, f32::NEG_INFINITY]);
    }

    #[test]
    fn equality_ignores_cache() {
        let a = vec3(1.0, 2.0, 2.0);
        let b = a.clone();
        assert_eq!(a.magnitude(), 3.0);
        assert_eq!(a, b);
        assert_ne!(a, Vec3::ZERO);
    }

    #[test]
    fn approx() {
        let a = vec3(0.1, 0.2, 0.3);
        let b = vec3(0.1, 0.2, f32::from_bits(0.3f32.to_bits() + 1));
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);
        assert!(approx::abs_diff_ne!(a, vec3(0.1, 0.2, 0.31)));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec2(1.0, 2.0);
        let _ = v[2];
    }
}
