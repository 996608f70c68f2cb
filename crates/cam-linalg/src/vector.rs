use std::{array, fmt};

use crate::cache::Cached;

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vec4 = Vector<4>;

/// An `N`-element column vector of [`f32`] values.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] (also the [`Default`]) is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction.
///
/// # Element Access
///
/// - Elements can be read and written as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::into_array`] and [`Vector::as_bytes`] expose the raw
///   elements, eg. for uploading them to the GPU.
///
/// Any write access clears the cached [magnitude](Vector::magnitude).
///
/// ```
/// # use cam_linalg::*;
/// let mut v = vec2(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// v.x = 0.0;
/// assert_eq!(v.magnitude(), 4.0);
/// v[1] = 2.0;
/// assert_eq!(v.magnitude(), 2.0);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone)]
pub struct Vector<const N: usize> {
    elems: [f32; N],
    magnitude: Cached,
}

// Consts of types with a `Cell` are fine here: every use creates a fresh, independent value.
#[allow(clippy::declare_interior_mutable_const)]
impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self::from_array([0.0; N]);
}

#[allow(clippy::declare_interior_mutable_const)]
impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec2(1.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec2(0.0, 1.0);
}

#[allow(clippy::declare_interior_mutable_const)]
impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);
}

#[allow(clippy::declare_interior_mutable_const)]
impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec4(1.0, 0.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec4(0.0, 1.0, 0.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec4(0.0, 0.0, 1.0, 0.0);
    /// A unit vector pointing in the W direction.
    pub const W: Self = vec4(0.0, 0.0, 0.0, 1.0);
}

impl<const N: usize> Vector<N> {
    /// Creates a vector from an array of its elements.
    #[inline]
    pub const fn from_array(elems: [f32; N]) -> Self {
        Self {
            elems,
            magnitude: Cached::UNSET,
        }
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: f32) -> Self {
        Self::from_array([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let v = Vector::from_fn(|i| i as f32 * 10.0);
    /// assert_eq!(v, vec3(0.0, 10.0, 20.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self::from_array(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self::from_array(self.elems.map(f))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.elems
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.elems
    }

    /// Returns the native-endian byte representation of the elements.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.elems)
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [f32; N] {
        self.elems
    }

    /// Returns the length (Euclidean norm) of this vector.
    ///
    /// The result is computed on first use and cached until the vector is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// assert_eq!(Vec3::Z.magnitude(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    #[doc(alias = "length")]
    pub fn magnitude(&self) -> f32 {
        self.magnitude.get_or_compute(|| self.dot(self).sqrt())
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// Normalizing a zero vector divides by zero and results in NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(&self) -> Self {
        self / self.magnitude()
    }

    /// Multiplies every element by `s`.
    ///
    /// This is the same as `self * s`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).scale(2.0), vec4(2.0, 4.0, 6.0, 8.0));
    /// ```
    #[inline]
    pub fn scale(&self, s: f32) -> Self {
        self * s
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The products are summed from the first element to the last.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// assert_eq!(Vec3::X.dot(&Vec3::Y), 0.0);
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(&vec3(1.0, 2.0, 3.0)), 14.0);
    /// ```
    pub fn dot(&self, other: &Self) -> f32 {
        self.elems
            .iter()
            .zip(&other.elems)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Computes the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let a = vec2(1.0, 1.0);
    /// let b = vec2(4.0, 5.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// assert_eq!(b.distance(&a), 5.0);
    /// ```
    pub fn distance(&self, other: &Self) -> f32 {
        (self - other).magnitude().abs()
    }

    /// Returns whether every element is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.elems.iter().all(|&e| e == 0.0)
    }
}

impl Vector<2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(&self, value: f32) -> Vector<3> {
        let [x, y] = self.elems;
        vec3(x, y, value)
    }
}

impl Vector<3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(&self) -> Vector<2> {
        let [x, y, _] = self.elems;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// let point = vec3(5.0, 6.0, 7.0).extend(1.0);
    /// assert_eq!(point, vec4(5.0, 6.0, 7.0, 1.0));
    /// ```
    pub fn extend(&self, value: f32) -> Vector<4> {
        let [x, y, z] = self.elems;
        vec4(x, y, z, value)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule. Swapping the
    /// arguments negates the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cam_linalg::*;
    /// assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(&Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a1, a2, a3] = self.elems;
        let [b1, b2, b3] = other.elems;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl Vector<4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(&self) -> Vector<3> {
        let [x, y, z, _] = self.elems;
        vec3(x, y, z)
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self::from_array(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.elems
    }
}

impl<const N: usize> AsRef<[f32]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.elems
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.elems {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.elems {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector::from_array([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector::from_array([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector::from_array([x, y, z, w])
}

/// Computes the dot product of `a` and `b`. See [`Vector::dot`].
#[inline]
pub fn dot_product<const N: usize>(a: &Vector<N>, b: &Vector<N>) -> f32 {
    a.dot(b)
}

/// Computes the cross product of `a` and `b`. See [`Vector::cross`].
#[inline]
pub fn cross_product(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Computes the distance between `a` and `b`. See [`Vector::distance`].
#[inline]
pub fn distance<const N: usize>(a: &Vector<N>, b: &Vector<N>) -> f32 {
    a.distance(b)
}
