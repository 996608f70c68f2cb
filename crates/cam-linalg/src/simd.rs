//! Arithmetic backends.
//!
//! Every lanewise vector and matrix operation is expressed in terms of the [`Lanes`] trait, which
//! operates on groups of 4 `f32` values. Vectors and matrix columns are split into groups of 4,
//! and the last group is padded with `1.0` (so that padding lanes never divide by zero). Padding
//! lanes are discarded after each operation.
//!
//! Two implementations exist:
//!
//! - [`Scalar`] performs every lane operation with plain `f32` arithmetic.
//! - `Wide` (only with the `simd` feature on x86 and ARM targets) uses `wide::f32x4`.
//!
//! The backend used by the rest of the library is [`Active`], selected at compile time. Both
//! backends evaluate the same IEEE-754 operations in the same order and never contract
//! multiplications and additions into fused multiply-adds, so their results are bit-identical.

/// A set of 4-lane `f32` primitives.
pub trait Lanes {
    /// Human-readable name of the backend.
    const NAME: &'static str;

    fn add(a: [f32; 4], b: [f32; 4]) -> [f32; 4];
    fn sub(a: [f32; 4], b: [f32; 4]) -> [f32; 4];
    fn mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4];
    fn div(a: [f32; 4], b: [f32; 4]) -> [f32; 4];

    /// Multiplies every lane of `a` by `s`.
    fn scale(a: [f32; 4], s: f32) -> [f32; 4];

    /// Computes `acc + a * s` lanewise, rounding the product before the addition.
    fn mul_add(acc: [f32; 4], a: [f32; 4], s: f32) -> [f32; 4];
}

/// Plain `f32` backend.
pub struct Scalar;

impl Lanes for Scalar {
    const NAME: &'static str = "scalar";

    #[inline]
    fn add(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
    }

    #[inline]
    fn sub(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
    }

    #[inline]
    fn mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]]
    }

    #[inline]
    fn div(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        [a[0] / b[0], a[1] / b[1], a[2] / b[2], a[3] / b[3]]
    }

    #[inline]
    fn scale(a: [f32; 4], s: f32) -> [f32; 4] {
        a.map(|lane| lane * s)
    }

    #[inline]
    fn mul_add(acc: [f32; 4], a: [f32; 4], s: f32) -> [f32; 4] {
        [
            acc[0] + a[0] * s,
            acc[1] + a[1] * s,
            acc[2] + a[2] * s,
            acc[3] + a[3] * s,
        ]
    }
}

/// `wide::f32x4` backend (SSE on x86, NEON on ARM).
#[cfg(all(
    feature = "simd",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64"
    )
))]
pub struct Wide;

#[cfg(all(
    feature = "simd",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64"
    )
))]
impl Lanes for Wide {
    const NAME: &'static str = "wide (f32x4)";

    #[inline]
    fn add(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        (wide::f32x4::from(a) + wide::f32x4::from(b)).to_array()
    }

    #[inline]
    fn sub(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        (wide::f32x4::from(a) - wide::f32x4::from(b)).to_array()
    }

    #[inline]
    fn mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        (wide::f32x4::from(a) * wide::f32x4::from(b)).to_array()
    }

    #[inline]
    fn div(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        (wide::f32x4::from(a) / wide::f32x4::from(b)).to_array()
    }

    #[inline]
    fn scale(a: [f32; 4], s: f32) -> [f32; 4] {
        (wide::f32x4::from(a) * wide::f32x4::splat(s)).to_array()
    }

    #[inline]
    fn mul_add(acc: [f32; 4], a: [f32; 4], s: f32) -> [f32; 4] {
        // Not `f32x4::mul_add`: it may fuse and round differently than `Scalar`.
        let product = wide::f32x4::from(a) * wide::f32x4::splat(s);
        (wide::f32x4::from(acc) + product).to_array()
    }
}

/// The backend selected at compile time.
#[cfg(all(
    feature = "simd",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64"
    )
))]
pub type Active = Wide;

/// The backend selected at compile time.
#[cfg(not(all(
    feature = "simd",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64"
    )
)))]
pub type Active = Scalar;

/// Name of the [`Active`] backend.
pub const BACKEND: &str = <Active as Lanes>::NAME;

const PAD: f32 = 1.0;

#[inline]
fn load(chunk: &[f32]) -> [f32; 4] {
    let mut lanes = [PAD; 4];
    lanes[..chunk.len()].copy_from_slice(chunk);
    lanes
}

/// Applies a binary lane operation to two `N`-element arrays.
#[inline]
pub(crate) fn zip_with<const N: usize>(
    a: &[f32; N],
    b: &[f32; N],
    op: fn([f32; 4], [f32; 4]) -> [f32; 4],
) -> [f32; N] {
    let mut out = [0.0; N];
    for ((out, a), b) in out.chunks_mut(4).zip(a.chunks(4)).zip(b.chunks(4)) {
        let lanes = op(load(a), load(b));
        out.copy_from_slice(&lanes[..out.len()]);
    }
    out
}

#[inline]
pub(crate) fn add<const N: usize>(a: &[f32; N], b: &[f32; N]) -> [f32; N] {
    zip_with(a, b, Active::add)
}

#[inline]
pub(crate) fn sub<const N: usize>(a: &[f32; N], b: &[f32; N]) -> [f32; N] {
    zip_with(a, b, Active::sub)
}

#[inline]
pub(crate) fn mul<const N: usize>(a: &[f32; N], b: &[f32; N]) -> [f32; N] {
    zip_with(a, b, Active::mul)
}

#[inline]
pub(crate) fn div<const N: usize>(a: &[f32; N], b: &[f32; N]) -> [f32; N] {
    zip_with(a, b, Active::div)
}

#[inline]
pub(crate) fn scale<const N: usize>(a: &[f32; N], s: f32) -> [f32; N] {
    scale_with::<Active, N>(a, s)
}

#[inline]
fn scale_with<B: Lanes, const N: usize>(a: &[f32; N], s: f32) -> [f32; N] {
    let mut out = [0.0; N];
    for (out, a) in out.chunks_mut(4).zip(a.chunks(4)) {
        let lanes = B::scale(load(a), s);
        out.copy_from_slice(&lanes[..out.len()]);
    }
    out
}

/// Computes the linear combination `Σ columns[j] * weights[j]`, accumulating from `j = 0`.
///
/// For a column-major matrix this is the matrix-vector product: element `i` of the result is
/// `m(i, 0) * v[0] + m(i, 1) * v[1] + ...`, evaluated left to right.
#[inline]
pub(crate) fn combine<const N: usize>(columns: &[[f32; N]; N], weights: &[f32; N]) -> [f32; N] {
    combine_with::<Active, N>(columns, weights)
}

fn combine_with<B: Lanes, const N: usize>(
    columns: &[[f32; N]; N],
    weights: &[f32; N],
) -> [f32; N] {
    let mut out = [0.0; N];
    for (chunk, out) in out.chunks_mut(4).enumerate() {
        let range = chunk * 4..chunk * 4 + out.len();
        let mut pairs = columns.iter().zip(weights);
        let Some((first, &w)) = pairs.next() else {
            break;
        };
        let mut acc = B::scale(load(&first[range.clone()]), w);
        for (column, &w) in pairs {
            acc = B::mul_add(acc, load(&column[range.clone()]), w);
        }
        out.copy_from_slice(&acc[..out.len()]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_discarded() {
        assert_eq!(zip_with(&[1.0, 2.0], &[3.0, 4.0], Scalar::add), [4.0, 6.0]);
        assert_eq!(
            zip_with(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], Scalar::div),
            [f32::INFINITY, f32::INFINITY, f32::INFINITY]
        );
        assert_eq!(scale_with::<Scalar, 3>(&[1.0, -2.0, 3.0], 2.0), [2.0, -4.0, 6.0]);
    }

    #[test]
    fn more_than_one_chunk() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        assert_eq!(zip_with(&a, &b, Scalar::sub), [-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]);
    }

    #[test]
    fn combine_columns() {
        // Column-major [[1, 3], [2, 4]] times (5, 6).
        let columns = [[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(
            combine_with::<Scalar, 2>(&columns, &[5.0, 6.0]),
            [1.0 * 5.0 + 3.0 * 6.0, 2.0 * 5.0 + 4.0 * 6.0]
        );
    }

    #[cfg(all(
        feature = "simd",
        any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "arm",
            target_arch = "aarch64"
        )
    ))]
    #[test]
    fn wide_matches_scalar() {
        fn bits<const N: usize>(a: [f32; N]) -> [u32; N] {
            a.map(f32::to_bits)
        }

        let mut rng = fastrand::Rng::with_seed(0x5eed);
        let mut random = || (rng.f32() - 0.5) * 1000.0;
        for _ in 0..1000 {
            let a = [random(), random(), random(), random()];
            let b = [random(), random(), random(), random()];
            let s = random();

            assert_eq!(bits(Wide::add(a, b)), bits(Scalar::add(a, b)));
            assert_eq!(bits(Wide::sub(a, b)), bits(Scalar::sub(a, b)));
            assert_eq!(bits(Wide::mul(a, b)), bits(Scalar::mul(a, b)));
            assert_eq!(bits(Wide::div(a, b)), bits(Scalar::div(a, b)));
            assert_eq!(bits(Wide::scale(a, s)), bits(Scalar::scale(a, s)));
            assert_eq!(bits(Wide::mul_add(a, b, s)), bits(Scalar::mul_add(a, b, s)));

            let columns = [a, b, [s, 1.0, -s, 0.5], [random(), random(), random(), random()]];
            assert_eq!(
                bits(combine_with::<Wide, 4>(&columns, &a)),
                bits(combine_with::<Scalar, 4>(&columns, &a)),
            );
            let columns = [[a[0], a[1], a[2]], [b[0], b[1], b[2]], [s, s, s]];
            assert_eq!(
                bits(combine_with::<Wide, 3>(&columns, &[b[3], a[3], s])),
                bits(combine_with::<Scalar, 3>(&columns, &[b[3], a[3], s])),
            );
        }
    }
}
