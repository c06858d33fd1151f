#[cfg(feature = "half8")]
use crate::numerics::{half::Half, lane::Half8};
use crate::numerics::lane::LaneVector;
#[cfg(feature = "lanes4")]
use crate::numerics::lane::Float4;
#[cfg(feature = "lanes8")]
use crate::numerics::lane::Float8;

/// # Usage
/// Computes the dot product of `a` and the first `a.len()` elements of `b`, using the lane
/// width of `L`:
///
/// ```text
/// dot(a, b) = Σ_i a[i] * b[i]
/// ```
///
/// The input is consumed in three tiers. Two registers at a time while a full double-width
/// chunk remains, each feeding its own accumulator so the two multiply-add chains do not
/// wait on each other. Then at most one more single register. Then the scalar tail, one
/// element at a time in index order. The two accumulators are merged exactly once, after
/// the double-width loop.
///
/// Results depend on `L` through rounding: they agree with [`dot_product_naive`] within
/// single precision accumulation error, not bit for bit.
///
/// # Panics
///
/// Panics if `b` is shorter than `a`.
#[inline]
pub fn dot_product<L: LaneVector>(a: &[L::Elem], b: &[L::Elem]) -> f32 {
    let n = a.len();
    let b = &b[..n];

    let double = 2 * L::SIZE;
    let mut acc0 = L::zero();
    let mut acc1 = L::zero();

    let a_pairs = a.chunks_exact(double);
    let b_pairs = b.chunks_exact(double);
    let (a_rest, b_rest) = (a_pairs.remainder(), b_pairs.remainder());

    for (ca, cb) in a_pairs.zip(b_pairs) {
        let (a_lo, a_hi) = ca.split_at(L::SIZE);
        let (b_lo, b_hi) = cb.split_at(L::SIZE);
        acc0 += L::load(a_lo) * L::load(b_lo);
        acc1 += L::load(a_hi) * L::load(b_hi);
    }
    acc0 += acc1;

    // a_rest holds fewer than two registers worth, so this runs at most once
    let (a_tail, b_tail) = if a_rest.len() >= L::SIZE {
        acc0 += L::load(a_rest) * L::load(b_rest);
        (&a_rest[L::SIZE..], &b_rest[L::SIZE..])
    } else {
        (a_rest, b_rest)
    };

    let mut dot = acc0.horizontal_sum();
    for (&x, &y) in a_tail.iter().zip(b_tail) {
        dot += L::multiply_one(x, y);
    }
    dot
}

/// Scalar reference: one multiply-add per element, summed left to right.
///
/// # Panics
///
/// Panics if `b` is shorter than `a`.
pub fn dot_product_naive(a: &[f32], b: &[f32]) -> f32 {
    let b = &b[..a.len()];
    let mut dot = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
    }
    dot
}

#[cfg(feature = "lanes4")]
pub fn dot_product_w4(a: &[f32], b: &[f32]) -> f32 {
    dot_product::<Float4>(a, b)
}

#[cfg(feature = "lanes8")]
pub fn dot_product_w8(a: &[f32], b: &[f32]) -> f32 {
    dot_product::<Float8>(a, b)
}

#[cfg(feature = "half8")]
pub fn dot_product_half_w8(a: &[Half], b: &[Half]) -> f32 {
    dot_product::<Half8>(a, b)
}
