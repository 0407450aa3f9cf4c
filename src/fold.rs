//! Single-pass map-then-reduce kernels
//!
//! Dot product, sum of squares, and sum of absolute differences. Each maps
//! a pair of lanes and accumulates the sum in one pass, with no intermediate
//! array ever materialized. The chunk/tail/horizontal structure matches
//! the reductions; what varies per kernel is the lane-pair map and, via the
//! strategy table, whether that map has a native vector form at the
//! element's width.

use crate::element::Element;
use crate::strategy::{plan_for, OpKind, Plan};
use crate::traits::SimdVector;

/// Vector-accumulating driver: map chunk pairs with `vmap`, sum into the
/// accumulator, collapse, then fold the tail with the scalar `smap`.
fn fused_fold_vector<T: Element>(
    a: &[T],
    b: &[T],
    vmap: fn(T::Vector, T::Vector) -> T::Vector,
    smap: fn(T, T) -> T,
) -> T {
    let mut acc = T::Vector::splat(T::ZERO);
    let mut ac = a.chunks_exact(T::LANES);
    let mut bc = b.chunks_exact(T::LANES);
    for (ca, cb) in (&mut ac).zip(&mut bc) {
        let mapped = vmap(T::Vector::from_slice(ca), T::Vector::from_slice(cb));
        acc = acc.add(mapped);
    }
    let mut result = acc.collapse(T::wrapping_add);
    for (&x, &y) in ac.remainder().iter().zip(bc.remainder()) {
        result = result.wrapping_add(smap(x, y));
    }
    result
}

/// Unrolled scalar driver for widths where even the accumulation is not
/// worth vectorizing.
fn fused_fold_unrolled<T: Element>(a: &[T], b: &[T], smap: fn(T, T) -> T) -> T {
    let mut a0 = T::ZERO;
    let mut a1 = T::ZERO;
    let mut a2 = T::ZERO;
    let mut a3 = T::ZERO;
    let mut aq = a.chunks_exact(4);
    let mut bq = b.chunks_exact(4);
    for (qa, qb) in (&mut aq).zip(&mut bq) {
        a0 = a0.wrapping_add(smap(qa[0], qb[0]));
        a1 = a1.wrapping_add(smap(qa[1], qb[1]));
        a2 = a2.wrapping_add(smap(qa[2], qb[2]));
        a3 = a3.wrapping_add(smap(qa[3], qb[3]));
    }
    let mut acc = a0.wrapping_add(a1).wrapping_add(a2.wrapping_add(a3));
    for (&x, &y) in aq.remainder().iter().zip(bq.remainder()) {
        acc = acc.wrapping_add(smap(x, y));
    }
    acc
}

#[inline]
fn fused_fold<T: Element>(a: &[T], b: &[T], op: OpKind, smap: fn(T, T) -> T) -> T {
    match a.len() {
        0 => T::ZERO,
        1 => smap(a[0], b[0]),
        _ => match plan_for::<T>(op) {
            Plan::FullVector => match op {
                OpKind::SumOfAbsDiff => {
                    fused_fold_vector(a, b, |va, vb| va.abs_diff(vb), smap)
                }
                _ => fused_fold_vector(a, b, |va, vb| va.mul(vb), smap),
            },
            // The multiply runs lane-by-lane in scalar code; the sum
            // accumulation stays vectorized.
            Plan::VectorScalarMul => {
                fused_fold_vector(a, b, |va, vb| va.zip_map(vb, T::wrapping_mul), smap)
            }
            Plan::FullScalar => fused_fold_unrolled(a, b, smap),
        },
    }
}

/// `Σ a[i] * b[i]` in a single pass. Returns `0` for empty inputs.
///
/// Integer products and the running sum wrap per two's complement. On
/// element widths without a native vector multiply the products are
/// computed lane-by-lane in scalar code while the sum accumulation stays
/// vectorized.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
///
/// # Example
///
/// ```rust
/// use lanefold::dot_product;
///
/// assert_eq!(dot_product(&[1i32, 2, 3], &[4, 5, 6]), 32);
/// ```
pub fn dot_product<T: Element>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "dot_product: input lengths differ");
    fused_fold(a, b, OpKind::DotProduct, T::wrapping_mul)
}

/// `Σ a[i]²` in a single pass; equivalent to `dot_product(a, a)`.
///
/// # Example
///
/// ```rust
/// use lanefold::sum_of_squares;
///
/// assert_eq!(sum_of_squares(&[1i32, 2, 3]), 14);
/// ```
pub fn sum_of_squares<T: Element>(a: &[T]) -> T {
    dot_product(a, a)
}

/// `Σ |a[i] - b[i]|` in a single pass. Returns `0` for empty inputs.
///
/// Unsigned differences are computed as `max - min` (no underflow); signed
/// differences use a branch-free sign-mask pattern. The running sum wraps
/// like every other integer accumulation.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
///
/// # Example
///
/// ```rust
/// use lanefold::sum_of_abs_diff;
///
/// assert_eq!(sum_of_abs_diff(&[1i32, 2, 3], &[10, 20, 30]), 54);
/// ```
pub fn sum_of_abs_diff<T: Element>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "sum_of_abs_diff: input lengths differ");
    fused_fold(a, b, OpKind::SumOfAbsDiff, T::abs_diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_matches_the_concrete_scenario() {
        assert_eq!(dot_product(&[1i32, 2, 3], &[4, 5, 6]), 32);
        assert_eq!(dot_product(&[1.0f64, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    fn sad_matches_the_concrete_scenario() {
        assert_eq!(sum_of_abs_diff(&[1i32, 2, 3], &[10, 20, 30]), 54);
        assert_eq!(sum_of_abs_diff(&[10u16, 20, 30], &[1, 2, 3]), 54);
    }

    #[test]
    fn empty_inputs_return_zero() {
        assert_eq!(dot_product::<i8>(&[], &[]), 0);
        assert_eq!(sum_of_squares::<u64>(&[]), 0);
        assert_eq!(sum_of_abs_diff::<f32>(&[], &[]), 0.0);
    }

    #[test]
    fn sum_of_squares_equals_self_dot() {
        let data = [3i16, -4, 5, 0, 7, -2, 9, 1, 6, -8, 2, 2, 2, 2, 2, 2, 11];
        assert_eq!(sum_of_squares(&data), dot_product(&data, &data));
    }

    #[test]
    fn byte_width_dot_takes_the_scalar_multiply_substep() {
        // 67 elements: two 32-lane chunks plus a 3-element tail.
        let mut a = [0i8; 67];
        let mut b = [0i8; 67];
        for i in 0..67 {
            a[i] = (i as i8).wrapping_mul(3);
            b[i] = (i as i8).wrapping_sub(40);
        }
        let mut expected = 0i8;
        for i in 0..67 {
            expected = expected.wrapping_add(a[i].wrapping_mul(b[i]));
        }
        assert_eq!(dot_product(&a, &b), expected);
    }

    #[test]
    #[should_panic(expected = "input lengths differ")]
    fn mismatched_lengths_panic() {
        let _ = dot_product(&[1i32, 2], &[1i32, 2, 3]);
    }

    #[test]
    fn signed_sad_handles_mixed_signs() {
        assert_eq!(sum_of_abs_diff(&[-5i32, 5, -5], &[5, -5, 5]), 30);
    }
}
