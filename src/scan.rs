//! Inclusive prefix sums
//!
//! A scan carries a dependency from every element to the next, so the loop
//! is inherently sequential; it is unrolled four-way so the chained adds of
//! one quad issue together. Integer accumulation wraps like every other
//! kernel.

use crate::element::Element;

/// Inclusive prefix sum: `out[i] = x[0] + x[1] + … + x[i]`.
///
/// # Panics
///
/// Panics if `out` is shorter than `x`.
///
/// # Example
///
/// ```rust
/// use lanefold::scan_add;
///
/// let mut out = [0i32; 4];
/// scan_add(&[1, 2, 3, 4], &mut out);
/// assert_eq!(out, [1, 3, 6, 10]);
/// ```
pub fn scan_add<T: Element>(x: &[T], out: &mut [T]) {
    assert!(out.len() >= x.len(), "scan_add: output shorter than input");
    let out = &mut out[..x.len()];
    let mut acc = T::ZERO;
    let mut xq = x.chunks_exact(4);
    let mut oq = out.chunks_exact_mut(4);
    for (cx, co) in (&mut xq).zip(&mut oq) {
        let s0 = acc.wrapping_add(cx[0]);
        let s1 = s0.wrapping_add(cx[1]);
        let s2 = s1.wrapping_add(cx[2]);
        let s3 = s2.wrapping_add(cx[3]);
        co[0] = s0;
        co[1] = s1;
        co[2] = s2;
        co[3] = s3;
        acc = s3;
    }
    for (&v, o) in xq.remainder().iter().zip(oq.into_remainder()) {
        acc = acc.wrapping_add(v);
        *o = acc;
    }
}
