//! Elementwise transform kernels
//!
//! Fused maps produce an output array in one pass: `scaled_add`
//! (`out = c*x + y`), `scale`, `offset`, `elementwise_add`, plus the simple
//! maps `abs`, `clamp`, and the float-only `sqrt`. Full vector-width chunks are followed by a scalar
//! tail of `n mod LANES` elements; there is no accumulator state, so each
//! output element is independent. A caller that wants cross-chunk
//! parallelism can split the arrays itself; the engine stays single-threaded.
//!
//! `out` may alias an input only with identical indexing; the engine assumes
//! disjoint-or-identical slices and does not defend against partial overlap
//! (which Rust's borrow rules already rule out for safe callers).

use crate::element::{Element, FloatElement};
use crate::strategy::{plan_for, OpKind, Plan};
use crate::traits::SimdVector;

/// One-input map driver: vector chunks through `vf`, scalar tail through `sf`.
fn map1<T, VF, SF>(x: &[T], out: &mut [T], vf: VF, sf: SF)
where
    T: Element,
    VF: Fn(T::Vector) -> T::Vector,
    SF: Fn(T) -> T,
{
    let out = &mut out[..x.len()];
    let mut xc = x.chunks_exact(T::LANES);
    let mut oc = out.chunks_exact_mut(T::LANES);
    for (cx, co) in (&mut xc).zip(&mut oc) {
        vf(T::Vector::from_slice(cx)).to_slice(co);
    }
    for (&v, o) in xc.remainder().iter().zip(oc.into_remainder()) {
        *o = sf(v);
    }
}

/// Two-input map driver.
fn map2<T, VF, SF>(x: &[T], y: &[T], out: &mut [T], vf: VF, sf: SF)
where
    T: Element,
    VF: Fn(T::Vector, T::Vector) -> T::Vector,
    SF: Fn(T, T) -> T,
{
    let out = &mut out[..x.len()];
    let mut xc = x.chunks_exact(T::LANES);
    let mut yc = y.chunks_exact(T::LANES);
    let mut oc = out.chunks_exact_mut(T::LANES);
    for ((cx, cy), co) in (&mut xc).zip(&mut yc).zip(&mut oc) {
        vf(T::Vector::from_slice(cx), T::Vector::from_slice(cy)).to_slice(co);
    }
    let tail = xc.remainder().iter().zip(yc.remainder());
    for ((&a, &b), o) in tail.zip(oc.into_remainder()) {
        *o = sf(a, b);
    }
}

/// Plain scalar loop for plans without a vector form.
fn map1_scalar<T: Element>(x: &[T], out: &mut [T], sf: impl Fn(T) -> T) {
    for (o, &v) in out[..x.len()].iter_mut().zip(x) {
        *o = sf(v);
    }
}

fn map2_scalar<T: Element>(x: &[T], y: &[T], out: &mut [T], sf: impl Fn(T, T) -> T) {
    for ((o, &a), &b) in out[..x.len()].iter_mut().zip(x).zip(y) {
        *o = sf(a, b);
    }
}

/// `out[i] = c * x[i] + y[i]` (AXPY), fused multiply-add where the strategy
/// table allows.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length or `out` is shorter than `x`.
///
/// # Example
///
/// ```rust
/// use lanefold::scaled_add;
///
/// let mut out = [0i32; 3];
/// scaled_add(&[1, 2, 3], &[10, 20, 30], &mut out, 2);
/// assert_eq!(out, [12, 24, 36]);
/// ```
pub fn scaled_add<T: Element>(x: &[T], y: &[T], out: &mut [T], c: T) {
    assert_eq!(x.len(), y.len(), "scaled_add: input lengths differ");
    assert!(out.len() >= x.len(), "scaled_add: output shorter than inputs");
    match plan_for::<T>(OpKind::ScaledAdd) {
        Plan::FullVector => {
            let cv = T::Vector::splat(c);
            map2(x, y, out, |vx, vy| vx.fma(cv, vy), |a, b| a.mul_add(c, b));
        }
        _ => map2_scalar(x, y, out, |a, b| a.mul_add(c, b)),
    }
}

/// `out[i] = c * x[i]`.
///
/// # Panics
///
/// Panics if `out` is shorter than `x`.
pub fn scale<T: Element>(x: &[T], out: &mut [T], c: T) {
    assert!(out.len() >= x.len(), "scale: output shorter than input");
    match plan_for::<T>(OpKind::Scale) {
        Plan::FullVector => {
            let cv = T::Vector::splat(c);
            map1(x, out, |vx| vx.mul(cv), |v| v.wrapping_mul(c));
        }
        _ => map1_scalar(x, out, |v| v.wrapping_mul(c)),
    }
}

/// `out[i] = x[i] + c`.
///
/// # Panics
///
/// Panics if `out` is shorter than `x`.
pub fn offset<T: Element>(x: &[T], out: &mut [T], c: T) {
    assert!(out.len() >= x.len(), "offset: output shorter than input");
    let cv = T::Vector::splat(c);
    map1(x, out, |vx| vx.add(cv), |v| v.wrapping_add(c));
}

/// `out[i] = x[i] + y[i]`.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length or `out` is shorter than `x`.
///
/// # Example
///
/// ```rust
/// use lanefold::elementwise_add;
///
/// let mut out = [0u8; 3];
/// elementwise_add(&[250, 2, 3], &[10, 20, 30], &mut out);
/// assert_eq!(out, [4, 22, 33]); // 250 + 10 wraps
/// ```
pub fn elementwise_add<T: Element>(x: &[T], y: &[T], out: &mut [T]) {
    assert_eq!(x.len(), y.len(), "elementwise_add: input lengths differ");
    assert!(
        out.len() >= x.len(),
        "elementwise_add: output shorter than inputs"
    );
    map2(x, y, out, |vx, vy| vx.add(vy), |a, b| a.wrapping_add(b));
}

/// `out[i] = |x[i]|`, branch-free per lane. Signed integer `abs` wraps
/// (`abs(MIN) == MIN`); unsigned inputs are copied through.
///
/// # Panics
///
/// Panics if `out` is shorter than `x`.
pub fn abs<T: Element>(x: &[T], out: &mut [T]) {
    assert!(out.len() >= x.len(), "abs: output shorter than input");
    map1(x, out, |vx| vx.abs(), |v| v.abs());
}

/// `out[i] = √x[i]`, float types only.
///
/// Negative inputs produce NaN per IEEE; square root has a native vector
/// form at both float widths, so there is no strategy-table fallback.
///
/// # Panics
///
/// Panics if `out` is shorter than `x`.
///
/// # Example
///
/// ```rust
/// use lanefold::sqrt;
///
/// let mut out = [0.0f64; 3];
/// sqrt(&[4.0, 9.0, 2.25], &mut out);
/// assert_eq!(out, [2.0, 3.0, 1.5]);
/// ```
pub fn sqrt<T: FloatElement>(x: &[T], out: &mut [T]) {
    assert!(out.len() >= x.len(), "sqrt: output shorter than input");
    map1(x, out, |vx| vx.lane_map(T::sqrt), T::sqrt);
}

/// `out[i] = max(lo, min(hi, x[i]))`.
///
/// 64-bit integers take the scalar plan (no quadword vector min/max); every
/// other type runs a vectorized min/max chain.
///
/// # Panics
///
/// Panics if `out` is shorter than `x`.
pub fn clamp<T: Element>(x: &[T], out: &mut [T], lo: T, hi: T) {
    assert!(out.len() >= x.len(), "clamp: output shorter than input");
    match plan_for::<T>(OpKind::Clamp) {
        Plan::FullVector => {
            let lo_v = T::Vector::splat(lo);
            let hi_v = T::Vector::splat(hi);
            map1(x, out, |vx| vx.min(hi_v).max(lo_v), |v| v.min(hi).max(lo));
        }
        _ => map1_scalar(x, out, |v| v.min(hi).max(lo)),
    }
}
