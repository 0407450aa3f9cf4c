//! Whole-array reductions to a single scalar
//!
//! `reduce_add`, `reduce_mul`, `reduce_min`, and `reduce_max`, generic over
//! all ten element types. Each kernel consults the strategy table once, then
//! runs full vector-width chunks through a vector accumulator, folds the
//! `n mod LANES` tail through the same scalar combinator, collapses the
//! accumulator with the lane-halving horizontal combine, and merges the two
//! partial results. Operations without a native vector form at the element's
//! width (byte/quadword multiply, quadword min/max) run a 4-way unrolled
//! scalar loop with independent accumulators instead.
//!
//! All four kernels are pure: no allocation, no side effects. Integer
//! accumulation wraps per two's complement.

use crate::element::Element;
use crate::strategy::{plan_for, OpKind, Plan};
use crate::traits::SimdVector;

/// A reduction operator: its identity, its strategy-table key, and its
/// scalar and vector combinators. One implementation per operator family;
/// signedness comes from the element type itself.
trait Combiner<T: Element> {
    const IDENTITY: T;
    const OP: OpKind;
    fn scalar(a: T, b: T) -> T;
    fn vector<V: SimdVector<Scalar = T>>(a: V, b: V) -> V;
}

struct AddOp;
struct MulOp;
struct MinOp;
struct MaxOp;

impl<T: Element> Combiner<T> for AddOp {
    const IDENTITY: T = T::ZERO;
    const OP: OpKind = OpKind::ReduceAdd;

    #[inline(always)]
    fn scalar(a: T, b: T) -> T {
        a.wrapping_add(b)
    }

    #[inline(always)]
    fn vector<V: SimdVector<Scalar = T>>(a: V, b: V) -> V {
        a.add(b)
    }
}

impl<T: Element> Combiner<T> for MulOp {
    const IDENTITY: T = T::ONE;
    const OP: OpKind = OpKind::ReduceMul;

    #[inline(always)]
    fn scalar(a: T, b: T) -> T {
        a.wrapping_mul(b)
    }

    #[inline(always)]
    fn vector<V: SimdVector<Scalar = T>>(a: V, b: V) -> V {
        a.mul(b)
    }
}

impl<T: Element> Combiner<T> for MinOp {
    const IDENTITY: T = T::MAX_VALUE;
    const OP: OpKind = OpKind::ReduceMin;

    #[inline(always)]
    fn scalar(a: T, b: T) -> T {
        a.min(b)
    }

    #[inline(always)]
    fn vector<V: SimdVector<Scalar = T>>(a: V, b: V) -> V {
        a.min(b)
    }
}

impl<T: Element> Combiner<T> for MaxOp {
    const IDENTITY: T = T::MIN_VALUE;
    const OP: OpKind = OpKind::ReduceMax;

    #[inline(always)]
    fn scalar(a: T, b: T) -> T {
        a.max(b)
    }

    #[inline(always)]
    fn vector<V: SimdVector<Scalar = T>>(a: V, b: V) -> V {
        a.max(b)
    }
}

#[inline]
fn run<T: Element, C: Combiner<T>>(input: &[T]) -> T {
    match input.len() {
        // Degenerate sizes bypass the vector machinery entirely.
        0 => C::IDENTITY,
        1 => input[0],
        _ => match plan_for::<T>(C::OP) {
            Plan::FullVector => vector_fold::<T, C>(input),
            _ => unrolled_fold::<T, C>(input),
        },
    }
}

fn vector_fold<T: Element, C: Combiner<T>>(input: &[T]) -> T {
    let mut acc = T::Vector::splat(C::IDENTITY);
    let mut chunks = input.chunks_exact(T::LANES);
    for chunk in &mut chunks {
        acc = C::vector(acc, T::Vector::from_slice(chunk));
    }
    let mut result = acc.collapse(C::scalar);
    for &x in chunks.remainder() {
        result = C::scalar(result, x);
    }
    result
}

fn unrolled_fold<T: Element, C: Combiner<T>>(input: &[T]) -> T {
    // Four independent accumulators break the dependency chain.
    let mut a0 = C::IDENTITY;
    let mut a1 = C::IDENTITY;
    let mut a2 = C::IDENTITY;
    let mut a3 = C::IDENTITY;
    let mut quads = input.chunks_exact(4);
    for q in &mut quads {
        a0 = C::scalar(a0, q[0]);
        a1 = C::scalar(a1, q[1]);
        a2 = C::scalar(a2, q[2]);
        a3 = C::scalar(a3, q[3]);
    }
    let mut acc = C::scalar(C::scalar(a0, a1), C::scalar(a2, a3));
    for &x in quads.remainder() {
        acc = C::scalar(acc, x);
    }
    acc
}

/// Sum of all elements. Returns `0` for an empty slice.
///
/// Integer sums wrap per two's complement. A float result may differ from a
/// left-to-right fold only by reassociation.
///
/// # Example
///
/// ```rust
/// use lanefold::reduce_add;
///
/// assert_eq!(reduce_add(&[1i32, 2, 3, 4, 5]), 15);
/// assert_eq!(reduce_add::<i32>(&[]), 0);
/// ```
pub fn reduce_add<T: Element>(input: &[T]) -> T {
    run::<T, AddOp>(input)
}

/// Product of all elements. Returns `1` for an empty slice.
///
/// # Example
///
/// ```rust
/// use lanefold::reduce_mul;
///
/// assert_eq!(reduce_mul(&[1i32, 2, 3, 4, 5]), 120);
/// assert_eq!(reduce_mul::<i32>(&[]), 1);
/// ```
pub fn reduce_mul<T: Element>(input: &[T]) -> T {
    run::<T, MulOp>(input)
}

/// Minimum element. Returns the type's maximum value for an empty slice.
///
/// # Example
///
/// ```rust
/// use lanefold::reduce_min;
///
/// assert_eq!(reduce_min(&[3i32, -7, 2, 9]), -7);
/// assert_eq!(reduce_min::<i32>(&[]), i32::MAX);
/// ```
pub fn reduce_min<T: Element>(input: &[T]) -> T {
    run::<T, MinOp>(input)
}

/// Maximum element. Returns the type's minimum value for an empty slice.
///
/// # Example
///
/// ```rust
/// use lanefold::reduce_max;
///
/// assert_eq!(reduce_max(&[3u8, 249, 100, 128]), 249);
/// assert_eq!(reduce_max::<u8>(&[]), 0);
/// ```
pub fn reduce_max<T: Element>(input: &[T]) -> T {
    run::<T, MaxOp>(input)
}
