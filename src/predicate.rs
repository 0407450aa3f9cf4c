//! Early-exit boolean scans
//!
//! Whole-array predicates, against a constant (`all_eq`, `any_gt`) or
//! pairwise between two arrays (`all_gt`). The loop checks one vector-width
//! chunk at a time and exits as soon as the answer is decided, then finishes
//! with the scalar tail.

use crate::element::Element;

/// `true` if every element equals `value`. Vacuously `true` for an empty
/// slice.
///
/// # Example
///
/// ```rust
/// use lanefold::all_eq;
///
/// assert!(all_eq(&[7u8; 100], 7));
/// assert!(!all_eq(&[7u8, 7, 8], 7));
/// ```
pub fn all_eq<T: Element>(input: &[T], value: T) -> bool {
    let mut chunks = input.chunks_exact(T::LANES);
    for chunk in &mut chunks {
        if chunk.iter().any(|&v| v != value) {
            return false;
        }
    }
    chunks.remainder().iter().all(|&v| v == value)
}

/// `true` if any element is greater than `value`. `false` for an empty
/// slice.
///
/// Ordering is the element type's native one (signed, unsigned, or float;
/// NaN compares greater than nothing).
///
/// # Example
///
/// ```rust
/// use lanefold::any_gt;
///
/// assert!(any_gt(&[1i32, 2, 30], 10));
/// assert!(!any_gt(&[1i32, 2, 3], 10));
/// ```
pub fn any_gt<T: Element>(input: &[T], value: T) -> bool {
    let mut chunks = input.chunks_exact(T::LANES);
    for chunk in &mut chunks {
        if chunk.iter().any(|&v| v > value) {
            return true;
        }
    }
    chunks.remainder().iter().any(|&v| v > value)
}

/// `true` if `a[i] > b[i]` at every index. Vacuously `true` for empty
/// inputs.
///
/// Ordering is the element type's native one; a NaN at either side of a
/// comparison makes that comparison false and therefore the whole predicate
/// false.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
///
/// # Example
///
/// ```rust
/// use lanefold::all_gt;
///
/// assert!(all_gt(&[5i64, 6, 7], &[1, 2, 3]));
/// assert!(!all_gt(&[5i64, 6, 7], &[1, 6, 3]));
/// ```
pub fn all_gt<T: Element>(a: &[T], b: &[T]) -> bool {
    assert_eq!(a.len(), b.len(), "all_gt: input lengths differ");
    let mut ac = a.chunks_exact(T::LANES);
    let mut bc = b.chunks_exact(T::LANES);
    for (ca, cb) in (&mut ac).zip(&mut bc) {
        if ca.iter().zip(cb).any(|(&x, &y)| x <= y) {
            return false;
        }
    }
    ac.remainder()
        .iter()
        .zip(bc.remainder())
        .all(|(&x, &y)| x > y)
}
