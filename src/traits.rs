//! Core vector abstraction trait
//!
//! Defines the operations a vector accumulator must provide for the kernels
//! to be written once, generically, instead of once per element type. The
//! lane-array implementation lives in [`crate::lanes`].

/// One vector register's worth of elements.
///
/// A `SimdVector` holds [`LANES`](SimdVector::LANES) elements of
/// [`Scalar`](SimdVector::Scalar) and combines them lane-wise. Integer lane
/// arithmetic wraps; float lane arithmetic is IEEE. Lane-wise results are
/// bit-identical to applying the scalar combinator per lane, which is what
/// lets every kernel's vector path match its scalar reference exactly.
///
/// # Example
///
/// ```rust
/// use lanefold::{Element, SimdVector};
///
/// type V = <i32 as Element>::Vector;
/// let a = V::splat(2);
/// let b = V::splat(3);
/// assert_eq!(a.add(b).horizontal_sum(), 5 * V::LANES as i32);
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// The underlying element type.
    type Scalar: Copy;

    /// Number of lanes (32 for 8-bit elements down to 4 for 64-bit).
    const LANES: usize;

    /// Broadcast a scalar value to all lanes.
    fn splat(value: Self::Scalar) -> Self;

    /// Load from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements.
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements.
    fn to_slice(self, slice: &mut [Self::Scalar]);

    /// Lane-wise addition (wrapping for integers).
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise subtraction (wrapping for integers).
    fn sub(self, rhs: Self) -> Self;

    /// Lane-wise multiplication (wrapping for integers).
    fn mul(self, rhs: Self) -> Self;

    /// Lane-wise minimum under the element type's native ordering.
    fn min(self, rhs: Self) -> Self;

    /// Lane-wise maximum under the element type's native ordering.
    fn max(self, rhs: Self) -> Self;

    /// Lane-wise absolute value (wrapping for signed integers).
    fn abs(self) -> Self;

    /// Lane-wise absolute difference `|self - rhs|`, underflow-free for
    /// unsigned elements and branch-free for signed ones.
    fn abs_diff(self, rhs: Self) -> Self;

    /// Lane-wise `self * b + c`; fused (single rounding) for floats,
    /// wrapping multiply-then-add for integers.
    fn fma(self, b: Self, c: Self) -> Self;

    /// Transform each lane with an arbitrary scalar function.
    ///
    /// One-input counterpart of [`zip_map`](SimdVector::zip_map), used by
    /// kernels whose lane operation lives on a narrower element trait (for
    /// example the float-only square root).
    fn lane_map(self, f: fn(Self::Scalar) -> Self::Scalar) -> Self;

    /// Combine lanes pairwise with an arbitrary scalar function.
    ///
    /// This is the scalar-substep escape hatch: each lane is computed by a
    /// scalar call rather than a vector instruction. Kernels use it when the
    /// strategy table reports no native vector form for a sub-operation
    /// (for example the multiply inside a byte-width dot product) while the
    /// surrounding accumulation stays vectorized.
    fn zip_map(self, rhs: Self, f: fn(Self::Scalar, Self::Scalar) -> Self::Scalar) -> Self;

    /// Collapse all lanes to one scalar with the given combinator, by
    /// repeated lane-halving (see [`crate::horizontal`]).
    fn collapse(self, combine: fn(Self::Scalar, Self::Scalar) -> Self::Scalar) -> Self::Scalar;

    /// Sum of all lanes (wrapping for integers).
    fn horizontal_sum(self) -> Self::Scalar;

    /// Product of all lanes (wrapping for integers).
    fn horizontal_mul(self) -> Self::Scalar;

    /// Minimum across all lanes.
    fn horizontal_min(self) -> Self::Scalar;

    /// Maximum across all lanes.
    fn horizontal_max(self) -> Self::Scalar;
}
