//! Lane-array vector implementation
//!
//! [`Lanes<T, N>`] is one accumulator register: `N` elements of `T` stored as
//! a plain fixed-size array. Lane-wise operations are written as fixed-count
//! loops over the array, which keeps the semantics exactly those of the
//! scalar combinators while leaving the memory layout and trip counts in the
//! shape the vectorizer wants. Each element type names its register via
//! [`Element::Vector`](crate::Element::Vector), e.g. `Lanes<i8, 32>` or
//! `Lanes<f64, 4>`.

use crate::element::Element;
use crate::horizontal::halve_combine;
use crate::traits::SimdVector;

/// A register of `N` lanes of `T`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Lanes<T, const N: usize>(pub(crate) [T; N]);

impl<T: Element, const N: usize> Lanes<T, N> {
    /// View the lanes as an array.
    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }
}

impl<T: Element, const N: usize> SimdVector for Lanes<T, N> {
    type Scalar = T;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Lanes([value; N])
    }

    #[inline(always)]
    fn from_slice(slice: &[T]) -> Self {
        assert!(slice.len() >= N, "slice too short for vector load");
        let mut lanes = [T::ZERO; N];
        lanes.copy_from_slice(&slice[..N]);
        Lanes(lanes)
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [T]) {
        assert!(slice.len() >= N, "slice too short for vector store");
        slice[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].wrapping_add(rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].wrapping_sub(rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].wrapping_mul(rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].min(rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].max(rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].abs();
        }
        Lanes(out)
    }

    #[inline(always)]
    fn abs_diff(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].abs_diff(rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = self.0[i].mul_add(b.0[i], c.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn lane_map(self, f: fn(T) -> T) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = f(self.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn zip_map(self, rhs: Self, f: fn(T, T) -> T) -> Self {
        let mut out = self.0;
        for i in 0..N {
            out[i] = f(self.0[i], rhs.0[i]);
        }
        Lanes(out)
    }

    #[inline(always)]
    fn collapse(self, combine: fn(T, T) -> T) -> T {
        let mut lanes = self.0;
        halve_combine(&mut lanes, combine);
        lanes[0]
    }

    #[inline(always)]
    fn horizontal_sum(self) -> T {
        self.collapse(T::wrapping_add)
    }

    #[inline(always)]
    fn horizontal_mul(self) -> T {
        self.collapse(T::wrapping_mul)
    }

    #[inline(always)]
    fn horizontal_min(self) -> T {
        self.collapse(T::min)
    }

    #[inline(always)]
    fn horizontal_max(self) -> T {
        self.collapse(T::max)
    }
}
