//! Scalar element types supported by the kernels
//!
//! The engine supports exactly ten fixed-width numeric types. Each one
//! implements [`Element`], which carries the operation identities, the
//! wrapping combinators the kernels fold with, and the per-type lane count
//! (a 256-bit register's worth of elements). Kernels are written once,
//! generic over this trait, instead of once per type.

use crate::traits::SimdVector;

/// A fixed-width numeric element type.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64`,
/// `f32`, and `f64`. Integer combinators wrap per two's complement; float
/// combinators use plain IEEE arithmetic. Min/max use the type's native
/// ordering (signed, unsigned, or float), so each signedness family of the
/// horizontal combine exists exactly once, parameterized by this trait.
pub trait Element: Copy + Clone + PartialEq + PartialOrd + core::fmt::Debug + 'static {
    /// The lane-array vector type holding `LANES` elements of this type.
    type Vector: SimdVector<Scalar = Self>;

    /// Elements per 256-bit vector register: 32 for 8-bit types down to
    /// 4 for 64-bit types.
    const LANES: usize;

    /// Identity of addition (and the `n == 0` result of `reduce_add`).
    const ZERO: Self;

    /// Identity of multiplication (and the `n == 0` result of `reduce_mul`).
    const ONE: Self;

    /// Smallest value of the type; identity of `reduce_max`.
    const MIN_VALUE: Self;

    /// Largest value of the type; identity of `reduce_min`.
    const MAX_VALUE: Self;

    /// Whether a native vectorized multiply exists at this width.
    ///
    /// False for 8-bit (no byte multiply) and 64-bit integers (no quadword
    /// multiply on 256-bit hardware); multiply-dependent kernels on those
    /// types take a scalar-multiply plan instead.
    const VECTOR_MUL: bool;

    /// Whether native vectorized min/max exist at this width.
    ///
    /// False for 64-bit integers; min/max kernels on those types run the
    /// unrolled scalar plan.
    const VECTOR_MINMAX: bool;

    /// Addition; wraps for integers, plain IEEE add for floats.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction; wraps for integers, plain IEEE subtract for floats.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication; wraps for integers, plain IEEE multiply for floats.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// `self * b + c`. Fused (single rounding, via `libm`) for floats,
    /// wrapping multiply-then-add for integers.
    fn mul_add(self, b: Self, c: Self) -> Self;

    /// Minimum under the type's native ordering. For floats, NaN operands
    /// yield the other operand (libm `fmin` semantics).
    fn min(self, rhs: Self) -> Self;

    /// Maximum under the type's native ordering.
    fn max(self, rhs: Self) -> Self;

    /// Absolute value. Wraps for signed integers (`abs(MIN) == MIN`),
    /// identity for unsigned integers.
    fn abs(self) -> Self;

    /// Absolute difference `|self - rhs|`.
    ///
    /// Unsigned types compute `max - min` (no underflow); signed types use a
    /// branch-free sign-mask pattern on the wrapping difference; floats take
    /// the absolute value of the difference.
    fn abs_diff(self, rhs: Self) -> Self;
}

/// Operations that exist only at float widths.
///
/// Implemented for `f32` and `f64`; kernels restricted to floats (such as
/// [`sqrt`](crate::map::sqrt)) bound on this instead of [`Element`].
pub trait FloatElement: Element {
    /// Square root via `libm`. Negative inputs produce NaN per IEEE.
    fn sqrt(self) -> Self;
}

macro_rules! impl_element_signed {
    ($t:ty, $lanes:expr, $vector_mul:expr, $vector_minmax:expr) => {
        impl Element for $t {
            type Vector = crate::lanes::Lanes<$t, $lanes>;

            const LANES: usize = $lanes;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
            const VECTOR_MUL: bool = $vector_mul;
            const VECTOR_MINMAX: bool = $vector_minmax;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn mul_add(self, b: Self, c: Self) -> Self {
                <$t>::wrapping_add(<$t>::wrapping_mul(self, b), c)
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                if self < rhs {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                if self > rhs {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn abs(self) -> Self {
                <$t>::wrapping_abs(self)
            }

            #[inline(always)]
            fn abs_diff(self, rhs: Self) -> Self {
                // Branch-free: wrapping difference, then sign-mask-and-subtract.
                let d = <$t>::wrapping_sub(self, rhs);
                let m = d >> (<$t>::BITS - 1);
                <$t>::wrapping_sub(d ^ m, m)
            }
        }
    };
}

macro_rules! impl_element_unsigned {
    ($t:ty, $lanes:expr, $vector_mul:expr, $vector_minmax:expr) => {
        impl Element for $t {
            type Vector = crate::lanes::Lanes<$t, $lanes>;

            const LANES: usize = $lanes;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
            const VECTOR_MUL: bool = $vector_mul;
            const VECTOR_MINMAX: bool = $vector_minmax;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn mul_add(self, b: Self, c: Self) -> Self {
                <$t>::wrapping_add(<$t>::wrapping_mul(self, b), c)
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                if self < rhs {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                if self > rhs {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn abs(self) -> Self {
                self
            }

            #[inline(always)]
            fn abs_diff(self, rhs: Self) -> Self {
                // max - min cannot underflow.
                let hi = if self > rhs { self } else { rhs };
                let lo = if self > rhs { rhs } else { self };
                hi - lo
            }
        }
    };
}

macro_rules! impl_element_float {
    ($t:ty, $lanes:expr, $fabs:path, $fmin:path, $fmax:path, $fma:path, $fsqrt:path) => {
        impl Element for $t {
            type Vector = crate::lanes::Lanes<$t, $lanes>;

            const LANES: usize = $lanes;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
            const VECTOR_MUL: bool = true;
            const VECTOR_MINMAX: bool = true;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn mul_add(self, b: Self, c: Self) -> Self {
                $fma(self, b, c)
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                $fmin(self, rhs)
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                $fmax(self, rhs)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                $fabs(self)
            }

            #[inline(always)]
            fn abs_diff(self, rhs: Self) -> Self {
                $fabs(self - rhs)
            }
        }

        impl FloatElement for $t {
            #[inline(always)]
            fn sqrt(self) -> Self {
                $fsqrt(self)
            }
        }
    };
}

impl_element_signed!(i8, 32, false, true);
impl_element_signed!(i16, 16, true, true);
impl_element_signed!(i32, 8, true, true);
impl_element_signed!(i64, 4, false, false);

impl_element_unsigned!(u8, 32, false, true);
impl_element_unsigned!(u16, 16, true, true);
impl_element_unsigned!(u32, 8, true, true);
impl_element_unsigned!(u64, 4, false, false);

impl_element_float!(f32, 8, libm::fabsf, libm::fminf, libm::fmaxf, libm::fmaf, libm::sqrtf);
impl_element_float!(f64, 4, libm::fabs, libm::fmin, libm::fmax, libm::fma, libm::sqrt);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_counts_fill_a_256_bit_register() {
        assert_eq!(<i8 as Element>::LANES * 1, 32);
        assert_eq!(<u16 as Element>::LANES * 2, 32);
        assert_eq!(<f32 as Element>::LANES * 4, 32);
        assert_eq!(<u64 as Element>::LANES * 8, 32);
    }

    #[test]
    fn signed_abs_diff_is_branch_free_correct() {
        assert_eq!(Element::abs_diff(1i32, 10), 9);
        assert_eq!(Element::abs_diff(10i32, 1), 9);
        assert_eq!(Element::abs_diff(-5i8, 5), 10);
        assert_eq!(Element::abs_diff(0i64, 0), 0);
    }

    #[test]
    fn unsigned_abs_diff_never_underflows() {
        assert_eq!(Element::abs_diff(3u8, 250), 247);
        assert_eq!(Element::abs_diff(250u8, 3), 247);
        assert_eq!(Element::abs_diff(0u64, u64::MAX), u64::MAX);
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(Element::wrapping_add(i8::MAX, 1), i8::MIN);
        assert_eq!(Element::wrapping_mul(200u8, 2), 144);
        assert_eq!(Element::abs(i8::MIN), i8::MIN);
    }

    #[test]
    fn float_minmax_ignore_nan_operand() {
        assert_eq!(Element::min(f32::NAN, 2.0), 2.0);
        assert_eq!(Element::max(2.0f64, f64::NAN), 2.0);
    }

    #[test]
    fn float_sqrt_follows_ieee() {
        assert_eq!(FloatElement::sqrt(9.0f32), 3.0);
        assert_eq!(FloatElement::sqrt(2.25f64), 1.5);
        assert!(FloatElement::sqrt(-1.0f64).is_nan());
    }

    #[test]
    fn identities_match_operations() {
        assert_eq!(Element::wrapping_add(7i16, <i16 as Element>::ZERO), 7);
        assert_eq!(Element::wrapping_mul(7i16, <i16 as Element>::ONE), 7);
        assert_eq!(Element::min(7i16, <i16 as Element>::MAX_VALUE), 7);
        assert_eq!(Element::max(7i16, <i16 as Element>::MIN_VALUE), 7);
    }
}
