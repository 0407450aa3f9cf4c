//! Lane-halving horizontal combine
//!
//! Collapses a vector accumulator to a single scalar: each step pairwise
//! combines the upper half of the active lanes into the lower half, halving
//! the active span, until one lane remains after `log2(LANES)` steps. The
//! combinator is a parameter, so every operator family (add, multiply, min,
//! max, for any signedness) shares this one implementation; signed versus
//! unsigned ordering comes from the element type's own `min`/`max`.

/// Pairwise-combine `lanes` down to `lanes[0]` in place.
///
/// The slice length must be a power of two (every supported lane count is).
///
/// # Example
///
/// ```rust
/// use lanefold::horizontal::halve_combine;
///
/// let mut lanes = [1u32, 2, 3, 4, 5, 6, 7, 8];
/// halve_combine(&mut lanes, u32::wrapping_add);
/// assert_eq!(lanes[0], 36);
/// ```
#[inline(always)]
pub fn halve_combine<T: Copy>(lanes: &mut [T], combine: fn(T, T) -> T) {
    let mut active = lanes.len();
    while active > 1 {
        let half = active / 2;
        for i in 0..half {
            lanes[i] = combine(lanes[i], lanes[i + half]);
        }
        active = half;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_over_eight_lanes() {
        let mut lanes = [1i32, 2, 3, 4, 5, 6, 7, 8];
        halve_combine(&mut lanes, i32::wrapping_add);
        assert_eq!(lanes[0], 36);
    }

    #[test]
    fn max_uses_the_supplied_ordering() {
        let mut signed = [-3i8, 0, 7, -128];
        halve_combine(&mut signed, |a, b| if a > b { a } else { b });
        assert_eq!(signed[0], 7);

        // The same bit patterns as unsigned order differently.
        let mut unsigned = [253u8, 0, 7, 128];
        halve_combine(&mut unsigned, |a, b| if a > b { a } else { b });
        assert_eq!(unsigned[0], 253);
    }

    #[test]
    fn single_lane_is_untouched() {
        let mut lanes = [42u64];
        halve_combine(&mut lanes, u64::wrapping_add);
        assert_eq!(lanes[0], 42);
    }

    #[test]
    fn product_wraps_like_the_scalar_combinator() {
        let mut lanes = [100u8, 3, 1, 1];
        halve_combine(&mut lanes, u8::wrapping_mul);
        assert_eq!(lanes[0], 100u8.wrapping_mul(3));
    }
}
