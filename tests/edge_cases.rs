//! Edge case tests: degenerate sizes, wraparound, and float specials

use lanefold::{
    abs, dot_product, elementwise_add, reduce_add, reduce_max, reduce_min, reduce_mul,
    scaled_add, sum_of_abs_diff, sum_of_squares, Element,
};

#[test]
fn empty_slices_return_identities() {
    assert_eq!(reduce_add::<i8>(&[]), 0);
    assert_eq!(reduce_mul::<i8>(&[]), 1);
    assert_eq!(reduce_min::<i8>(&[]), i8::MAX);
    assert_eq!(reduce_max::<i8>(&[]), i8::MIN);
    assert_eq!(reduce_min::<u32>(&[]), u32::MAX);
    assert_eq!(reduce_max::<u32>(&[]), 0);
    assert_eq!(reduce_add::<f64>(&[]), 0.0);
    assert_eq!(reduce_mul::<f64>(&[]), 1.0);
    assert_eq!(dot_product::<u16>(&[], &[]), 0);
    assert_eq!(sum_of_squares::<i64>(&[]), 0);
    assert_eq!(sum_of_abs_diff::<f32>(&[], &[]), 0.0);
}

#[test]
fn single_element_bypasses_vector_machinery() {
    assert_eq!(reduce_add(&[i64::MAX]), i64::MAX);
    assert_eq!(reduce_mul(&[-7i32]), -7);
    assert!(reduce_min(&[f32::NAN]).is_nan());
    assert_eq!(dot_product(&[3i8], &[4i8]), 12);
    assert_eq!(sum_of_abs_diff(&[200u8], &[10u8]), 190);
}

#[test]
fn sum_wraps_at_every_integer_width() {
    assert_eq!(reduce_add(&[i8::MAX, 1]), i8::MIN);
    assert_eq!(reduce_add(&[u8::MAX, 1]), 0);
    assert_eq!(reduce_add(&[i64::MAX, 1]), i64::MIN);
    assert_eq!(reduce_add(&[u64::MAX, 2]), 1);
}

#[test]
fn product_wraps_on_the_scalar_fallback_path() {
    // i8 multiply runs the unrolled scalar plan; wraparound must still match
    // the naive wrapping fold.
    let data = [3i8; 40];
    let mut expected = 1i8;
    for &x in &data {
        expected = expected.wrapping_mul(x);
    }
    assert_eq!(reduce_mul(&data), expected);
}

#[test]
fn dot_product_wraps_in_products_and_sum() {
    let a = [i16::MAX, i16::MAX];
    let b = [2i16, 3];
    let expected = i16::MAX
        .wrapping_mul(2)
        .wrapping_add(i16::MAX.wrapping_mul(3));
    assert_eq!(dot_product(&a, &b), expected);
}

#[test]
fn float_minmax_skip_nan_operands() {
    // libm fmin/fmax semantics: a NaN operand yields the other operand.
    let data = [f32::NAN, 3.0, f32::NAN, -1.0, 2.0, f32::NAN, 0.0, 5.0, f32::NAN];
    assert_eq!(reduce_min(&data), -1.0);
    assert_eq!(reduce_max(&data), 5.0);
}

#[test]
fn float_infinities_propagate_through_sums() {
    let data = [1.0f64, f64::INFINITY, 2.0, 3.0];
    assert_eq!(reduce_add(&data), f64::INFINITY);

    let mixed = [f64::INFINITY, f64::NEG_INFINITY];
    assert!(reduce_add(&mixed).is_nan());
}

#[test]
fn signed_abs_wraps_at_min() {
    let mut out = [0i64; 3];
    abs(&[i64::MIN, -1, 1], &mut out);
    assert_eq!(out, [i64::MIN, 1, 1]);
}

#[test]
fn sad_handles_extreme_unsigned_spread() {
    assert_eq!(sum_of_abs_diff(&[0u8, u8::MAX], &[u8::MAX, 0]), 254); // 255 + 255 wraps
}

#[test]
fn scaled_add_with_zero_scale_copies_y() {
    let x = [5i32; 20];
    let y: Vec<i32> = (0..20).collect();
    let mut out = [0i32; 20];
    scaled_add(&x, &y, &mut out, 0);
    assert_eq!(&out[..], &y[..]);
}

#[test]
fn large_arrays_agree_with_naive_references() {
    let n = 4099; // prime-ish, leaves a tail at every lane width
    let a: Vec<i32> = (0..n).map(|i| (i as i32).wrapping_mul(2654435761u32 as i32)).collect();
    let b: Vec<i32> = (0..n).map(|i| (i as i32).wrapping_sub(1 << 20)).collect();

    let naive_sum = a.iter().fold(0i32, |s, &x| s.wrapping_add(x));
    assert_eq!(reduce_add(&a), naive_sum);

    let naive_dot = a
        .iter()
        .zip(&b)
        .fold(0i32, |s, (&x, &y)| s.wrapping_add(x.wrapping_mul(y)));
    assert_eq!(dot_product(&a, &b), naive_dot);

    let mut out = vec![0i32; n];
    elementwise_add(&a, &b, &mut out);
    for i in 0..n {
        assert_eq!(out[i], a[i].wrapping_add(b[i]));
    }
}

#[test]
fn identity_constants_are_consistent_across_types() {
    fn check<T: Element>() {
        assert_eq!(reduce_add::<T>(&[]), T::ZERO);
        assert_eq!(reduce_mul::<T>(&[]), T::ONE);
        assert_eq!(reduce_min::<T>(&[]), T::MAX_VALUE);
        assert_eq!(reduce_max::<T>(&[]), T::MIN_VALUE);
    }
    check::<i8>();
    check::<u8>();
    check::<i16>();
    check::<u16>();
    check::<i32>();
    check::<u32>();
    check::<i64>();
    check::<u64>();
    check::<f32>();
    check::<f64>();
}
