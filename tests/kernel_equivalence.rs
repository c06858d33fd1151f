//! Property-based tests for dot product kernel equivalence.
//!
//! Every lane width must agree with the scalar reference within single precision
//! accumulation error, on random data and on the alternating unit pattern.

use lanedot::harness::alternating;
use lanedot::numerics::*;
use proptest::prelude::*;

const EPS: f32 = 1e-3;

fn lengths_around(w: usize) -> [usize; 8] {
    [0, 1, w - 1, w, w + 1, 2 * w - 1, 2 * w, 2 * w + 1]
}

// ============================================================================
// Alternating pattern
// ============================================================================

/// Shifted dot products of the alternating pattern: `data[1..i] . data[..i - 1]` is 1 when
/// `data[i] * data[i - 1] == -1` and 0 otherwise.
fn assert_alternating(kernel: impl Fn(&[f32], &[f32]) -> f32, size: usize) {
    let data = alternating(size);
    for i in 1..size.saturating_sub(1) {
        let dot = kernel(&data[1..i], &data[..i - 1]);
        let expected = if data[i] * data[i - 1] == -1.0 { 1.0 } else { 0.0 };
        assert!((dot - expected).abs() <= EPS, "i={i} dot={dot} expected={expected}");
    }
}

#[test]
fn alternating_naive() {
    assert_alternating(dot_product_naive, 300);
}

#[cfg(feature = "lanes4")]
#[test]
fn alternating_w4() {
    assert_alternating(dot_product_w4, 300);
}

#[cfg(feature = "lanes8")]
#[test]
fn alternating_w8() {
    assert_alternating(dot_product_w8, 301);
}

#[cfg(feature = "half8")]
#[test]
fn alternating_half_w8() {
    let data = f32s_to_halves(&alternating(301));
    for i in 1..300 {
        let dot = dot_product_half_w8(&data[1..i], &data[..i - 1]);
        let product = half_to_f32(data[i]) * half_to_f32(data[i - 1]);
        let expected = if product == -1.0 { 1.0 } else { 0.0 };
        assert!((dot - expected).abs() <= EPS, "i={i} dot={dot}");
    }
}

// ============================================================================
// Loop boundaries
// ============================================================================

#[test]
fn boundary_lengths_agree() {
    for n in lengths_around(4).into_iter().chain(lengths_around(8)) {
        let a: Vec<f32> = (0..n).map(|i| ((i * 7 + 3) % 11) as f32 - 5.0).collect();
        let b: Vec<f32> = (0..n).map(|i| ((i * 5 + 1) % 13) as f32 * 0.5).collect();
        let naive = dot_product_naive(&a, &b);
        assert!(naive.is_finite());

        #[cfg(feature = "lanes4")]
        assert!((dot_product_w4(&a, &b) - naive).abs() <= EPS, "w4 n={n}");
        #[cfg(feature = "lanes8")]
        assert!((dot_product_w8(&a, &b) - naive).abs() <= EPS, "w8 n={n}");
        #[cfg(feature = "half8")]
        {
            let (ha, hb) = (f32s_to_halves(&a), f32s_to_halves(&b));
            assert!((dot_product_half_w8(&ha, &hb) - naive).abs() <= EPS, "half n={n}");
        }
    }
}

#[test]
fn zero_length_is_zero_everywhere() {
    let a = [3.0f32; 4];
    assert_eq!(dot_product_naive(&a[..0], &a[..0]), 0.0);
    #[cfg(feature = "lanes4")]
    assert_eq!(dot_product_w4(&a[..0], &a[..0]), 0.0);
    #[cfg(feature = "lanes8")]
    assert_eq!(dot_product_w8(&a[..0], &a[..0]), 0.0);
    #[cfg(feature = "half8")]
    assert_eq!(dot_product_half_w8(&[], &[]), 0.0);
}

#[test]
fn describe_reports_compiled_widths() {
    let description = describe_selected_lane_widths();
    assert_eq!(description.contains("4 x f32"), cfg!(feature = "lanes4"));
    assert_eq!(description.contains("8 x f32"), cfg!(feature = "lanes8"));
    assert_eq!(description.contains("8 x f16 -> f32"), cfg!(feature = "half8"));
}

// ============================================================================
// Random inputs
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_inputs_match_naive(
        pairs in prop::collection::vec((-1.0f32..1.0, -1.0f32..1.0), 0..600),
    ) {
        let (a, b): (Vec<f32>, Vec<f32>) = pairs.into_iter().unzip();
        prop_assert!(dot_product_naive(&a, &b).is_finite());

        #[cfg(any(feature = "lanes4", feature = "lanes8"))]
        {
            let naive = dot_product_naive(&a, &b);
            #[cfg(feature = "lanes4")]
            prop_assert!((dot_product_w4(&a, &b) - naive).abs() <= EPS);
            #[cfg(feature = "lanes8")]
            prop_assert!((dot_product_w8(&a, &b) - naive).abs() <= EPS);
        }
    }

    #[test]
    fn representable_values_round_trip(numerator in -2048i32..=2048, shift in 0u32..10) {
        // k / 2^s with |k| <= 2048 fits in the 11 significant bits of a half
        let x = numerator as f32 / (1u32 << shift) as f32;
        prop_assert_eq!(half_to_f32(f32_to_half(x)), x);
    }

    #[test]
    fn sequence_round_trip_is_identity(values in prop::collection::vec(-1024i32..=1024, 0..100)) {
        let values: Vec<f32> = values.into_iter().map(|v| v as f32 * 0.5).collect();
        prop_assert_eq!(halves_to_f32s(&f32s_to_halves(&values)), values);
    }

    #[test]
    fn narrowing_matches_half_crate(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        prop_assume!(!x.is_nan());
        prop_assert_eq!(f32_to_half(x).to_bits(), half::f16::from_f32(x).to_bits());
    }
}
