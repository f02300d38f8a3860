//! Test utilities for strake-simd
//!
//! Reference implementations, proptest strategies, and assertion helpers
//! shared by the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use strake_simd::{DefaultSimdVector, SimdVector};

/// Relative error tolerance for floating-point comparisons
pub const RELATIVE_ERROR_TOLERANCE: f32 = 1e-5;

/// Absolute error tolerance for floating-point comparisons
pub const ABSOLUTE_ERROR_TOLERANCE: f32 = 1e-6;

// ============================================================================
// Reference implementations using libm
// ============================================================================

#[inline]
pub fn ref_abs(x: f32) -> f32 {
    libm::fabsf(x)
}

#[inline]
pub fn ref_fma(a: f32, b: f32, c: f32) -> f32 {
    libm::fmaf(a, b, c)
}

#[inline]
pub fn ref_min(a: f32, b: f32) -> f32 {
    libm::fminf(a, b)
}

#[inline]
pub fn ref_max(a: f32, b: f32) -> f32 {
    libm::fmaxf(a, b)
}

// ============================================================================
// Proptest strategies
// ============================================================================

/// Normal floating-point values in [-1000, 1000], no denormals or specials.
pub fn normal_f32() -> impl Strategy<Value = f32> {
    (-1000.0f32..=1000.0f32).prop_filter("not denormal or special", |&x| x.is_normal() || x == 0.0)
}

/// A full set of active-lane values.
pub fn lane_values() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(normal_f32(), DefaultSimdVector::lanes())
}

/// Two full sets of active-lane values.
pub fn lane_value_pairs() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (lane_values(), lane_values())
}

/// Edge-case floating-point values: signed zeros, extremes, denormals.
pub fn edge_case_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(0.0f32),
        Just(-0.0f32),
        Just(f32::MIN_POSITIVE),
        Just(-f32::MIN_POSITIVE),
        Just(f32::MAX),
        Just(-f32::MAX),
        Just(1e-40f32),
        Just(-1e-40f32),
    ]
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two floats are approximately equal, with NaN treated as equal to NaN.
pub fn assert_approx_eq(actual: f32, expected: f32, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{}: expected NaN, got {}", context, actual);
        return;
    }

    let abs_diff = (actual - expected).abs();
    let abs_expected = expected.abs();
    let relative_error = if abs_expected > 0.0 {
        abs_diff / abs_expected
    } else {
        abs_diff
    };

    assert!(
        abs_diff <= ABSOLUTE_ERROR_TOLERANCE || relative_error <= RELATIVE_ERROR_TOLERANCE,
        "{}: expected {}, got {} (abs diff {:.2e}, rel err {:.2e})",
        context,
        expected,
        actual,
        abs_diff,
        relative_error
    );
}

/// Extract the active lanes of a vector into a Vec.
pub fn extract_lanes(v: DefaultSimdVector) -> Vec<f32> {
    let mut out = vec![0.0f32; DefaultSimdVector::lanes()];
    v.to_slice(&mut out);
    out
}

/// Assert a unary vector op agrees with a scalar reference on every lane.
pub fn assert_unary_consistency<F, R>(input: &[f32], simd_op: F, scalar_op: R, context: &str)
where
    F: Fn(DefaultSimdVector) -> DefaultSimdVector,
    R: Fn(f32) -> f32,
{
    assert_eq!(input.len(), DefaultSimdVector::lanes(), "{}: input length", context);
    let result = extract_lanes(simd_op(DefaultSimdVector::from_slice(input)));
    for (i, (&actual, &x)) in result.iter().zip(input.iter()).enumerate() {
        assert_approx_eq(actual, scalar_op(x), &format!("{} (lane {})", context, i));
    }
}

/// Assert a binary vector op agrees with a scalar reference on every lane.
pub fn assert_binary_consistency<F, R>(
    a: &[f32],
    b: &[f32],
    simd_op: F,
    scalar_op: R,
    context: &str,
) where
    F: Fn(DefaultSimdVector, DefaultSimdVector) -> DefaultSimdVector,
    R: Fn(f32, f32) -> f32,
{
    assert_eq!(a.len(), DefaultSimdVector::lanes(), "{}: input length", context);
    assert_eq!(b.len(), DefaultSimdVector::lanes(), "{}: input length", context);
    let result = extract_lanes(simd_op(
        DefaultSimdVector::from_slice(a),
        DefaultSimdVector::from_slice(b),
    ));
    for (i, (&actual, (&x, &y))) in result.iter().zip(a.iter().zip(b.iter())).enumerate() {
        assert_approx_eq(actual, scalar_op(x, y), &format!("{} (lane {})", context, i));
    }
}
