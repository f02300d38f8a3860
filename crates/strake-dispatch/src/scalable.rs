//! Scalable backend (runtime vector width)
//!
//! Routes every slice operation through `ScalableVector`, whose lane count
//! is the process-wide width query. One compiled body serves every register
//! width; the tile stride adapts at runtime.

use crate::backend::SliceBackend;
use crate::helpers::{
    process_binary, process_ternary, process_unary, reduce_max, reduce_min, reduce_sum,
};
use strake_simd::{ScalableVector, SimdVector};

/// Scalable slice backend
#[derive(Copy, Clone, Debug)]
pub struct ScalableBackend;

impl SliceBackend for ScalableBackend {
    #[inline]
    fn name() -> &'static str {
        "scalable"
    }

    #[inline]
    fn lanes() -> usize {
        ScalableVector::lanes()
    }

    #[inline]
    fn add(a: &[f32], b: &[f32], output: &mut [f32]) {
        process_binary::<ScalableVector, _, _>(a, b, output, |x, y| x.add(y), |x, y| x + y);
    }

    #[inline]
    fn sub(a: &[f32], b: &[f32], output: &mut [f32]) {
        process_binary::<ScalableVector, _, _>(a, b, output, |x, y| x.sub(y), |x, y| x - y);
    }

    #[inline]
    fn mul(a: &[f32], b: &[f32], output: &mut [f32]) {
        process_binary::<ScalableVector, _, _>(a, b, output, |x, y| x.mul(y), |x, y| x * y);
    }

    #[inline]
    fn div(a: &[f32], b: &[f32], output: &mut [f32]) {
        process_binary::<ScalableVector, _, _>(a, b, output, |x, y| x.div(y), |x, y| x / y);
    }

    #[inline]
    fn min(a: &[f32], b: &[f32], output: &mut [f32]) {
        process_binary::<ScalableVector, _, _>(a, b, output, |x, y| x.min(y), libm::fminf);
    }

    #[inline]
    fn max(a: &[f32], b: &[f32], output: &mut [f32]) {
        process_binary::<ScalableVector, _, _>(a, b, output, |x, y| x.max(y), libm::fmaxf);
    }

    #[inline]
    fn fma(a: &[f32], b: &[f32], c: &[f32], output: &mut [f32]) {
        process_ternary::<ScalableVector, _, _>(
            a,
            b,
            c,
            output,
            |x, y, z| x.fma(y, z),
            libm::fmaf,
        );
    }

    #[inline]
    fn neg(input: &[f32], output: &mut [f32]) {
        process_unary::<ScalableVector, _, _>(input, output, |v| v.neg(), |x| -x);
    }

    #[inline]
    fn abs(input: &[f32], output: &mut [f32]) {
        process_unary::<ScalableVector, _, _>(input, output, |v| v.abs(), libm::fabsf);
    }

    #[inline]
    fn floor(input: &[f32], output: &mut [f32]) {
        process_unary::<ScalableVector, _, _>(input, output, |v| v.floor(), libm::floorf);
    }

    #[inline]
    fn ceil(input: &[f32], output: &mut [f32]) {
        process_unary::<ScalableVector, _, _>(input, output, |v| v.ceil(), libm::ceilf);
    }

    #[inline]
    fn round(input: &[f32], output: &mut [f32]) {
        process_unary::<ScalableVector, _, _>(input, output, |v| v.round(), libm::roundf);
    }

    #[inline]
    fn trunc(input: &[f32], output: &mut [f32]) {
        process_unary::<ScalableVector, _, _>(input, output, |v| v.trunc(), libm::truncf);
    }

    #[inline]
    fn scale(input: &[f32], output: &mut [f32], gain: f32) {
        let gain_vec = ScalableVector::splat(gain);
        process_unary::<ScalableVector, _, _>(input, output, |v| v.mul(gain_vec), |x| x * gain);
    }

    #[inline]
    fn sum(input: &[f32]) -> f32 {
        reduce_sum::<ScalableVector>(input)
    }

    #[inline]
    fn max_value(input: &[f32]) -> f32 {
        reduce_max::<ScalableVector>(input)
    }

    #[inline]
    fn min_value(input: &[f32]) -> f32 {
        reduce_min::<ScalableVector>(input)
    }
}
