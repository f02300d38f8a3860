//! Slice backend contract
//!
//! Every backend exposes the same slice-level operations with functionally
//! identical behavior; only the vector width behind them differs.
//!
//! # Contract requirements
//!
//! 1. **Functional equivalence**: all backends produce identical output
//!    within floating-point precision
//! 2. **no_std compatible**: no heap allocations
//! 3. **Zero-sized**: backends are ZSTs usable as function-pointer sources
//! 4. **Length discipline**: output slices must match input lengths; the
//!    caller ensures it and the drivers assert it

/// Slice-level operations every backend implements.
///
/// All methods are associated functions so the dispatcher can store them in
/// a function-pointer table.
pub trait SliceBackend: Copy {
    /// Backend identifier for logging: "scalable" or "scalar"
    fn name() -> &'static str;

    /// Lane count of the underlying vector type for this process
    fn lanes() -> usize;

    // Binary elementwise operations

    /// `output[i] = a[i] + b[i]`
    fn add(a: &[f32], b: &[f32], output: &mut [f32]);

    /// `output[i] = a[i] - b[i]`
    fn sub(a: &[f32], b: &[f32], output: &mut [f32]);

    /// `output[i] = a[i] * b[i]`
    fn mul(a: &[f32], b: &[f32], output: &mut [f32]);

    /// `output[i] = a[i] / b[i]`
    fn div(a: &[f32], b: &[f32], output: &mut [f32]);

    /// `output[i] = min(a[i], b[i])`
    fn min(a: &[f32], b: &[f32], output: &mut [f32]);

    /// `output[i] = max(a[i], b[i])`
    fn max(a: &[f32], b: &[f32], output: &mut [f32]);

    // Ternary elementwise operations

    /// `output[i] = a[i] * b[i] + c[i]` (fused)
    fn fma(a: &[f32], b: &[f32], c: &[f32], output: &mut [f32]);

    // Unary elementwise operations

    /// `output[i] = -input[i]`
    fn neg(input: &[f32], output: &mut [f32]);

    /// `output[i] = |input[i]|`
    fn abs(input: &[f32], output: &mut [f32]);

    /// `output[i] = floor(input[i])`
    fn floor(input: &[f32], output: &mut [f32]);

    /// `output[i] = ceil(input[i])`
    fn ceil(input: &[f32], output: &mut [f32]);

    /// `output[i] = round(input[i])`
    fn round(input: &[f32], output: &mut [f32]);

    /// `output[i] = trunc(input[i])`
    fn trunc(input: &[f32], output: &mut [f32]);

    /// `output[i] = input[i] * gain`
    fn scale(input: &[f32], output: &mut [f32], gain: f32);

    // Reductions
    //
    // Combination order is tile-by-tile in ascending index order; results
    // are not bit-identical across backends or widths.

    /// Sum of all elements (0.0 for an empty slice)
    fn sum(input: &[f32]) -> f32;

    /// Maximum element (negative infinity for an empty slice)
    fn max_value(input: &[f32]) -> f32;

    /// Minimum element (positive infinity for an empty slice)
    fn min_value(input: &[f32]) -> f32;
}
