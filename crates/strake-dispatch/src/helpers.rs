//! Chunking drivers bridging slice operations to vector values
//!
//! These helpers carry the tile-loop shape every slice operation shares:
//! stride by the runtime lane count, process full tiles through the vector
//! type, finish the remainder with a scalar tail. Backends supply only the
//! per-tile kernel and the tail function.

use strake_simd::SimdVector;

/// Process a unary operation over a slice.
///
/// # Panics
///
/// Panics if `input` and `output` lengths differ.
#[inline]
pub fn process_unary<V, F, T>(input: &[f32], output: &mut [f32], kernel: F, tail: T)
where
    V: SimdVector<Scalar = f32>,
    F: Fn(V) -> V,
    T: Fn(f32) -> f32,
{
    assert_eq!(
        input.len(),
        output.len(),
        "input and output slices must have the same length"
    );

    let lanes = V::lanes();
    let chunks = input.len() / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let v = V::from_slice(&input[start..]);
        kernel(v).to_slice(&mut output[start..]);
    }

    for i in chunks * lanes..input.len() {
        output[i] = tail(input[i]);
    }
}

/// Process a binary operation over two slices.
///
/// # Panics
///
/// Panics if the slice lengths differ.
#[inline]
pub fn process_binary<V, F, T>(a: &[f32], b: &[f32], output: &mut [f32], kernel: F, tail: T)
where
    V: SimdVector<Scalar = f32>,
    F: Fn(V, V) -> V,
    T: Fn(f32, f32) -> f32,
{
    assert_eq!(a.len(), b.len(), "input slices must have the same length");
    assert_eq!(
        a.len(),
        output.len(),
        "input and output slices must have the same length"
    );

    let lanes = V::lanes();
    let chunks = a.len() / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let va = V::from_slice(&a[start..]);
        let vb = V::from_slice(&b[start..]);
        kernel(va, vb).to_slice(&mut output[start..]);
    }

    for i in chunks * lanes..a.len() {
        output[i] = tail(a[i], b[i]);
    }
}

/// Process a ternary operation over three slices.
///
/// # Panics
///
/// Panics if the slice lengths differ.
#[inline]
pub fn process_ternary<V, F, T>(
    a: &[f32],
    b: &[f32],
    c: &[f32],
    output: &mut [f32],
    kernel: F,
    tail: T,
) where
    V: SimdVector<Scalar = f32>,
    F: Fn(V, V, V) -> V,
    T: Fn(f32, f32, f32) -> f32,
{
    assert_eq!(a.len(), b.len(), "input slices must have the same length");
    assert_eq!(a.len(), c.len(), "input slices must have the same length");
    assert_eq!(
        a.len(),
        output.len(),
        "input and output slices must have the same length"
    );

    let lanes = V::lanes();
    let chunks = a.len() / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let va = V::from_slice(&a[start..]);
        let vb = V::from_slice(&b[start..]);
        let vc = V::from_slice(&c[start..]);
        kernel(va, vb, vc).to_slice(&mut output[start..]);
    }

    for i in chunks * lanes..a.len() {
        output[i] = tail(a[i], b[i], c[i]);
    }
}

/// Sum a slice tile by tile.
#[inline]
pub fn reduce_sum<V>(input: &[f32]) -> f32
where
    V: SimdVector<Scalar = f32>,
{
    let lanes = V::lanes();
    let chunks = input.len() / lanes;

    let mut acc = 0.0f32;
    for i in 0..chunks {
        acc += V::from_slice(&input[i * lanes..]).horizontal_sum();
    }
    for &x in &input[chunks * lanes..] {
        acc += x;
    }
    acc
}

/// Maximum of a slice tile by tile; negative infinity for an empty slice.
#[inline]
pub fn reduce_max<V>(input: &[f32]) -> f32
where
    V: SimdVector<Scalar = f32>,
{
    let lanes = V::lanes();
    let chunks = input.len() / lanes;

    let mut acc = f32::NEG_INFINITY;
    for i in 0..chunks {
        acc = libm::fmaxf(acc, V::from_slice(&input[i * lanes..]).horizontal_max());
    }
    for &x in &input[chunks * lanes..] {
        acc = libm::fmaxf(acc, x);
    }
    acc
}

/// Minimum of a slice tile by tile; positive infinity for an empty slice.
#[inline]
pub fn reduce_min<V>(input: &[f32]) -> f32
where
    V: SimdVector<Scalar = f32>,
{
    let lanes = V::lanes();
    let chunks = input.len() / lanes;

    let mut acc = f32::INFINITY;
    for i in 0..chunks {
        acc = libm::fminf(acc, V::from_slice(&input[i * lanes..]).horizontal_min());
    }
    for &x in &input[chunks * lanes..] {
        acc = libm::fminf(acc, x);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use strake_simd::ScalarVector;

    #[test]
    fn test_process_unary_with_remainder() {
        let input = [1.0, -2.0, 3.0];
        let mut output = [0.0; 3];

        process_unary::<ScalarVector, _, _>(&input, &mut output, |v| v.abs(), libm::fabsf);

        assert_eq!(output, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_process_binary_basic() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let mut output = [0.0; 3];

        process_binary::<ScalarVector, _, _>(&a, &b, &mut output, |x, y| x.add(y), |x, y| x + y);

        assert_eq!(output, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_process_ternary_fma() {
        let a = [2.0, 3.0];
        let b = [4.0, 5.0];
        let c = [1.0, 2.0];
        let mut output = [0.0; 2];

        process_ternary::<ScalarVector, _, _>(
            &a,
            &b,
            &c,
            &mut output,
            |x, y, z| x.fma(y, z),
            libm::fmaf,
        );

        assert_eq!(output, [9.0, 17.0]);
    }

    #[test]
    fn test_reductions() {
        let input = [3.0, -1.0, 4.0, 1.0, 5.0];
        assert_eq!(reduce_sum::<ScalarVector>(&input), 12.0);
        assert_eq!(reduce_max::<ScalarVector>(&input), 5.0);
        assert_eq!(reduce_min::<ScalarVector>(&input), -1.0);
    }

    #[test]
    fn test_reductions_empty() {
        assert_eq!(reduce_sum::<ScalarVector>(&[]), 0.0);
        assert_eq!(reduce_max::<ScalarVector>(&[]), f32::NEG_INFINITY);
        assert_eq!(reduce_min::<ScalarVector>(&[]), f32::INFINITY);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_is_rejected() {
        let input = [1.0, 2.0];
        let mut output = [0.0; 3];
        process_unary::<ScalarVector, _, _>(&input, &mut output, |v| v, |x| x);
    }
}
