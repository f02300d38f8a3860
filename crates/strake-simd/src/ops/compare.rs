//! Comparison, selection, and clamping operations

use crate::traits::SimdVector;

/// Element-wise less-than comparison
#[inline(always)]
pub fn lt<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.lt(b)
}

/// Element-wise greater-than comparison
#[inline(always)]
pub fn gt<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.gt(b)
}

/// Element-wise equality comparison
#[inline(always)]
pub fn eq<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.eq(b)
}

/// Select values based on a mask
///
/// For each active lane: `mask[i] ? a[i] : b[i]`
///
/// # Example
///
/// ```rust
/// use strake_simd::{DefaultSimdVector, SimdVector};
/// use strake_simd::ops::{lt, select};
///
/// let a = DefaultSimdVector::splat(1.0);
/// let b = DefaultSimdVector::splat(2.0);
/// let smaller = select(lt(a, b), a, b);
/// assert_eq!(smaller.horizontal_max(), 1.0);
/// ```
#[inline(always)]
pub fn select<V: SimdVector>(mask: V::Mask, a: V, b: V) -> V {
    V::select(mask, a, b)
}

/// Element-wise minimum
#[inline(always)]
pub fn min<V: SimdVector>(a: V, b: V) -> V {
    a.min(b)
}

/// Element-wise maximum
#[inline(always)]
pub fn max<V: SimdVector>(a: V, b: V) -> V {
    a.max(b)
}

/// Clamp each lane to `[lo, hi]`
#[inline(always)]
pub fn clamp<V: SimdVector>(value: V, lo: V, hi: V) -> V {
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;
    use crate::traits::SimdMask;

    #[test]
    fn test_comparisons() {
        let a = ScalarVector(2.0);
        let b = ScalarVector(3.0);

        assert!(lt(a, b).all());
        assert!(gt(a, b).none());
        assert!(eq(a, a).all());
    }

    #[test]
    fn test_select() {
        let a = ScalarVector(1.0);
        let b = ScalarVector(2.0);

        assert_eq!(select(lt(a, b), a, b), a);
        assert_eq!(select(gt(a, b), a, b), b);
    }

    #[test]
    fn test_minmax_clamp() {
        let a = ScalarVector(2.0);
        let b = ScalarVector(3.0);

        assert_eq!(min(a, b), a);
        assert_eq!(max(a, b), b);
        assert_eq!(
            clamp(ScalarVector(5.0), ScalarVector(0.0), ScalarVector(3.0)),
            ScalarVector(3.0)
        );
        assert_eq!(
            clamp(ScalarVector(-1.0), ScalarVector(0.0), ScalarVector(3.0)),
            ScalarVector(0.0)
        );
    }
}
