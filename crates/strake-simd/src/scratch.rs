//! Maximum-capacity scratch buffers
//!
//! A kernel written against a width-fixed backend can size a local buffer
//! with the lane constant: `[0.0f32; V::LANES]`. With a runtime lane count
//! that extent does not exist, and every such local must be restructured.
//! `LaneScratch` is the replacement: storage sized to the compile-time
//! capacity bound, exposed as a slice of the runtime active length. The
//! trade is a few unused bytes of stack for not needing the lane count at
//! compile time.

use crate::traits::SimdElement;
use crate::width;

/// Stack buffer with capacity for the widest register, active length from
/// the runtime width query.
///
/// # Example
///
/// ```rust
/// use strake_simd::{DefaultSimdVector, LaneScratch, SimdVector};
/// use strake_simd::storage::MAX_LANES_32;
///
/// let v = DefaultSimdVector::splat(1.5);
/// let mut scratch = LaneScratch::<f32, MAX_LANES_32>::new();
/// v.to_slice(scratch.as_mut_slice());
/// assert!(scratch.as_slice().iter().all(|&x| x == 1.5));
/// assert_eq!(scratch.len(), DefaultSimdVector::lanes());
/// ```
#[derive(Copy, Clone)]
pub struct LaneScratch<T: SimdElement + Default, const CAP: usize> {
    data: [T; CAP],
    len: usize,
}

impl<T: SimdElement + Default, const CAP: usize> LaneScratch<T, CAP> {
    /// Create a scratch buffer spanning the active lanes of element type `T`.
    ///
    /// The buffer is default-filled; unlike vector storage, scratch space is
    /// a convenience type and pays the initialization write for a safe API.
    #[inline]
    pub fn new() -> Self {
        let len = width::active_lanes::<T>();
        debug_assert!(len <= CAP, "active length {} exceeds capacity {}", len, CAP);
        Self {
            data: [T::default(); CAP],
            len,
        }
    }

    /// Active portion of the buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Mutable active portion of the buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Active length (the process-wide lane count for `T`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer has no active lanes (never true in practice).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compile-time capacity bound.
    #[inline]
    pub const fn capacity(&self) -> usize {
        CAP
    }
}

impl<T: SimdElement + Default, const CAP: usize> Default for LaneScratch<T, CAP> {
    fn default() -> Self {
        Self::new()
    }
}
