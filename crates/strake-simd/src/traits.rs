//! Core SIMD abstraction traits
//!
//! This module defines the traits all backends implement. Kernels written
//! against these traits compile once and run on any supported register
//! width: the lane count is exposed as a runtime query, not an associated
//! constant, because scalable instruction-set families fix the register
//! width at process start rather than at compile time.

/// Scalar types that can populate vector lanes.
///
/// Implemented for the 8- to 64-bit integer and floating-point primitives.
pub trait SimdElement: Copy {}

impl SimdElement for i8 {}
impl SimdElement for u8 {}
impl SimdElement for i16 {}
impl SimdElement for u16 {}
impl SimdElement for i32 {}
impl SimdElement for u32 {}
impl SimdElement for f32 {}
impl SimdElement for i64 {}
impl SimdElement for u64 {}
impl SimdElement for f64 {}

/// Core SIMD vector abstraction trait
///
/// Both the scalable backend and width-fixed backends implement this trait,
/// enabling zero-cost abstraction for vectorized operations.
///
/// # Lane count contract
///
/// `lanes()` is a **runtime** value: constant for the lifetime of the
/// process, identical for every value of the type, but not usable where the
/// language requires a compile-time constant (array extents, const generic
/// arguments). Callers that need a compile-time bound size buffers by
/// `MAX_LANES` instead and slice them to `lanes()` at runtime.
///
/// # Example
///
/// ```rust
/// use strake_simd::{DefaultSimdVector, SimdVector};
///
/// let a = DefaultSimdVector::splat(2.0);
/// let b = DefaultSimdVector::splat(3.0);
/// let result = a.add(b);
/// assert_eq!(
///     result.horizontal_sum(),
///     5.0 * DefaultSimdVector::lanes() as f32
/// );
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// The underlying scalar type
    type Scalar: Copy;

    /// Associated mask type for comparison operations
    type Mask: SimdMask;

    /// Associated integer vector type for bit manipulation
    type IntBits: SimdInt;

    /// Upper bound on `lanes()`, usable as an array extent.
    ///
    /// For width-fixed backends this equals the lane count; for the scalable
    /// backend it is the capacity implied by the largest register width the
    /// instruction-set family defines.
    const MAX_LANES: usize;

    /// Number of active lanes for this process.
    ///
    /// Successive calls within one process always return the same value,
    /// and `lanes() <= MAX_LANES` always holds.
    fn lanes() -> usize;

    // Construction

    /// Broadcast a scalar value to all active lanes
    fn splat(value: Self::Scalar) -> Self;

    /// Load exactly `lanes()` elements starting at `ptr`.
    ///
    /// No vector-width alignment requirement; `ptr` need only be aligned
    /// for the element type, as any pointer into scalar data already is.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of at least `lanes()` elements.
    unsafe fn load(ptr: *const Self::Scalar) -> Self;

    /// Store exactly `lanes()` elements to `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of at least `lanes()` elements.
    unsafe fn store(self, ptr: *mut Self::Scalar);

    /// Load from a slice (must have at least `lanes()` elements)
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `lanes()` elements
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice (must have at least `lanes()` elements)
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `lanes()` elements
    fn to_slice(self, slice: &mut [Self::Scalar]);

    // Arithmetic operations

    /// Element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise division
    fn div(self, rhs: Self) -> Self;

    /// Element-wise negation
    fn neg(self) -> Self;

    /// Element-wise absolute value
    fn abs(self) -> Self;

    /// Fused multiply-add: `self * b + c`
    fn fma(self, b: Self, c: Self) -> Self;

    // Min/Max operations

    /// Element-wise minimum
    fn min(self, rhs: Self) -> Self;

    /// Element-wise maximum
    fn max(self, rhs: Self) -> Self;

    // Comparison operations (return masks)

    /// Element-wise less-than comparison
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Element-wise greater-than comparison
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Element-wise equality comparison
    fn eq(self, rhs: Self) -> Self::Mask;

    // Blending

    /// Select values based on mask
    ///
    /// For each active lane: `mask[i] ? true_val[i] : false_val[i]`
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    // Horizontal operations
    //
    // Reductions combine exactly the active lanes in ascending lane order.
    // Results are not bit-identical across different register widths, since
    // the set of lanes combined differs by width.

    /// Sum of all active lanes
    fn horizontal_sum(self) -> Self::Scalar;

    /// Maximum value across all active lanes
    fn horizontal_max(self) -> Self::Scalar;

    /// Minimum value across all active lanes
    fn horizontal_min(self) -> Self::Scalar;

    // Rounding operations

    /// Round toward negative infinity
    fn floor(self) -> Self;

    /// Round toward positive infinity
    fn ceil(self) -> Self;

    /// Round to nearest, ties away from zero
    fn round(self) -> Self;

    /// Round toward zero
    fn trunc(self) -> Self;

    // Bit manipulation

    /// Reinterpret float bits as integer bits
    fn to_bits(self) -> Self::IntBits;

    /// Reinterpret integer bits as float bits (inverse of `to_bits`)
    fn from_bits(bits: Self::IntBits) -> Self;

    /// Convert an integer vector to floats (numerical conversion, not bit
    /// reinterpretation)
    fn from_int_cast(int_vec: Self::IntBits) -> Self;
}

/// Integer SIMD vector trait for bit manipulation
///
/// Provides the integer operations needed alongside a float vector: shifts,
/// masking, wrapping arithmetic, and float conversions. All arithmetic wraps
/// per two's-complement; in particular negating the signed minimum wraps to
/// itself rather than trapping.
pub trait SimdInt: Copy + Clone + Sized {
    /// Associated float vector type
    type FloatVec: SimdVector<IntBits = Self>;

    /// Upper bound on `lanes()`, usable as an array extent.
    const MAX_LANES: usize;

    /// Number of active lanes (matches the associated float vector)
    fn lanes() -> usize;

    /// Broadcast a scalar value to all active lanes
    fn splat(value: u32) -> Self;

    /// Bitwise left shift
    fn shl(self, count: u32) -> Self;

    /// Bitwise right shift
    fn shr(self, count: u32) -> Self;

    /// Bitwise AND with a broadcast constant
    fn bitwise_and(self, rhs: u32) -> Self;

    /// Bitwise OR with a broadcast constant
    fn bitwise_or(self, rhs: u32) -> Self;

    /// Bitwise XOR with a broadcast constant
    fn bitwise_xor(self, rhs: u32) -> Self;

    /// Bitwise NOT
    fn bitwise_not(self) -> Self;

    /// Wrapping addition of a broadcast constant
    fn add_scalar(self, rhs: u32) -> Self;

    /// Wrapping subtraction of a broadcast constant
    fn sub_scalar(self, rhs: u32) -> Self;

    /// Two's-complement negation; the signed minimum wraps to itself
    fn wrapping_neg(self) -> Self;

    /// Convert a float vector to signed i32, reinterpreted as u32
    fn from_f32_to_i32(float_vec: Self::FloatVec) -> Self;

    /// Convert to a float vector (numerical conversion)
    fn to_f32(self) -> Self::FloatVec;
}

/// Mask type for conditional SIMD operations
///
/// Masks represent per-active-lane boolean values, enabling branchless
/// conditional logic.
///
/// # Example
///
/// ```rust
/// use strake_simd::{DefaultSimdVector, SimdMask, SimdVector};
///
/// let a = DefaultSimdVector::splat(1.0);
/// let b = DefaultSimdVector::splat(2.0);
/// let mask = a.lt(b);
/// assert!(mask.all());
/// ```
pub trait SimdMask: Copy + Clone + Sized {
    /// Returns true if all active lanes are set
    fn all(self) -> bool;

    /// Returns true if any active lane is set
    fn any(self) -> bool;

    /// Returns true if no active lane is set
    fn none(self) -> bool;

    /// Lane-wise AND of two masks
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR of two masks
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise NOT of a mask
    fn not(self) -> Self;

    /// Lane-wise XOR of two masks
    fn xor(self, rhs: Self) -> Self;
}
