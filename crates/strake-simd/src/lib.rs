#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! strake-simd: vector-length-agnostic SIMD value abstraction
//!
//! This library provides a SIMD value type whose lane count is a runtime
//! constant rather than a compile-time constant, so a single compiled kernel
//! runs correctly on any supported vector register width.
//!
//! # Features
//!
//! - **Trait-based SIMD abstraction**: write backend-agnostic kernels against
//!   the `SimdVector` trait family
//! - **Scalable backend**: `ScalableVector` holds up to the architectural
//!   maximum register width; only the first `lanes()` elements are active
//! - **Runtime width query**: `width::vector_bytes()` is established once per
//!   process and cached, thread-safe on first use
//! - **Scalar backend**: 1-lane reference implementation, always available
//! - **No allocations**: all values are stack-based
//!
//! # Quick Start
//!
//! ```rust
//! use strake_simd::{DefaultSimdVector, SimdVector};
//! use strake_simd::ops::mul;
//!
//! fn apply_gain(input: &[f32], output: &mut [f32], gain: f32) {
//!     let lanes = DefaultSimdVector::lanes();
//!     let gain_vec = DefaultSimdVector::splat(gain);
//!     let chunks = input.len() / lanes;
//!
//!     for i in 0..chunks {
//!         let start = i * lanes;
//!         let v = DefaultSimdVector::from_slice(&input[start..]);
//!         mul(v, gain_vec).to_slice(&mut output[start..]);
//!     }
//!     for i in chunks * lanes..input.len() {
//!         output[i] = input[i] * gain;
//!     }
//! }
//!
//! let input = [1.0f32; 19];
//! let mut output = [0.0f32; 19];
//! apply_gain(&input, &mut output, 0.5);
//! assert!(output.iter().all(|&x| x == 0.5));
//! ```

// Scalar reference math for no_std fallbacks and test oracles
extern crate libm;

// Core trait definitions
pub mod traits;

// Bounded lane storage
pub mod storage;

// Process-wide vector width query
pub mod width;

// Backend implementations
pub mod backends;

// Functional-style vector operations
pub mod ops;

// Maximum-capacity scratch buffers for migrated call sites
pub mod scratch;

// Public re-exports for convenience
pub use traits::{SimdElement, SimdInt, SimdMask, SimdVector};

pub use storage::{LaneBuffer, MAX_VECTOR_BITS};

pub use backends::scalable::{ScalableInt, ScalableMask, ScalableVector};
pub use backends::scalar::{ScalarInt, ScalarMask, ScalarVector};

pub use scratch::LaneScratch;

/// Default SIMD vector type.
///
/// The scalable backend is available on every platform: it uses the hardware
/// register width where the scalable instruction-set family is present and a
/// fixed 128-bit emulation width elsewhere, so kernels written against this
/// alias behave identically everywhere.
pub type DefaultSimdVector = ScalableVector;

// A pinned width is a process-wide constant; pinning two at once is a
// configuration contradiction, not a request for a range.
#[cfg(all(feature = "force-vl128", feature = "force-vl256"))]
compile_error!("Cannot enable both force-vl128 and force-vl256. Pin one width.");

#[cfg(all(feature = "force-vl128", feature = "force-vl512"))]
compile_error!("Cannot enable both force-vl128 and force-vl512. Pin one width.");

#[cfg(all(feature = "force-vl256", feature = "force-vl512"))]
compile_error!("Cannot enable both force-vl256 and force-vl512. Pin one width.");
