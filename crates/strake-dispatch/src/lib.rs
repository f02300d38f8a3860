#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! strake-dispatch: runtime backend selection for strake-simd
//!
//! This crate decides, once per process, whether kernels run on the scalable
//! (runtime-width) backend or the width-fixed scalar fallback, and exposes
//! slice-level operations that dispatch through a function-pointer table.
//!
//! # Primary public API
//!
//! Use [`VectorContext`] for all slice-level work: it probes the CPU once at
//! construction and every operation afterwards is a single indirect call.
//!
//! # Architecture
//!
//! - `backend`: the `SliceBackend` contract every backend satisfies
//! - `helpers`: chunking drivers bridging slices to vector values, with the
//!   stride computed from the runtime lane count and a scalar tail
//! - `scalable` / `scalar`: the two backend implementations
//! - `dispatcher`: CPU feature detection, backend choice, fn-pointer table
//! - `context`: `VectorContext` unified API
//!
//! # Feature flags
//!
//! - `force-scalable` / `force-scalar`: pin the backend for deterministic CI
//! - `force-vl128` / `force-vl256` / `force-vl512`: pin the vector width
//!   (pass-throughs to strake-simd)
//! - `log`: emit the selection through the `log` facade at startup
//!
//! # Example
//!
//! ```ignore
//! use strake_dispatch::VectorContext;
//!
//! // Initialize once during engine startup
//! let ctx = VectorContext::new();
//!
//! let a = [1.0f32; 100];
//! let b = [2.0f32; 100];
//! let mut out = [0.0f32; 100];
//! ctx.add(&a, &b, &mut out);
//! assert_eq!(ctx.sum(&out), 300.0);
//! ```

// Re-export the value-type layer for convenience
pub use strake_simd::*;

// Internal modules
pub mod backend;
pub mod context;
pub mod dispatcher;
pub mod helpers;
pub mod scalable;
pub mod scalar;

// Re-export primary public API
pub use context::VectorContext;

// Re-export supporting types
pub use backend::SliceBackend;
pub use dispatcher::{BackendType, CpuFeatures, VectorDispatcher};
pub use scalable::ScalableBackend;
pub use scalar::ScalarBackend;

// Pinning both backends at once is a contradiction.
#[cfg(all(feature = "force-scalable", feature = "force-scalar"))]
compile_error!(
    "Cannot enable both force-scalable and force-scalar. Choose one backend."
);
