//! Functional-style vector operations
//!
//! Thin free-function wrappers over the `SimdVector` trait methods, for
//! kernels that prefer `mul(a, b)` over `a.mul(b)`. Each wrapper is
//! force-inlined; using these instead of the methods changes nothing about
//! the generated code.

mod arithmetic;
mod compare;
mod horizontal;

pub use arithmetic::{abs, add, div, fma, mul, neg, sub};
pub use compare::{clamp, eq, gt, lt, max, min, select};
pub use horizontal::{horizontal_max, horizontal_min, horizontal_sum};
