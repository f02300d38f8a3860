//! Runtime backend dispatcher
//!
//! Detects CPU capabilities once, picks a backend, and freezes the choice
//! into a function-pointer table. Width probing inside the scalable backend
//! only ever runs after this layer has confirmed the scalable family is
//! available (or a forced feature has pinned the choice).

use crate::backend::SliceBackend;
use crate::scalable::ScalableBackend;
use crate::scalar::ScalarBackend;

/// CPU feature detection results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// Scalable vector extension available (aarch64)
    pub has_sve: bool,

    /// AVX2 support available (x86_64)
    pub has_avx2: bool,

    /// AVX-512 Foundation available (x86_64)
    pub has_avx512f: bool,
}

impl CpuFeatures {
    /// Detect CPU features at runtime.
    ///
    /// First call costs a capability probe; the `cpufeatures` crate caches
    /// the answer so later calls are near-free. Safe to call from any
    /// thread with no prior setup.
    pub fn detect() -> Self {
        #[cfg(target_arch = "aarch64")]
        {
            cpufeatures::new!(caps_sve, "sve");

            Self {
                has_sve: caps_sve::get(),
                has_avx2: false,
                has_avx512f: false,
            }
        }

        #[cfg(target_arch = "x86_64")]
        {
            cpufeatures::new!(cpuid_avx2, "avx2");
            cpufeatures::new!(cpuid_avx512f, "avx512f");

            Self {
                has_sve: false,
                has_avx2: cpuid_avx2::get(),
                has_avx512f: cpuid_avx512f::get(),
            }
        }

        #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
        {
            Self {
                has_sve: false,
                has_avx2: false,
                has_avx512f: false,
            }
        }
    }
}

/// Selected backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Scalable backend (runtime vector width)
    Scalable,

    /// Scalar fallback (1 lane, always available)
    Scalar,
}

impl BackendType {
    /// Select a backend from detected CPU features.
    ///
    /// # Selection priority
    ///
    /// 1. A `force-*` feature, if compiled in (deterministic CI)
    /// 2. Scalable, when the hardware exposes the scalable family
    /// 3. Scalar otherwise
    pub fn select(features: CpuFeatures) -> Self {
        #[cfg(feature = "force-scalable")]
        {
            let _ = features;
            BackendType::Scalable
        }

        #[cfg(feature = "force-scalar")]
        {
            let _ = features;
            BackendType::Scalar
        }

        #[cfg(not(any(feature = "force-scalable", feature = "force-scalar")))]
        {
            if features.has_sve {
                BackendType::Scalable
            } else {
                BackendType::Scalar
            }
        }
    }

    /// Backend name for logging: "scalable" or "scalar"
    pub fn name(&self) -> &'static str {
        match self {
            BackendType::Scalable => "scalable",
            BackendType::Scalar => "scalar",
        }
    }
}

// Function-pointer shapes stored in the table
type UnaryOpFn = fn(&[f32], &mut [f32]);
type BinaryOpFn = fn(&[f32], &[f32], &mut [f32]);
type TernaryOpFn = fn(&[f32], &[f32], &[f32], &mut [f32]);
type ScaleFn = fn(&[f32], &mut [f32], f32);
type ReduceFn = fn(&[f32]) -> f32;
type LanesFn = fn() -> usize;

/// Frozen dispatch table
///
/// Initialized once at startup; afterwards every operation is one indirect
/// call through a stable function pointer.
#[derive(Clone, Debug)]
pub struct VectorDispatcher {
    add_fn: BinaryOpFn,
    sub_fn: BinaryOpFn,
    mul_fn: BinaryOpFn,
    div_fn: BinaryOpFn,
    min_fn: BinaryOpFn,
    max_fn: BinaryOpFn,

    fma_fn: TernaryOpFn,

    neg_fn: UnaryOpFn,
    abs_fn: UnaryOpFn,
    floor_fn: UnaryOpFn,
    ceil_fn: UnaryOpFn,
    round_fn: UnaryOpFn,
    trunc_fn: UnaryOpFn,

    scale_fn: ScaleFn,

    sum_fn: ReduceFn,
    max_value_fn: ReduceFn,
    min_value_fn: ReduceFn,

    lanes_fn: LanesFn,

    backend_name: &'static str,
}

impl VectorDispatcher {
    /// Detect features, select a backend, build the table.
    ///
    /// Call once at startup, not in a hot path.
    pub fn init() -> Self {
        let features = CpuFeatures::detect();
        match BackendType::select(features) {
            BackendType::Scalable => Self::for_backend::<ScalableBackend>(),
            BackendType::Scalar => Self::for_backend::<ScalarBackend>(),
        }
    }

    /// Build a table from one backend's associated functions.
    fn for_backend<B: SliceBackend>() -> Self {
        Self {
            add_fn: B::add,
            sub_fn: B::sub,
            mul_fn: B::mul,
            div_fn: B::div,
            min_fn: B::min,
            max_fn: B::max,
            fma_fn: B::fma,
            neg_fn: B::neg,
            abs_fn: B::abs,
            floor_fn: B::floor,
            ceil_fn: B::ceil,
            round_fn: B::round,
            trunc_fn: B::trunc,
            scale_fn: B::scale,
            sum_fn: B::sum,
            max_value_fn: B::max_value,
            min_value_fn: B::min_value,
            lanes_fn: B::lanes,
            backend_name: B::name(),
        }
    }

    /// Element-wise addition: `output[i] = a[i] + b[i]`
    #[inline]
    pub fn add(&self, a: &[f32], b: &[f32], output: &mut [f32]) {
        (self.add_fn)(a, b, output)
    }

    /// Element-wise subtraction: `output[i] = a[i] - b[i]`
    #[inline]
    pub fn sub(&self, a: &[f32], b: &[f32], output: &mut [f32]) {
        (self.sub_fn)(a, b, output)
    }

    /// Element-wise multiplication: `output[i] = a[i] * b[i]`
    #[inline]
    pub fn mul(&self, a: &[f32], b: &[f32], output: &mut [f32]) {
        (self.mul_fn)(a, b, output)
    }

    /// Element-wise division: `output[i] = a[i] / b[i]`
    #[inline]
    pub fn div(&self, a: &[f32], b: &[f32], output: &mut [f32]) {
        (self.div_fn)(a, b, output)
    }

    /// Element-wise minimum: `output[i] = min(a[i], b[i])`
    #[inline]
    pub fn min(&self, a: &[f32], b: &[f32], output: &mut [f32]) {
        (self.min_fn)(a, b, output)
    }

    /// Element-wise maximum: `output[i] = max(a[i], b[i])`
    #[inline]
    pub fn max(&self, a: &[f32], b: &[f32], output: &mut [f32]) {
        (self.max_fn)(a, b, output)
    }

    /// Fused multiply-add: `output[i] = a[i] * b[i] + c[i]`
    #[inline]
    pub fn fma(&self, a: &[f32], b: &[f32], c: &[f32], output: &mut [f32]) {
        (self.fma_fn)(a, b, c, output)
    }

    /// Element-wise negation: `output[i] = -input[i]`
    #[inline]
    pub fn neg(&self, input: &[f32], output: &mut [f32]) {
        (self.neg_fn)(input, output)
    }

    /// Element-wise absolute value: `output[i] = |input[i]|`
    #[inline]
    pub fn abs(&self, input: &[f32], output: &mut [f32]) {
        (self.abs_fn)(input, output)
    }

    /// Element-wise floor
    #[inline]
    pub fn floor(&self, input: &[f32], output: &mut [f32]) {
        (self.floor_fn)(input, output)
    }

    /// Element-wise ceiling
    #[inline]
    pub fn ceil(&self, input: &[f32], output: &mut [f32]) {
        (self.ceil_fn)(input, output)
    }

    /// Element-wise rounding
    #[inline]
    pub fn round(&self, input: &[f32], output: &mut [f32]) {
        (self.round_fn)(input, output)
    }

    /// Element-wise truncation
    #[inline]
    pub fn trunc(&self, input: &[f32], output: &mut [f32]) {
        (self.trunc_fn)(input, output)
    }

    /// Scale by a constant: `output[i] = input[i] * gain`
    #[inline]
    pub fn scale(&self, input: &[f32], output: &mut [f32], gain: f32) {
        (self.scale_fn)(input, output, gain)
    }

    /// Sum of all elements
    #[inline]
    pub fn sum(&self, input: &[f32]) -> f32 {
        (self.sum_fn)(input)
    }

    /// Maximum element
    #[inline]
    pub fn max_value(&self, input: &[f32]) -> f32 {
        (self.max_value_fn)(input)
    }

    /// Minimum element
    #[inline]
    pub fn min_value(&self, input: &[f32]) -> f32 {
        (self.min_value_fn)(input)
    }

    /// Lane count of the selected backend for this process
    #[inline]
    pub fn lanes(&self) -> usize {
        (self.lanes_fn)()
    }

    /// Backend name for logging: "scalable" or "scalar"
    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }

    /// Selected backend kind
    pub fn backend_type(&self) -> BackendType {
        match self.backend_name {
            "scalable" => BackendType::Scalable,
            "scalar" => BackendType::Scalar,
            _ => unreachable!("invalid backend name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_deterministic() {
        let first = BackendType::select(CpuFeatures::detect());
        for _ in 0..10 {
            assert_eq!(BackendType::select(CpuFeatures::detect()), first);
        }
    }

    #[test]
    fn test_dispatcher_matches_selection() {
        let dispatcher = VectorDispatcher::init();
        let selected = BackendType::select(CpuFeatures::detect());
        assert_eq!(dispatcher.backend_type(), selected);
        assert_eq!(dispatcher.backend_name(), selected.name());
    }

    #[test]
    fn test_dispatcher_lanes_positive() {
        let dispatcher = VectorDispatcher::init();
        assert!(dispatcher.lanes() >= 1);
    }
}
