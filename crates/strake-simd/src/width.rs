//! Process-wide vector width query
//!
//! Scalable instruction-set families fix the vector register width when the
//! process starts, not when the code is compiled. This module asks the
//! hardware once how wide the register is and caches the answer for the
//! lifetime of the process. Every vector value derives its active lane count
//! from this single cached width.
//!
//! The cache is established by whichever thread queries first; concurrent
//! first queries are harmless because every probe of the same process
//! returns the same width, so racing writers store identical values. After
//! establishment the width is read-only and requires no locking.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::storage::MAX_VECTOR_BITS;
use crate::traits::SimdElement;

/// Width in bytes used when no scalable vector hardware is present.
///
/// Keeps the scalable code path runnable on every host: kernels behave as if
/// the register were 128 bits wide, the narrowest width the scalable family
/// defines. Backend selection normally routes such hosts to a width-fixed
/// backend instead; this constant is what the width query reports if the
/// scalable path is exercised anyway (tests, forced backends).
pub const EMULATED_VECTOR_BYTES: usize = 16;

// 0 means "not yet probed"; every real width is >= 16 bytes.
static VECTOR_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Vector register width in bytes for this process.
///
/// The first call probes the hardware and verifies the width fits the
/// compiled storage capacity; later calls return the cached value. Safe to
/// call concurrently from any thread with no prior setup.
///
/// # Panics
///
/// Panics if the hardware reports a register wider than `MAX_VECTOR_BITS`.
/// That means the build-time maximum-width assumption is wrong for this
/// machine, and continuing would corrupt memory on the first store; there is
/// nothing to recover.
#[inline]
pub fn vector_bytes() -> usize {
    match VECTOR_BYTES.load(Ordering::Relaxed) {
        0 => init_vector_bytes(),
        bytes => bytes,
    }
}

/// Vector register width in bits for this process.
#[inline]
pub fn vector_bits() -> usize {
    vector_bytes() * 8
}

/// Number of active lanes of element type `T` for this process.
///
/// Equal for every vector value of element type `T` within one process run,
/// and always `<=` the storage capacity for `T`.
#[inline]
pub fn active_lanes<T: SimdElement>() -> usize {
    vector_bytes() / core::mem::size_of::<T>()
}

#[cold]
fn init_vector_bytes() -> usize {
    let bytes = probe_vector_bytes();
    assert!(
        bytes >= 16 && bytes % 16 == 0,
        "probed vector width of {} bytes is not a multiple of 128 bits",
        bytes
    );
    assert!(
        bytes * 8 <= MAX_VECTOR_BITS,
        "hardware reports a {}-bit vector register but storage is compiled \
         for at most {} bits; rebuild without the max-bits cap or raise it",
        bytes * 8,
        MAX_VECTOR_BITS
    );
    VECTOR_BYTES.store(bytes, Ordering::Relaxed);
    bytes
}

/// Probe the register width, honoring pinned-width features first.
fn probe_vector_bytes() -> usize {
    #[cfg(feature = "force-vl128")]
    {
        16
    }

    #[cfg(feature = "force-vl256")]
    {
        32
    }

    #[cfg(feature = "force-vl512")]
    {
        64
    }

    #[cfg(not(any(
        feature = "force-vl128",
        feature = "force-vl256",
        feature = "force-vl512"
    )))]
    {
        hardware_vector_bytes().unwrap_or(EMULATED_VECTOR_BYTES)
    }
}

/// Ask the hardware for its scalable register width, if it has one.
#[cfg(all(
    target_arch = "aarch64",
    not(any(
        feature = "force-vl128",
        feature = "force-vl256",
        feature = "force-vl512"
    ))
))]
fn hardware_vector_bytes() -> Option<usize> {
    cpufeatures::new!(sve_present, "sve");
    if sve_present::get() {
        // SAFETY: gated on the runtime SVE probe above.
        Some(unsafe { sve_vector_bytes() })
    } else {
        None
    }
}

#[cfg(all(
    not(target_arch = "aarch64"),
    not(any(
        feature = "force-vl128",
        feature = "force-vl256",
        feature = "force-vl512"
    ))
))]
fn hardware_vector_bytes() -> Option<usize> {
    None
}

/// Read the SVE register width with `cntb`.
///
/// # Safety
///
/// Must only be called after SVE support has been confirmed at runtime.
#[cfg(all(
    target_arch = "aarch64",
    not(any(
        feature = "force-vl128",
        feature = "force-vl256",
        feature = "force-vl512"
    ))
))]
#[target_feature(enable = "sve")]
unsafe fn sve_vector_bytes() -> usize {
    let bytes: u64;
    core::arch::asm!(
        "cntb {0}",
        out(reg) bytes,
        options(nomem, nostack, preserves_flags)
    );
    bytes as usize
}
