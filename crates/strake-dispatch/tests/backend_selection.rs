//! Backend selection tests
//!
//! Selection happens once, is deterministic, and honors forced features.

use strake_dispatch::{BackendType, CpuFeatures, VectorContext, VectorDispatcher};

#[test]
fn selection_is_stable_across_contexts() {
    let first = VectorContext::new();
    for _ in 0..10 {
        let ctx = VectorContext::new();
        assert_eq!(ctx.backend_name(), first.backend_name());
        assert_eq!(ctx.lanes(), first.lanes());
    }
}

#[test]
fn backend_name_is_a_known_backend() {
    let ctx = VectorContext::new();
    assert!(matches!(ctx.backend_name(), "scalable" | "scalar"));
    assert_eq!(ctx.backend_type().name(), ctx.backend_name());
}

#[test]
fn lanes_are_positive_and_match_the_backend() {
    let ctx = VectorContext::new();
    match ctx.backend_type() {
        BackendType::Scalar => assert_eq!(ctx.lanes(), 1),
        BackendType::Scalable => assert!(ctx.lanes() >= 4),
    }
}

#[test]
fn scalable_hardware_wins_when_present() {
    // Without forced features, selection follows detection.
    #[cfg(not(any(feature = "force-scalable", feature = "force-scalar")))]
    {
        let features = CpuFeatures::detect();
        let expected = if features.has_sve {
            BackendType::Scalable
        } else {
            BackendType::Scalar
        };
        assert_eq!(BackendType::select(features), expected);
    }
}

#[test]
fn dispatcher_and_context_agree() {
    let dispatcher = VectorDispatcher::init();
    let ctx = VectorContext::new();
    assert_eq!(dispatcher.backend_name(), ctx.backend_name());
    assert_eq!(dispatcher.lanes(), ctx.lanes());
}

#[cfg(feature = "force-scalable")]
#[test]
fn forced_scalable_is_selected() {
    assert_eq!(VectorContext::new().backend_name(), "scalable");
}

#[cfg(feature = "force-scalar")]
#[test]
fn forced_scalar_is_selected() {
    let ctx = VectorContext::new();
    assert_eq!(ctx.backend_name(), "scalar");
    assert_eq!(ctx.lanes(), 1);
}
