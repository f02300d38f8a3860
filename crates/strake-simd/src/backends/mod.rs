//! Backend implementations
//!
//! Two backends share the trait surface: `scalable`, whose lane count is the
//! process-wide runtime width query, and `scalar`, a 1-lane reference
//! implementation that is always available and anchors consistency tests.

// Scalable (runtime-width) backend
pub mod scalable;

// Scalar backend (always available as fallback)
pub mod scalar;
