//! Error surface.
//!
//! The dispatcher defines no errors of its own: whatever a callback
//! raises reaches the caller unmodified, with no wrapping, retry or
//! suppression. Only a convenience alias lives here, for callers of the
//! `try_` variants whose callbacks mix error types.

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
