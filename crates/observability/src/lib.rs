//! Shared logging/tracing setup for the stockroom binaries.

/// Tracing configuration (filter, formatter).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
