//! Tracing/logging setup shared by binaries, tests and benches.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing subscriber configuration (filters, formatting).
pub mod tracing;
