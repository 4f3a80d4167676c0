//! Tracing and logging setup shared by the binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide tracing with human-readable output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Pretty);
}

/// Initialize process-wide tracing with JSON output.
pub fn init_json() {
    tracing::init(LogFormat::Json);
}
