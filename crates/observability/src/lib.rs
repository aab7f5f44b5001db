//! Tracing and logging setup shared by tracekit binaries.

/// Subscriber configuration (filters, output format).
pub mod subscriber;

pub use subscriber::{LOG_FORMAT_ENV, LogFormat};

/// Initialize process-wide tracing, reading the output format from
/// `TRACEKIT_LOG_FORMAT` and the filter from `RUST_LOG`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let raw = std::env::var(LOG_FORMAT_ENV).ok();
    let parsed = raw.as_deref().map(LogFormat::parse);

    subscriber::init(parsed.flatten().unwrap_or_default());

    if let (Some(raw), Some(None)) = (raw, parsed) {
        tracing::warn!(env = LOG_FORMAT_ENV, value = %raw, "unknown log format; using json");
    }
}

/// Initialize process-wide tracing with an explicit output format.
pub fn init_with(format: LogFormat) {
    subscriber::init(format);
}
