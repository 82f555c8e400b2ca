//! Tracing subscriber wiring for the HTTP server and tools.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Level selection comes from `RUST_LOG`, defaulting to `info`. Output is
/// line-delimited JSON with system timestamps and no target field.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
