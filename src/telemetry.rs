use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Lambda stamps each log line itself, so timestamps and ANSI colors are off.
/// The level comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
