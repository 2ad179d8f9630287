use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once at startup; repeat calls (as in
/// tests sharing a process) are ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
