use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BP_PORTAL_LOG";

/// Logs go to stderr so report text on stdout can be piped.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
