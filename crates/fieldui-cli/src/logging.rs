use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FIELDUI_LOG";

/// Installs the stderr subscriber. Stdout carries command output only.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
