use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for the launcher's own diagnostics, e.g. `debug`.
pub const LOG_ENV: &str = "SOCIAL_DUO_LOG";

/// Initialize tracing on stderr. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
