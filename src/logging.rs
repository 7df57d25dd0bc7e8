// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "RANKSWEEP_LOG";

/// Installs a stderr subscriber. `RANKSWEEP_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "ranksweep_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
