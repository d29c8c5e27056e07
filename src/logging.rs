use time::macros::format_description;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber used by the command line tool. `RUST_LOG`
/// overrides the default `info` level (e.g. `RUST_LOG=leapfrog2d=debug` to
/// follow every time step correction).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let timer = UtcTime::new(format_description!("[year].[month].[day] [hour]:[minute]:[second] UTC"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging was already initialized: {}", e);
    }
}
