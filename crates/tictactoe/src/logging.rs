//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `fallback`. Logs go to stderr so they do not
/// interleave with the board on stdout.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
