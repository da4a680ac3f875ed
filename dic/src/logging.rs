use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so the rendered entries own stdout. `RUST_LOG` overrides
/// the default `warn` level.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
