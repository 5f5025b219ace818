use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr logger so log lines never mix into the report on stdout.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logger() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let term_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    // Keep whichever subscriber was installed first.
    tracing::subscriber::set_global_default(Registry::default().with(term_layer)).ok();
}
