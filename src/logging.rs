use tracing_subscriber::{EnvFilter, fmt};

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "pricecalc=debug" } else { "warn" }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` overrides the default filter. Stdout is left to results and
/// prompts.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
