use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,pokersim_engine=info";

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` turns on per-hand
/// engine events. `json` switches to one JSON object per event. Safe to
/// call more than once: later calls are ignored.
pub fn init_logging(verbose: bool, json: bool) {
    let fallback = if verbose {
        "info,pokersim_engine=debug"
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
