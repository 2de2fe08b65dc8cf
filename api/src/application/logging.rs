use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::LogArgs;

/// Installs the global subscriber. `RUST_LOG` wins over `--log-filter`.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if args.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
