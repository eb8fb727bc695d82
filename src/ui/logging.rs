//! Diagnostic logging on stderr.
//!
//! `RUST_LOG` wins when set. Otherwise the level is `warn`, raised to `debug`
//! for this crate by `--debug` or by `"debug": true` in the configuration file.

use is_terminal::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "mddbl=debug,warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    let filter = match std::env::var_os(EnvFilter::DEFAULT_ENV) {
        Some(_) => EnvFilter::from_default_env(),
        None => level_filter(debug),
    };

    let output = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(output).try_init();
}

fn level_filter(debug: bool) -> EnvFilter {
    EnvFilter::new(if debug { DEBUG_FILTER } else { DEFAULT_FILTER })
}
