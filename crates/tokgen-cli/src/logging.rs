//! Log setup for the `tokgen` binary.
//!
//! Everything goes to stderr so stdout stays clean for `list` output.
//!
//! ## Environment Variables
//!
//! 1. **`TOKGEN_LOG`** (highest priority) - a bare level such as `debug`
//!    applies to the tokgen crates only; anything containing `=` or `,` is
//!    used as a full filter directive.
//! 2. **`RUST_LOG`** - standard filter syntax, used as-is.
//! 3. **Default** - `warn` globally, `info` for tokgen crates (`debug` with
//!    `--verbose`).

use std::env;
use tracing_subscriber::EnvFilter;

const TOKGEN_CRATES: &[&str] = &["tokgen", "tokgen_cli", "tokgen_emit", "tokgen_names"];

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::new(filter_directives(
        env::var("TOKGEN_LOG").ok(),
        env::var("RUST_LOG").ok(),
        verbose,
    ));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn filter_directives(
    tokgen_log: Option<String>,
    rust_log: Option<String>,
    verbose: bool,
) -> String {
    if let Some(level) = tokgen_log {
        if level.contains('=') || level.contains(',') {
            return level;
        }
        return expand_level(&level);
    }
    if let Some(rust_log) = rust_log {
        return rust_log;
    }
    expand_level(if verbose { "debug" } else { "info" })
}

fn expand_level(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in TOKGEN_CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}
