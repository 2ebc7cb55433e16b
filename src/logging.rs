//! Logger setup for binaries and tests embedding the crate.
//!
//! The crate itself only emits records through the `log` facade: clamped
//! inputs are reported at `debug` level.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs an `env_logger` scoped to this crate's records.
///
/// `RUST_LOG` takes precedence when set. Otherwise `verbose` selects
/// `debug` and its absence `info` for the `circle_tasks` target. Returns
/// `false` when a global logger was already installed, which makes repeated
/// calls from tests harmless.
#[must_use]
pub fn init(verbose: bool) -> bool {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(format!("{}={level}", env!("CARGO_CRATE_NAME")));
    Builder::from_env(env).try_init().is_ok()
}
