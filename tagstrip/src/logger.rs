// tagstrip/src/logger.rs
//! Logger setup for the tagstrip binary.
//!
//! All diagnostics go to stderr; stdout carries only the stripped document.

use log::LevelFilter;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger` once per process.
///
/// `RUST_LOG` wins when set. Otherwise `level` is used, falling back to
/// [`DEFAULT_FILTER`]. Later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let default_filter = level
            .map(|l| l.to_string().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_filter),
        )
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
    });
}
