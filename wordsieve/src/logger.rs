// wordsieve/src/logger.rs
//! Logger bootstrap shared by the binary and the integration tests.
//!
//! `RUST_LOG` is honoured when no explicit level is given. Calling `init_logger` more than
//! once is harmless; later calls are ignored.

use log::LevelFilter;

pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    );
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

/// Level implied by the `--quiet`/`--debug` flags, `None` to defer to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Error)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
