//=========================================================================
// Logging
//=========================================================================
//
// One-time env_logger setup for binaries built on the engine.
//
// Targets used by the crate:
//   "scene"            stack transitions and rejections
//   "resources"        loads, releases, leaks
//   "platform"         window and event loop
//   "platform::input"  per-frame input flushing (trace)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

//=== LoggingConfig =======================================================

/// Logger configuration.
///
/// `env_filter` uses env_logger filter syntax (`"info"`,
/// `"aetheric_scenes=debug,scene=trace"`). When unset, `RUST_LOG` is read,
/// falling back to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
        }
    }
}

//=== init_logging ========================================================

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (test harnesses)
        if builder.try_init().is_ok() {
            log::debug!("Logging initialized");
        }
    });
}

//=========================================================================
// Unit Tests
//=========================================================================
