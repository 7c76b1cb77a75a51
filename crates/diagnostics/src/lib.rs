//! Logging for the rental site renderer.
//!
//! Every crate in the workspace logs through these macros so output is
//! controlled in one place:
//! - `RENTALSITE_LOG=off` (default) - no logs
//! - `RENTALSITE_LOG=info` - one line per page routine and build step
//! - `RENTALSITE_LOG=debug` - every content load and DOM write target
//! - `RENTALSITE_LOG=warn` / `error` - only degraded or failed renders

use std::sync::Once;

// Re-export emit so the macros resolve from any crate
pub use emit;

/// Environment variable that selects the log level.
pub const LOG_ENV: &str = "RENTALSITE_LOG";

static INIT: Once = Once::new();

/// Map a `RENTALSITE_LOG` value to a minimum level.
///
/// `None` means logging is off. Unknown values are reported as `Err` with
/// the level that will be used instead.
pub fn parse_level(value: &str) -> Result<Option<emit::Level>, emit::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "info" => Ok(Some(emit::Level::Info)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        _ => Err(emit::Level::Info),
    }
}

/// Initialize diagnostics from the `RENTALSITE_LOG` environment variable.
///
/// Call once at startup. Later calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let value = std::env::var(LOG_ENV).unwrap_or_else(|_| "off".to_string());

        let level = match parse_level(&value) {
            Ok(Some(level)) => level,
            Ok(None) => return,
            Err(fallback) => {
                // Bootstrap warning, the emitter is not running yet
                eprintln!("Warning: Unknown {LOG_ENV} value '{value}', using 'info'");
                fallback
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log routine-level progress.
///
/// Examples: "Rendering property page", "Wrote 7 pages"
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed steps: individual content loads, skipped elements, tab clicks.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log degraded renders: an optional piece of content could not be loaded.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failed renders.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
