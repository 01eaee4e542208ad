#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging for the CLI.
pub const DEBUG_ENV_VAR: &str = "BOGGLER_DEBUG";

/// Initialize logging for the solver.
///
/// # Behavior
/// - **Native (CLI):** `Debug` if `debug_enabled`, otherwise `Info`; `RUST_LOG` overrides.
///   Messages go to stderr so solutions on stdout stay clean.
/// - **WASM:** logs to the browser console at `Debug` or `Info`.
///
/// Calling it twice is harmless: the second initialization is ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => {
                log::info!("WASM logger initialized at {level:?} level");
            }
            Err(e) => {
                let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

/// True if [`DEBUG_ENV_VAR`] is set (to anything).
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
        log::info!("still logging");
    }
}
