//=========================================================================
// Logging
//
// Installs the `env_logger` backend behind the `log` facade.
//
// The default filter is `info`; `RUST_LOG` overrides it, e.g.
// `RUST_LOG=campaign_client=debug,platform=trace`.
//
//=========================================================================

use env_logger::{Builder, Env};
use log::debug;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global logger.
///
/// Safe to call more than once; later calls leave the first logger in
/// place.
pub fn init() {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);

    if let Err(e) = Builder::from_env(env).format_timestamp_millis().try_init() {
        debug!("Logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        log::info!("logging initialized");
    }
}
