use env_logger::Env;

use crate::constants::{defaults, envvars};

/// Initialize the env_logger backend for the `log` facade
///
/// Respects RUST_LOG if set, otherwise LOG_LEVEL.
/// Defaults to "warn" so that a successful run is silent.
pub fn init_logging() {
    let filter_var = match std::env::var_os(env_logger::DEFAULT_FILTER_ENV) {
        Some(_) => env_logger::DEFAULT_FILTER_ENV,
        None => envvars::LOG_LEVEL,
    };

    env_logger::Builder::from_env(Env::default().filter_or(filter_var, defaults::LOG_LEVEL))
        .format_timestamp(None)
        .init();
}
