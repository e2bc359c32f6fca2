// SPDX-License-Identifier: MPL-2.0
//! Log output setup.

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `filter`, which takes precedence over
/// [`DEFAULT_LOG_FILTER`]. Returns `false` if a global subscriber was already
/// installed or the filter could not be parsed.
pub fn init(filter: Option<&str>) -> bool {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => match EnvFilter::try_new(filter.unwrap_or(DEFAULT_LOG_FILTER)) {
            Ok(env_filter) => env_filter,
            Err(error) => {
                eprintln!("Invalid log filter: {error}");
                return false;
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
