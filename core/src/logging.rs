//! Logger setup shared by tests and hosts.

use env_logger::Env;

/// Install `env_logger`, reading the filter from `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    match env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init() {
        Ok(_) => (),
        Err(_) => {
            // Already installed, e.g. by an earlier test.
        }
    }
}
