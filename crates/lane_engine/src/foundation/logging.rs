//! Logging setup

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used.
pub fn init(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A second init (tests, embedding) is harmless, so the error is dropped.
    let _ = env_logger::Builder::from_env(env).try_init();
}
