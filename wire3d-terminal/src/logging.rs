/// Logger setup for the terminal binary
use std::sync::Once;

static INIT: Once = Once::new();

/// Default filter when neither an explicit filter nor `RUST_LOG` is set.
/// Kept quiet so log lines on stderr do not tear the rendered frame.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger once; later calls are ignored.
///
/// `filter` uses `env_logger` syntax ("debug", "wire3d_core=trace", ...)
/// and takes precedence over `RUST_LOG`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match filter {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.parse_filters(DEFAULT_FILTER);
                }
            },
        }

        builder.target(env_logger::Target::Stderr);
        builder.init();

        log::debug!("logging initialized");
    });
}
