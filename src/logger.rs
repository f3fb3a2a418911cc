use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Everything outside this crate stays at `warn`; this crate logs at `level`.
fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .format_timestamp_millis();
    builder
}

/// Installs the global logger. Only the first call counts. `RUST_LOG`
/// directives are layered on top of `level`.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = builder(level);
        builder.parse_default_env();

        // a test harness or embedding binary may have set one up already
        let _ = builder.try_init();
    });
}
