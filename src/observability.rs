//! Structured logging hooks for the service.
//!
//! The library itself only logs through the `log` facade. Embedding
//! applications that want output without wiring their own backend can
//! install the bundled `env_logger` here; installation happens at most once
//! per process, and loses gracefully if the host already installed a logger.

use std::sync::Once;

use log::LevelFilter;

static INIT_LOGGER: Once = Once::new();

/// Installs the `env_logger` backend, once per process.
///
/// `filter` overrides the default `Info` level. Subsequent calls are no-ops.
pub fn init_logging(filter: Option<LevelFilter>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(filter.unwrap_or(LevelFilter::Info));

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}
