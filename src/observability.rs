//! This module provides observability and diagnostics for the codec.
//!
//! Two tools live here. The `log_metric!` macro emits structured key-value events
//! from inside the kernels; it is compiled out of release builds entirely. And
//! `enable_verbose_logging` installs an `env_logger` backend for applications that
//! do not bring their own logger.

use log::LevelFilter;
use std::sync::Once;

#[doc(hidden)]
pub use log as __log;

/// Logs a structured key-value metric string at `trace` level, only in debug builds.
///
/// # Example
/// ```
/// use tambak_rle::log_metric;
/// let runs = 4;
/// log_metric!("event"="rle_encode", "runs"=runs);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::observability::__log::trace!(
                target: "tambak_rle::metric",
                "TAMBAK_METRIC: {{ {} }}",
                parts.join(", ")
            );
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs a process-wide `env_logger` at `level`, printing `[LEVEL] message`.
///
/// Only the first call has an effect. If the application already installed a
/// logger, that one is kept.
pub fn enable_verbose_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

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
