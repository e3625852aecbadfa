//! Tracing subscriber setup
//!
//! Console output goes to stderr so `--output json` stays parseable.
//! With `[logging].directory` set, a daily-rolling plain-text file layer is
//! added through a non-blocking writer.

use approval_infrastructure::FileLoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "approval-quorum.log";

/// Filter directive for the given `-v` count
///
/// Without `-v` the configured level applies, falling back to `warn`.
pub fn filter_directive(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(), // -vvv or more
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn init(verbose: u8, config: &FileLoggingConfig) -> Option<WorkerGuard> {
    let directive = filter_directive(verbose, config.level.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_config() {
        assert_eq!(filter_directive(0, None), "warn");
        assert_eq!(filter_directive(0, Some("approval=debug")), "approval=debug");
        assert_eq!(filter_directive(1, Some("error")), "info");
        assert_eq!(filter_directive(2, None), "debug");
        assert_eq!(filter_directive(5, None), "trace");
    }
}
