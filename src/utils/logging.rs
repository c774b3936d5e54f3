// Wed Oct 14 2026 - Alex

use crate::utils::format_duration;
use colored::*;
use log::{Level, LevelFilter};
use std::io::Write;
use std::time::Instant;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs `env_logger` at `level`, with colored level tags and no
    /// timestamps. Safe to call more than once.
    pub fn init_logger(level: LevelFilter, use_color: bool) {
        let _ = Self::builder(level, use_color).try_init();
    }

    pub fn builder(level: LevelFilter, use_color: bool) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(level)
            .format_timestamp(None)
            .format(move |buf, record| {
                let tag = if use_color {
                    format_level(record.level()).to_string()
                } else {
                    format!("{:5}", record.level())
                };
                writeln!(buf, "{} {}", tag, record.args())
            });
        builder
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }
}

fn format_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow().bold(),
        Level::Info => "INFO ".green().bold(),
        Level::Debug => "DEBUG".blue().bold(),
        Level::Trace => "TRACE".magenta().bold(),
    }
}

/// Logs the time spent in a scope at debug level when dropped.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::debug!("{} took {}", self.label, format_duration(self.start.elapsed()));
    }
}

/// Process-wide logger for tests that assert on emitted records. Lib tests
/// never install `env_logger`, so this one always wins.
#[cfg(test)]
pub(crate) mod capture {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use once_cell::sync::Lazy;
    use parking_lot::Mutex;

    struct CaptureLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                self.records.lock().push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: Lazy<CaptureLogger> = Lazy::new(|| CaptureLogger {
        records: Mutex::new(Vec::new()),
    });

    static INSTALLED: Lazy<bool> = Lazy::new(|| {
        let installed = log::set_logger(&*LOGGER).is_ok();
        if installed {
            log::set_max_level(LevelFilter::Warn);
        }
        installed
    });

    pub fn install() {
        assert!(*INSTALLED, "a different logger is already installed");
    }

    /// Warnings seen so far whose text contains `needle`. Tests run in
    /// parallel, so callers filter on something unique to them.
    pub fn warnings_containing(needle: &str) -> usize {
        LOGGER
            .records
            .lock()
            .iter()
            .filter(|(level, text)| *level == Level::Warn && text.contains(needle))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(LoggingUtils::level_from_str("WARNING"), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_str("debug"), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_str("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn test_builder_filters_at_level() {
        let logger = LoggingUtils::builder(LevelFilter::Warn, false).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);

        let logger = LoggingUtils::builder(LevelFilter::Debug, true).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
        let _timer = ScopedTimer::new("noop");
    }

    #[test]
    fn test_capture_sees_warnings() {
        capture::install();
        log::warn!("capture check 7f3a");
        log::info!("capture check 7f3a");
        assert_eq!(capture::warnings_containing("capture check 7f3a"), 1);
    }
}
