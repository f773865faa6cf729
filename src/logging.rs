//! Log levels and the diagnostic log backend
//!
//! Records go through the `log` facade and are collected by a
//! `tracing-subscriber` formatter, either on stderr or in a file.

use log::LevelFilter;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Only the first directive counts; `target=level` keeps the level part.
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .trim()
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

/// Where diagnostic records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// Appended to; the parent directory is created if missing.
    File(PathBuf),
}

impl LogSink {
    /// The TUI owns the terminal, so it logs to a file; headless runs use stderr.
    pub fn for_mode(headless: bool, log_path: PathBuf) -> Self {
        if headless {
            LogSink::Stderr
        } else {
            LogSink::File(log_path)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber and bridges `log` records into it.
pub fn init_logging(sink: &LogSink) -> Result<(), Box<dyn std::error::Error>> {
    match sink {
        LogSink::Stderr => tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("warning"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("ERROR"), LogLevel::Error);

        assert_eq!(
            parse_rust_log_level("portfolio_showcase=trace"),
            LogLevel::Trace
        );
        assert_eq!(
            parse_rust_log_level("portfolio_showcase=debug,reqwest=info"),
            LogLevel::Debug
        );

        assert_eq!(parse_rust_log_level("loud"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Info));
    }

    #[test]
    fn test_sink_follows_mode() {
        let path = PathBuf::from("/tmp/portfolio-showcase.log");
        assert_eq!(LogSink::for_mode(true, path.clone()), LogSink::Stderr);
        assert_eq!(LogSink::for_mode(false, path.clone()), LogSink::File(path));
    }

    #[test]
    // The only test that installs the global subscriber.
    fn test_file_sink_receives_log_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("portfolio-showcase.log");

        init_logging(&LogSink::File(path.clone())).unwrap();
        log::warn!("collection `certificates` could not be read");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("WARN"));
        assert!(contents.contains("collection `certificates` could not be read"));
    }
}
