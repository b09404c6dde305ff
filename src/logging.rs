//! Debug log file
//!
//! Nothing is logged unless `--debug` is given. When it is, every `log`
//! record at debug level or above is appended to a file in the temp dir.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Get platform-specific debug log path
pub fn debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("foodmatch-debug.log");
    path
}

/// Install the file logger when `debug` is set; otherwise logging stays off
pub fn init(debug: bool) -> Result<()> {
    if !debug {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    }

    let path = debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log: {}", path.display()))?;

    log::set_boxed_logger(Box::new(DebugFileLogger {
        file: Mutex::new(file),
    }))
    .context("Logger already installed")?;
    log::set_max_level(LevelFilter::Debug);
    log::info!("Debug logging to {}", path.display());
    Ok(())
}

/// One line of the debug log
pub fn format_line<Tz: TimeZone>(
    at: &DateTime<Tz>,
    level: log::Level,
    target: &str,
    args: &fmt::Arguments,
) -> String
where
    Tz::Offset: fmt::Display,
{
    format!(
        "{} {:<5} [{}] {}",
        at.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        args
    )
}

struct DebugFileLogger {
    file: Mutex<File>,
}

impl Log for DebugFileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&Local::now(), record.level(), record.target(), record.args());
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("foodmatch-debug.log"));
    }

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 3).unwrap();
        let line = format_line(
            &at,
            log::Level::Info,
            "foodmatch::model",
            &format_args!("Route {}", "/chat"),
        );
        assert_eq!(
            line,
            "2024-05-01 09:07:03.000 INFO  [foodmatch::model] Route /chat"
        );
    }
}
