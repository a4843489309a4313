//! Logging infrastructure for the Vermilion kernel
//!
//! This module provides structured logging with wallet-aware defaults:
//! - Truncates potentially sensitive values (transaction ids, scripts)
//!   before they reach the log output
//! - Provides both human-readable and machine-parseable (JSON) output
//! - Safe to initialize repeatedly (tests, multiple call sites)

use chrono::Local;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs::OpenOptions;
use std::io::Write as IoWrite;
use std::sync::Once;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Error conditions
    Error,
    /// Warning conditions
    Warn,
    /// Informational messages
    Info,
    /// Debug-level messages
    Debug,
    /// Trace level (very verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level
    pub level: LogLevel,
    /// Path to log file (None for console-only)
    pub log_file: Option<String>,
    /// Whether to include timestamps in log messages
    pub include_timestamps: bool,
    /// Whether to use JSON format for logs (machine-readable)
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_file: None,
            include_timestamps: true,
            json_format: false,
        }
    }
}

// Ensure logging is only initialized once
static LOGGING_INIT: Once = Once::new();

/// Initialize the logging system with the given configuration
///
/// This function can be safely called multiple times - it will only
/// initialize the first time and return Ok for subsequent calls.
///
/// # Arguments
/// * `config` - Configuration for the logging system
///
/// # Returns
/// * Result with () on success, error string on failure
pub fn init(config: &LogConfig) -> Result<(), String> {
    let mut result = Ok(());

    let include_timestamps = config.include_timestamps;
    let json_format = config.json_format;
    let log_file = config.log_file.clone();
    let level = config.level;

    LOGGING_INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(level.into());

        builder.format(move |buf, record| {
            let timestamp = if include_timestamps {
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            } else {
                String::new()
            };

            if json_format {
                let line = json!({
                    "timestamp": timestamp,
                    "level": record.level().to_string(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });

                writeln!(buf, "{}", line)
            } else {
                if include_timestamps {
                    write!(buf, "{} ", timestamp)?;
                }

                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        });

        if let Some(file_path) = &log_file {
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(file_path) {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            } else {
                result = Err(format!("Failed to open log file: {}", file_path));
                return;
            }
        }

        if let Err(e) = builder.try_init() {
            // Multiple initialization attempts are common in tests; only a
            // genuinely different logger being installed is an error.
            if !e.to_string().contains("already been initialized") {
                result = Err(e.to_string());
            }
        }
    });

    result
}

/// Update the log level dynamically
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into());
}

/// Sanitize a potentially sensitive string for logging
///
/// Truncates the middle of values like transaction ids and scripts so log
/// output never carries them in full.
pub fn sanitize_for_logging(input: &str) -> String {
    if input.is_empty() {
        return String::from("");
    }

    let len = input.len();
    if len <= 8 {
        return "*****".to_string();
    }

    let first = &input[0..4];
    let last = &input[len - 4..len];
    format!("{}...{}", first, last)
}
