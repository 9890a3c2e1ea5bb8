//! Application logging.
//!
//! [`Logger`] keeps recent lines in memory for the gallery's log viewer and,
//! when enabled, mirrors them to a log file. [`Logger::install`] routes the
//! `log` facade through it with `fern`, so components only ever call
//! `log::info!` and friends.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory lines kept for display
pub const MAX_LOG_LINES: usize = 500;

pub type SharedWriter = Arc<Mutex<BufWriter<File>>>;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_writer: Option<SharedWriter>,
    /// Set after the first failed file write; later failures stay silent
    write_failed: Arc<AtomicBool>,
}

impl Logger {
    /// Memory-only logger
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: None,
            write_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Logger following the `[logging] enabled` setting: file output only when enabled
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Logger that appends to `path`, creating parent directories as needed
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            write_failed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("widgetkit").join("widgetkit.log"))
    }

    /// Install this logger as the global `log` backend.
    ///
    /// Fails if another global logger is already set.
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let sink = self.clone();
        fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message)))
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .context("Failed to install logger")
    }

    /// Add a log entry.
    ///
    /// Each line is flushed to the log file. The first failed write is
    /// reported once in the in-memory log.
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);
        let write_result = self.write_to_file(&formatted_message);

        self.push_line(formatted_message);

        if let Err(err) = write_result {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                self.push_line(format!("[{}] Log file write failed: {}", timestamp, err));
            }
        }
    }

    fn write_to_file(&self, line: &str) -> std::io::Result<()> {
        let Some(writer) = &self.file_writer else {
            return Ok(());
        };
        match writer.lock() {
            Ok(mut writer) => {
                writeln!(writer, "{}", line)?;
                writer.flush()
            }
            Err(_) => Err(std::io::Error::other("log file writer lock poisoned")),
        }
    }

    fn push_line(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_LOG_LINES {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all in-memory logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Flush buffered file output
    pub fn flush(&self) -> Result<()> {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                writer.flush().context("Failed to flush log file")?;
            }
        }
        Ok(())
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Whether a write to the log file has failed
    pub fn file_write_failed(&self) -> bool {
        self.write_failed.load(Ordering::Relaxed)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
