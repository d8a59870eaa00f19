//! Logging configuration for UI2Py Converter
//!
//! Logs are written to both the terminal and a file at:
//! `~/Library/Logs/UI2Py-Converter/ui2py-converter.log` on macOS, or the
//! local data directory elsewhere.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "UI2Py-Converter";
const LOG_FILE_NAME: &str = "ui2py-converter.log";
/// Rotate the log once it grows past this size
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Get the log directory path
pub fn get_log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join(APP_DIR_NAME))
    } else {
        dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME).join("logs"))
    }
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Initialize the logging system
///
/// Terminal gets Info and above, the file gets Debug and above.
/// Returns the path to the log file on success.
pub fn init_logging() -> Option<PathBuf> {
    let log_dir = match get_log_directory() {
        Some(d) => d,
        None => {
            eprintln!("Warning: Could not determine log directory");
            init_terminal_only();
            return None;
        }
    };

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {}", e);
        init_terminal_only();
        return None;
    }

    let log_path = log_dir.join(LOG_FILE_NAME);

    if let Ok(metadata) = fs::metadata(&log_path) {
        if metadata.len() > MAX_LOG_BYTES {
            let backup_path = log_dir.join(format!("{}.old", LOG_FILE_NAME));
            let _ = fs::rename(&log_path, &backup_path);
        }
    }

    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            init_terminal_only();
            return None;
        }
    };

    let config = log_config();
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(LevelFilter::Info, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(LevelFilter::Debug, config, log_file),
    ];

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    log::info!("=== UI2Py Converter session started ===");
    log::info!("Log file: {}", log_path.display());

    Some(log_path)
}

/// Terminal-only logging, used when the log file is unavailable
fn init_terminal_only() {
    let term_logger = TermLogger::new(LevelFilter::Info, log_config(), TerminalMode::Mixed, ColorChoice::Auto);
    let _ = CombinedLogger::init(vec![term_logger]);
}

/// Open the log directory in the system file manager
pub fn open_log_directory() -> Result<(), String> {
    let log_dir = get_log_directory().ok_or_else(|| "Could not determine log directory".to_string())?;
    if !log_dir.exists() {
        return Err("Log directory does not exist".to_string());
    }
    crate::actions::open_in_file_manager(&log_dir)
        .map_err(|e| format!("Failed to open log directory: {}", e))
}
