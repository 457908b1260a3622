//! Lightweight debug logging to a local text file.
//!
//! Logging is best-effort: a missing data directory or an unwritable file
//! silently drops the line.

use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const LOG_FILE: &str = "inspector.log";

fn log_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("DEVICE_INSPECTOR_LOG_DIR") {
        return Some(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("", "", "device-inspector")?;
    Some(dirs.data_local_dir().join("logs"))
}

pub fn log_path() -> Option<PathBuf> {
    let dir = log_dir()?;
    let _ = std::fs::create_dir_all(&dir);
    Some(dir.join(LOG_FILE))
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_line(message: &str) -> String {
    format!("[{}] {}", timestamp(), message)
}

fn append_line(message: &str) {
    let Some(path) = log_path() else {
        return;
    };
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "{}", format_line(message));
}

pub fn inspector_log(message: &str) {
    append_line(message);
}
