//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/topic-config/logs/` (typically
//! `~/.local/state/topic-config/logs/`), one PID-named file per process so
//! several instances can run side by side.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

const APP_DIR: &str = "topic-config";

/// Minimum age for log files to be cleaned up (7 days)
const CLEANUP_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to the system temp directory when the state directory cannot
/// be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = std::env::temp_dir().join(format!("{}-logs", APP_DIR));
        let dir = xdg_log_dir().unwrap_or_else(|| fallback.clone());

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return fallback;
        }

        dir
    })
}

fn xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join(APP_DIR).join("logs"));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("state").join(APP_DIR).join("logs"))
}

/// Log file for this process: `{log_dir}/topic-config-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("{}-{}.log", APP_DIR, std::process::id()))
}

/// Remove log files of other processes that have not been touched for a week
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id(), CLEANUP_AGE);
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, age: Duration) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), age)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}

/// Extract the PID from a filename like "topic-config-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    let without_ext = name.strip_suffix(".log")?;
    let last_hyphen = without_ext.rfind('-')?;
    without_ext[last_hyphen + 1..].parse().ok()
}

/// Print the directories used by the application to stdout
pub fn print_all_paths(config_path: &Path) {
    println!("topic-config directories:");
    println!();
    println!("Config:     {}", config_path.display());
    println!("Logs:       {}", log_dir().display());
    println!("  this run:     {}", main_log_path().display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_absolute() {
        assert!(log_dir().is_absolute(), "Log directory should be absolute");
    }

    #[test]
    fn test_main_log_path_contains_pid() {
        let path = main_log_path();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("topic-config-"));
        assert!(name.ends_with(".log"));
        assert_eq!(extract_pid_from_filename(&name), Some(std::process::id()));
    }

    #[test]
    fn test_extract_pid_from_filename() {
        assert_eq!(extract_pid_from_filename("topic-config-12345.log"), Some(12345));
        assert_eq!(extract_pid_from_filename("no-pid.txt"), None);
        assert_eq!(extract_pid_from_filename("invalid"), None);
    }

    #[test]
    fn test_cleanup_keeps_fresh_and_own_logs() {
        let dir = tempfile::tempdir().unwrap();
        let own = dir.path().join("topic-config-42.log");
        let other = dir.path().join("topic-config-43.log");
        let unrelated = dir.path().join("notes.txt");
        for path in [&own, &other, &unrelated] {
            fs::write(path, "x").unwrap();
        }

        // Nothing is old enough with a week-long threshold
        cleanup_stale_logs_in_dir(dir.path(), 42, CLEANUP_AGE);
        assert!(own.exists() && other.exists() && unrelated.exists());

        // With a zero threshold only the other process's log goes
        std::thread::sleep(Duration::from_millis(20));
        cleanup_stale_logs_in_dir(dir.path(), 42, Duration::ZERO);
        assert!(own.exists());
        assert!(!other.exists());
        assert!(unrelated.exists());
    }
}
