//! Debug event logging.
//!
//! When `debug_logging` is enabled in the settings, every command is
//! appended as a JSONL line to `events.jsonl` in the data directory. This
//! allows debugging by inspecting exactly which commands ran and how they
//! ended.

use crate::config::Settings;
use crate::paths;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Record a command if debug logging is enabled.
///
/// Errors are ignored; a failed write never fails the command.
pub fn record(
    settings: &Settings,
    data_dir: &Path,
    command: &str,
    success: bool,
    detail: &serde_json::Value,
) {
    if !settings.debug_logging {
        return;
    }

    write_event(data_dir, command, success, detail);
}

/// Append the event to the log file.
fn write_event(data_dir: &Path, command: &str, success: bool, detail: &serde_json::Value) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let entry = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "command": command,
        "success": success,
        "detail": detail,
    });

    let Ok(mut file) =
        OpenOptions::new().create(true).append(true).open(paths::event_log_path(data_dir))
    else {
        tracing::warn!("could not open event log");
        return;
    };

    let _ = writeln!(file, "{entry}");
}
