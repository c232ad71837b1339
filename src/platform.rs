// src/platform.rs
//! Opening the report folder in the OS file manager.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

#[cfg(target_os = "windows")]
const FILE_MANAGER: &str = "explorer";

#[cfg(target_os = "macos")]
const FILE_MANAGER: &str = "open";

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FILE_MANAGER: &str = "xdg-open";

/// Directory to open for a report path; a bare file name means the current directory.
#[must_use]
pub fn report_dir(report: &Path) -> &Path {
    match report.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Launches the file manager on `dir` without waiting for it.
///
/// # Errors
/// Returns error if the file manager cannot be spawned.
pub fn open_in_file_manager(dir: &Path) -> Result<()> {
    Command::new(FILE_MANAGER)
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch {FILE_MANAGER}"))?;
    Ok(())
}
