// src/config/io.rs
//! Loading of `spscan.toml` and `.spscanignore`.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use super::types::{Config, SpscanToml};
use crate::constants::{CONFIG_FILE, IGNORE_FILE};
use crate::error::{Result, SpscanError};

/// Reads the config file. An explicit path must exist; the default one is optional.
///
/// # Errors
/// Returns `Config` error if the file cannot be read or is not valid TOML.
pub fn load_toml_config(config: &mut Config, explicit: Option<&Path>) -> Result<()> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (config.root.join(CONFIG_FILE), false),
    };

    if !path.is_file() {
        if required {
            return Err(SpscanError::Config {
                path,
                message: "file not found".to_string(),
            });
        }
        return Ok(());
    }

    let content = fs::read_to_string(&path).map_err(|e| SpscanError::Config {
        path: path.clone(),
        message: e.to_string(),
    })?;
    parse_toml(config, &content, &path)?;
    debug!("loaded config from {}", path.display());
    Ok(())
}

/// Applies TOML content on top of `config`.
///
/// # Errors
/// Returns `Config` error on malformed TOML.
pub fn parse_toml(config: &mut Config, content: &str, origin: &Path) -> Result<()> {
    let parsed: SpscanToml = toml::from_str(content).map_err(|e| SpscanError::Config {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    config.rules = parsed.rules;
    config.scan = parsed.scan;
    config.output = parsed.output;
    Ok(())
}

/// Appends every pattern from `.spscanignore` to the exclude list.
pub fn load_ignore_file(config: &mut Config) {
    let path = config.root.join(IGNORE_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };
    for line in content.lines() {
        process_ignore_line(config, line);
    }
}

pub fn process_ignore_line(config: &mut Config, line: &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return;
    }
    config.scan.exclude.push(trimmed.to_string());
}

/// Compiles `scan.exclude` into regexes.
///
/// # Errors
/// Returns `Config` error naming the first pattern that fails to compile.
pub fn compile_excludes(config: &mut Config) -> Result<()> {
    let mut compiled = Vec::with_capacity(config.scan.exclude.len());
    for pattern in &config.scan.exclude {
        let re = Regex::new(pattern).map_err(|e| SpscanError::Config {
            path: PathBuf::from(CONFIG_FILE),
            message: format!("bad exclude pattern `{pattern}`: {e}"),
        })?;
        compiled.push(re);
    }
    config.exclude_patterns = compiled;
    Ok(())
}
