// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, OutputSettings, RuleConfig, ScanSettings, SpscanToml};

use std::path::{Path, PathBuf};

use crate::error::Result;

impl Config {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Creates a config for `root` and loads `spscan.toml` (or `explicit`) and `.spscanignore`.
    ///
    /// # Errors
    /// Returns error if the config file is malformed or an exclude pattern is invalid.
    pub fn load(root: impl Into<PathBuf>, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::new(root);
        io::load_toml_config(&mut config, explicit)?;
        io::load_ignore_file(&mut config);
        io::compile_excludes(&mut config)?;
        Ok(config)
    }

    /// Source extension without a leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.scan.extension.trim_start_matches('.')
    }

    /// Adds an exclude pattern after loading.
    ///
    /// # Errors
    /// Returns error if the pattern is not a valid regex.
    pub fn add_exclude(&mut self, pattern: &str) -> Result<()> {
        self.scan.exclude.push(pattern.to_string());
        io::compile_excludes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::OutputFormat;

    #[test]
    fn partial_toml_keeps_defaults() -> Result<()> {
        let mut c = Config::new(".");
        io::parse_toml(&mut c, "[scan]\nextension = \".vb\"\n", Path::new("t.toml"))?;
        assert_eq!(c.extension(), "vb");
        assert_eq!(c.rules, RuleConfig::default());
        assert_eq!(c.output.format, OutputFormat::Csv);
        Ok(())
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let mut c = Config::new(".");
        let err = io::parse_toml(&mut c, "[rules\n", Path::new("t.toml"));
        assert!(matches!(err, Err(crate::error::SpscanError::Config { .. })));
    }

    #[test]
    fn ignore_lines_skip_blanks_and_comments() {
        let mut c = Config::new(".");
        io::process_ignore_line(&mut c, "   ");
        io::process_ignore_line(&mut c, "# generated");
        io::process_ignore_line(&mut c, "Migrations/");
        assert_eq!(c.scan.exclude, vec!["Migrations/".to_string()]);
    }

    #[test]
    fn bad_exclude_pattern_is_rejected() {
        let mut c = Config::new(".");
        assert!(c.add_exclude("(unclosed").is_err());
    }
}
