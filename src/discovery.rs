// src/discovery.rs
//! Recursive listing of candidate files under the scan root.

use crate::config::Config;
use crate::constants::should_prune;
use crate::error::{Result, SpscanError};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Lists every regular file under `config.root`, sorted by name at each level.
///
/// The source-extension filter is not applied here.
///
/// # Errors
/// Returns `Walk` error if the root itself cannot be read.
pub fn discover(config: &Config) -> Result<Vec<PathBuf>> {
    let root = &config.root;
    std::fs::metadata(root).map_err(|e| SpscanError::Walk {
        path: root.clone(),
        message: e.to_string(),
    })?;

    let raw_files = walk_filesystem(root);
    Ok(filter_config(raw_files, root, &config.exclude_patterns))
}

fn walk_filesystem(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        warn!("Encountered {error_count} errors during file walk");
    }
    paths
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("{}", SpscanError::from(e));
                errors += 1;
            }
        }
    }
    (paths, errors)
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn filter_config(mut paths: Vec<PathBuf>, root: &Path, excludes: &[Regex]) -> Vec<PathBuf> {
    if !excludes.is_empty() {
        paths.retain(|p| {
            let rel = p.strip_prefix(root).unwrap_or(p);
            let s = normalize_path(rel);
            !excludes.iter().any(|re| re.is_match(&s))
        });
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn prunes_build_dirs_and_sorts() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("obj"))?;
        fs::create_dir_all(dir.path().join("Data"))?;
        fs::write(dir.path().join("obj/Gen.cs"), "")?;
        fs::write(dir.path().join("b.cs"), "")?;
        fs::write(dir.path().join("a.txt"), "")?;
        fs::write(dir.path().join("Data/Repo.cs"), "")?;

        let files = discover(&Config::new(dir.path()))?;
        let rel: Vec<String> = files
            .iter()
            .map(|p| normalize_path(p.strip_prefix(dir.path()).unwrap_or(p)))
            .collect();
        assert_eq!(rel, vec!["Data/Repo.cs", "a.txt", "b.cs"]);
        Ok(())
    }

    #[test]
    fn excludes_match_relative_paths() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("Migrations"))?;
        fs::write(dir.path().join("Migrations/Init.cs"), "")?;
        fs::write(dir.path().join("Keep.cs"), "")?;

        let mut config = Config::new(dir.path());
        config.add_exclude("^Migrations/")?;
        let files = discover(&config)?;
        assert_eq!(files, vec![dir.path().join("Keep.cs")]);
        Ok(())
    }

    #[test]
    fn missing_root_is_an_error() {
        let config = Config::new("/no/such/root/for/spscan");
        assert!(matches!(discover(&config), Err(SpscanError::Walk { .. })));
    }
}
