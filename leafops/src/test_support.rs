//! Test-only helpers for sequences and config fixtures.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::DEFAULT_CONFIG_PATH;

/// Quadratic reference: `out[i] = max(values[..=i])`.
pub fn prefix_max_reference(values: &[i64]) -> Vec<i64> {
    (0..values.len())
        .map(|i| values[..=i].iter().copied().max().unwrap_or(i64::MIN))
        .collect()
}

/// Create a temp working directory holding `.leafops/config.toml` with `contents`.
pub fn workspace_with_config(contents: &str) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    let path = temp.path().join(DEFAULT_CONFIG_PATH);
    let parent = path.parent().context("config path missing parent")?;
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((temp, path))
}
