//! leafops configuration stored under `.leafops/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Config path used when `--config` is not given, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".leafops/config.toml";

/// leafops configuration (TOML).
///
/// Missing fields default to the built-in behavior: exact name comparison,
/// no extra reserved names, text output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LeafopsConfig {
    pub property: PropertyConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PropertyConfig {
    /// Names rejected in addition to the built-in reserved list.
    pub extra_reserved: Vec<String>,

    /// Compare names exactly. When false, names are compared ASCII case-insensitively.
    pub case_sensitive: bool,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            extra_reserved: Vec::new(),
            case_sensitive: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl LeafopsConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(idx) = self
            .property
            .extra_reserved
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(anyhow!(
                "property.extra_reserved[{}] must be a non-empty name",
                idx
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LeafopsConfig::default()`.
pub fn load_config(path: &Path) -> Result<LeafopsConfig> {
    if !path.exists() {
        return Ok(LeafopsConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LeafopsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LeafopsConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config unless one already exists (or `force` is set).
///
/// Returns true if a file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        return Ok(false);
    }
    write_config(path, &LeafopsConfig::default())?;
    Ok(true)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
