//! Integer sequence input for `leafops running-max`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Parse an integer sequence.
///
/// Accepts a JSON array (`[3, 1, 4]`) or integers separated by whitespace
/// and/or commas (`3 1,4`). Blank input yields an empty sequence.
pub fn parse_sequence(raw: &str) -> Result<Vec<i64>> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("parse json integer array");
    }
    trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer '{}' at position {}", token, idx + 1))
        })
        .collect()
}

/// Read and parse a sequence from `path`; `-` reads stdin.
pub fn read_sequence(path: &Path) -> Result<Vec<i64>> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    parse_sequence(&raw).with_context(|| format!("parse {}", path.display()))
}
