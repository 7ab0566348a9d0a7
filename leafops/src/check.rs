//! Property name checks for `leafops check-name` and `leafops reserved`.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

use crate::core::property_name::{RESERVED_PROPERTY_NAMES, reserved_match};
use crate::io::config::PropertyConfig;

/// Effective reserved-name policy: built-in names plus configured extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePolicy {
    reserved: Vec<String>,
    case_sensitive: bool,
}

/// Outcome of checking one name against a [`NamePolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameVerdict {
    Accepted,
    /// Name collides with `matched`, an entry of the reserved list.
    Reserved { matched: String },
}

impl NameVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, NameVerdict::Accepted)
    }
}

/// Per-name result for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameReport {
    pub name: String,
    pub accepted: bool,
    pub matched: Option<String>,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            reserved: RESERVED_PROPERTY_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            case_sensitive: true,
        }
    }
}

impl NamePolicy {
    /// Build the policy from config. Extras keep their order; duplicates are dropped.
    pub fn from_config(cfg: &PropertyConfig) -> Self {
        let mut policy = Self {
            case_sensitive: cfg.case_sensitive,
            ..Self::default()
        };
        for extra in &cfg.extra_reserved {
            let extra = extra.trim();
            if extra.is_empty() {
                continue;
            }
            let duplicate = policy.reserved.iter().any(|name| {
                if cfg.case_sensitive {
                    name == extra
                } else {
                    name.eq_ignore_ascii_case(extra)
                }
            });
            if !duplicate {
                policy.reserved.push(extra.to_string());
            }
        }
        policy
    }

    pub fn reserved(&self) -> &[String] {
        &self.reserved
    }

    pub fn check(&self, name: &str) -> NameVerdict {
        let matched = if self.case_sensitive {
            reserved_match(name, &self.reserved)
        } else {
            self.reserved
                .iter()
                .map(String::as_str)
                .find(|entry| entry.eq_ignore_ascii_case(name))
        };
        match matched {
            Some(entry) => NameVerdict::Reserved {
                matched: entry.to_string(),
            },
            None => NameVerdict::Accepted,
        }
    }
}

/// Check each name in order.
pub fn check_names<S: AsRef<str>>(policy: &NamePolicy, names: &[S]) -> Vec<NameReport> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let verdict = policy.check(name);
            debug!(name, accepted = verdict.is_accepted(), "checked name");
            match verdict {
                NameVerdict::Accepted => NameReport {
                    name: name.to_string(),
                    accepted: true,
                    matched: None,
                },
                NameVerdict::Reserved { matched } => NameReport {
                    name: name.to_string(),
                    accepted: false,
                    matched: Some(matched),
                },
            }
        })
        .collect()
}

/// A key/value property recorded against a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestProperty {
    key: String,
    value: String,
}

impl TestProperty {
    /// Create a property, rejecting empty or built-in reserved keys.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::with_policy(&NamePolicy::default(), key, value)
    }

    /// Create a property, rejecting empty keys and keys reserved by `policy`.
    pub fn with_policy(
        policy: &NamePolicy,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            bail!("property key must not be empty");
        }
        if let NameVerdict::Reserved { matched } = policy.check(&key) {
            bail!(
                "property key '{}' is reserved (matches '{}')",
                key,
                matched
            );
        }
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
