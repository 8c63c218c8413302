//! JSON and YAML rendering.
//!
//! Both formats are produced from the same serde representation of
//! [`PremiumTable`], so they always describe the same structure.

use std::fmt;

use serde::{Deserialize, Serialize};

use kempo_model::PremiumTable;

use crate::error::Result;

/// Serialized output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Yaml];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub fn render(self, table: &PremiumTable) -> Result<String> {
        match self {
            Self::Json => to_json(table),
            Self::Yaml => to_yaml(table),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Compact JSON.
pub fn to_json(table: &PremiumTable) -> Result<String> {
    Ok(serde_json::to_string(table)?)
}

/// Indented JSON, for humans.
pub fn to_json_pretty(table: &PremiumTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// YAML with the effective date single-quoted.
pub fn to_yaml(table: &PremiumTable) -> Result<String> {
    let yaml = serde_yaml::to_string(table)?;
    Ok(quote_effective_date(&yaml))
}

/// YAML 1.1 readers load a plain `YYYY-MM-DD` scalar as a timestamp, so the
/// top-level date is written as a quoted string.
fn quote_effective_date(yaml: &str) -> String {
    const KEY: &str = "effective_date: ";
    let mut quoted = String::with_capacity(yaml.len() + 2);
    for line in yaml.lines() {
        match line.strip_prefix(KEY) {
            Some(value) if value != "null" && !value.starts_with(['\'', '"']) => {
                quoted.push_str(KEY);
                quoted.push('\'');
                quoted.push_str(value);
                quoted.push('\'');
            }
            _ => quoted.push_str(line),
        }
        quoted.push('\n');
    }
    quoted
}

/// Parses JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<PremiumTable> {
    Ok(serde_json::from_str(json)?)
}

/// Parses YAML produced by [`to_yaml`].
pub fn from_yaml(yaml: &str) -> Result<PremiumTable> {
    Ok(serde_yaml::from_str(yaml)?)
}
