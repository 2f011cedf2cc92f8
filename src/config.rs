use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Capacity used when none (or zero) is configured
pub const DEFAULT_CAPACITY: usize = 100;

/// Construction options for a [`CommandStacker`](crate::CommandStacker)
///
/// Loadable from TOML:
///
/// ```toml
/// capacity = 50
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStackerOptions {
    /// Maximum undo entries kept by `add`/`run`. Zero or negative means unset.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "positive_or_unset"
    )]
    pub capacity: Option<usize>,
}

impl CommandStackerOptions {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity: Some(capacity) }
    }

    /// The capacity a stacker built from these options will enforce
    pub fn resolved_capacity(&self) -> usize {
        match self.capacity {
            Some(cap) if cap > 0 => cap,
            _ => DEFAULT_CAPACITY,
        }
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content)
            .map_err(|e| format!("Failed to parse stacker options: {}", e))
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read options file: {}", e))?;
        Self::from_toml_str(&content)
    }
}

fn positive_or_unset<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.filter(|n| *n > 0).and_then(|n| usize::try_from(n).ok()))
}
