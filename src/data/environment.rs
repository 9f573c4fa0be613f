//! Environment snapshot.
//!
//! A read-only capture of the world state around the character, taken by the
//! host at session start and passed by value into the row sources that need
//! it. The session never reaches into ambient world state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSnapshot {
    /// Ambient temperature in degrees Fahrenheit.
    pub temperature: i32,
    /// Whether the character stands in direct sunlight.
    pub in_sunlight: bool,
    /// Ambient light level, 0-100.
    pub light_level: i32,
}

impl Default for EnvironmentSnapshot {
    fn default() -> Self {
        Self {
            temperature: 65,
            in_sunlight: false,
            light_level: 60,
        }
    }
}

impl EnvironmentSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read environment snapshot {}", path.display()))?;
        let env: EnvironmentSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse environment snapshot {}", path.display()))?;
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let env: EnvironmentSnapshot = serde_json::from_str(r#"{"in_sunlight": true}"#).unwrap();
        assert!(env.in_sunlight);
        assert_eq!(env.temperature, 65);
        assert_eq!(env.light_level, 60);
    }
}
