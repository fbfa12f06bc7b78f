//! Sample configuration loaded from YAML.

use anyhow::Context;
use recursive_strategy::{RecursiveOptions, DEFAULT_TIER_BIAS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strategy_core::{DrawConfig, DEFAULT_MAX_CHOICES};

/// Shape of the structure each extension layer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// JSON arrays of children
    Array,
    /// JSON objects with keys `k0`, `k1`, ...
    Object,
}

/// Inclusive integer range for leaf values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeafRange {
    pub min: i64,
    pub max: i64,
}

impl Default for LeafRange {
    fn default() -> Self {
        Self { min: -100, max: 100 }
    }
}

/// Number of children per extension layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildRange {
    pub min: usize,
    pub max: usize,
}

impl Default for ChildRange {
    fn default() -> Self {
        Self { min: 1, max: 4 }
    }
}

/// Configuration for the `sample` command.
///
/// Every field is optional in YAML:
///
/// ```yaml
/// seed: 42
/// count: 10
/// max_leaves: 50
/// tier_bias: 0.8
/// max_choices: 8192
/// leaf: { min: -100, max: 100 }
/// shape: array
/// children: { min: 1, max: 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Base seed; document `i` is drawn with seed `seed + i`
    pub seed: u64,

    /// Number of documents to generate
    pub count: u64,

    /// Maximum number of leaves per document
    pub max_leaves: usize,

    /// Bias towards shallower tiers
    pub tier_bias: f64,

    /// Random choice allowance per document
    pub max_choices: usize,

    pub leaf: LeafRange,

    pub shape: Shape,

    pub children: ChildRange,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            count: 10,
            max_leaves: 50,
            tier_bias: DEFAULT_TIER_BIAS,
            max_choices: DEFAULT_MAX_CHOICES,
            leaf: LeafRange::default(),
            shape: Shape::Array,
            children: ChildRange::default(),
        }
    }
}

impl SampleConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse sample config YAML")
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sample config file: {path:?}"))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid sample config: {path:?}"))
    }

    pub fn recursive_options(&self) -> RecursiveOptions {
        RecursiveOptions {
            max_leaves: self.max_leaves,
            tier_bias: self.tier_bias,
        }
    }

    /// Draw configuration for the document at `index`.
    pub fn draw_config(&self, index: u64) -> DrawConfig {
        DrawConfig {
            seed: self.seed.wrapping_add(index),
            max_choices: self.max_choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config = SampleConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = SampleConfig::from_yaml(
            r#"
seed: 7
max_leaves: 12
shape: object
children:
  min: 0
  max: 2
"#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.max_leaves, 12);
        assert_eq!(config.shape, Shape::Object);
        assert_eq!(config.children, ChildRange { min: 0, max: 2 });
        assert_eq!(config.leaf, LeafRange::default());
        assert_eq!(config.tier_bias, DEFAULT_TIER_BIAS);
    }

    #[test]
    fn test_unknown_shape_rejected() {
        assert!(SampleConfig::from_yaml("shape: tree").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "count: 3\nleaf: {{ min: 0, max: 1 }}").unwrap();

        let config = SampleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.leaf, LeafRange { min: 0, max: 1 });
    }

    #[test]
    fn test_missing_file() {
        let err = SampleConfig::from_file("/nonexistent/sample.yaml").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read sample config file"));
    }

    #[test]
    fn test_draw_config_offsets_seed() {
        let config = SampleConfig {
            seed: u64::MAX,
            ..SampleConfig::default()
        };
        assert_eq!(config.draw_config(0).seed, u64::MAX);
        assert_eq!(config.draw_config(1).seed, 0);
        assert_eq!(config.draw_config(1).max_choices, DEFAULT_MAX_CHOICES);
    }
}
