//! Configuration management for graphml-owl.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `graphml-owl.toml` file
//! 3. User config `~/.config/graphml-owl/config.toml`
//! 4. Built-in defaults (lowest priority)
//!
//! With the defaults, two runs over the same input differ only in the
//! generation timestamp.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::sanitize::is_identifier;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Graph to ontology mapping.
    pub ontology: OntologyConfig,

    /// Ontology to graph mapping.
    pub layout: LayoutConfig,

    /// Output file handling.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./graphml-owl.toml` (project local)
    /// 2. `~/.config/graphml-owl/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply on top of whichever source was found.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(DEFAULT_CONFIG_DIR).join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are rejected rather than ignored.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(label) = lookup("GRAPHML_OWL_ONTOLOGY_LABEL") {
            self.ontology.label = label;
        }
        if let Some(language) = lookup("GRAPHML_OWL_LANGUAGE") {
            self.ontology.language = language;
        }
        if let Some(policy) = lookup("GRAPHML_OWL_CLASS_POLICY") {
            self.ontology.class_policy = policy.parse()?;
        }
        if let Some(spacing) = lookup("GRAPHML_OWL_NODE_SPACING") {
            self.layout.node_spacing = spacing.parse().map_err(|_| {
                ConfigError::Invalid(format!("GRAPHML_OWL_NODE_SPACING is not a number: {spacing}"))
            })?;
        }
        if let Some(atomic) = lookup("GRAPHML_OWL_ATOMIC_WRITES") {
            self.storage.atomic_writes = atomic.parse().map_err(|_| {
                ConfigError::Invalid(format!("GRAPHML_OWL_ATOMIC_WRITES is not a boolean: {atomic}"))
            })?;
        }
        Ok(())
    }

    /// Check values that would produce an unusable document.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !layout.node_spacing.is_finite() || layout.node_spacing < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "layout.node_spacing must be a non-negative number, got {}",
                layout.node_spacing
            )));
        }
        if !(layout.node_width > 0.0 && layout.node_height > 0.0) {
            return Err(ConfigError::Invalid(
                "layout.node_width and layout.node_height must be positive".to_string(),
            ));
        }
        let prefixes = [
            ("class_fallback_prefix", &self.ontology.class_fallback_prefix),
            ("property_fallback_prefix", &self.ontology.property_fallback_prefix),
        ];
        for (key, prefix) in prefixes {
            if !is_identifier(prefix) {
                return Err(ConfigError::Invalid(format!(
                    "ontology.{key} must be identifier-safe: {prefix:?}"
                )));
            }
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// What to do when several nodes sanitize to the same class id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassPolicy {
    /// Every node yields its own class entry, even if ids collide.
    #[default]
    PerNode,
    /// Nodes sharing a class id map onto the first such class.
    MergeById,
}

impl std::str::FromStr for ClassPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-node" => Ok(Self::PerNode),
            "merge-by-id" => Ok(Self::MergeById),
            other => Err(ConfigError::Invalid(format!(
                "unknown class policy {other:?} (expected \"per-node\" or \"merge-by-id\")"
            ))),
        }
    }
}

/// Graph to ontology configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologyConfig {
    /// `rdfs:label` of the generated `owl:Ontology`.
    pub label: String,

    /// Language tag for `rdfs:label` elements.
    pub language: String,

    /// Prefix of the style annotation comment.
    pub style_comment_prefix: String,

    /// Prefix for class ids of unlabeled nodes.
    pub class_fallback_prefix: String,

    /// Prefix for property ids of unlabeled edges.
    pub property_fallback_prefix: String,

    /// Handling of nodes whose labels collide after sanitization.
    pub class_policy: ClassPolicy,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_ONTOLOGY_LABEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            style_comment_prefix: DEFAULT_STYLE_COMMENT_PREFIX.to_string(),
            class_fallback_prefix: DEFAULT_CLASS_FALLBACK_PREFIX.to_string(),
            property_fallback_prefix: DEFAULT_PROPERTY_FALLBACK_PREFIX.to_string(),
            class_policy: ClassPolicy::default(),
        }
    }
}

/// Ontology to graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between consecutive nodes.
    pub node_spacing: f64,

    /// Width of each node.
    pub node_width: f64,

    /// Height of each node.
    pub node_height: f64,

    /// `PreferredSize` of node labels.
    pub node_label_size: String,

    /// `PreferredSize` of edge labels.
    pub edge_label_size: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_spacing: DEFAULT_NODE_SPACING,
            node_width: DEFAULT_NODE_WIDTH,
            node_height: DEFAULT_NODE_HEIGHT,
            node_label_size: DEFAULT_NODE_LABEL_SIZE.to_string(),
            edge_label_size: DEFAULT_EDGE_LABEL_SIZE.to_string(),
        }
    }
}

/// Output file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Write to a temp file in the target directory and rename it into place.
    pub atomic_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            atomic_writes: DEFAULT_ATOMIC_WRITES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ontology.label, DEFAULT_ONTOLOGY_LABEL);
        assert_eq!(config.ontology.class_policy, ClassPolicy::PerNode);
        assert_eq!(config.layout.node_spacing, DEFAULT_NODE_SPACING);
        assert!(config.storage.atomic_writes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[ontology]"));
        assert!(toml_str.contains("[layout]"));
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("class_policy = \"per-node\""));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[ontology]
label = "My diagram"
class_policy = "merge-by-id"

[layout]
node_spacing = 250.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ontology.label, "My diagram");
        assert_eq!(config.ontology.class_policy, ClassPolicy::MergeById);
        assert_eq!(config.ontology.language, DEFAULT_LANGUAGE);
        assert_eq!(config.layout.node_spacing, 250.0);
        assert_eq!(config.layout.node_width, DEFAULT_NODE_WIDTH);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("GRAPHML_OWL_LANGUAGE", "de"),
            ("GRAPHML_OWL_NODE_SPACING", "42"),
            ("GRAPHML_OWL_CLASS_POLICY", "merge-by-id"),
            ("GRAPHML_OWL_ATOMIC_WRITES", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.ontology.language, "de");
        assert_eq!(config.layout.node_spacing, 42.0);
        assert_eq!(config.ontology.class_policy, ClassPolicy::MergeById);
        assert!(!config.storage.atomic_writes);
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == "GRAPHML_OWL_NODE_SPACING").then(|| "wide".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = config.apply_overrides(|key| {
            (key == "GRAPHML_OWL_CLASS_POLICY").then(|| "dedupe".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_layout() {
        let mut config = Config::default();
        config.layout.node_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.layout.node_spacing = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ontology.class_fallback_prefix = "Class-".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unsafe_property_prefix() {
        let mut config = Config::default();
        config.ontology.property_fallback_prefix = "links to ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("property_fallback_prefix"));
    }
}
