use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// The build-step configuration descriptor.
///
/// Loaded once per build invocation and never mutated afterwards. The
/// external tool reads `content` to know which template files to scan,
/// merges `theme` into its default style vocabulary, and applies
/// `plugins` in listed order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Descriptor {
  pub content: Vec<String>,
  #[serde(default)]
  pub theme: ThemeConfig,
  #[serde(default)]
  pub plugins: Vec<PluginRef>,
}

/// Theme overrides carried by the descriptor.
///
/// `extend` entries are stored verbatim; interpreting them is the
/// consuming tool's job.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ThemeConfig {
  #[serde(default)]
  pub extend: Map<String, Value>,
  #[serde(default)]
  pub container: ContainerConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ContainerConfig {
  #[serde(default)]
  pub center: bool,
}

/// Opaque plugin identifier.
///
/// Resolution into an executable extension happens in the external
/// tool; this side only checks the identifier's syntax at load time
/// and preserves the listed order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PluginRef(pub String);

impl PluginRef {
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PluginRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for PluginRef {
  fn from(name: &str) -> Self {
    PluginRef(name.to_string())
  }
}

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error(
    "Descriptor file not found: {0}\n\nPlease ensure weft.config.json exists in the project root directory."
  )]
  FileNotFound(String),

  #[error("Descriptor parsing error: {0}")]
  ParseError(String),

  #[error("Descriptor validation failed:\n{0}")]
  ValidationError(String),

  #[error("File reading error: {0}")]
  IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_optional_keys_fall_back_to_defaults() {
    let descriptor: Descriptor =
      serde_json::from_str(r#"{ "content": ["./templates/**/*.html"] }"#).unwrap();

    assert_eq!(descriptor.content, vec!["./templates/**/*.html"]);
    assert!(descriptor.theme.extend.is_empty());
    assert!(!descriptor.theme.container.center);
    assert!(descriptor.plugins.is_empty());
  }

  #[test]
  fn plugin_refs_deserialize_from_bare_strings() {
    let descriptor: Descriptor =
      serde_json::from_str(r#"{ "content": [], "plugins": ["p1", "p2"] }"#).unwrap();

    assert_eq!(
      descriptor.plugins,
      vec![PluginRef::from("p1"), PluginRef::from("p2")]
    );
    assert_eq!(descriptor.plugins[0].as_str(), "p1");
  }

  #[test]
  fn container_centering_round_trips() {
    let descriptor: Descriptor = serde_json::from_str(
      r#"{ "content": ["./a"], "theme": { "container": { "center": true } } }"#,
    )
    .unwrap();
    assert!(descriptor.theme.container.center);

    let rendered = serde_json::to_string(&descriptor).unwrap();
    let reparsed: Descriptor = serde_json::from_str(&rendered).unwrap();
    assert_eq!(reparsed, descriptor);
  }
}
