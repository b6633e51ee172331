use jsonschema::JSONSchema;
use log::debug;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;
use weft_types::{ConfigError, Descriptor};

use crate::common::{compile_schema, validate_json};

/// Conventional descriptor location, resolved against the invoking
/// directory.
pub const DEFAULT_DESCRIPTOR_FILE: &str = "weft.config.json";

static DESCRIPTOR_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "content": {
      "type": "array",
      "items": { "type": "string", "minLength": 1 },
      "description": "Glob patterns selecting the template files the build scans for class names."
    },
    "theme": {
      "type": "object",
      "properties": {
        "extend": { "type": "object" },
        "container": {
          "type": "object",
          "properties": {
            "center": { "type": "boolean" }
          }
        }
      }
    },
    "plugins": {
      "type": "array",
      "items": {
        "type": "string",
        "pattern": "^(@[a-z0-9][a-z0-9._-]*/)?[a-z0-9][a-z0-9._-]*$"
      },
      "description": "Plugin identifiers, applied in listed order."
    }
  },
  "required": ["content"]
}"#;

static COMPILED_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| compile_schema(DESCRIPTOR_SCHEMA));

/// Loads the descriptor from `weft.config.json` in the current directory
///
/// # Returns
///
/// Returns the parsed descriptor on success
///
/// # Errors
///
/// - Descriptor file missing: `ConfigError::FileNotFound`
/// - JSON parse failure: `ConfigError::ParseError`
/// - Schema validation failure: `ConfigError::ValidationError`
pub fn load_descriptor() -> Result<Descriptor, ConfigError> {
  let current_dir = env::current_dir()?;
  let descriptor_path = current_dir.join(DEFAULT_DESCRIPTOR_FILE);

  if !descriptor_path.exists() {
    return Err(ConfigError::FileNotFound(
      descriptor_path.display().to_string(),
    ));
  }

  load_descriptor_from(&descriptor_path)
}

/// Loads the descriptor from an explicit path
///
/// A single synchronous read; the result is immutable and the file is
/// re-read fresh on every build invocation.
///
/// # Arguments
///
/// * `path` - Path to the descriptor file
///
/// # Errors
///
/// - File read failure: `ConfigError::IoError`
/// - JSON parse failure: `ConfigError::ParseError`, message carries the
///   line/column of the offending syntax
/// - Schema validation failure: `ConfigError::ValidationError`, message
///   carries the offending key path(s)
pub fn load_descriptor_from<P: AsRef<Path>>(path: P) -> Result<Descriptor, ConfigError> {
  let content = fs::read_to_string(path.as_ref())?;
  let value: Value =
    serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

  validate_json(&COMPILED_SCHEMA, &value)?;

  let descriptor: Descriptor =
    serde_json::from_value(value).map_err(|e| ConfigError::ParseError(e.to_string()))?;

  debug!(
    "Loaded descriptor from {}: {} content glob(s), {} plugin(s)",
    path.as_ref().display(),
    descriptor.content.len(),
    descriptor.plugins.len()
  );

  Ok(descriptor)
}
