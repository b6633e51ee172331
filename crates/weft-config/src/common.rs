use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use weft_types::ConfigError;

/// Validates descriptor JSON against a precompiled schema
///
/// # Arguments
///
/// * `schema` - Precompiled JSON Schema
/// * `value` - Descriptor JSON to validate
///
/// # Returns
///
/// Returns Ok(()) on successful validation
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` on validation failure, one line
/// per violation with the offending instance path
pub fn validate_json(schema: &JSONSchema, value: &Value) -> Result<(), ConfigError> {
  if let Err(errors) = schema.validate(value) {
    let error_messages: Vec<String> = errors
      .map(|e| format!("Path '{}': {}", e.instance_path, e))
      .collect();
    let combined_errors = error_messages.join("\n");
    return Err(ConfigError::ValidationError(combined_errors));
  }
  Ok(())
}

/// Compiles a JSON Schema
///
/// # Arguments
///
/// * `schema_str` - JSON Schema string
///
/// # Returns
///
/// Returns the compiled JSONSchema
///
/// # Panics
///
/// - Panics if the schema format is invalid
/// - Panics if schema compilation fails
pub fn compile_schema(schema_str: &str) -> JSONSchema {
  let schema: Value = serde_json::from_str(schema_str).expect("Schema is invalid");
  JSONSchema::options()
    .with_draft(Draft::Draft7)
    .compile(&schema)
    .expect("Failed to compile schema")
}
