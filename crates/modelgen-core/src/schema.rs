use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::GenerateError;

/// Parsed schema file. Structure is opaque here; the top-level keys become
/// the variables a template can reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaDocument(Map<String, Value>);

impl SchemaDocument {
    /// Parse YAML text. `origin` names the source in error messages.
    pub fn from_yaml_str(origin: &str, text: &str) -> Result<Self, GenerateError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| GenerateError::parse(origin, e))?;
        value
            .apply_merge()
            .map_err(|e| GenerateError::parse(origin, e))?;
        let value = serde_json::to_value(&value).map_err(|e| GenerateError::parse(origin, e))?;
        Self::from_value(origin, value)
    }

    /// Parse JSON text. `origin` names the source in error messages.
    pub fn from_json_str(origin: &str, text: &str) -> Result<Self, GenerateError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| GenerateError::parse(origin, e))?;
        Self::from_value(origin, value)
    }

    fn from_value(origin: &str, value: Value) -> Result<Self, GenerateError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(GenerateError::parse(
                origin,
                format!("expected a mapping at the top level, found {}", type_name(&other)),
            )),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Read and parse the schema file at `path`.
///
/// `.json` files are parsed as JSON; everything else is parsed as YAML.
pub fn load_schema(path: &Path) -> Result<SchemaDocument, GenerateError> {
    let content = fs::read_to_string(path).map_err(|e| GenerateError::from_read(path, e))?;
    let origin = path.display().to_string();

    let schema = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => SchemaDocument::from_json_str(&origin, &content)?,
        _ => SchemaDocument::from_yaml_str(&origin, &content)?,
    };

    debug!(path = %origin, keys = schema.len(), "loaded schema");
    Ok(schema)
}
