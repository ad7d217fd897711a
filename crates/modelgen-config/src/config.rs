use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::write_mode::WriteMode;

/// Schema file read when no path is configured.
pub const DEFAULT_SCHEMA_PATH: &str = "/code/data/models/tables.yml";
/// Template file read when no path is configured.
pub const DEFAULT_TEMPLATE_PATH: &str = "/code/data/templates/models.py.jinja";
/// Destination written when no path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "/code/data/gen/models.py";

fn default_schema_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEMA_PATH)
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_PATH)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

/// Top-level modelgen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Structured-data file (YAML or JSON) whose top-level keys become
    /// template variables.
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,
    /// Template file rendered with the schema as its context.
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
    /// Generated file. Always fully overwritten; its directory must exist.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub write_mode: WriteMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            template_path: default_template_path(),
            output_path: default_output_path(),
            write_mode: WriteMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Build a config from explicit paths with the default write mode.
    pub fn new(
        schema_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            template_path: template_path.into(),
            output_path: output_path.into(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Replace whichever fields are given, keeping the rest.
    pub fn with_overrides(
        mut self,
        schema_path: Option<PathBuf>,
        template_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        write_mode: Option<WriteMode>,
    ) -> Self {
        if let Some(path) = schema_path {
            self.schema_path = path;
        }
        if let Some(path) = template_path {
            self.template_path = path;
        }
        if let Some(path) = output_path {
            self.output_path = path;
        }
        if let Some(mode) = write_mode {
            self.write_mode = mode;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();

        assert_eq!(config.schema_path, PathBuf::from("/code/data/models/tables.yml"));
        assert_eq!(
            config.template_path,
            PathBuf::from("/code/data/templates/models.py.jinja")
        );
        assert_eq!(config.output_path, PathBuf::from("/code/data/gen/models.py"));
        assert_eq!(config.write_mode, WriteMode::Atomic);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"outputPath": "out/models.py", "writeMode": "direct"}"#)
                .unwrap();

        assert_eq!(config.schema_path(), Path::new(DEFAULT_SCHEMA_PATH));
        assert_eq!(config.template_path(), Path::new(DEFAULT_TEMPLATE_PATH));
        assert_eq!(config.output_path(), Path::new("out/models.py"));
        assert_eq!(config.write_mode(), WriteMode::Direct);
    }

    #[test]
    fn test_with_overrides_only_touches_given_fields() {
        let config = GeneratorConfig::new("a.yml", "b.jinja", "c.py").with_overrides(
            None,
            Some(PathBuf::from("other.jinja")),
            None,
            Some(WriteMode::Direct),
        );

        assert_eq!(config.schema_path(), Path::new("a.yml"));
        assert_eq!(config.template_path(), Path::new("other.jinja"));
        assert_eq!(config.output_path(), Path::new("c.py"));
        assert_eq!(config.write_mode(), WriteMode::Direct);
    }
}
