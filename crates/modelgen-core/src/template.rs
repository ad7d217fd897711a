use std::fs;
use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;

use crate::error::GenerateError;
use crate::filters;
use crate::schema::SchemaDocument;

/// A compiled template, ready to render against a [`SchemaDocument`].
#[derive(Debug)]
pub struct TemplateDocument {
    name: String,
    tera: Tera,
}

impl TemplateDocument {
    /// Read and compile the template at `path`. The file name becomes the
    /// template name used in error messages.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path).map_err(|e| GenerateError::from_read(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(path = %path.display(), bytes = content.len(), "loaded template");
        Self::compile(&name, &content)
    }

    /// Compile template text held in memory.
    pub fn compile(name: &str, text: &str) -> Result<Self, GenerateError> {
        let mut tera = Tera::default();
        // Generated files are source code; never HTML-escape, whatever the file name.
        tera.autoescape_on(Vec::new());
        filters::register(&mut tera);
        tera.add_raw_template(name, text)
            .map_err(|e| GenerateError::template_syntax(name, e))?;

        Ok(Self {
            name: name.to_string(),
            tera,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render with the schema's top-level keys as template variables.
    pub fn render(&self, schema: &SchemaDocument) -> Result<String, GenerateError> {
        let context =
            Context::from_serialize(schema).map_err(|e| GenerateError::render(&self.name, e))?;
        let output = self
            .tera
            .render(&self.name, &context)
            .map_err(|e| GenerateError::render(&self.name, e))?;

        debug!(template = %self.name, bytes = output.len(), "rendered template");
        Ok(output)
    }
}
