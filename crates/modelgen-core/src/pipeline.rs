use modelgen_config::GeneratorConfig;
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::schema::load_schema;
use crate::template::TemplateDocument;
use crate::writer::write_output;

/// Load the schema, render the template, and write the result.
///
/// Steps run in that order and the first failure is returned as is. A
/// failure before the write leaves the output path untouched.
pub fn generate(config: &GeneratorConfig) -> Result<(), GenerateError> {
    let output = render_to_string(config)?;
    write_output(config.output_path(), &output, config.write_mode())?;

    info!(
        schema = %config.schema_path().display(),
        template = %config.template_path().display(),
        output = %config.output_path().display(),
        "generated"
    );
    Ok(())
}

/// [`generate`] with the default paths.
pub fn generate_default() -> Result<(), GenerateError> {
    generate(&GeneratorConfig::default())
}

/// Load and render without writing anything.
pub fn render_to_string(config: &GeneratorConfig) -> Result<String, GenerateError> {
    let schema = load_schema(config.schema_path())?;
    let template = TemplateDocument::load(config.template_path())?;
    debug!(template = template.name(), keys = schema.len(), "rendering");
    template.render(&schema)
}
