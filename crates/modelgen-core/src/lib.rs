//! Read-render-write pipeline: a structured-data schema is loaded, fed into a
//! Tera template, and the result is written to a single output file.

pub mod error;
pub mod filters;
pub mod pipeline;
pub mod schema;
pub mod template;
pub mod writer;

pub use error::{ErrorKind, GenerateError};
pub use modelgen_config::{GeneratorConfig, WriteMode};
pub use pipeline::{generate, generate_default, render_to_string};
pub use schema::{SchemaDocument, load_schema};
pub use template::TemplateDocument;
pub use writer::write_output;
