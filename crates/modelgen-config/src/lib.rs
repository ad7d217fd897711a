pub mod config;
pub mod file;
pub mod write_mode;

pub use config::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SCHEMA_PATH, DEFAULT_TEMPLATE_PATH, GeneratorConfig,
};
pub use file::{CONFIG_FILE_NAME, load_config_from_path, load_config_or_default};
pub use write_mode::WriteMode;
