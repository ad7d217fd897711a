pub mod generate;
pub mod init;
pub mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use modelgen_config::{GeneratorConfig, WriteMode};

use crate::utils::load_config;

pub use generate::cmd_generate;
pub use init::cmd_init;
pub use render::cmd_render;

/// Where the schema and template come from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Config file (default: ./modelgen.json if present).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Schema file (overrides config).
    #[arg(short = 's', long)]
    pub schema: Option<PathBuf>,
    /// Template file (overrides config).
    #[arg(short = 't', long)]
    pub template: Option<PathBuf>,
}

impl InputArgs {
    /// Load the config and apply command-line overrides on top.
    pub fn resolve(
        self,
        output: Option<PathBuf>,
        write_mode: Option<WriteMode>,
    ) -> Result<GeneratorConfig> {
        let config = load_config(self.config.as_deref())?;
        Ok(config.with_overrides(self.schema, self.template, output, write_mode))
    }
}
