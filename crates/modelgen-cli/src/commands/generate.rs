use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use modelgen_config::WriteMode;
use modelgen_core::generate;

use super::InputArgs;

pub fn cmd_generate(
    inputs: InputArgs,
    output: Option<PathBuf>,
    write_mode: Option<WriteMode>,
) -> Result<()> {
    let config = inputs.resolve(output, write_mode)?;
    generate(&config)
        .with_context(|| format!("generate {}", config.output_path().display()))?;

    println!(
        "{} {}",
        "Generated".bright_green().bold(),
        config.output_path().display()
    );
    Ok(())
}
