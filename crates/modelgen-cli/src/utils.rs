use std::path::Path;

use anyhow::Result;
use modelgen_config::{GeneratorConfig, load_config_from_path, load_config_or_default};
use tracing_subscriber::EnvFilter;

/// Load an explicit config file, or `modelgen.json` from the current
/// directory when present, or the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => load_config_or_default(None),
    }
}

/// Logs go to stderr so `render` output on stdout stays clean.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
