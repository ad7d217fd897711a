use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelgen_config::WriteMode;

mod commands;
mod utils;
use commands::{InputArgs, cmd_generate, cmd_init, cmd_render};

/// modelgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "modelgen", author, version, about)]
struct Cli {
    /// Log each pipeline step to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the template with the schema and write the output file.
    Generate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output file (overrides config).
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
        /// How the output file is replaced (overrides config).
        #[arg(long, value_enum)]
        write_mode: Option<WriteMode>,
    },
    /// Render the template with the schema and print the result.
    Render {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Initialize modelgen.json with defaults.
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_tracing(cli.verbose);
    match cli.command {
        Commands::Generate {
            inputs,
            output,
            write_mode,
        } => cmd_generate(inputs, output, write_mode),
        Commands::Render { inputs } => cmd_render(inputs),
        Commands::Init => cmd_init(),
    }
}
