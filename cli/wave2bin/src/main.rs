//! wave2bin CLI — dump any file as the binary digits of its hex value.

mod commands;
mod config;
mod logging;

use std::process;

use clap::{Parser, Subcommand};

use config::Wave2binConfig;

#[derive(Parser)]
#[command(name = "wave2bin", version, about = "Render a file as the binary digits of its hex dump")]
struct Cli {
    /// Log level filter (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file and write the digit line to the output file
    Convert {
        /// File to convert
        input: String,
        /// Output file (default: wavBin.txt)
        #[arg(long)]
        output: Option<String>,
        /// Bytes per read (default: 32)
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Bit width (natural, fixed)
        #[arg(long)]
        width: Option<String>,
        /// Also compute and print the A/T/G/C symbol string
        #[arg(long)]
        symbols: bool,
    },
    /// Show one pipeline stage without writing any file
    Inspect {
        /// File to inspect
        input: String,
        /// View mode (summary, hex, binary, symbols)
        #[arg(long)]
        view: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        export: Option<String>,
        /// Bytes per read (default: 32)
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Bit width (natural, fixed)
        #[arg(long)]
        width: Option<String>,
    },
    /// Write a default wave2bin.toml into the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            chunk_size,
            width,
            symbols,
        } => {
            let config = load_config(&cwd)?;
            commands::convert::run(
                &cwd,
                config.as_ref(),
                &input,
                output.as_deref(),
                chunk_size,
                width.as_deref(),
                symbols,
            )
        }

        Commands::Inspect {
            input,
            view,
            export,
            chunk_size,
            width,
        } => {
            let config = load_config(&cwd)?;
            commands::inspect::run(
                config.as_ref(),
                &input,
                view.as_deref(),
                export.as_deref(),
                chunk_size,
                width.as_deref(),
            )
        }

        Commands::Init => commands::init::run(&cwd),
    }
}

/// Find `wave2bin.toml` from `cwd` upward; absence is not an error.
fn load_config(cwd: &std::path::Path) -> anyhow::Result<Option<Wave2binConfig>> {
    let found = Wave2binConfig::find_and_load(cwd)?;
    if let Some((_, dir)) = &found {
        tracing::debug!(dir = %dir.display(), "loaded wave2bin.toml");
    }
    Ok(found.map(|(config, _)| config))
}
