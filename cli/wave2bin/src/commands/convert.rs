//! `wave2bin convert` — run the full pipeline and write the output file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use wave2bin_core::Converter;

use crate::config::{resolve_options, resolve_output, Overrides, Wave2binConfig};

/// Convert `input` and write the digit line to the resolved output path.
pub fn run(
    cwd: &Path,
    config: Option<&Wave2binConfig>,
    input: &str,
    output: Option<&str>,
    chunk_size: Option<usize>,
    width: Option<&str>,
    symbols: bool,
) -> Result<()> {
    let overrides = Overrides {
        chunk_size,
        width,
        // An absent flag defers to the config file.
        symbols: symbols.then_some(true),
    };
    let options = resolve_options(config, overrides)?;
    let output_path = resolve_output(config, output, cwd);

    let converter = Converter::new(options);
    let conversion = converter
        .run(Path::new(input), &output_path)
        .with_context(|| format!("converting {input}"))?;

    info!(
        bytes = conversion.byte_count,
        bits = conversion.bit_count(),
        width = %converter.options().width,
        "conversion complete"
    );

    if let Some(symbols) = &conversion.symbols {
        println!("{symbols}");
    }
    println!(
        "Wrote {} binary digits from {} bytes to {}",
        conversion.bit_count(),
        conversion.byte_count,
        output_path.display()
    );

    Ok(())
}
