//! `wave2bin inspect` — print intermediate pipeline stages.

use std::path::Path;

use anyhow::{bail, Context, Result};
use wave2bin_core::{format_digits, Conversion, Converter};

use crate::config::{resolve_options, Overrides, Wave2binConfig};

/// Which stage of the pipeline to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Summary,
    Hex,
    Binary,
    Symbols,
}

impl ViewKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "summary" => Ok(ViewKind::Summary),
            "hex" => Ok(ViewKind::Hex),
            "binary" => Ok(ViewKind::Binary),
            "symbols" => Ok(ViewKind::Symbols),
            other => bail!("unknown view: '{other}'. Available views: summary, hex, binary, symbols"),
        }
    }
}

/// Inspect `input` without writing any file.
pub fn run(
    config: Option<&Wave2binConfig>,
    input: &str,
    view: Option<&str>,
    export: Option<&str>,
    chunk_size: Option<usize>,
    width: Option<&str>,
) -> Result<()> {
    let kind = ViewKind::parse(view.unwrap_or("summary"))?;
    let conversion = convert(config, input, chunk_size, width)?;

    let text = match export.unwrap_or("text") {
        "text" => render_text(&conversion, kind),
        "json" => serde_json::to_string_pretty(&conversion).context("serializing conversion")?,
        other => bail!("unknown export format '{other}'. Available formats: text, json"),
    };
    println!("{text}");
    Ok(())
}

/// Run the in-memory pipeline; inspection always computes symbols.
fn convert(
    config: Option<&Wave2binConfig>,
    input: &str,
    chunk_size: Option<usize>,
    width: Option<&str>,
) -> Result<Conversion> {
    let overrides = Overrides {
        chunk_size,
        width,
        symbols: Some(true),
    };
    let options = resolve_options(config, overrides)?;
    Converter::new(options)
        .convert_file(Path::new(input))
        .with_context(|| format!("inspecting {input}"))
}

fn render_text(conversion: &Conversion, kind: ViewKind) -> String {
    let symbols = conversion.symbols.as_deref().unwrap_or_default();
    match kind {
        ViewKind::Hex => conversion.hex.clone(),
        ViewKind::Binary => format_digits(conversion.binary.as_str()),
        ViewKind::Symbols => symbols.to_string(),
        ViewKind::Summary => {
            let mut out = String::new();
            out.push_str(&format!("--- {} ---\n", conversion.input.display()));
            out.push_str(&format!("  Bytes:   {}\n", conversion.byte_count));
            out.push_str(&format!("  Hex:     {} chars\n", conversion.hex.len()));
            out.push_str(&format!(
                "  Bits:    {} ({})\n",
                conversion.bit_count(),
                conversion.width
            ));
            out.push_str(&format!("  Symbols: {}", symbols.len()));
            out
        }
    }
}
