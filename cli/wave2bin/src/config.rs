//! `wave2bin.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wave2bin_core::{BitWidth, ConverterOptions, DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT_FILE};

/// File name searched for from the working directory upward.
pub const CONFIG_FILE: &str = "wave2bin.toml";

/// The top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wave2binConfig {
    /// Conversion defaults.
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// `[convert]` section. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Bytes per read.
    #[serde(default)]
    pub chunk_size: Option<usize>,
    /// Output file path, relative to the working directory.
    #[serde(default)]
    pub output: Option<String>,
    /// Bit width: "natural" or "fixed".
    #[serde(default)]
    pub width: Option<BitWidth>,
    /// Compute the symbol string on every conversion.
    #[serde(default)]
    pub symbols: Option<bool>,
}

impl Wave2binConfig {
    /// Search upward from `start_dir` for a `wave2bin.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config: Wave2binConfig = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing wave2bin.toml")
    }

    /// Default template written by `wave2bin init`.
    pub fn template() -> String {
        format!(
            r#"[convert]
chunk_size = {DEFAULT_CHUNK_SIZE}
output = "{DEFAULT_OUTPUT_FILE}"
width = "natural"
symbols = false
"#
        )
    }
}

/// Flags given on the command line; `None` means "not given".
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    pub chunk_size: Option<usize>,
    pub width: Option<&'a str>,
    pub symbols: Option<bool>,
}

/// Resolve converter options (CLI flag > config file > built-in default).
pub fn resolve_options(
    config: Option<&Wave2binConfig>,
    overrides: Overrides<'_>,
) -> Result<ConverterOptions> {
    let section = config.map(|c| &c.convert);
    let defaults = ConverterOptions::default();

    let width = match overrides.width {
        Some(name) => name.parse::<BitWidth>()?,
        None => section.and_then(|s| s.width).unwrap_or(defaults.width),
    };
    let chunk_size = overrides
        .chunk_size
        .or_else(|| section.and_then(|s| s.chunk_size))
        .unwrap_or(defaults.chunk_size);
    let symbols = overrides
        .symbols
        .or_else(|| section.and_then(|s| s.symbols))
        .unwrap_or(defaults.symbols);

    Ok(defaults
        .with_chunk_size(chunk_size)
        .with_width(width)
        .with_symbols(symbols))
}

/// Resolve the output path (CLI flag > config file > `wavBin.txt`), relative to `cwd`.
pub fn resolve_output(config: Option<&Wave2binConfig>, output: Option<&str>, cwd: &Path) -> PathBuf {
    let name = output
        .or_else(|| config.and_then(|c| c.convert.output.as_deref()))
        .unwrap_or(DEFAULT_OUTPUT_FILE);
    cwd.join(name)
}
