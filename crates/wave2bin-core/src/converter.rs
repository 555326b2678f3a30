//! The end-to-end conversion pipeline.
//!
//! `Converter` wires the stages together:
//!   1. open the source and stream it in chunks
//!   2. hex-encode the chunks in order
//!   3. render the hex string as base-2 digits
//!   4. optionally map digit pairs to A/T/G/C symbols
//!   5. write the digits to the output file (only in [`Converter::run`])
//!
//! Where the input path comes from (file picker, CLI argument, constant) is
//! the caller's business.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::encode::HexEncoder;
use crate::error::{ConvertError, Result};
use crate::output::write_output;
use crate::reader::{open_chunks, DEFAULT_CHUNK_SIZE};
use crate::render::{render_binary, BinaryDigits, BitWidth};
use crate::symbol::map_symbols;

/// Knobs for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Bytes per read.
    pub chunk_size: usize,
    /// Whether leading zero bits are kept.
    pub width: BitWidth,
    /// Compute the symbol string alongside the digits.
    pub symbols: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            width: BitWidth::Natural,
            symbols: false,
        }
    }
}

impl ConverterOptions {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_width(mut self, width: BitWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_symbols(mut self, symbols: bool) -> Self {
        self.symbols = symbols;
        self
    }
}

/// Everything derived from one input file.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub input: PathBuf,
    pub byte_count: usize,
    pub width: BitWidth,
    pub hex: String,
    pub binary: BinaryDigits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
}

impl Conversion {
    pub fn bit_count(&self) -> usize {
        self.binary.len()
    }
}

/// Runs the file → hex → binary (→ symbols) pipeline.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Convert `input` in memory without writing anything.
    pub fn convert_file(&self, input: &Path) -> Result<Conversion> {
        let chunks = open_chunks(input, self.options.chunk_size)?;
        let chunk_size = chunks.chunk_size();

        let mut encoder = HexEncoder::new();
        let mut chunk_count = 0usize;
        for chunk in chunks {
            let chunk = chunk.map_err(|source| ConvertError::Read {
                path: input.to_path_buf(),
                source,
            })?;
            encoder.push(&chunk);
            chunk_count += 1;
        }
        let byte_count = encoder.byte_len();
        debug!(bytes = byte_count, chunks = chunk_count, chunk_size, "read input");

        let hex = encoder.finish();
        debug!(hex_len = hex.len(), "hex encoded");

        let binary = render_binary(&hex, self.options.width)?;
        debug!(bits = binary.len(), width = %self.options.width, "rendered binary");

        let symbols = self.options.symbols.then(|| map_symbols(binary.as_str()));
        if let Some(symbols) = &symbols {
            debug!(count = symbols.len(), %symbols, "mapped symbols");
        }

        Ok(Conversion {
            input: input.to_path_buf(),
            byte_count,
            width: self.options.width,
            hex,
            binary,
            symbols,
        })
    }

    /// Convert `input` and write the digit line to `output`.
    ///
    /// Nothing is written when any stage before the output fails.
    pub fn run(&self, input: &Path, output: &Path) -> Result<Conversion> {
        let conversion = self.convert_file(input)?;
        write_output(output, &conversion.binary)?;
        Ok(conversion)
    }
}
