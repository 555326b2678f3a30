//! Conversion pipeline for wave2bin.
//!
//! Turns an arbitrary binary file into the textual base-2 expansion of the
//! integer formed by its hex dump:
//!
//! ```text
//! file ──► chunks ──► hex string ──► integer ──► "0"/"1" digits ──► wavBin.txt
//!                                                      │
//!                                                      └──► A/T/G/C symbols (optional)
//! ```
//!
//! The [`Converter`] drives the stages; each stage is also usable on its own.

pub mod converter;
pub mod encode;
pub mod error;
pub mod output;
pub mod reader;
pub mod render;
pub mod symbol;

pub use converter::{Conversion, Converter, ConverterOptions};
pub use encode::{encode_chunks, HexEncoder};
pub use error::{ConvertError, Result};
pub use output::{format_digits, write_output, DEFAULT_OUTPUT_FILE};
pub use reader::{open_chunks, ChunkReader, DEFAULT_CHUNK_SIZE};
pub use render::{render_binary, BinaryDigits, BitWidth};
pub use symbol::{map_symbols, Symbol};
