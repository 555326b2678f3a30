//! Output file serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ConvertError, Result};
use crate::render::BinaryDigits;

/// File name written in the working directory when no output is given.
pub const DEFAULT_OUTPUT_FILE: &str = "wavBin.txt";

/// Join every digit with `", "`: `"101"` becomes `"1, 0, 1"`.
pub fn format_digits(bits: &str) -> String {
    let mut line = String::with_capacity(bits.len().saturating_mul(3));
    for (i, digit) in bits.chars().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        line.push(digit);
    }
    line
}

/// Write `bits` to `path` as one comma-separated line plus a newline.
///
/// Any previous contents are truncated. A failed write may leave a partial
/// or empty file behind.
pub fn write_output(path: &Path, bits: &BinaryDigits) -> Result<()> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", format_digits(bits.as_str())).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    info!(path = %path.display(), digits = bits.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_binary, BitWidth};
    use std::fs;

    #[test]
    fn single_digit_has_no_separator() {
        assert_eq!(format_digits("0"), "0");
    }

    #[test]
    fn digits_joined_with_comma_space() {
        assert_eq!(format_digits("1011"), "1, 0, 1, 1");
        assert_eq!(format_digits(""), "");
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT_FILE);
        fs::write(&path, "stale contents that are much longer\n").unwrap();

        let bits = render_binary("05", BitWidth::Natural).unwrap();
        write_output(&path, &bits).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1, 0, 1\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let bits = render_binary("01", BitWidth::Natural).unwrap();

        let err = write_output(&path, &bits).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }
}
