//! Base-2 rendering of a hex string read as one unsigned integer.
//!
//! Under [`BitWidth::Natural`] the output is the shortest binary spelling of
//! the integer's value: leading zero bits of the input are not reproduced,
//! and an all-zero input renders as a single `0`. This matches parsing the
//! hex string as a number and printing it in base 2, without needing a
//! bignum: every hex digit contributes exactly four bits, and only the leading
//! zeros have to be stripped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// How many bits the rendered string keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitWidth {
    /// Bit-length of the integer value; leading zero bits are dropped.
    #[default]
    Natural,
    /// Four bits per hex digit, leading zeros kept.
    Fixed,
}

impl BitWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            BitWidth::Natural => "natural",
            BitWidth::Fixed => "fixed",
        }
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BitWidth {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "natural" => Ok(BitWidth::Natural),
            "fixed" => Ok(BitWidth::Fixed),
            other => Err(ConvertError::InvalidWidth {
                value: other.to_string(),
            }),
        }
    }
}

/// A non-empty string of `'0'`/`'1'` characters, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BinaryDigits(String);

impl BinaryDigits {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: rendering never yields an empty digit string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BinaryDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse `hex` as a base-16 integer and render it in base 2.
///
/// Upper- and lowercase digits are accepted. An empty string has no value
/// and is rejected with [`ConvertError::EmptyInput`].
pub fn render_binary(hex: &str, width: BitWidth) -> Result<BinaryDigits> {
    if hex.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut bits = String::with_capacity(hex.len() * 4);
    for (offset, digit) in hex.chars().enumerate() {
        let nibble = digit
            .to_digit(16)
            .ok_or(ConvertError::InvalidHexDigit { digit, offset })?;
        for shift in (0..4).rev() {
            bits.push(if (nibble >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }

    if width == BitWidth::Natural {
        match bits.find('1') {
            Some(first_one) => {
                bits.drain(..first_one);
            }
            None => bits = String::from("0"),
        }
    }

    Ok(BinaryDigits(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn natural(hex: &str) -> String {
        render_binary(hex, BitWidth::Natural).unwrap().into_string()
    }

    #[test]
    fn zero_byte_renders_single_zero() {
        assert_eq!(natural("00"), "0");
        assert_eq!(natural("0000"), "0");
    }

    #[test]
    fn leading_zero_nibble_dropped() {
        assert_eq!(natural("0f0f"), "111100001111");
        assert_eq!(natural("01"), "1");
    }

    #[test]
    fn high_top_nibble_keeps_full_width() {
        assert_eq!(natural("80"), "10000000");
        assert_eq!(natural("ff"), "11111111");
    }

    #[test]
    fn uppercase_digits_accepted() {
        assert_eq!(natural("0F0F"), natural("0f0f"));
    }

    #[test]
    fn fixed_width_keeps_leading_zeros() {
        let bits = render_binary("0f0f", BitWidth::Fixed).unwrap();
        assert_eq!(bits.as_str(), "0000111100001111");
        let zero = render_binary("00", BitWidth::Fixed).unwrap();
        assert_eq!(zero.as_str(), "00000000");
    }

    #[test]
    fn empty_hex_rejected() {
        for width in [BitWidth::Natural, BitWidth::Fixed] {
            let err = render_binary("", width).unwrap_err();
            assert!(matches!(err, ConvertError::EmptyInput));
        }
    }

    #[test]
    fn invalid_digit_reports_offset() {
        let err = render_binary("0fz1", BitWidth::Natural).unwrap_err();
        match err {
            ConvertError::InvalidHexDigit { digit, offset } => {
                assert_eq!(digit, 'z');
                assert_eq!(offset, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn width_parses_and_displays() {
        assert_eq!("natural".parse::<BitWidth>().unwrap(), BitWidth::Natural);
        assert_eq!("fixed".parse::<BitWidth>().unwrap(), BitWidth::Fixed);
        assert_eq!(BitWidth::Fixed.to_string(), "fixed");
        assert!("padded".parse::<BitWidth>().is_err());
        assert_eq!(BitWidth::default(), BitWidth::Natural);
    }

    proptest! {
        #[test]
        fn matches_integer_value(value in any::<u64>()) {
            let hex = format!("{value:016x}");
            prop_assert_eq!(natural(&hex), format!("{value:b}"));
        }

        #[test]
        fn length_is_bit_length(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let hex = ::hex::encode(&bytes);
            let bits = render_binary(&hex, BitWidth::Natural).unwrap();
            let max = hex.len() * 4;
            prop_assert!(bits.len() <= max);
            if bytes.iter().any(|b| *b != 0) {
                prop_assert!(bits.len() > max - 4 || bytes[0] < 0x10);
                prop_assert!(bits.as_str().starts_with('1'));
            } else {
                prop_assert_eq!(bits.as_str(), "0");
            }
            let top_nibble_high = bytes[0] >= 0x80;
            prop_assert_eq!(bits.len() == max, top_nibble_high);
        }
    }
}
