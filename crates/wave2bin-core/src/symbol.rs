//! Two-bit symbol mapping over the alphabet {A, T, G, C}.

use std::fmt;

/// One of the four symbols a 2-bit group maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `00`
    A,
    /// `01`
    T,
    /// `10`
    G,
    /// `11`
    C,
}

impl Symbol {
    /// Map a pair of binary digit characters; `None` if either is not `0`/`1`.
    pub fn from_pair(hi: u8, lo: u8) -> Option<Self> {
        match (hi, lo) {
            (b'0', b'0') => Some(Symbol::A),
            (b'0', b'1') => Some(Symbol::T),
            (b'1', b'0') => Some(Symbol::G),
            (b'1', b'1') => Some(Symbol::C),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::T => 'T',
            Symbol::G => 'G',
            Symbol::C => 'C',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Map consecutive, non-overlapping digit pairs to symbols, left to right.
///
/// A trailing unpaired digit contributes nothing, as does any pair that is
/// not made of `0`/`1` characters.
pub fn map_symbols(bits: &str) -> String {
    bits.as_bytes()
        .chunks_exact(2)
        .filter_map(|pair| Symbol::from_pair(pair[0], pair[1]))
        .map(|s| s.as_char())
        .collect()
}
