//! Hex encoding of chunked input.
//!
//! Chunks are buffered in order and encoded once at the end, so the result
//! is the lowercase hex dump of the whole input as one contiguous sequence.

use std::io;

/// Accumulates chunks and produces their concatenated hex encoding.
#[derive(Debug, Default)]
pub struct HexEncoder {
    buf: Vec<u8>,
}

impl HexEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one chunk after everything pushed so far.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Number of source bytes pushed.
    pub fn byte_len(&self) -> usize {
        self.buf.len()
    }

    /// Two lowercase hex characters per byte, high nibble first, no separators.
    pub fn finish(self) -> String {
        ::hex::encode(self.buf)
    }
}

/// Hex-encode a stream of chunks, stopping at the first I/O error.
pub fn encode_chunks<I>(chunks: I) -> io::Result<String>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
{
    let mut encoder = HexEncoder::new();
    for chunk in chunks {
        encoder.push(&chunk?);
    }
    Ok(encoder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ChunkReader;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn lowercase_two_chars_per_byte() {
        let mut enc = HexEncoder::new();
        enc.push(&[0x0F, 0xA0]);
        enc.push(&[0xFF]);
        assert_eq!(enc.byte_len(), 3);
        assert_eq!(enc.finish(), "0fa0ff");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(HexEncoder::new().finish(), "");
        assert_eq!(encode_chunks(Vec::new()).unwrap(), "");
    }

    #[test]
    fn io_error_propagates() {
        let chunks = vec![
            Ok(vec![1u8]),
            Err(io::Error::new(io::ErrorKind::Other, "boom")),
        ];
        assert!(encode_chunks(chunks).is_err());
    }

    proptest! {
        #[test]
        fn decodes_back_to_input(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let chunks = vec![Ok(bytes.clone())];
            let hex = encode_chunks(chunks).unwrap();
            prop_assert_eq!(hex.len(), bytes.len() * 2);
            prop_assert_eq!(::hex::decode(&hex).unwrap(), bytes);
        }

        #[test]
        fn chunk_size_does_not_change_result(
            bytes in proptest::collection::vec(any::<u8>(), 0..512),
            chunk_size in 1usize..100,
        ) {
            let whole = ::hex::encode(&bytes);
            let reader = ChunkReader::new(Cursor::new(bytes), chunk_size).unwrap();
            prop_assert_eq!(encode_chunks(reader).unwrap(), whole);
        }
    }
}
