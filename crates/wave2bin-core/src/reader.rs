//! Chunked byte reader.
//!
//! Streams a source in fixed-size blocks. Chunking only bounds the size of
//! each read; callers see the same bytes regardless of the chunk size.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Number of bytes requested per read.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Iterator over fixed-size chunks of a reader.
///
/// Every chunk is exactly `chunk_size` bytes except the last, which may be
/// shorter. Iteration stops after EOF or the first I/O error.
#[derive(Debug)]
pub struct ChunkReader<R> {
    inner: R,
    chunk_size: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ConvertError::ZeroChunkSize);
        }
        Ok(Self {
            inner,
            chunk_size,
            done: false,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.chunk_size);
        // `take` keeps reading until the chunk is full, so short reads from
        // the underlying source never split a chunk.
        let limit = self.chunk_size as u64;
        match self.inner.by_ref().take(limit).read_to_end(&mut chunk) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(n) => {
                if n < self.chunk_size {
                    self.done = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Open `path` for chunked binary reading.
///
/// The returned reader owns the file handle; dropping it closes the file.
pub fn open_chunks(path: &Path, chunk_size: usize) -> Result<ChunkReader<File>> {
    if path.as_os_str().is_empty() {
        return Err(ConvertError::NoInput);
    }
    let file = File::open(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), chunk_size, "opened input");
    ChunkReader::new(file, chunk_size)
}
