//! The byte source contract and adapters.

use std::io::{self, Read};

/// A finite sequence of non-empty byte chunks.
///
/// This is the only thing [`load`](crate::load) asks of its input: hand over
/// the next chunk, or `None` once the source is spent. Sources are pulled
/// exactly once per chunk and never rewound.
///
/// Any iterator over byte-ish items already satisfies the contract, so slices
/// chunked in memory work directly:
///
/// ```rust
/// use jsondrip::load;
///
/// let body = br#"[1, 2, 3]"#;
/// let value = load(body.chunks(4)).unwrap();
/// assert!(value.is_list());
/// ```
pub trait ChunkSource {
    /// The chunk type handed back by [`next_chunk`](ChunkSource::next_chunk).
    type Chunk: AsRef<[u8]>;

    /// Pulls the next chunk, or `Ok(None)` once the source is spent.
    ///
    /// # Errors
    ///
    /// Sources backed by real I/O may fail; the error is surfaced to the
    /// caller as [`Error::Io`](crate::Error::Io), distinct from exhaustion.
    fn next_chunk(&mut self) -> io::Result<Option<Self::Chunk>>;
}

impl<I> ChunkSource for I
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Chunk = I::Item;

    fn next_chunk(&mut self) -> io::Result<Option<I::Item>> {
        Ok(self.next())
    }
}

/// Adapts an [`io::Read`] into fixed-size chunks.
///
/// This is the shape of the original use case: an HTTP body or serial port
/// read a few dozen bytes at a time on a memory-constrained device. A short
/// read simply produces a short chunk; end of stream ends the source.
///
/// ```rust
/// use jsondrip::{ReadSource, load};
///
/// let reader = std::io::Cursor::new(br#"{"ok": true}"#.to_vec());
/// let value = load(ReadSource::new(reader, 32)).unwrap();
/// assert!(value.is_object());
/// ```
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    chunk_size: usize,
}

impl<R: Read> ReadSource<R> {
    /// Wraps `reader`, pulling at most `chunk_size` bytes per chunk.
    ///
    /// A `chunk_size` of zero is bumped to one.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ChunkSource for ReadSource<R> {
    type Chunk = Vec<u8>;

    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut chunk = vec![0; self.chunk_size];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    chunk.truncate(n);
                    return Ok(Some(chunk));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}
