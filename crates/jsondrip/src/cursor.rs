//! Single-byte pull interface over a chunked byte source.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::source::ChunkSource;

/// The cursor handle shared by every lazy container spawned from one stream.
///
/// Exactly one container chain legally drives the cursor at any instant; the
/// active-child protocol in [`LazyList`](crate::LazyList) and
/// [`LazyObject`](crate::LazyObject) enforces this, not a lock.
pub(crate) type SharedCursor<S> = Rc<RefCell<Cursor<S>>>;

/// Owns the byte source, the current chunk, and the offset within it.
///
/// No buffering beyond the current chunk, apart from an optional capture
/// buffer that mirrors consumed bytes while a subtree is being realized.
pub(crate) struct Cursor<S: ChunkSource> {
    source: S,
    chunk: Option<S::Chunk>,
    pos: usize,
    capture: Option<Vec<u8>>,
    /// The byte that terminated the most recent value read, if any.
    /// `None` after a nested container was recognized instead.
    pub(crate) last_stop: Option<u8>,
}

impl<S: ChunkSource> Cursor<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            chunk: None,
            pos: 0,
            capture: None,
            last_stop: None,
        }
    }

    pub(crate) fn shared(source: S) -> SharedCursor<S> {
        Rc::new(RefCell::new(Self::new(source)))
    }

    /// Returns the next byte, pulling a fresh chunk once the current one is
    /// consumed. Empty chunks are skipped.
    pub(crate) fn read(&mut self) -> Result<u8, Error> {
        loop {
            if let Some(chunk) = &self.chunk {
                let bytes = chunk.as_ref();
                if self.pos < bytes.len() {
                    let byte = bytes[self.pos];
                    self.pos += 1;
                    if let Some(buf) = self.capture.as_mut() {
                        buf.push(byte);
                    }
                    return Ok(byte);
                }
            }
            match self.source.next_chunk()? {
                Some(chunk) => {
                    self.chunk = Some(chunk);
                    self.pos = 0;
                }
                None => return Err(Error::Exhausted),
            }
        }
    }

    /// Starts mirroring consumed bytes, seeded with the opener byte that was
    /// already read on the container's behalf.
    pub(crate) fn begin_capture(&mut self, opener: u8) {
        self.capture = Some(vec![opener]);
    }

    /// Stops mirroring and hands back everything captured so far.
    pub(crate) fn take_capture(&mut self) -> Vec<u8> {
        self.capture.take().unwrap_or_default()
    }
}
