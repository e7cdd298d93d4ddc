//! Depth-aware skip-ahead over the raw byte stream.
//!
//! `fast_forward` is the crate's workhorse: it discards uninteresting
//! substructure without parsing it, and in capture mode it doubles as the
//! materializer's byte collector.

use crate::cursor::Cursor;
use crate::error::Error;
use crate::source::ChunkSource;

const QUOTE: u8 = b'"';

impl<S: ChunkSource> Cursor<S> {
    /// Reads until the structure is balanced relative to `closer`.
    ///
    /// A stack of expected closing bytes starts as `[closer]`. Opening a
    /// nested object, array, or string pushes the matching closer; meeting
    /// the top of the stack pops it. While the top of the stack is a quote
    /// the cursor is inside a string literal, where structural bytes are
    /// inert and a backslash escapes the byte after it.
    ///
    /// Returns `true` when an unexpected `}` or `]` closed the *enclosing*
    /// container before `closer` was balanced; the cursor is left just past
    /// that byte. Returns `false` once `closer` itself was matched at depth
    /// zero.
    pub(crate) fn fast_forward(&mut self, closer: u8) -> Result<bool, Error> {
        let mut expected = vec![closer];
        let mut skip_next = false;
        while let Some(&top) = expected.last() {
            let byte = self.read()?;
            if skip_next {
                skip_next = false;
            } else if byte == top {
                expected.pop();
            } else if top == QUOTE {
                if byte == b'\\' {
                    skip_next = true;
                }
            } else if byte == QUOTE {
                expected.push(QUOTE);
            } else if byte == b'}' || byte == b']' {
                // Mismatched close: the enclosing container ended first.
                return Ok(true);
            } else if byte == b'{' {
                expected.push(b'}');
            } else if byte == b'[' {
                expected.push(b']');
            }
        }
        Ok(false)
    }

    /// Capture-mode fast-forward: realizes the rest of the container opened
    /// by `opener` into owned bytes and decodes them as one JSON document.
    ///
    /// The cursor must sit at the container's first content byte, i.e.
    /// `opener` was just consumed by the value reader.
    pub(crate) fn capture_body(&mut self, opener: u8, closer: u8) -> Result<serde_json::Value, Error> {
        self.begin_capture(opener);
        let scan = self.fast_forward(closer);
        let bytes = self.take_capture();
        scan?;
        serde_json::from_slice(&bytes).map_err(|source| Error::scalar(bytes, source))
    }
}
