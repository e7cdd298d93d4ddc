use bstr::ByteSlice;
use thiserror::Error;

/// Errors surfaced while navigating a JSON stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte source ran out before the requested token completed.
    ///
    /// This is never recovered internally: whichever operation needed the
    /// missing bytes reports it, so looking up a key in a truncated document
    /// fails with `Exhausted`, not [`NotFound`](Error::NotFound).
    #[error("byte source exhausted before the value was complete")]
    Exhausted,

    /// The requested key is absent, or the forward-only scan has already
    /// moved past it.
    #[error("key {0:?} not found (or already passed) in object stream")]
    NotFound(String),

    /// [`materialize`](crate::LazyObject::materialize) was called on a
    /// container that has already handed out an element or key. The bytes
    /// skipped so far cannot be recaptured; the container and the rest of
    /// the stream remain usable.
    #[error("container was already partially read")]
    AlreadyPartiallyRead,

    /// A byte sequence in key position did not decode to a JSON string.
    #[error("object key is not a string")]
    NonStringKey,

    /// A buffered literal failed to decode as JSON.
    #[error("invalid JSON literal {:?}", .literal.as_bstr())]
    Scalar {
        /// The raw bytes that were handed to the literal decoder.
        literal: Vec<u8>,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The underlying byte source failed with an I/O error.
    #[error("byte source I/O error")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn scalar(literal: Vec<u8>, source: serde_json::Error) -> Self {
        Self::Scalar { literal, source }
    }
}
