//! Lazy, forward-only navigation over JSON arriving in byte chunks.
//!
//! [`load`] parses exactly one top-level JSON value from a chunked byte
//! source without ever materializing the whole document: scalars are decoded
//! in place, and containers come back as lazy views that read the stream
//! only as far as the caller navigates. Bytes nobody asks for are skipped
//! with a depth-aware scanner instead of being parsed, which keeps peak
//! memory at one chunk plus whatever single value is currently being read.
//! That is the shape that matters when a small device consumes a large HTTP
//! body a few dozen bytes at a time.
//!
//! Navigation is single-pass and strictly forward: an object key that the
//! scan has moved past is gone, a list cannot be iterated twice, and sibling
//! values take turns on the one underlying cursor. When partial laziness
//! stops being useful, [`LazyObject::materialize`] (or its list twin) turns
//! the rest of a still-unread container into a plain [`serde_json::Value`]
//! tree.
//!
//! # Examples
//!
//! ```rust
//! use jsondrip::{Value, load};
//!
//! let body = br#"{"status": "ok", "readings": [18, 21, 19], "count": 3}"#;
//!
//! // Chunk size is irrelevant to the result; only the number of pulls
//! // from the source changes.
//! let Value::Object(mut root) = load(body.chunks(8)).unwrap() else {
//!     panic!("expected an object")
//! };
//! assert_eq!(root.get("status").unwrap().as_str(), Some("ok"));
//!
//! let readings = root.get("readings").unwrap().into_list().unwrap();
//! let total: i64 = readings
//!     .map(|v| v.unwrap().as_i64().unwrap())
//!     .sum();
//! assert_eq!(total, 58);
//!
//! assert_eq!(root.get("count").unwrap().as_i64(), Some(3));
//! ```

mod cursor;
mod error;
mod list;
mod object;
mod reader;
mod scanner;
mod source;
mod value;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use list::LazyList;
pub use object::{Entries, Keys, LazyObject};
pub use serde_json::Number;
pub use source::{ChunkSource, ReadSource};
pub use value::Value;

use cursor::Cursor;

/// Parses one top-level JSON value from `source`.
///
/// A scalar root is decoded and returned outright; a container root comes
/// back as a lazy [`Value::List`] or [`Value::Object`] bound to the source,
/// and nothing beyond its opening byte has been consumed yet.
///
/// # Errors
///
/// [`Error::Exhausted`] if the source holds no value at all,
/// [`Error::Scalar`] if a scalar root fails to decode, and [`Error::Io`] if
/// the source itself fails.
///
/// # Examples
///
/// ```rust
/// use jsondrip::load;
///
/// let value = load(br#""just a string""#.chunks(5)).unwrap();
/// assert_eq!(value.as_str(), Some("just a string"));
/// ```
pub fn load<S: ChunkSource>(source: S) -> Result<Value<S>, Error> {
    let cursor = Cursor::shared(source);
    match reader::next_value(&cursor, None)? {
        Some(value) => Ok(value),
        None => Err(Error::Exhausted),
    }
}
