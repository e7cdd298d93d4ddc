//! The tagged union handed back by every navigation step.

use core::fmt;

use serde_json::Number;

use crate::error::Error;
use crate::list::LazyList;
use crate::object::LazyObject;
use crate::source::ChunkSource;

/// A JSON value read from the stream.
///
/// Scalars are fully decoded and owned. The `List` and `Object` variants are
/// *lazy*: they hold a handle onto the shared stream cursor, not their
/// content, and reading them advances the one underlying stream. Cloning a
/// lazy variant clones the handle, never the content; both clones observe
/// the same traversal state.
///
/// # Examples
///
/// ```rust
/// use jsondrip::{Value, load};
///
/// let value = load(br#"{"on": true}"#.chunks(5)).unwrap();
/// let Value::Object(mut obj) = value else {
///     panic!("expected an object")
/// };
/// assert_eq!(obj.get("on").unwrap().as_bool(), Some(true));
/// ```
pub enum Value<S: ChunkSource> {
    /// The JSON `null` literal.
    Null,
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number, with the representation [`serde_json`] gives it.
    Number(Number),
    /// A JSON string, fully decoded.
    String(String),
    /// A lazy view over a JSON array still sitting on the stream.
    List(LazyList<S>),
    /// A lazy view over a JSON object still sitting on the stream.
    Object(LazyObject<S>),
}

impl<S: ChunkSource> Value<S> {
    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`](Value::Bool).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is a lazy [`List`](Value::List).
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Returns `true` if the value is a lazy [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The number as an `i64`, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// The number as an `f64`, if it is one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// The string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts into the lazy list handle, if this is a list.
    #[must_use]
    pub fn into_list(self) -> Option<LazyList<S>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Converts into the lazy object handle, if this is an object.
    #[must_use]
    pub fn into_object(self) -> Option<LazyObject<S>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Eagerly converts this value into a plain [`serde_json::Value`] tree.
    ///
    /// Scalars pass through. Lazy containers are realized in full, which
    /// requires that nothing was read from them yet; see
    /// [`LazyObject::materialize`] for the precondition.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyPartiallyRead`] if a container has handed out any
    /// element or key, [`Error::Exhausted`] if the stream ends inside the
    /// subtree, [`Error::Scalar`] if the captured bytes fail to decode.
    pub fn materialize(&self) -> Result<serde_json::Value, Error> {
        match self {
            Self::Null => Ok(serde_json::Value::Null),
            Self::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Self::Number(n) => Ok(serde_json::Value::Number(n.clone())),
            Self::String(s) => Ok(serde_json::Value::String(s.clone())),
            Self::List(list) => list.clone().materialize(),
            Self::Object(object) => object.clone().materialize(),
        }
    }

    /// Consumes the remaining stream bytes of a lazy container; scalars are
    /// already complete. Used by parents before any sibling access.
    pub(crate) fn finish(&self) -> Result<(), Error> {
        match self {
            Self::List(list) => list.clone().finish(),
            Self::Object(object) => object.clone().finish(),
            _ => Ok(()),
        }
    }

    pub(crate) fn is_container(&self) -> bool {
        matches!(self, Self::List(..) | Self::Object(..))
    }
}

// Derived impls would demand `S: Clone`; handles only ever clone their `Rc`.
impl<S: ChunkSource> Clone for Value<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Bool(b) => Self::Bool(*b),
            Self::Number(n) => Self::Number(n.clone()),
            Self::String(s) => Self::String(s.clone()),
            Self::List(list) => Self::List(list.clone()),
            Self::Object(object) => Self::Object(object.clone()),
        }
    }
}

impl<S: ChunkSource> fmt::Debug for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::List(list) => fmt::Debug::fmt(list, f),
            Self::Object(object) => fmt::Debug::fmt(object, f),
        }
    }
}
