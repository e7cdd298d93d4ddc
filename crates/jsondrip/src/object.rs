//! Lazy view over a JSON object.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::SharedCursor;
use crate::error::Error;
use crate::reader::next_value;
use crate::source::ChunkSource;
use crate::value::Value;

struct ObjectState<S: ChunkSource> {
    cursor: SharedCursor<S>,
    done: bool,
    has_read: bool,
    /// The key of the entry the scan currently sits on. With
    /// `active_child` set this names the cached container child; with
    /// `active_child` unset it names a key whose value is still unread
    /// (yielded by key iteration, value not yet fetched).
    active_key: Option<String>,
    active_child: Option<Value<S>>,
}

impl<S: ChunkSource> ObjectState<S> {
    /// Retires whatever entry the scan sits on so the next key can be read:
    /// finishes a cached child, or skips a pending unread value.
    fn retire_entry(&mut self) -> Result<(), Error> {
        if let Some(child) = self.active_child.take() {
            self.active_key = None;
            child.finish()?;
            self.done = self.cursor.borrow_mut().fast_forward(b',')?;
        } else if self.active_key.take().is_some() {
            self.done = self.cursor.borrow_mut().fast_forward(b',')?;
        }
        Ok(())
    }

    /// Reads the value belonging to `key`, the cursor sitting just past the
    /// `:`. Containers are cached as the active child; the entry's stop byte
    /// `}` marks the object done.
    fn read_entry_value(&mut self, key: &str) -> Result<Value<S>, Error> {
        let value = next_value(&self.cursor, Some(b','))?;
        if self.cursor.borrow().last_stop == Some(b'}') {
            self.done = true;
        }
        let Some(value) = value else {
            self.done = true;
            return Err(Error::Exhausted);
        };
        if value.is_container() {
            self.active_key = Some(key.to_owned());
            self.active_child = Some(value.clone());
        } else {
            self.active_key = None;
        }
        Ok(value)
    }
}

/// A lazy, forward-only view over a JSON object on the stream.
///
/// Keys are matched in document order as the scan moves forward; values of
/// unwanted keys are skipped, never parsed. A key the scan has moved past
/// can no longer be looked up; the one exception is the currently open
/// container child, which stays addressable by its own key until a sibling
/// is requested.
///
/// The handle is cheap to clone; clones share the same traversal state.
///
/// # Examples
///
/// ```rust
/// use jsondrip::{Error, Value, load};
///
/// let doc = br#"{"id": 7, "name": "probe"}"#;
/// let Value::Object(mut obj) = load(doc.chunks(8)).unwrap() else {
///     panic!("expected an object")
/// };
/// assert_eq!(obj.get("name").unwrap().as_str(), Some("probe"));
/// // "id" was passed on the way to "name" and is gone for good.
/// assert!(matches!(obj.get("id"), Err(Error::NotFound(_))));
/// ```
pub struct LazyObject<S: ChunkSource> {
    state: Rc<RefCell<ObjectState<S>>>,
}

impl<S: ChunkSource> LazyObject<S> {
    /// Binds a new object view to the cursor, which must sit just past the
    /// opening `{`.
    pub(crate) fn new(cursor: SharedCursor<S>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ObjectState {
                cursor,
                done: false,
                has_read: false,
                active_key: None,
                active_child: None,
            })),
        }
    }

    /// Looks up `key`, scanning forward through the object.
    ///
    /// Requesting the currently open container child by its own key returns
    /// the cached handle again without touching the stream. Every other
    /// lookup makes forward progress: the open entry is retired first, then
    /// keys are read and unwanted values skipped until `key` matches.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the key is absent or was already passed;
    /// [`Error::Exhausted`] if the stream ends mid-scan.
    pub fn get(&mut self, key: &str) -> Result<Value<S>, Error> {
        let mut st = self.state.borrow_mut();
        if st.active_child.is_some() && st.active_key.as_deref() == Some(key) {
            if let Some(child) = &st.active_child {
                return Ok(child.clone());
            }
        }
        st.has_read = true;
        if st.active_child.is_some() {
            st.retire_entry()?;
        } else if let Some(pending) = st.active_key.take() {
            if pending == key {
                return st.read_entry_value(key);
            }
            // A different key was asked for; the pending value is unwanted.
            let done = st.cursor.borrow_mut().fast_forward(b',')?;
            st.done = done;
        }
        if st.done {
            return Err(Error::NotFound(key.to_owned()));
        }
        loop {
            match next_value(&st.cursor, Some(b':'))? {
                None => {
                    st.done = true;
                    break;
                }
                Some(Value::String(current)) => {
                    if current == key {
                        return st.read_entry_value(key);
                    }
                    let done = st.cursor.borrow_mut().fast_forward(b',')?;
                    st.done = done;
                    if st.done {
                        break;
                    }
                }
                Some(_) => return Err(Error::NonStringKey),
            }
        }
        Err(Error::NotFound(key.to_owned()))
    }

    /// Iterates the remaining keys in document order, forward-only.
    ///
    /// Yielding a key leaves its value unread on the stream; fetch it with
    /// [`get`](LazyObject::get) before moving on, or let the next step of
    /// the iteration skip it.
    #[must_use]
    pub fn keys(&self) -> Keys<S> {
        Keys {
            object: self.clone(),
        }
    }

    /// Iterates the remaining entries as `(key, value)` pairs in document
    /// order. Scalar values are decoded eagerly; container values are handed
    /// out lazily and cached like any other active child.
    #[must_use]
    pub fn entries(&self) -> Entries<S> {
        Entries {
            object: self.clone(),
        }
    }

    /// Consumes the remainder of this object from the stream, including any
    /// unfinished nested container, and marks it done.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] if the stream ends before the closing brace.
    pub fn finish(&mut self) -> Result<(), Error> {
        let mut st = self.state.borrow_mut();
        if !st.done {
            if let Some(child) = st.active_child.take() {
                child.finish()?;
            }
            st.cursor.borrow_mut().fast_forward(b'}')?;
        }
        st.done = true;
        Ok(())
    }

    /// Eagerly realizes the remaining entries into a plain
    /// [`serde_json::Value::Object`], string keys in insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyPartiallyRead`] if any key or entry was already read;
    /// forward-only consumption cannot recapture skipped bytes. Decode and
    /// exhaustion errors from the captured body propagate.
    pub fn materialize(&mut self) -> Result<serde_json::Value, Error> {
        let mut st = self.state.borrow_mut();
        if st.has_read {
            return Err(Error::AlreadyPartiallyRead);
        }
        st.done = true;
        st.cursor.borrow_mut().capture_body(b'{', b'}')
    }

    fn advance_key(&self) -> Result<Option<String>, Error> {
        let mut st = self.state.borrow_mut();
        st.retire_entry()?;
        if st.done {
            return Ok(None);
        }
        st.has_read = true;
        match next_value(&st.cursor, Some(b':'))? {
            None => {
                st.done = true;
                Ok(None)
            }
            Some(Value::String(key)) => {
                st.active_key = Some(key.clone());
                Ok(Some(key))
            }
            Some(_) => Err(Error::NonStringKey),
        }
    }

    fn advance_entry(&self) -> Result<Option<(String, Value<S>)>, Error> {
        let Some(key) = self.advance_key()? else {
            return Ok(None);
        };
        let mut st = self.state.borrow_mut();
        st.active_key = None;
        let value = st.read_entry_value(&key)?;
        Ok(Some((key, value)))
    }
}

/// Forward-only iterator over an object's remaining keys.
///
/// Created by [`LazyObject::keys`].
pub struct Keys<S: ChunkSource> {
    object: LazyObject<S>,
}

impl<S: ChunkSource> Iterator for Keys<S> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.object.advance_key().transpose()
    }
}

/// Forward-only iterator over an object's remaining entries.
///
/// Created by [`LazyObject::entries`].
pub struct Entries<S: ChunkSource> {
    object: LazyObject<S>,
}

impl<S: ChunkSource> Iterator for Entries<S> {
    type Item = Result<(String, Value<S>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.object.advance_entry().transpose()
    }
}

impl<S: ChunkSource> Clone for LazyObject<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<S: ChunkSource> fmt::Debug for LazyObject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("LazyObject")
            .field("done", &st.done)
            .field("has_read", &st.has_read)
            .field("active_key", &st.active_key)
            .finish_non_exhaustive()
    }
}
