//! Lazy view over a JSON array.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::SharedCursor;
use crate::error::Error;
use crate::reader::next_value;
use crate::source::ChunkSource;
use crate::value::Value;

struct ListState<S: ChunkSource> {
    cursor: SharedCursor<S>,
    /// Monotonic: once the closing `]` has been consumed this never reverts.
    done: bool,
    /// Set on the first element access; gates [`LazyList::materialize`].
    has_read: bool,
    /// At most one unfinished nested container is outstanding at a time.
    active_child: Option<Value<S>>,
}

/// A lazy, forward-only view over a JSON array on the stream.
///
/// Iteration yields elements one at a time, decoding scalars and handing out
/// nested containers lazily. The sequence is finite and non-restartable:
/// once the closing bracket has been consumed, further iteration yields
/// `None` without touching the stream again.
///
/// The handle is cheap to clone; clones share the same traversal state.
///
/// # Examples
///
/// ```rust
/// use jsondrip::{Value, load};
///
/// let value = load(br#"[1, 2, 3]"#.chunks(4)).unwrap();
/// let Value::List(list) = value else { panic!("expected a list") };
/// let items: Result<Vec<_>, _> = list.map(|v| v.map(|v| v.as_i64())).collect();
/// assert_eq!(items.unwrap(), [Some(1), Some(2), Some(3)]);
/// ```
pub struct LazyList<S: ChunkSource> {
    state: Rc<RefCell<ListState<S>>>,
}

impl<S: ChunkSource> LazyList<S> {
    /// Binds a new list view to the cursor, which must sit just past the
    /// opening `[`.
    pub(crate) fn new(cursor: SharedCursor<S>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ListState {
                cursor,
                done: false,
                has_read: false,
                active_child: None,
            })),
        }
    }

    /// Consumes the remainder of this list from the stream, including any
    /// unfinished nested container, and marks it done.
    ///
    /// Sibling access does this automatically; call it directly when a list
    /// is abandoned but the rest of the stream is still wanted.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] if the stream ends before the closing bracket.
    pub fn finish(&mut self) -> Result<(), Error> {
        let mut st = self.state.borrow_mut();
        if !st.done {
            if let Some(child) = st.active_child.take() {
                child.finish()?;
            }
            st.cursor.borrow_mut().fast_forward(b']')?;
        }
        st.done = true;
        Ok(())
    }

    /// Eagerly realizes the remaining elements into a plain
    /// [`serde_json::Value::Array`].
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyPartiallyRead`] if any element was already read;
    /// forward-only consumption cannot recapture skipped bytes. Decode and
    /// exhaustion errors from the captured body propagate.
    pub fn materialize(&mut self) -> Result<serde_json::Value, Error> {
        let mut st = self.state.borrow_mut();
        if st.has_read {
            return Err(Error::AlreadyPartiallyRead);
        }
        st.done = true;
        st.cursor.borrow_mut().capture_body(b'[', b']')
    }

    fn advance(&self) -> Result<Option<Value<S>>, Error> {
        let mut st = self.state.borrow_mut();
        st.has_read = true;
        if let Some(child) = st.active_child.take() {
            child.finish()?;
            let mismatched = st.cursor.borrow_mut().fast_forward(b',')?;
            st.done = mismatched;
        }
        if st.done {
            return Ok(None);
        }
        let value = next_value(&st.cursor, Some(b','))?;
        if st.cursor.borrow().last_stop == Some(b']') {
            // That was the last element; it is still returned below.
            st.done = true;
        }
        match value {
            None => {
                st.done = true;
                Ok(None)
            }
            Some(value) => {
                if value.is_container() {
                    st.active_child = Some(value.clone());
                }
                Ok(Some(value))
            }
        }
    }
}

impl<S: ChunkSource> Iterator for LazyList<S> {
    type Item = Result<Value<S>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}

impl<S: ChunkSource> Clone for LazyList<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<S: ChunkSource> fmt::Debug for LazyList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("LazyList")
            .field("done", &st.done)
            .field("has_read", &st.has_read)
            .finish_non_exhaustive()
    }
}
