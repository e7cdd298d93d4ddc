//! Reads one value worth of bytes from the shared cursor.

use std::rc::Rc;

use crate::cursor::SharedCursor;
use crate::error::Error;
use crate::list::LazyList;
use crate::object::LazyObject;
use crate::source::ChunkSource;
use crate::value::Value;

/// Accumulates bytes until `terminator` (or an unexpected `}`/`]`) is met
/// outside a string, then decodes the buffer as a JSON scalar literal.
///
/// The opening byte of a nested container short-circuits instead: a fresh
/// lazy container bound to the same cursor is returned and the nested body
/// stays on the stream, neither consumed nor copied.
///
/// Exhaustion while accumulating acts as the terminator, which is how a bare
/// top-level scalar ends. The stopping byte is recorded in the cursor's
/// `last_stop` so container callers can tell whether their own closer ended
/// the read; container recognition clears it.
///
/// Returns `Ok(None)` when nothing but whitespace was buffered: there is no
/// value left to read at this position.
pub(crate) fn next_value<S: ChunkSource>(
    cursor: &SharedCursor<S>,
    terminator: Option<u8>,
) -> Result<Option<Value<S>>, Error> {
    let mut buf: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut cur = cursor.borrow_mut();
    loop {
        let byte = match cur.read() {
            Ok(byte) => byte,
            Err(Error::Exhausted) => {
                cur.last_stop = terminator;
                drop(cur);
                return decode_scalar(&buf);
            }
            Err(e) => return Err(e),
        };
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
        } else {
            if Some(byte) == terminator || byte == b']' || byte == b'}' {
                cur.last_stop = Some(byte);
                drop(cur);
                return decode_scalar(&buf);
            }
            match byte {
                b'{' => {
                    cur.last_stop = None;
                    drop(cur);
                    return Ok(Some(Value::Object(LazyObject::new(Rc::clone(cursor)))));
                }
                b'[' => {
                    cur.last_stop = None;
                    drop(cur);
                    return Ok(Some(Value::List(LazyList::new(Rc::clone(cursor)))));
                }
                b'"' => in_string = true,
                _ => {}
            }
        }
        buf.push(byte);
    }
}

/// Decodes a buffered literal through the conventional JSON decoder.
fn decode_scalar<S: ChunkSource>(buf: &[u8]) -> Result<Option<Value<S>>, Error> {
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let parsed: serde_json::Value =
        serde_json::from_slice(buf).map_err(|source| Error::scalar(buf.to_vec(), source))?;
    Ok(Some(match parsed {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        // `{` and `[` outside strings never reach the buffer.
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            unreachable!("container openers are intercepted before buffering")
        }
    }))
}
