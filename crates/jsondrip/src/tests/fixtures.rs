//! Shared documents and helpers for the protocol test suites.

use std::cell::Cell;
use std::rc::Rc;

use crate::{ChunkSource, Error, LazyList, LazyObject, Value, load};

/// In-memory chunked source that counts how many chunks were pulled, so
/// tests can check that lazy navigation leaves the tail of the stream alone.
pub(crate) struct ChunkIo {
    data: Vec<u8>,
    pos: usize,
    chunk_size: usize,
    reads: Rc<Cell<usize>>,
}

impl ChunkIo {
    pub(crate) fn new(doc: &str, chunk_size: usize) -> Self {
        Self {
            data: doc.as_bytes().to_vec(),
            pos: 0,
            chunk_size,
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// Handle onto the pull counter; stays readable after the source has
    /// been moved into `load`.
    pub(crate) fn reads(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.reads)
    }
}

impl Iterator for ChunkIo {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.pos >= self.data.len() {
            return None;
        }
        let end = (self.pos + self.chunk_size).min(self.data.len());
        let chunk = self.data[self.pos..end].to_vec();
        self.pos = end;
        self.reads.set(self.reads.get() + 1);
        Some(chunk)
    }
}

pub(crate) fn load_value(doc: &str, chunk_size: usize) -> Value<ChunkIo> {
    load(ChunkIo::new(doc, chunk_size)).expect("document should load")
}

pub(crate) fn load_object(doc: &str, chunk_size: usize) -> LazyObject<ChunkIo> {
    load_value(doc, chunk_size)
        .into_object()
        .expect("document root should be an object")
}

pub(crate) fn load_list(doc: &str, chunk_size: usize) -> LazyList<ChunkIo> {
    load_value(doc, chunk_size)
        .into_list()
        .expect("document root should be a list")
}

/// Recursively consumes a value into a plain tree, driving every container
/// through the lazy protocol rather than through capture.
pub(crate) fn drain<S: ChunkSource>(value: Value<S>) -> Result<serde_json::Value, Error> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(b)),
        Value::Number(n) => Ok(serde_json::Value::Number(n)),
        Value::String(s) => Ok(serde_json::Value::String(s)),
        Value::List(list) => {
            let mut out = Vec::new();
            for item in list {
                out.push(drain(item?)?);
            }
            Ok(serde_json::Value::Array(out))
        }
        Value::Object(object) => {
            let mut map = serde_json::Map::new();
            for entry in object.entries() {
                let (key, value) = entry?;
                map.insert(key, drain(value)?);
            }
            Ok(serde_json::Value::Object(map))
        }
    }
}

pub(crate) const DICT_WITH_ALL_TYPES: &str = r#"
    {
        "_check": "{\"a\": 1, \"b\": [2,3]}",
        "bool": true,
        "dict": {"key": "value"},
        "float": 1.1,
        "int": 1,
        "list": [1,2,3],
        "null": null,
        "string": "string"
    }
    "#;

pub(crate) const LIST_WITH_BAD_STRINGS: &str = r#"
    [
        "\"}\"",
        "{\"a\": 1, \"b\": [2,3]}",
        "\"",
        "\\\"",
        "\\\\\"",
        "\\x40\"",
        "[[[{{{",
        "]]]}}}"
    ]
    "#;

pub(crate) const DICT_WITH_BAD_STRINGS: &str = r#"
    {
        "1": "\"}\"",
        "2": "{\"a\": 1, \"b\": [2,3]}",
        "3": "\"",
        "4": "\\\"",
        "5": "\\\\\"",
        "6": "\\x40\"",
        "7": "[[[{{{",
        "8": "]]]}}}"
    }
    "#;

/// The decoded forms of [`LIST_WITH_BAD_STRINGS`], in document order.
pub(crate) const BAD_STRINGS_DECODED: [&str; 8] = [
    "\"}\"",
    "{\"a\": 1, \"b\": [2,3]}",
    "\"",
    "\\\"",
    "\\\\\"",
    "\\x40\"",
    "[[[{{{",
    "]]]}}}",
];

pub(crate) const LIST_WITH_VALUES: &str = r#"
    [
        1,
        2,
        3
    ]
    "#;

pub(crate) const DICT_WITH_KEYS: &str = r#"
    {
        "field_1": 1,
        "field_2": 2,
        "field_3": 3
    }
    "#;

pub(crate) const DICT_WITH_LIST_WITH_SINGLE_ENTRIES: &str = r#"
    {
        "list_1": [
            {
                "dict_id": 1
            },
            {
                "dict_id": 2
            },
            {
                "dict_id": 3
            },
            {
                "dict_id": 4
            }
        ]
    }
    "#;

pub(crate) const COMPLEX_DICT: &str = r#"
    {
        "list_1": [
            {
                "dict_id": 1,
                "dict_name": "one",
                "sub_dict": {
                    "sub_dict_id": 1.1,
                    "sub_dict_name": "one point one"
                },
                "sub_list": [
                    "a",
                    "b",
                    "c"
                ]
            },
            {
                "dict_id": 2,
                "dict_name": "two",
                "sub_dict": {
                    "sub_dict_id": 2.1,
                    "sub_dict_name": "two point one"
                },
                "sub_list": [
                    "d",
                    "e",
                    "f"
                ]
            }
        ],
        "list_2": [
            {
                "dict_id": 3,
                "dict_name": "three",
                "sub_dict": {
                    "sub_dict_id": 3.1,
                    "sub_dict_name": "three point one"
                },
                "sub_list": [
                    "g",
                    "h",
                    "i"
                ]
            },
            {
                "dict_id": 4,
                "dict_name": "four",
                "sub_dict": {
                    "sub_dict_id": 4.1,
                    "sub_dict_name": "four point one"
                },
                "sub_list": [
                    "j",
                    "k",
                    "l"
                ]
            }
        ]
    }
    "#;
