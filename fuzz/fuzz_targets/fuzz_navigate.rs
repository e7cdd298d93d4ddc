#![no_main]

use arbitrary::Arbitrary;
use jsondrip::{ChunkSource, Value, load};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    chunk_size: u8,
    materialize: bool,
}

/// Walk every reachable element; errors are fine, panics are not.
fn walk<S: ChunkSource>(value: Value<S>, depth: usize) {
    if depth == 0 {
        return;
    }
    match value {
        Value::List(list) => {
            for item in list {
                match item {
                    Ok(item) => walk(item, depth - 1),
                    Err(_) => break,
                }
            }
        }
        Value::Object(object) => {
            for entry in object.entries() {
                match entry {
                    Ok((_key, item)) => walk(item, depth - 1),
                    Err(_) => break,
                }
            }
        }
        _ => {}
    }
}

fuzz_target!(|input: Input| {
    let chunk_size = usize::from(input.chunk_size) + 1;
    let chunks = input.data.chunks(chunk_size);
    match load(chunks) {
        Ok(value) if input.materialize => {
            let _ = value.materialize();
        }
        Ok(value) => walk(value, 16),
        Err(_) => {}
    }
});
