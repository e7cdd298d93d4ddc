use std::fmt::Write;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use jsondrip::{Value, load};

/// A flat-ish document with a large uninteresting middle and one scalar of
/// interest at the very end.
fn build_doc(records: usize) -> String {
    let mut doc = String::from(r#"{"head": 0, "records": ["#);
    for i in 0..records {
        if i > 0 {
            doc.push(',');
        }
        write!(doc, r#"{{"id": {i}, "name": "record {i}", "flags": [1, 2, 3]}}"#).unwrap();
    }
    doc.push_str(r#"], "tail": 7}"#);
    doc
}

fn bench_navigation(c: &mut Criterion) {
    let doc = build_doc(256);

    c.bench_function("skip_to_tail_key", |b| {
        b.iter(|| {
            let Value::Object(mut root) = load(black_box(doc.as_bytes()).chunks(64)).unwrap()
            else {
                unreachable!()
            };
            black_box(root.get("tail").unwrap().as_i64().unwrap())
        });
    });

    c.bench_function("iterate_every_record", |b| {
        b.iter(|| {
            let Value::Object(mut root) = load(black_box(doc.as_bytes()).chunks(64)).unwrap()
            else {
                unreachable!()
            };
            let mut sum = 0;
            for record in root.get("records").unwrap().into_list().unwrap() {
                let mut record = record.unwrap().into_object().unwrap();
                sum += record.get("id").unwrap().as_i64().unwrap();
            }
            black_box(sum)
        });
    });

    c.bench_function("materialize_root", |b| {
        b.iter(|| {
            let Value::Object(mut root) = load(black_box(doc.as_bytes()).chunks(64)).unwrap()
            else {
                unreachable!()
            };
            black_box(root.materialize().unwrap())
        });
    });
}

criterion_group!(benches, bench_navigation);
criterion_main!(benches);
