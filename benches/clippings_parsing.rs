//! Clippings Parsing Benchmarks
//!
//! Measures export parsing throughput on a synthesized `My Clippings.txt`.
//! Real exports run to a few thousand entries at most, so the whole-export
//! benchmark uses sizes around that order.
//!
//! Run with: `cargo bench --bench clippings_parsing`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kindle_tldr::clippings::{parse_entry, parse_export};

const DELIMITER: &str = "==========\n";

/// Build an export with `entries` highlights spread over a handful of books
fn create_export(entries: usize) -> String {
    let mut export = String::from("My Clippings\n==========\n");
    for i in 0..entries {
        let book = i % 7;
        export.push_str(&format!(
            "Benchmark Book {book} (Some Author)\n\
             - Your Highlight on page {page} | location {start}-{end} | Added on Monday, 5 June 2017 10:40:41\n\
             \n\
             Highlight number {i} with a sentence long enough to look like prose.\n\
             ==========\n",
            page = i / 10 + 1,
            start = i * 13 + 1,
            end = i * 13 + 9,
        ));
    }
    export
}

fn bench_parse_entry(c: &mut Criterion) {
    let chunk = "The Dispossessed (Ursula K. Le Guin)\n\
                 - Your Highlight on page 23 | location 222-224 | Added on Monday, 5 June 2017 10:40:41\n\
                 \n\
                 You can only crush ideas by ignoring them.\n";

    c.bench_function("parse_entry", |b| {
        b.iter(|| {
            let clip = parse_entry(black_box(chunk)).expect("entry should parse");
            black_box(clip)
        })
    });
}

fn bench_parse_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_export");

    for entries in [100usize, 1_000, 5_000] {
        let export = create_export(entries);
        group.throughput(Throughput::Bytes(export.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &export,
            |b, export| {
                b.iter(|| {
                    let groups = parse_export(black_box(export), DELIMITER);
                    black_box(groups)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_entry, bench_parse_export);
criterion_main!(benches);
