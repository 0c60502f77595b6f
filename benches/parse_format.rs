//! Parsing and Formatting Benchmarks
//!
//! Measures the cost of the parsing pipeline per recognizer stage, of the
//! format mini-languages and of the JSON wire for the value objects.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use svo::prelude::*;
use svo::value_objects::{Currency, Date, EmailAddress, FileSize, LocalDateTime, Uuid};

/// Benchmark parsing, one input per recognizer stage
fn bench_parse_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_stages");
    let nl = Culture::get("nl-BE").expect("nl-BE is built in");

    let inputs = [
        ("canonical", "USD"),
        ("localized", "Amerikaanse dollar"),
        ("fallback", "US Dollar"),
        ("invalid", "not a currency"),
    ];
    for (stage, text) in inputs {
        group.bench_with_input(BenchmarkId::new("currency", stage), text, |b, text| {
            b.iter(|| black_box(Currency::try_parse_with(black_box(text), nl)));
        });
    }

    group.bench_function("date_canonical", |b| {
        b.iter(|| black_box(Date::try_parse_with(black_box("2017-06-11"), nl)));
    });
    group.bench_function("date_localized", |b| {
        b.iter(|| black_box(Date::try_parse_with(black_box("11/06/2017"), nl)));
    });
    group.bench_function("local_date_time", |b| {
        b.iter(|| black_box(LocalDateTime::try_parse_with(black_box("2017-06-11T06:15:00.25"), nl)));
    });
    group.bench_function("email_display_name", |b| {
        b.iter(|| black_box(EmailAddress::try_parse_with(black_box("Qowaiv <svo@qowaiv.org>"), nl)));
    });
    group.bench_function("uuid_hex_array", |b| {
        let text = "{0x8a1a8c42,0xd2ff,0xe254,{0xe2,0x6e,0xb6,0xab,0xcb,0xf1,0x94,0x20}}";
        b.iter(|| black_box(Uuid::try_parse_with(black_box(text), nl)));
    });

    group.finish();
}

/// Benchmark the format mini-languages
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let nl = Culture::get("nl-BE").expect("nl-BE is built in");

    let size = FileSize::new(123_456_789);
    for format in ["0 byte", "0.0 MegaByte", "#,##0.00 F", "0.0 MB"] {
        group.bench_with_input(BenchmarkId::new("file_size", format), format, |b, format| {
            b.iter(|| black_box(size.format(black_box(format), nl)));
        });
    }

    let email = EmailAddress::parse_with("svo@qowaiv.org", nl).expect("valid email");
    group.bench_function("email_obfuscated", |b| {
        b.iter(|| black_box(email.format(black_box("l[at]d"), nl)));
    });

    let date = Date::new(2017, 6, 11).expect("valid date");
    group.bench_function("date_long", |b| {
        b.iter(|| black_box(date.format(black_box("D"), nl)));
    });

    group.finish();
}

/// Benchmark JSON serialization of batches of values
fn bench_json_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_wire");

    for size in [1, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let ids: Vec<Uuid> = (0..*size).map(|_| Uuid::new_v4()).collect();

        group.bench_with_input(BenchmarkId::new("uuid_serialize", size), &ids, |b, ids| {
            b.iter(|| black_box(serde_json::to_string(black_box(ids))));
        });

        let json = serde_json::to_string(&ids).expect("serializable ids");
        group.bench_with_input(BenchmarkId::new("uuid_deserialize", size), &json, |b, json| {
            b.iter(|| black_box(serde_json::from_str::<Vec<Uuid>>(black_box(json))));
        });
    }

    group.finish();
}

criterion_group!(
    parse_format_benches,
    bench_parse_stages,
    bench_format,
    bench_json_wire
);

criterion_main!(parse_format_benches);
