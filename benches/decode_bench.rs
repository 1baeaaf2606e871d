use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vin_decode::*;

const SAMPLE_VINS: &[&str] = &[
    "W1K3FBCB3PN300965",
    "W1N2476871W240290",
    "WBA11CM0X08C97826",
    "SB1K93BE20E317259",
    "NMTK33BXX0R132738",
    "VF1RJK00170468036",
    "VR7EFYHYCMN520985",
    "KNADA818ART907403",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_vin", |b| {
        b.iter(|| validate_vin(black_box("W1K3FBCB3PN300965")));
    });
}

fn bench_decode(c: &mut Criterion) {
    // build the standard tables outside the measurement
    let _ = VinDecoder::standard();
    c.bench_function("decode_vin", |b| {
        b.iter(|| decode_vin(black_box("W1K3FBCB3PN300965")));
    });
    c.bench_function("decode_vin_batch_8", |b| {
        b.iter(|| {
            for vin in SAMPLE_VINS {
                black_box(decode_vin(black_box(vin)));
            }
        });
    });
}

fn bench_model_year(c: &mut Criterion) {
    c.bench_function("get_model_year", |b| {
        b.iter(|| get_model_year(black_box("KNADA818AP6839219")));
    });
}

fn bench_build_tables(c: &mut Criterion) {
    let data = ReferenceData::standard();
    c.bench_function("build_standard_decoder", |b| {
        b.iter(|| VinDecoder::new(black_box(&data)));
    });
}

criterion_group!(
    benches,
    bench_validate,
    bench_decode,
    bench_model_year,
    bench_build_tables
);
criterion_main!(benches);
