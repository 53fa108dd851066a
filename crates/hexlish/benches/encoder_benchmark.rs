use criterion::{criterion_group, criterion_main, Criterion};
use hexlish::{hexlish_encode, EncodeOptions, ImageFormat, Symbol};
use std::hint::black_box;

fn generate_stream(len: usize) -> String {
    (0..len)
        .map(|i| Symbol::ALL[(i * 7 + i / 16) % 16].as_char())
        .collect()
}

fn bench_encode_png_small(c: &mut Criterion) {
    let text = generate_stream(256);
    let opts = EncodeOptions {
        blocks_per_row: 16,
        format: ImageFormat::Png,
    };

    c.bench_function("encode_png_256", |b| {
        b.iter(|| {
            let result = hexlish_encode(black_box(&text), &opts);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_encode_png_large(c: &mut Criterion) {
    let text = generate_stream(64 * 1024);
    let opts = EncodeOptions {
        blocks_per_row: 256,
        format: ImageFormat::Png,
    };

    c.bench_function("encode_png_64k", |b| {
        b.iter(|| {
            let result = hexlish_encode(black_box(&text), &opts);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_encode_svg(c: &mut Criterion) {
    let text = generate_stream(64 * 1024);
    let opts = EncodeOptions {
        blocks_per_row: 256,
        format: ImageFormat::Svg,
    };

    c.bench_function("encode_svg_64k", |b| {
        b.iter(|| {
            let result = hexlish_encode(black_box(&text), &opts);
            assert!(result.is_ok());
            result
        })
    });
}

criterion_group!(
    benches,
    bench_encode_png_small,
    bench_encode_png_large,
    bench_encode_svg,
);
criterion_main!(benches);
