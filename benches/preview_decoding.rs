// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_intake::media;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("failed to encode benchmark image");
    buf
}

const SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600">
<rect width="800" height="600" fill="#336699"/><circle cx="400" cy="300" r="200" fill="#ffcc00"/>
</svg>"#;

fn preview_decoding_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_decoding");

    let small = encoded_png(640, 480);
    group.bench_function("png_640x480", |b| {
        b.iter(|| black_box(media::decode(black_box(&small), false)));
    });

    // Larger than the preview edge, so the thumbnail path runs too.
    let large = encoded_png(2400, 1800);
    group.bench_function("png_2400x1800_downscaled", |b| {
        b.iter(|| black_box(media::decode(black_box(&large), false)));
    });

    group.bench_function("svg_800x600", |b| {
        b.iter(|| black_box(media::decode(black_box(SVG), true)));
    });

    group.finish();
}

criterion_group!(benches, preview_decoding_benchmark);
criterion_main!(benches);
