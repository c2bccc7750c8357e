use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use image::{Rgba, RgbaImage};
use marker_points::core::{extract_points, CoordMode, Rgba as Target};
use marker_points::extract::rgba_view;

/// Black image with a sparse diagonal of green markers.
fn synthetic(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 255]));
    for i in (0..size).step_by(7) {
        img.put_pixel(i, i, Rgba([0, 255, 0, 255]));
    }
    img
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for size in [256u32, 1024, 2048] {
        let img = synthetic(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &img, |b, img| {
            b.iter(|| {
                let view = rgba_view(black_box(img));
                extract_points(&view, CoordMode::Gl, Target::DEFAULT_TARGET).count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
