use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshmask::prelude::*;

/// Opaque disc filling most of a square transparent image.
fn disc_image(size: u32) -> RasterImage {
    let centre = size as f32 * 0.5;
    let radius = size as f32 * 0.4;
    RasterImage::from_fn(size, size, |x, y| {
        let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - Vec2::new(centre, centre);
        if d.magnitude() <= radius {
            Color::WHITE
        } else {
            Color::CLEAR
        }
    })
}

fn disc_outline(size: u32) -> Polygon {
    let points = SobelEdgeDetector::default()
        .detect(&disc_image(size))
        .boundary_points();
    concave_outside(&points, &ContourConfig::default()).unwrap()
}

fn benchmark_authoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("authoring");
    let detector = SobelEdgeDetector::default();

    for size in [64u32, 128, 256] {
        let image = disc_image(size);
        group.bench_with_input(BenchmarkId::new("edge_detection", size), &image, |b, img| {
            b.iter(|| detector.detect(black_box(img)));
        });

        let points = detector.detect(&image).boundary_points();
        group.bench_with_input(BenchmarkId::new("concave_walk", size), &points, |b, pts| {
            b.iter(|| concave_outside(black_box(pts), &ContourConfig::default()));
        });
    }

    group.finish();
}

fn benchmark_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation");

    for size in [64u32, 128] {
        let outline = disc_outline(size);
        for kind in [TriangulatorType::EarClip, TriangulatorType::Earcut] {
            let triangulator = TriangulatorDispatcher::new(kind);
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), outline.len()),
                &outline,
                |b, poly| {
                    b.iter(|| triangulator.triangulate(black_box(poly)));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_runtime(c: &mut Criterion) {
    let mut group = c.benchmark_group("runtime");
    let outline = disc_outline(128);
    let vertices = outline.points().to_vec();

    // Grid of probe points spanning the outline's bounding box
    let probes: Vec<Vec2> = (0..32)
        .flat_map(|row| (0..32).map(move |col| Vec2::new(col as f32 * 4.0, row as f32 * 4.0)))
        .collect();

    group.bench_function("hit_test_1024_points", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|&&p| is_point_inside(black_box(p), &vertices))
                .count()
        });
    });

    let rect = Rect::new(Vec2::new(32.0, 32.0), Vec2::new(96.0, 140.0));
    group.bench_function("clip_to_rect", |b| {
        b.iter(|| clip_to_rect(black_box(&vertices), &rect));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_authoring,
    benchmark_triangulation,
    benchmark_runtime
);
criterion_main!(benches);
