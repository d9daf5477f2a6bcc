//! Benchmarks for the shades pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shades::{
    emit, expand, render_stylesheet, BaseColorMap, Colour, DerivationParams, PaletteConfig,
    StyleFormat,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A palette with `n` distinct greys-to-greens.
fn large_palette(n: usize) -> BaseColorMap {
    (0..n)
        .map(|i| {
            let step = (i % 256) as u8;
            (format!("colour-{}", i), Colour::rgb(step, 180, 255 - step))
        })
        .collect()
}

// -- Config benchmarks --

fn bench_config(c: &mut Criterion) {
    let source = load_fixture("brand.palette.yaml");

    c.bench_function("parse_config", |b| {
        b.iter(|| PaletteConfig::parse(black_box(&source)).unwrap())
    });
}

// -- Pipeline benchmarks --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let params = DerivationParams::default();

    let small = BaseColorMap::parse([
        ("primary", "#6ab446"),
        ("secondary", "#cccccc"),
        ("neutral", "#333333"),
    ])
    .unwrap();
    let large = large_palette(500);

    group.bench_function("expand_small", |b| {
        b.iter(|| expand(black_box(&small), &params).unwrap())
    });

    group.bench_function("expand_large", |b| {
        b.iter(|| expand(black_box(&large), &params).unwrap())
    });

    let expanded = expand(&large, &params).unwrap();
    group.bench_function("emit_large", |b| b.iter(|| emit(black_box(&expanded))));

    let rules = emit(&expanded);
    group.bench_function("render_large", |b| {
        b.iter(|| render_stylesheet(black_box(&rules), StyleFormat::Pretty))
    });

    group.finish();
}

criterion_group!(benches, bench_config, bench_pipeline);
criterion_main!(benches);
