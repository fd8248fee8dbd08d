//! Benchmarks for validation and sparkline rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use signup::charts::{demo_series, SparklineRenderer, SvgRenderer, TextRenderer};
use signup::registration::{is_valid_email, validate, RegistrationInput};

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let emails = [
        "ada@example.com",
        "first.last+tag@mail.example.co.uk",
        "not-an-email",
        "ada@example.c",
    ];

    group.throughput(Throughput::Elements(emails.len() as u64));
    group.bench_function("is_valid_email", |b| {
        b.iter(|| {
            for email in &emails {
                black_box(is_valid_email(black_box(email)));
            }
        })
    });

    let input = RegistrationInput::new("ada@example.com", "analytical")
        .name("Ada", "", "Lovelace")
        .occupation("Mathematician");

    group.bench_function("validate", |b| b.iter(|| validate(black_box(&input)).is_ok()));

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let series = demo_series();

    group.throughput(Throughput::Elements(series.len() as u64));

    let text = TextRenderer::new(40);
    group.bench_function("text_demo", |b| {
        b.iter(|| {
            for line in &series {
                black_box(text.render(black_box(line)));
            }
        })
    });

    let svg = SvgRenderer::default();
    group.bench_function("svg_demo", |b| {
        b.iter(|| {
            for line in &series {
                black_box(svg.render(black_box(line)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_validation, bench_render);
criterion_main!(benches);
