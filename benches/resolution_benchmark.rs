//! Benchmark for role normalization and language resolution.
//!
//! Measures the per-call cost of the lookup paths and the Rayon-based batch
//! normalization for inputs of varying size.

use a11y_canon::language::{AvailableLanguageSet, DefaultLanguageMap, LanguageResolver, LanguageTag};
use a11y_canon::role::{RoleNormalizer, RoleSourceValue};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a mix of role names, platform ids and absent values.
fn generate_role_values(count: usize) -> Vec<RoleSourceValue> {
    (0..count)
        .map(|i| match i % 4 {
            0 => RoleSourceValue::from("button"),
            1 => RoleSourceValue::from((i % 64).to_string()),
            2 => RoleSourceValue::from("navigation"),
            _ => RoleSourceValue::Absent,
        })
        .collect()
}

fn setup_resolver() -> LanguageResolver {
    let available = AvailableLanguageSet::parse_all([
        "af", "de", "de-at", "en", "en-gb", "en-us", "es", "es-419", "fr", "fr-be", "fr-fr", "pt",
        "pt-br", "ta-ta", "zh",
    ])
    .expect("benchmark languages are valid");
    let mut defaults = DefaultLanguageMap::new();
    defaults.insert("default", LanguageTag::parse("en-gb").expect("valid tag"));
    LanguageResolver::new(available, defaults)
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = RoleNormalizer::new();
    let mut group = c.benchmark_group("normalize_role");

    for value in ["button", "43", "not-a-role"] {
        let value = RoleSourceValue::from(value);
        group.bench_with_input(BenchmarkId::new("single", format!("{:?}", value)), &value, |b, value| {
            b.iter(|| normalizer.normalize_with_events(black_box(value)))
        });
    }

    for size in [100, 1_000, 10_000] {
        let values = generate_role_values(size);
        group.bench_with_input(BenchmarkId::new("batch", size), &values, |b, values| {
            b.iter(|| normalizer.normalize_batch(black_box(values)))
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = setup_resolver();
    let mut group = c.benchmark_group("resolve_language");

    for request in ["default", "fr_FR", "fr_CA", "pt-ao", "xx"] {
        group.bench_with_input(BenchmarkId::from_parameter(request), &request, |b, request| {
            b.iter(|| resolver.resolve_with_events(black_box(Some(*request))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolve);
criterion_main!(benches);
