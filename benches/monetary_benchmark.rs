// ============================================================================
// Monetary Amount Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Normalization - each numeric input kind into a CanonicalDecimal
// 2. Rounding - currency rounding of canonical amounts
// 3. Resolution - provider selection over built-in and larger registries
// ============================================================================

use bigdecimal::BigDecimal;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use monetary_amount::prelude::*;
use num_bigint::BigInt;
use std::hint::black_box;
use std::str::FromStr;

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("integral", |b| b.iter(|| normalize(black_box(1_234_567i64))));

    group.bench_function("floating", |b| {
        b.iter(|| normalize(black_box(123456789101112.123456f64)))
    });

    let big = BigInt::from_str("123456789012345678901234567890").unwrap();
    group.bench_function("big_integer", |b| {
        b.iter(|| normalize(black_box(big.clone())))
    });

    let decimal = BigDecimal::from_str("1234.5678900000").unwrap();
    group.bench_function("big_decimal_trailing_zeros", |b| {
        b.iter(|| normalize(black_box(decimal.clone())))
    });

    let fixed = rust_decimal::Decimal::new(1_234_500, 4);
    group.bench_function("rust_decimal", |b| b.iter(|| normalize(black_box(fixed))));

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");
    let chf = CurrencyUnit::new("CHF", 2);
    let amount = Money::new(chf.clone(), 123456789.987654321).unwrap();

    for mode in [RoundingMode::HalfUp, RoundingMode::HalfEven, RoundingMode::Floor] {
        let rounding = DefaultRounding::for_currency_with_mode(&chf, mode);
        group.bench_with_input(
            BenchmarkId::new("currency_scale", mode),
            &rounding,
            |b, rounding| b.iter(|| black_box(&amount).with(rounding)),
        );
    }

    group.finish();
}

// ============================================================================
// Resolution Benchmarks
// ============================================================================

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_type");
    let required = NumericContext::builder()
        .with_precision(12)
        .with_max_scale(2)
        .with_flavor(AmountFlavor::Precision)
        .build();

    for extra in [0usize, 8, 64] {
        let mut providers = ProviderDescriptor::builtin();
        for i in 0..extra {
            let context = NumericContext::builder()
                .with_precision(20 + i as u32)
                .with_max_scale(i as i32 % 10)
                .build();
            providers.push(ProviderDescriptor::new(
                AmountType::new(format!("Custom{}", i)),
                context.clone(),
                context,
            ));
        }

        group.bench_with_input(
            BenchmarkId::new("providers", providers.len()),
            &providers,
            |b, providers| {
                b.iter(|| resolve_type(Some(black_box(&required)), providers, &AmountType::MONEY))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_rounding,
    benchmark_resolution
);
criterion_main!(benches);
