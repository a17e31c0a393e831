//! Benchmarks for token signing and verification
//!
//! Covers every HMAC variant across a few claim set sizes, plus the cost of
//! going through the async builder instead of the free functions.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hsjwt::{sign, Algorithm, Claims, FixedClock, Jwt, Verifier};
use serde_json::{json, Value};
use tokio::runtime::Runtime;

const SECRET: &str = "benchmark-secret";

fn claims_with(fields: usize) -> Claims {
    let mut claims = Claims::new();
    claims.insert("sub".to_string(), json!("4321"));
    claims.insert("exp".to_string(), json!(4_102_444_800_i64));
    for i in 0..fields {
        claims.insert(format!("field_{i}"), Value::String("x".repeat(32)));
    }
    claims
}

/// Sign and verify under each algorithm with growing payloads
fn benchmark_sign_verify(c: &mut Criterion) {
    let verifier = Verifier::with_clock(FixedClock::from_timestamp(1_700_000_000));

    for fields in [0, 16, 256] {
        let claims = claims_with(fields);
        let mut group = c.benchmark_group(format!("claims_{fields}"));
        group.throughput(Throughput::Elements(1));

        for alg in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new("sign", alg), &claims, |b, claims| {
                b.iter(|| {
                    let token = sign(claims, SECRET, alg).expect("signing should succeed");
                    std::hint::black_box(token);
                });
            });

            let token = sign(&claims, SECRET, alg).expect("signing should succeed");
            group.bench_with_input(BenchmarkId::new("verify", alg), &token, |b, token| {
                b.iter(|| {
                    let outcome = verifier.verify(token, SECRET);
                    assert!(outcome.is_valid());
                    std::hint::black_box(outcome);
                });
            });
        }
        group.finish();
    }
}

/// Rejections should be cheap when an early gate fails
fn benchmark_rejections(c: &mut Criterion) {
    let verifier = Verifier::with_clock(FixedClock::from_timestamp(1_700_000_000));
    let token = sign(&claims_with(16), SECRET, Algorithm::HS256).expect("signing should succeed");
    let mut group = c.benchmark_group("rejection");

    group.bench_function("format", |b| {
        b.iter(|| std::hint::black_box(verifier.verify("abc.def", SECRET)));
    });
    group.bench_function("wrong_secret", |b| {
        b.iter(|| std::hint::black_box(verifier.verify(&token, "other-secret")));
    });
    group.finish();
}

/// Builder pattern overhead against the free functions
fn benchmark_builder_performance(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("builder_overhead");
    let claims = claims_with(16);

    group.bench_function("HS256_builder_sign", |b| {
        b.iter(|| {
            rt.block_on(async {
                let token = Jwt::hs256()
                    .with_secret(SECRET)
                    .sign(claims.clone())
                    .await
                    .expect("HS256 sign should succeed");
                std::hint::black_box(token);
            });
        });
    });

    let token = sign(&claims, SECRET, Algorithm::HS256).expect("signing should succeed");
    group.bench_function("HS256_builder_verify", |b| {
        b.iter(|| {
            rt.block_on(async {
                let outcome = Jwt::builder()
                    .with_secret(SECRET)
                    .verify(&token)
                    .await
                    .expect("verify task should complete");
                std::hint::black_box(outcome);
            });
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_sign_verify,
    benchmark_rejections,
    benchmark_builder_performance
);
criterion_main!(benches);
