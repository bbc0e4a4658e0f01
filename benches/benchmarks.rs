use criterion::{black_box, criterion_group, criterion_main, Criterion};
use real48::{decode_f32, decode_f64, encode_f32, encode_f64, Real48};

// ---------------------------------------------------------------------------
// Encoding benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut g = c.benchmark_group("encode");

    g.bench_function("f64/simple", |b| {
        b.iter(|| encode_f64(black_box(123.456_f64)).unwrap());
    });
    g.bench_function("f64/rounding_carry", |b| {
        // Worst case: mantissa rounds to all zeros with an exponent carry
        let v = f64::from_bits(1000 << 52 | ((1u64 << 39) - 1) << 13 | 1 << 12);
        b.iter(|| encode_f64(black_box(v)).unwrap());
    });
    g.bench_function("f64/zero", |b| {
        b.iter(|| encode_f64(black_box(0.0_f64)).unwrap());
    });
    g.bench_function("f64/out_of_range", |b| {
        b.iter(|| encode_f64(black_box(f64::MAX)).unwrap_err());
    });

    g.bench_function("f32/simple", |b| {
        b.iter(|| encode_f32(black_box(123.456_f32)).unwrap());
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Decoding benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut g = c.benchmark_group("decode");

    let simple = encode_f64(123.456).unwrap();
    let zero = Real48::ZERO;

    g.bench_function("f64/simple", |b| {
        b.iter(|| decode_f64(black_box(simple)));
    });
    g.bench_function("f64/zero", |b| {
        b.iter(|| decode_f64(black_box(zero)));
    });
    g.bench_function("f32/simple", |b| {
        b.iter(|| decode_f32(black_box(simple)).unwrap());
    });
    g.bench_function("f32/underflow", |b| {
        b.iter(|| decode_f32(black_box(Real48::MIN_POSITIVE)).unwrap_err());
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Arithmetic and comparison benchmarks
// ---------------------------------------------------------------------------

fn bench_ops(c: &mut Criterion) {
    let mut g = c.benchmark_group("ops");

    let a = encode_f64(123.456).unwrap();
    let b_val = encode_f64(987.654).unwrap();

    g.bench_function("add", |bench| {
        bench.iter(|| (black_box(a) + black_box(b_val)).unwrap());
    });
    g.bench_function("mul", |bench| {
        bench.iter(|| (black_box(a) * black_box(b_val)).unwrap());
    });
    g.bench_function("neg", |bench| {
        bench.iter(|| -black_box(a));
    });
    g.bench_function("cmp", |bench| {
        bench.iter(|| black_box(a) < black_box(b_val));
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Round-trip benchmarks
// ---------------------------------------------------------------------------

fn bench_roundtrip(c: &mut Criterion) {
    let mut g = c.benchmark_group("roundtrip");

    g.bench_function("f64_encode_decode", |b| {
        b.iter(|| decode_f64(encode_f64(black_box(123.456_f64)).unwrap()));
    });
    g.bench_function("f32_encode_decode", |b| {
        b.iter(|| decode_f32(encode_f32(black_box(123.456_f32)).unwrap()).unwrap());
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip, bench_ops);
criterion_main!(benches);
