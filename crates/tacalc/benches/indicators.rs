//! Performance benchmarks for tacalc indicators.
//!
//! Run with: `cargo bench -p tacalc`
//!
//! Throughput per indicator across input sizes, one group per family.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strum::IntoEnumIterator;
use tacalc::batch::process_batch;
use tacalc::indicators::{
    adx, atr, bbands, cci, ema, ht_sine, kama, macd, mfi, minmaxindex, obv, rsi, sar, sma, stoch,
    CandlePattern, CandleSettings, MaType, Stoch,
};

struct Ohlcv {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

/// Generate synthetic OHLCV data for benchmarks.
fn generate_ohlcv(size: usize) -> Ohlcv {
    let mut bars = Ohlcv {
        open: Vec::with_capacity(size),
        high: Vec::with_capacity(size),
        low: Vec::with_capacity(size),
        close: Vec::with_capacity(size),
        volume: Vec::with_capacity(size),
    };

    let mut price = 100.0;
    for i in 0..size {
        let x = i as f64;
        let delta = ((x * 0.1).sin() * 2.0) + ((x * 0.03).cos() * 1.5);
        let open = price;
        price = (price + delta).max(10.0);

        let high = open.max(price) + 1.0 + (x * 0.07).sin().abs();
        let low = open.min(price) - 1.0 - (x * 0.05).cos().abs();
        let volume = 1_000_000.0 + (x * 1000.0).sin().abs() * 500_000.0;

        bars.open.push(open);
        bars.high.push(high);
        bars.low.push(low);
        bars.close.push(price);
        bars.volume.push(volume);
    }
    bars
}

const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap");
    for &size in SIZES {
        let bars = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sma", size), &bars.close, |b, data| {
            b.iter(|| sma(black_box(data), black_box(30)));
        });
        group.bench_with_input(BenchmarkId::new("ema", size), &bars.close, |b, data| {
            b.iter(|| ema(black_box(data), black_box(30)));
        });
        group.bench_with_input(BenchmarkId::new("kama", size), &bars.close, |b, data| {
            b.iter(|| kama(black_box(data), black_box(30)));
        });
        group.bench_with_input(BenchmarkId::new("bbands", size), &bars.close, |b, data| {
            b.iter(|| bbands(black_box(data), 20, 2.0, 2.0, MaType::Sma));
        });
        group.bench_with_input(BenchmarkId::new("sar", size), &bars, |b, bars| {
            b.iter(|| sar(black_box(&bars.high), black_box(&bars.low), 0.02, 0.2));
        });
    }
    group.finish();
}

fn bench_momentum(c: &mut Criterion) {
    let mut group = c.benchmark_group("momentum");
    for &size in SIZES {
        let bars = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rsi", size), &bars.close, |b, data| {
            b.iter(|| rsi(black_box(data), black_box(14)));
        });
        group.bench_with_input(BenchmarkId::new("macd", size), &bars.close, |b, data| {
            b.iter(|| macd(black_box(data), 12, 26, 9));
        });
        group.bench_with_input(BenchmarkId::new("adx", size), &bars, |b, bars| {
            b.iter(|| {
                adx(
                    black_box(&bars.high),
                    black_box(&bars.low),
                    black_box(&bars.close),
                    14,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("cci", size), &bars, |b, bars| {
            b.iter(|| {
                cci(
                    black_box(&bars.high),
                    black_box(&bars.low),
                    black_box(&bars.close),
                    14,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("stoch", size), &bars, |b, bars| {
            b.iter(|| {
                stoch(
                    &bars.high,
                    &bars.low,
                    black_box(&bars.close),
                    &Stoch::default(),
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("mfi", size), &bars, |b, bars| {
            b.iter(|| {
                mfi(
                    &bars.high,
                    &bars.low,
                    &bars.close,
                    black_box(&bars.volume),
                    14,
                )
            });
        });
    }
    group.finish();
}

fn bench_volatility_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("volatility_volume");
    for &size in SIZES {
        let bars = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("atr", size), &bars, |b, bars| {
            b.iter(|| {
                atr(
                    black_box(&bars.high),
                    black_box(&bars.low),
                    black_box(&bars.close),
                    14,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("obv", size), &bars, |b, bars| {
            b.iter(|| obv(black_box(&bars.close), black_box(&bars.volume)));
        });
        group.bench_with_input(BenchmarkId::new("minmaxindex", size), &bars.close, |b, data| {
            b.iter(|| minmaxindex(black_box(data), black_box(30)));
        });
    }
    group.finish();
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    for &size in SIZES {
        let bars = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("ht_sine", size), &bars.close, |b, data| {
            b.iter(|| ht_sine(black_box(data)));
        });
    }
    group.finish();
}

fn bench_candlesticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("candlesticks");
    let settings = CandleSettings::default();
    for &size in &SIZES[..3] {
        let bars = generate_ohlcv(size);
        group.throughput(Throughput::Elements((size * CandlePattern::iter().count()) as u64));
        group.bench_with_input(BenchmarkId::new("all_patterns", size), &bars, |b, bars| {
            b.iter(|| {
                for pattern in CandlePattern::iter() {
                    let _ = black_box(pattern.compute(
                        &bars.open,
                        &bars.high,
                        &bars.low,
                        &bars.close,
                        &settings,
                        None,
                    ));
                }
            });
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let series: Vec<Vec<f64>> = (0..64).map(|i| generate_ohlcv(10_000 + i).close).collect();
    group.throughput(Throughput::Elements(series.iter().map(|s| s.len() as u64).sum()));
    group.bench_function("rsi_64_series", |b| {
        b.iter(|| process_batch(black_box(&series), |data: &[f64]| rsi(data, 14)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_overlap,
    bench_momentum,
    bench_volatility_volume,
    bench_cycle,
    bench_candlesticks,
    bench_batch,
);
criterion_main!(benches);
