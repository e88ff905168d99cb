use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashboard_core::{Bar, IndicatorConfig, IndicatorEngine, IndicatorParams, PriceSeries};

fn gen_series(n: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut price = 100.0f64;
    let bars = (0..n)
        .map(|i| {
            let o = price;
            let c = o + ((i as f64) * 0.1).sin();
            price = c;
            Bar::try_new(start + Days::new(i as u64), o, o.max(c) + 1.0, o.min(c) - 1.0, c, 1_000).unwrap()
        })
        .collect();
    PriceSeries::try_new(bars).unwrap()
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_engine");
    let params = IndicatorParams::default();
    for &n in &[1_000usize, 10_000usize] {
        let series = gen_series(n);
        for (label, cfg) in [
            ("rsi", IndicatorConfig::new(true, false, false)),
            ("macd", IndicatorConfig::new(false, true, false)),
            ("bollinger", IndicatorConfig::new(false, false, true)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &series, |b, s| {
                b.iter(|| black_box(IndicatorEngine::compute(s, &cfg, &params)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_indicators);
criterion_main!(benches);
