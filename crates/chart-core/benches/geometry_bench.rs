use chart_core::{compute_geometry, ChartKind, ChartSpec, Layout, SeriesItem};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_series(n: usize) -> Vec<SeriesItem> {
    (0..n)
        .map(|i| {
            // simple waveform kept positive
            let v = (i as f64 * 0.05).sin() * 40.0 + 50.0;
            SeriesItem::new(format!("p{i}"), v, "#3498db")
        })
        .collect()
}

fn bench_builders(c: &mut Criterion) {
    let layout = Layout::default();
    let mut group = c.benchmark_group("geometry");
    for &n in &[8usize, 64usize, 1024usize] {
        let series = gen_series(n);
        for kind in ChartKind::ALL {
            let spec = ChartSpec::new(kind, "bench", series.clone());
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_n{n}", kind.as_str())),
                &spec,
                |b, s| {
                    b.iter(|| {
                        let _ = black_box(compute_geometry(s, &layout));
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_builders);
criterion_main!(benches);
