use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geoheat::{get_colormap, get_strategy, Grid, HeatmapRenderer, Sample};

fn samples() -> Vec<Sample> {
    (0..50)
        .map(|i| {
            let i = i as f64;
            Sample::new((i * 0.61) % 5.0, (i * 0.37) % 3.0, 10.0 + (i * 1.3) % 7.0)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let samples = samples();
    let grid = Grid::new(256, 256).unwrap();

    for strategy in ["idw", "gaussian"] {
        let renderer = HeatmapRenderer::new(
            get_strategy(strategy, 0.1).unwrap(),
            get_colormap("linear").unwrap(),
        );
        c.bench_function(&format!("render_256_{}", strategy), |b| {
            b.iter(|| renderer.render(black_box(&samples), grid).unwrap())
        });
    }
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
