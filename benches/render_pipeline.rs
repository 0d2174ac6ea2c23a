use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_viewer::{FrameBuffer, MandelbrotColourMapKind, RenderMode, RenderPipeline, ViewState};

fn bench_render_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.sample_size(20);

    let view = ViewState::default();

    for mode in [RenderMode::Serial, RenderMode::ParallelRows] {
        let pipeline = RenderPipeline::new(MandelbrotColourMapKind::FireGradient, mode);
        let mut buffer = FrameBuffer::new(320, 240).unwrap();

        group.bench_with_input(BenchmarkId::new(mode.to_string(), "320x240"), &view, |b, view| {
            b.iter(|| pipeline.render(&mut buffer, black_box(*view)))
        });
    }

    group.finish();
}

fn bench_deep_zoom(c: &mut Criterion) {
    let view = ViewState::new(-0.743_643_887, 0.131_825_904, 5_000.0, 2_000).unwrap();
    let pipeline = RenderPipeline::default();
    let mut buffer = FrameBuffer::new(320, 240).unwrap();

    c.bench_function("render_frame/deep_zoom", |b| {
        b.iter(|| pipeline.render(&mut buffer, black_box(view)))
    });
}

criterion_group!(benches, bench_render_modes, bench_deep_zoom);
criterion_main!(benches);
