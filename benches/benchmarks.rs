use browser_dock::geometry::{Point, Size};
use browser_dock::input::{
    InputEvent, InputRemapper, Modifiers, MouseButton, MouseButtons, PointerEvent, PointerKind,
    map_to_browser,
};
use browser_dock::sampler::{fit_size, scale_to_fit};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};

/// Per-event coordinate remapping; runs for every pointer move
fn benchmark_remap(c: &mut Criterion) {
    let display = Size::new(320.0, 180.0);
    let browser = Size::new(1280.0, 720.0);

    c.bench_function("map_to_browser", |b| {
        b.iter(|| map_to_browser(black_box(Point::new(160.0, 90.0)), display, browser))
    });

    let remapper = InputRemapper::new();
    let event = InputEvent::Pointer(PointerEvent {
        kind: PointerKind::Move,
        position: Point::new(160.0, 90.0),
        button: None,
        buttons: MouseButtons::NONE.with(MouseButton::Left),
        modifiers: Modifiers::default(),
    });
    c.bench_function("remap_pointer_event", |b| {
        b.iter(|| remapper.remap(black_box(&event), display, browser))
    });
}

/// Frame scaling dominates each sampling tick
fn benchmark_scaling(c: &mut Criterion) {
    let frame = RgbaImage::from_fn(1280, 720, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]));

    let mut group = c.benchmark_group("scale_to_fit");
    group.sample_size(20);
    for target in [(320u32, 180u32), (640, 480), (1920, 1080)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", target.0, target.1)),
            &target,
            |b, &target| b.iter(|| scale_to_fit(black_box(&frame), target)),
        );
    }
    group.finish();

    c.bench_function("fit_size", |b| {
        b.iter(|| fit_size(black_box((1280, 720)), black_box((333, 517))))
    });
}

criterion_group!(benches, benchmark_remap, benchmark_scaling);
criterion_main!(benches);
