use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_swipe::geometry::{classify, Thresholds};
use rust_swipe::{CardConfig, CardId, PointerEvent, SwipeEngine};
use std::hint::black_box;

/// One pointer stream sweeping left through every zone and back, 60 moves.
fn sweep_positions(start_x: f32) -> Vec<f32> {
    (0..60)
        .map(|i| {
            let t = i as f32 / 59.0;
            let swing = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
            start_x - swing * 200.0
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let config = CardConfig::default();
    let thresholds = Thresholds::compute(300.0, &config);
    let offsets: Vec<f32> = (-180..=90).map(|o| o as f32).collect();

    c.bench_function("classify_full_travel", |b| {
        b.iter(|| {
            let mut zoned = 0usize;
            for &offset in &offsets {
                if classify(black_box(offset), &thresholds, &config.policy).is_action() {
                    zoned += 1;
                }
            }
            black_box(zoned)
        })
    });
}

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_stream");

    for &card_count in &[1usize, 50, 500] {
        let positions = sweep_positions(400.0);

        group.bench_with_input(
            BenchmarkId::new("drag_release", card_count),
            &card_count,
            |b, &count| {
                let mut engine = SwipeEngine::with_virtual_clock();
                for raw in 0..count as u32 {
                    let id = CardId::new(raw);
                    engine.mount(id, CardConfig::default()).expect("mount failed");
                    engine.set_width(id, 300.0).expect("width failed");
                }
                let mut now_ms = 0u64;
                let mut next = 0u32;

                b.iter(|| {
                    let id = CardId::new(next % count as u32);
                    next = next.wrapping_add(1);

                    engine.pointer(id, PointerEvent::down(400.0), now_ms).ok();
                    for &x in &positions {
                        now_ms += 4;
                        engine.pointer(id, PointerEvent::moved(black_box(x)), now_ms).ok();
                    }
                    engine.pointer(id, PointerEvent::up(400.0), now_ms).ok();
                    engine.advance(now_ms);
                    black_box(engine.drain_events().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_gesture_stream);
criterion_main!(benches);
