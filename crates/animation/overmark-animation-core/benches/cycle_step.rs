use criterion::{black_box, criterion_group, criterion_main, Criterion};

use overmark_animation_core::{
    ClipLibrary, ClipMixer, CycleConfig, CycleScheduler, LocalMixer, MotionClip,
};

fn bench_cycle_step(c: &mut Criterion) {
    let names = [
        "BreakdanceEnding2",
        "BreakdanceUprockVar1",
        "HipHopDancing",
        "NorthernSoulSpin",
        "SwingDancing",
        "BreakdanceEnding1",
    ];
    let mut library = ClipLibrary::new();
    let mut mixer = LocalMixer::new();
    for (i, name) in names.iter().enumerate() {
        let id = library.load_clip(MotionClip::new(
            *name,
            format!("assets/{name}.fbx"),
            2.0 + i as f32 * 0.5,
        ));
        mixer.register(id);
    }
    let cfg = CycleConfig {
        startup_delay: 0.0,
        ..CycleConfig::default()
    };
    let mut sched = CycleScheduler::new(library, cfg).expect("non-empty library");
    // Hard-start the first clip so steady-state ticks are measured.
    mixer.advance(0.0);
    let out = sched.step(0.0, &mixer).clone();
    for cmd in &out.commands {
        mixer.apply(cmd);
    }

    c.bench_function("cycle_step_6_clips", |b| {
        b.iter(|| {
            mixer.advance(black_box(1.0 / 60.0));
            let out = sched.step(black_box(1.0 / 60.0), &mixer).clone();
            for cmd in &out.commands {
                mixer.apply(cmd);
            }
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_cycle_step);
criterion_main!(benches);
