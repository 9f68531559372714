use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_creature_core::{Generator, GeneratorConfig, Overrides, PresetId};

fn bench_generate(c: &mut Criterion) {
    let generator = Generator::default();
    c.bench_function("sketch_mochi", |b| {
        b.iter(|| generator.sketch(black_box("Mochi"), black_box(0)))
    });
    c.bench_function("generate_svg_mochi", |b| {
        b.iter(|| generator.generate_with_seed(black_box("Mochi"), black_box(0)))
    });

    let still = Generator::new(GeneratorConfig {
        animations: pixel_creature_core::AnimationToggles::none(),
        ..GeneratorConfig::default()
    });
    let bats = Overrides {
        preset: Some(PresetId::Bat),
        theme: None,
    };
    c.bench_function("static_bat_svg", |b| {
        b.iter(|| {
            still
                .sketch_with(black_box("Nyx"), black_box(17), &bats)
                .to_svg(still.config())
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
