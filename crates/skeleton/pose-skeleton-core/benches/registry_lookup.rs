use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pose_skeleton_core::{detect_skeleton, get_definition, registry};

fn bench_registry(c: &mut Criterion) {
    // Force population outside the timed loops.
    let _ = registry();

    c.bench_function("lookup_mixed_case", |b| {
        b.iter(|| get_definition(black_box(" SMPLX ")).map(|d| d.joint_count()))
    });

    let smplx_names: Vec<String> = get_definition("smplx")
        .map(|d| d.joint_names().to_vec())
        .unwrap_or_default();
    c.bench_function("detect_smplx_144", |b| {
        b.iter(|| detect_skeleton(black_box(&smplx_names)))
    });

    c.bench_function("render_smplx", |b| {
        b.iter(|| get_definition("smplx").map(|d| d.render().len()))
    });

    c.bench_function("ordered_canonical_indices_all", |b| {
        b.iter(|| {
            registry()
                .iter()
                .map(|(_, d)| d.ordered_canonical_indices().len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_registry);
criterion_main!(benches);
