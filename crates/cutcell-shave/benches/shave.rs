use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use cutcell_mesh::{DomainSpec, FaceMode};
use cutcell_shave::{Shaver, find_crossings};
use cutcell_terrain::SchaerMountain;

fn mountain() -> SchaerMountain {
    SchaerMountain::new(5.0e3, 5.0e3, 4.0e3).unwrap()
}

fn bench_shave_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("shave_reference");
    let domain = DomainSpec::new(25.0e3, 15.0e3, 50, 15).unwrap();
    let terrain = mountain();
    let shaver = Shaver::new();
    group.bench_function("50x15", |b| {
        b.iter(|| {
            let mut mesh = domain.to_mesh(FaceMode::VerticesOnly).unwrap();
            let report = shaver.shave(&mut mesh, &domain, &terrain).unwrap();
            black_box((mesh, report));
        })
    });
    group.finish();
}

fn bench_shave_fine(c: &mut Criterion) {
    let mut group = c.benchmark_group("shave_fine");
    group.measurement_time(Duration::from_secs(10));
    // Same domain at 10x resolution in each direction
    let domain = DomainSpec::new(25.0e3, 15.0e3, 500, 150).unwrap();
    let terrain = mountain();
    let shaver = Shaver::new();
    group.bench_function("500x150", |b| {
        b.iter(|| {
            let mut mesh = domain.to_mesh(FaceMode::VerticesOnly).unwrap();
            let report = shaver.shave(&mut mesh, &domain, &terrain).unwrap();
            black_box((mesh, report));
        })
    });
    group.bench_function("500x150_crossings_only", |b| {
        b.iter(|| black_box(find_crossings(&domain, &terrain).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_shave_reference, bench_shave_fine);
criterion_main!(benches);
