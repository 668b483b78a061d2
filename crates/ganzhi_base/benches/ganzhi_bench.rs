use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{
    Branch, FixedSource, FourPillars, Stem, classify_moon_phase, combine, cycle, hour_stem_of,
    trigram_of, union_element_of,
};

fn sexagenary_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sexagenary");
    group.bench_function("combine", |b| {
        b.iter(|| combine(black_box(Stem::Ren), black_box(Branch::Xu)))
    });
    group.bench_function("combine_full_cycle", |b| {
        b.iter(|| {
            cycle()
                .filter_map(|p| combine(black_box(p.stem()), black_box(p.branch())).ok())
                .count()
        })
    });
    group.finish();
}

fn table_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.bench_function("trigram_of", |b| {
        b.iter(|| trigram_of(black_box(Stem::Xin)))
    });
    group.bench_function("union_element_of", |b| {
        b.iter(|| union_element_of(black_box(Branch::Wei)))
    });
    group.bench_function("hour_stem_of", |b| {
        b.iter(|| hour_stem_of(black_box(Stem::Geng), black_box(Branch::Hai)))
    });
    group.bench_function("classify_moon_phase", |b| {
        b.iter(|| classify_moon_phase(black_box(23), black_box(false)))
    });
    group.finish();
}

fn pillars_bench(c: &mut Criterion) {
    let src = FixedSource::new((0, 4), (2, 2), (4, 6), (6, 8));
    c.bench_function("four_pillars_from_source", |b| {
        b.iter(|| FourPillars::from_source(black_box(&src)))
    });
}

criterion_group!(benches, sexagenary_bench, table_bench, pillars_bench);
criterion_main!(benches);
