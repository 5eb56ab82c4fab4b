//! Benchmarks for the filter and aggregation engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use apptrack_core::prelude::*;

fn seeded_jobs(n: usize) -> Vec<Job> {
    let store = JobStore::new();
    let companies = ["Acme", "Globex", "Initech", "Umbrella"];
    let statuses = [JobStatus::Pending, JobStatus::Interview, JobStatus::Declined];
    let kinds = [
        JobKind::FullTime,
        JobKind::PartTime,
        JobKind::Remote,
        JobKind::Internship,
    ];

    for i in 0..n {
        store.create(
            JobDraft::new(
                format!("Engineer {i}"),
                companies[i % companies.len()],
                "Remote",
            )
            .with_status(statuses[i % statuses.len()])
            .with_kind(kinds[i % kinds.len()]),
        );
    }
    store.list()
}

fn bench_filter(c: &mut Criterion) {
    let jobs = seeded_jobs(1_000);
    let criteria = FilterCriteria::all()
        .with_search("acme")
        .with_status(StatusFilter::Pending)
        .with_kind(KindFilter::Remote);

    c.bench_function("filter_1k_all_predicates", |b| {
        b.iter(|| filter(black_box(&jobs), black_box(&criteria)))
    });

    let identity = FilterCriteria::all();
    c.bench_function("filter_1k_identity", |b| {
        b.iter(|| filter(black_box(&jobs), black_box(&identity)))
    });
}

fn bench_aggregation(c: &mut Criterion) {
    let jobs = seeded_jobs(1_000);

    c.bench_function("summarize_1k", |b| {
        b.iter(|| summarize(black_box(&jobs)))
    });

    c.bench_function("monthly_volumes_1k", |b| {
        b.iter(|| monthly_volumes(black_box(&jobs)))
    });

    c.bench_function("recent_1k_top5", |b| {
        b.iter(|| recent(black_box(&jobs), 5))
    });
}

criterion_group!(benches, bench_filter, bench_aggregation);
criterion_main!(benches);
