//! Micro-benchmark: one candidate checked against synthetic school-year
//! snapshots of increasing size. The engine is linear in the snapshot, so
//! throughput here is the number the form layer cares about.

use clash_engine::{detect_conflicts, ResourceId, Schedule};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn snapshot(len: usize) -> Vec<Schedule> {
    (0..len)
        .map(|i| Schedule {
            id: Some(ResourceId::from(i as i64)),
            room_id: ResourceId::from((i % 40) as i64),
            teacher_id: ResourceId::from((i % 60) as i64),
            section_id: ResourceId::from(format!("G{}-{}", i % 6 + 7, i % 4)),
            days_of_week: vec![(i % 5 + 1) as u8, ((i + 2) % 5 + 1) as u8],
            start_time: format!("{:02}:{:02}", 7 + i % 9, (i % 4) * 15),
            end_time: format!("{:02}:{:02}", 8 + i % 9, (i % 4) * 15),
            school_year: "2024-2025".to_string(),
        })
        .collect()
}

fn bench_detect(c: &mut Criterion) {
    let candidate = Schedule {
        id: None,
        room_id: ResourceId::from(5i64),
        teacher_id: ResourceId::from(12i64),
        section_id: ResourceId::from("G7-1"),
        days_of_week: vec![1, 3],
        start_time: "08:00".to_string(),
        end_time: "09:00".to_string(),
        school_year: "2024-2025".to_string(),
    };

    let mut group = c.benchmark_group("detect_conflicts");
    for len in [100usize, 1_000, 10_000] {
        let existing = snapshot(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &existing, |b, existing| {
            b.iter(|| detect_conflicts(black_box(&candidate), black_box(existing), None));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
