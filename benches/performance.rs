use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowcast_core::{
    currency::Currency,
    ledger::{Category, Entry, EntryKind, Interval, TimeRange},
    solver::{accumulate_monthly, calculate_statistics, solve, SolveOptions, StatisticsOptions},
};

const INTERVALS: [Interval; 7] = [
    Interval::Daily,
    Interval::Weekly,
    Interval::Biweekly,
    Interval::Monthly,
    Interval::Quarterly,
    Interval::Semiannually,
    Interval::Yearly,
];

fn build_entries(count: usize) -> Vec<Entry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2028, 12, 31).unwrap();
    (0..count)
        .map(|idx| {
            Entry::new(
                EntryKind::Expense,
                format!("Entry {idx}"),
                -10.0 - (idx % 50) as f64,
                Currency::new("EUR", 0.134),
                INTERVALS[idx % INTERVALS.len()],
                Category::new(format!("Category {}", idx % 12)),
                TimeRange::new(start, end),
            )
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let entries = build_entries(black_box(200));
    let options = SolveOptions::default();

    c.bench_function("solve_200_entries_5y", |b| {
        b.iter(|| black_box(solve(&entries, &options)))
    });

    let result = solve(&entries, &options);

    c.bench_function("accumulate_monthly_5y", |b| {
        b.iter(|| black_box(accumulate_monthly(&result)))
    });

    c.bench_function("calculate_statistics_5y", |b| {
        b.iter(|| black_box(calculate_statistics(&result, StatisticsOptions::default())))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
