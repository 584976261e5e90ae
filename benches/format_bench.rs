use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rdialnumber::{CountryEntry, DialNumberUtil, MatchStrategy};

type TestEntity = (&'static str, &'static str);

fn setup_database() -> Vec<CountryEntry> {
    vec![
        CountryEntry::new("HK", "852"),
        CountryEntry::new("JP", "81"),
        CountryEntry::new("NZ", "64"),
        CountryEntry::new("UK", "44"),
        CountryEntry::new("US", "1").with_national_prefix("1"),
    ]
}

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("012345678", "+85212876543"),
        ("112345678", "+1212876543"),
        ("07700900123", "+442087654321"),
        ("+85212345678", "+44212876543"),
        ("+6491234567", "+81312345678"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let database = setup_database();
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Formatting");

    for strategy in [MatchStrategy::LongestPrefix, MatchStrategy::FirstMatch] {
        let dial_util = DialNumberUtil::with_strategy(&database, strategy);
        group.bench_function(format!("format_number({:?})", strategy), |b| {
            b.iter(|| {
                for (dialled, context) in &numbers {
                    dial_util
                        .format_number(black_box(dialled), black_box(context))
                        .unwrap();
                }
            })
        });
        group.bench_function(format!("normalize_number({:?})", strategy), |b| {
            b.iter(|| {
                for (dialled, context) in &numbers {
                    dial_util
                        .normalize_number(black_box(dialled), black_box(context))
                        .unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
