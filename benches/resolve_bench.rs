use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rdialnumber::{CountryEntry, DialNumberUtil, MatchStrategy};

// A table large enough for the scan to matter: every three digit prefix
// from 200 to 999 plus a few short ones at the end.
fn setup_database() -> Vec<CountryEntry> {
    let mut database: Vec<CountryEntry> = (200..1000)
        .map(|prefix| CountryEntry::new(format!("C{prefix}"), prefix.to_string()))
        .collect();
    database.push(CountryEntry::new("US", "1").with_national_prefix("1"));
    database.push(CountryEntry::new("RU", "7").with_national_prefix("8"));
    database
}

fn resolving_benchmark(c: &mut Criterion) {
    let database = setup_database();
    let numbers = ["+12125550000", "+79001234567", "+85212345678", "+99912345"];

    let mut group = c.benchmark_group("Resolving");
    for strategy in [MatchStrategy::LongestPrefix, MatchStrategy::FirstMatch] {
        let dial_util = DialNumberUtil::with_strategy(&database, strategy);
        group.bench_function(format!("find_country({:?})", strategy), |b| {
            b.iter(|| {
                for number in numbers {
                    dial_util.find_country(black_box(number)).unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, resolving_benchmark);
criterion_main!(benches);
