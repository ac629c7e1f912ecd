//! Benchmarks for navigator generation.
//!
//! Measures filter resolution plus sampling and rendering for the common
//! filter shapes.
//!
//! Run with: `cargo bench --bench navigator_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use navgen::{BrowserFamily, Filter, NavigatorGenerator, PlatformFamily};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_navigator");
    let mut generator = NavigatorGenerator::with_seed(2015);

    group.bench_function("unfiltered", |b| {
        b.iter(|| generator.navigator(black_box(&Filter::Any), black_box(&Filter::Any)))
    });

    let platform = Filter::One(PlatformFamily::Linux);
    let browser = Filter::One(BrowserFamily::Chrome);
    group.bench_function("pinned_pair", |b| {
        b.iter(|| generator.navigator(black_box(&platform), black_box(&browser)))
    });

    let platforms = Filter::Many(vec![PlatformFamily::Windows, PlatformFamily::MacOs]);
    group.bench_function("platform_list", |b| {
        b.iter(|| generator.user_agent(black_box(&platforms), black_box(&Filter::Any)))
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
