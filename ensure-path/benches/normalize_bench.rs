use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ensure_path::{normalize, NormalizeOptions};

fn long_path(segments: usize) -> String {
    (0..segments)
        .map(|i| match i % 5 {
            0 => String::new(),
            1 => format!("/nix/store/{i}/bin"),
            _ => format!("/opt/tool{i}/bin"),
        })
        .collect::<Vec<_>>()
        .join(":")
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let path = "/usr/local/bin:/usr/bin:/home/me/bin:/bin:/usr/sbin";

    let first = NormalizeOptions::new("/home/me/bin");
    group.bench_function("ensure_first", |b| {
        b.iter(|| normalize(black_box(path), &first));
    });

    let anywhere = NormalizeOptions::new("/home/me/bin").with_ensure_first(false);
    group.bench_function("any_position", |b| {
        b.iter(|| normalize(black_box(path), &anywhere));
    });

    let absent = NormalizeOptions::new("/home/me/.cargo/bin");
    group.bench_function("insert_absent", |b| {
        b.iter(|| normalize(black_box(path), &absent));
    });

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    for size in [16, 128, 1024] {
        let path = long_path(size);

        let plain = NormalizeOptions::new("/opt/tool2/bin");
        group.bench_with_input(BenchmarkId::new("none", size), &path, |b, path| {
            b.iter(|| normalize(black_box(path), &plain));
        });

        let all = NormalizeOptions::new("/opt/tool2/bin")
            .with_remove_empty(true)
            .with_remove_matching(Some("/nix/".to_string()));
        group.bench_with_input(BenchmarkId::new("all", size), &path, |b, path| {
            b.iter(|| normalize(black_box(path), &all));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes, bench_filters);
criterion_main!(benches);
