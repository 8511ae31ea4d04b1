// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use frame_tagger::extract::{AttributeSet, Extractor};
use frame_tagger::progress::NullProgress;
use frame_tagger::runner;

fn sample_rows(n: usize) -> Vec<Option<String>> {
    const SHAPES: [&str; 5] = ["AVIATOR", "ROUND", "CAT EYE", "SQR", "WAYFARER"];
    const MATS: [&str; 4] = ["METAL", "TITAN", "SHELL", "PLASTIC"];
    (0..n)
        .map(|i| {
            if i % 17 == 0 {
                return None;
            }
            Some(format!(
                "RB{i:04} C-{:03} {}-18-140 {} {} FULL {}",
                i % 250,
                45 + i % 20,
                MATS[i % MATS.len()],
                SHAPES[i % SHAPES.len()],
                ["L.", "G", "U"][i % 3],
            ))
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let rows = sample_rows(10_000);
    let extractor = Extractor::default();
    let all = AttributeSet::all();

    c.bench_function("extract_sequential", |b| {
        b.iter(|| {
            let n = rows
                .iter()
                .map(|r| extractor.extract(black_box(r.as_deref()), all))
                .filter(|res| !res.is_empty())
                .count();
            black_box(n)
        })
    });

    c.bench_function("extract_worker_pool", |b| {
        b.iter(|| {
            let out = runner::extract_rows(black_box(&rows), all, &extractor, Some(&mut NullProgress)).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
