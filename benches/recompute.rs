// benches/recompute.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ep_leaderboard::{
    config::options::DeficitScale,
    gui::table_model::{self, Column},
    model::{LeaderboardDocument, LeaderboardEntry},
    rank,
};

fn synthetic(n: u64) -> LeaderboardDocument {
    let entries = (0..n)
        .map(|i| {
            LeaderboardEntry::new(format!("User{i}"), format!("https://example.org/wiki/User:{i}"))
                .with_points((i * 7_919_993) % 5_000_000)
        })
        .collect();
    LeaderboardDocument::with_entries(entries)
}

fn bench_recompute(c: &mut Criterion) {
    let doc = synthetic(10_000);

    c.bench_function("recompute_10k", |b| {
        b.iter(|| {
            let mut d = doc.clone();
            rank::recompute(black_box(&mut d));
            black_box(d.entries.len())
        })
    });

    let mut ranked = doc.clone();
    rank::recompute(&mut ranked);
    let view = table_model::render(&ranked);

    c.bench_function("sort_points_behind_10k", |b| {
        b.iter(|| {
            let v = table_model::sort_by_column(
                black_box(&view),
                Column::PointsBehind,
                true,
                DeficitScale::MegaOnly,
            );
            black_box(v.nrows())
        })
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
