// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use matchday_prefs::favorites::FavoritesStore;
use matchday_prefs::i18n::{Catalog, LocaleStore};
use matchday_prefs::notifications::Notification;
use matchday_prefs::storage::MemoryStorage;
use std::hint::black_box;
use std::sync::Arc;

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let mut store = LocaleStore::new(Arc::new(MemoryStorage::new()), Catalog::embedded());
    store.load();

    group.bench_function("known_key", |b| {
        b.iter(|| black_box(store.resolve(black_box("dashboard.goals_scored"))));
    });

    // Render path for keys the catalog does not know yet
    group.bench_function("missing_key", |b| {
        b.iter(|| black_box(store.resolve(black_box("dashboard.expected_goals"))));
    });

    group.finish();
}

fn favorites_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("favorites");
    let teams: Vec<String> = (0..50).map(|i| format!("Team {i}")).collect();

    group.bench_function("toggle_with_50_favorites", |b| {
        let mut store = FavoritesStore::new(
            Arc::new(MemoryStorage::new()),
            Box::new(|_: Notification| {}),
        );
        store.load();
        for team in &teams {
            store.add_favorite(team);
        }
        b.iter(|| store.toggle_favorite(black_box("Team 25")));
    });

    group.finish();
}

criterion_group!(benches, resolve_benchmark, favorites_benchmark);
criterion_main!(benches);
