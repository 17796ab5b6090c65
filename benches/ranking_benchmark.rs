use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deadlock_item_bot::{
    ranking::{best_match, DiceRanker, JaroWinklerRanker},
    CatalogIndex, Item, ItemMatcher,
};

fn create_test_catalog(count: usize) -> CatalogIndex {
    CatalogIndex::build((0..count).map(|i| Item::new(format!("Test Item {}", i), 500 + i as u32)))
}

fn bench_best_match(c: &mut Criterion) {
    let catalog = create_test_catalog(150);
    let dice = DiceRanker::new();
    let jaro = JaroWinklerRanker::new();

    c.bench_function("dice_best_match_150", |b| {
        b.iter(|| black_box(best_match(&dice, "test item 75", catalog.all_names())))
    });

    c.bench_function("jaro_winkler_best_match_150", |b| {
        b.iter(|| black_box(best_match(&jaro, "test item 75", catalog.all_names())))
    });
}

fn bench_match_items(c: &mut Criterion) {
    let matcher = ItemMatcher::new(Arc::new(create_test_catalog(150)));
    let candidates: Vec<String> = (0..10).map(|i| format!("tst item {}", i * 13)).collect();

    c.bench_function("match_items_10_candidates", |b| {
        b.iter(|| black_box(matcher.match_items(&candidates, 0.35).len()))
    });
}

criterion_group!(benches, bench_best_match, bench_match_items);
criterion_main!(benches);
