use std::collections::HashMap;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, Criterion};
use mysterious_dictionary::{signature, ChainedTable};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Deterministic pseudo-words, enough to make chains of a realistic length.
fn words(count: usize) -> Vec<String> {
    let mut state: u32 = 0x2545_f491;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| LETTERS[((state >> i) as usize + i * 7) % LETTERS.len()] as char)
                .collect()
        })
        .collect()
}

fn chained_table_search_all(c: &mut Criterion) {
    let words = words(50_000);
    let keys: Vec<String> = words.iter().map(|w| signature(w)).collect();

    let mut table = ChainedTable::with_capacity(1000).expect("capacity");
    for (key, word) in keys.iter().zip(&words) {
        table.insert_all(key.as_str(), word.clone());
    }

    c.bench_function("ChainedTable: search_all", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for i in 0..iters {
                let key = &keys[i as usize % keys.len()];
                assert!(!table.search_all(key).is_empty());
            }
            start.elapsed()
        })
    });
}

fn std_hash_map_get(c: &mut Criterion) {
    let words = words(50_000);
    let keys: Vec<String> = words.iter().map(|w| signature(w)).collect();

    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (key, word) in keys.iter().zip(&words) {
        map.entry(key.clone()).or_default().push(word.clone());
    }

    c.bench_function("std HashMap: get", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for i in 0..iters {
                let key = &keys[i as usize % keys.len()];
                assert!(map.get(key).is_some());
            }
            start.elapsed()
        })
    });
}

criterion_group!(lookup, chained_table_search_all, std_hash_map_get);
criterion_main!(lookup);
