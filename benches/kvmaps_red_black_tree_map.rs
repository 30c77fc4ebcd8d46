/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]
#![allow(clippy::cast_possible_wrap)]

use criterion::{criterion_group, criterion_main, Criterion};
use kvmaps::RedBlackTreeMap;
use std::collections::BTreeMap;
use std::hint::black_box;

const LIMIT: usize = 100_000;

fn red_black_tree_map_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered map insert");

    group.bench_function("kvmaps red black tree map", |b| {
        b.iter(|| {
            let mut map = RedBlackTreeMap::new();

            for i in 0..LIMIT {
                map.insert(i, -(i as isize));
            }

            map
        });
    });

    group.bench_function("std b-tree map", |b| {
        b.iter(|| {
            let mut map: BTreeMap<usize, isize> = BTreeMap::new();

            for i in 0..LIMIT {
                map.insert(i, -(i as isize));
            }

            map
        });
    });

    group.finish();
}

fn red_black_tree_map_insert_duplicates(c: &mut Criterion) {
    c.bench_function("kvmaps red black tree map insert duplicates", |b| {
        b.iter(|| {
            let mut map = RedBlackTreeMap::new();

            for i in 0..LIMIT {
                map.insert(i % 64, i);
            }

            map
        });
    });
}

fn red_black_tree_map_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered map get");
    let tree: RedBlackTreeMap<usize, isize> = (0..LIMIT).map(|i| (i, -(i as isize))).collect();
    let btree: BTreeMap<usize, isize> = (0..LIMIT).map(|i| (i, -(i as isize))).collect();

    group.bench_function("kvmaps red black tree map", |b| {
        b.iter(|| {
            for i in 0..LIMIT {
                black_box(tree.get(&i));
            }
        });
    });

    group.bench_function("std b-tree map", |b| {
        b.iter(|| {
            for i in 0..LIMIT {
                black_box(btree.get(&i));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    red_black_tree_map_insert,
    red_black_tree_map_insert_duplicates,
    red_black_tree_map_get
);
criterion_main!(benches);
