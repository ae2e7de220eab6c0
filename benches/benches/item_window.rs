// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_item_window::{
    Window, decode_offset, encode, query_window_into, sorted_range_in_window,
};

/// Packed items laid out back to back with sizes cycling through 16..48.
fn packed_strip(len: usize) -> Vec<i64> {
    let mut offset = 0_i32;
    (0..len)
        .map(|i| {
            let size = 16 + (i % 32) as i32;
            let item = encode(size, offset);
            offset += size;
            item
        })
        .collect()
}

fn bench_scan_vs_sorted_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_window/query");

    // The scan is O(n) regardless of where the viewport sits; the sorted range
    // is O(log n) and only valid for monotonic layouts like this one.
    for len in [1_024usize, 16_384, 262_144] {
        let items = packed_strip(len);
        let middle = middle_offset(&items);
        let window = Window::new(middle, 800, 400);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("scan", len), &items, |b, items| {
            let mut out = Vec::with_capacity(items.len());
            b.iter(|| black_box(query_window_into(items, window, &mut out)));
        });

        group.bench_with_input(BenchmarkId::new("sorted_range", len), &items, |b, items| {
            b.iter(|| black_box(sorted_range_in_window(items, window)));
        });
    }

    group.finish();
}

/// Scroll offset halfway through the strip.
fn middle_offset(items: &[i64]) -> i64 {
    items
        .get(items.len() / 2)
        .map_or(0, |&item| decode_offset(item))
}

criterion_group!(benches, bench_scan_vs_sorted_range);
criterion_main!(benches);
