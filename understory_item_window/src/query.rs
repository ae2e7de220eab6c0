// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index queries over a sequence of items.
//!
//! [`query_window`] and friends are a plain linear scan: every item is tested
//! independently, in index order, and ordering of the input is never assumed.
//! When the caller knows the items are laid out monotonically,
//! [`sorted_range_in_window`] finds the same indices with two binary searches.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{ItemSpan, Window};

/// Iterates, in ascending order, the indices of items inside `window`.
pub fn indices_in_window<T: ItemSpan>(
    items: &[T],
    window: Window,
) -> impl Iterator<Item = usize> + '_ {
    items
        .iter()
        .enumerate()
        .filter(move |(_, item)| window.contains(*item))
        .map(|(index, _)| index)
}

/// Returns the ascending indices of every item within the viewport widened by
/// `window_size`.
///
/// Runs in `O(len)` and works on unordered input. If the items are laid out
/// monotonically (each offset at or after the previous item's end) the result
/// is a contiguous run of indices.
///
/// ```rust
/// use understory_item_window::{Item, query_window};
///
/// let items = [Item::new(10, 0), Item::new(10, 10), Item::new(10, 20), Item::new(10, 30)];
/// // Viewport [12, 17] with no margin only touches item 1.
/// assert_eq!(query_window(&items, 12, 5, 0), [1]);
/// // A margin of 3 reaches the edges of items 0 and 2.
/// assert_eq!(query_window(&items, 12, 5, 3), [0, 1, 2]);
/// ```
#[must_use]
pub fn query_window<T: ItemSpan>(
    items: &[T],
    cursor_offset: i64,
    cursor_size: i64,
    window_size: i64,
) -> Vec<usize> {
    let mut out = Vec::new();
    query_window_into(
        items,
        Window::new(cursor_offset, cursor_size, window_size),
        &mut out,
    );
    out
}

/// Like [`query_window`], but writes into a caller-owned buffer.
///
/// `out` is cleared first. Returns the number of matching indices, which is
/// also `out.len()` afterwards. Reusing the same buffer across calls avoids
/// reallocating on every scroll update.
pub fn query_window_into<T: ItemSpan>(items: &[T], window: Window, out: &mut Vec<usize>) -> usize {
    out.clear();
    out.extend(indices_in_window(items, window));
    log::trace!(
        "window [{}, {}]: {} of {} items",
        window.start(),
        window.end(),
        out.len(),
        items.len()
    );
    out.len()
}

/// Returns the contiguous index range inside `window`, assuming monotonic layout.
///
/// The items must be laid out in order: offsets non-decreasing and every item
/// ending at or before the next one's end (true for non-overlapping items with
/// non-negative sizes). Under that condition the result equals the indices
/// returned by [`query_window`], found in `O(log len)`.
///
/// On input that breaks the condition the range is unspecified, but the call
/// never panics and the range always lies within `0..items.len()`.
#[must_use]
pub fn sorted_range_in_window<T: ItemSpan>(items: &[T], window: Window) -> Range<usize> {
    let start = items.partition_point(|item| item.end() < window.start());
    let end = items.partition_point(|item| item.offset() <= window.end());
    start..end.max(start)
}

impl Window {
    /// Returns the ascending indices of every item inside this window.
    ///
    /// See [`query_window`].
    #[must_use]
    pub fn query<T: ItemSpan>(&self, items: &[T]) -> Vec<usize> {
        let mut out = Vec::new();
        query_window_into(items, *self, &mut out);
        out
    }
}
