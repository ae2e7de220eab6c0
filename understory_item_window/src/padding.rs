// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacer extents before the first and after the last realized item.
//!
//! Both calculations assume well-formed input: items in order and not
//! overlapping. Malformed input can produce negative paddings, which are
//! returned unchanged.

use crate::error::check_index;
use crate::{ItemSpan, WindowError};

/// Space between the start of the sequence and the first visible item.
///
/// This is the offset of `items[first_visible_index]`.
///
/// # Panics
///
/// Panics if `first_visible_index` is out of range. See [`try_top_padding`]
/// for a non-panicking variant.
#[must_use]
pub fn top_padding<T: ItemSpan>(items: &[T], first_visible_index: usize) -> i64 {
    try_top_padding(items, first_visible_index).unwrap_or_else(|err| panic!("{err}"))
}

/// Checked form of [`top_padding`].
pub fn try_top_padding<T: ItemSpan>(
    items: &[T],
    first_visible_index: usize,
) -> Result<i64, WindowError> {
    check_index(first_visible_index, items.len())?;
    Ok(items[first_visible_index].offset())
}

/// Space between the end of the last visible item and the end of the sequence.
///
/// The end of the sequence is the end of `items[total_items - 1]`, regardless
/// of what is visible; `items` may be longer than `total_items`.
///
/// # Panics
///
/// Panics if `total_items` is zero or exceeds `items.len()`, or if
/// `last_visible_index >= total_items`. See [`try_bottom_padding`] for a
/// non-panicking variant.
#[must_use]
pub fn bottom_padding<T: ItemSpan>(
    items: &[T],
    total_items: usize,
    last_visible_index: usize,
) -> i64 {
    try_bottom_padding(items, total_items, last_visible_index)
        .unwrap_or_else(|err| panic!("{err}"))
}

/// Checked form of [`bottom_padding`].
pub fn try_bottom_padding<T: ItemSpan>(
    items: &[T],
    total_items: usize,
    last_visible_index: usize,
) -> Result<i64, WindowError> {
    if total_items == 0 {
        return Err(WindowError::EmptySequence);
    }
    if total_items > items.len() {
        return Err(WindowError::CountOutOfRange {
            count: total_items,
            len: items.len(),
        });
    }
    check_index(last_visible_index, total_items)?;
    Ok(items[total_items - 1].end() - items[last_visible_index].end())
}
