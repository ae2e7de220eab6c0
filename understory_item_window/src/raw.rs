// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat-buffer entry points for callers on the other side of a runtime boundary.
//!
//! These mirror the narrow calling convention hosts already use: items arrive
//! as a flat buffer of packed `i64` values, matches are written into a
//! caller-provided `i32` buffer, and the match count is returned. Every count
//! and index is checked against the buffers before use.
//!
//! ```rust
//! use understory_item_window::raw;
//!
//! let items = [raw::make_item(10, 0), raw::make_item(10, 10), raw::make_item(10, 20)];
//! let mut result = [0_i32; 3];
//! let count = raw::get_item_indices_in_window(&items, &mut result, 3, 12, 5, 0).unwrap();
//! assert_eq!(&result[..count as usize], &[1]);
//! assert_eq!(raw::get_top_padding(&items, 1), Ok(10));
//! assert_eq!(raw::get_bottom_padding(&items, 3, 1), Ok(10));
//! ```

use crate::{Window, WindowError, encode, indices_in_window, try_bottom_padding, try_top_padding};

/// Packs `size` and `offset` into one `i64`. See [`encode`].
#[must_use]
pub const fn make_item(size: i32, offset: i32) -> i64 {
    encode(size, offset)
}

/// Writes the ascending indices of items inside the window into `result`.
///
/// Only `items[..items_count]` is scanned. `result` must hold at least
/// `items_count` entries; on success `result[..count]` holds the matches and
/// the rest of `result` is left untouched.
pub fn get_item_indices_in_window(
    items: &[i64],
    result: &mut [i32],
    items_count: i32,
    cursor_offset: i32,
    cursor_size: i32,
    window_size: i32,
) -> Result<i32, WindowError> {
    let count = non_negative("items_count", items_count).and_then(|count| {
        if count > items.len() {
            Err(WindowError::CountOutOfRange {
                count,
                len: items.len(),
            })
        } else if result.len() < count {
            Err(WindowError::OutputTooSmall {
                required: count,
                len: result.len(),
            })
        } else {
            Ok(count)
        }
    });
    let count = count.inspect_err(log_rejected)?;

    let window = Window::new(
        i64::from(cursor_offset),
        i64::from(cursor_size),
        i64::from(window_size),
    );
    let mut matched = 0;
    for (slot, index) in result.iter_mut().zip(indices_in_window(&items[..count], window)) {
        *slot = narrow(index);
        matched += 1;
    }
    Ok(narrow(matched))
}

/// Offset of `items[first_item_index]`, narrowed to `i32`.
pub fn get_top_padding(items: &[i64], first_item_index: i32) -> Result<i32, WindowError> {
    non_negative("first_item_index", first_item_index)
        .and_then(|first| try_top_padding(items, first))
        .map(truncate)
        .inspect_err(log_rejected)
}

/// Space after `items[last_item_index]` up to the end of `items[total_items - 1]`,
/// narrowed to `i32`.
pub fn get_bottom_padding(
    items: &[i64],
    total_items: i32,
    last_item_index: i32,
) -> Result<i32, WindowError> {
    non_negative("total_items", total_items)
        .and_then(|total| {
            let last = non_negative("last_item_index", last_item_index)?;
            try_bottom_padding(items, total, last)
        })
        .map(truncate)
        .inspect_err(log_rejected)
}

fn non_negative(argument: &'static str, value: i32) -> Result<usize, WindowError> {
    usize::try_from(value).map_err(|_| WindowError::Negative { argument, value })
}

fn log_rejected(err: &WindowError) {
    log::debug!("rejected flat-buffer call: {err}");
}

/// Converts an index or count that is bounded by an `i32` item count.
fn narrow(value: usize) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Values are bounded by `items_count`, which arrived as an `i32`"
    )]
    {
        value as i32
    }
}

/// Wraps a padding into the 32-bit result the boundary reports.
fn truncate(value: i64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The boundary reports 32-bit paddings; wider values wrap"
    )]
    {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::{get_bottom_padding, get_item_indices_in_window, get_top_padding, make_item};
    use crate::WindowError;

    fn items() -> [i64; 3] {
        [make_item(10, 0), make_item(10, 10), make_item(10, 20)]
    }

    #[test]
    fn fills_prefix_and_returns_count() {
        let items = items();
        let mut result = [-1; 4];
        let count = get_item_indices_in_window(&items, &mut result, 3, 10, 10, 0);
        assert_eq!(count, Ok(3));
        assert_eq!(result, [0, 1, 2, -1]);

        let mut result = [-1; 3];
        let count = get_item_indices_in_window(&items, &mut result, 3, 500, 10, 0);
        assert_eq!(count, Ok(0));
        assert_eq!(result, [-1; 3]);
    }

    #[test]
    fn items_count_limits_the_scan() {
        let items = items();
        let mut result = [-1; 3];
        let count = get_item_indices_in_window(&items, &mut result, 2, 10, 10, 0);
        assert_eq!(count, Ok(2));
        assert_eq!(result, [0, 1, -1]);
    }

    #[test]
    fn rejects_bad_counts_and_short_buffers() {
        let items = items();
        let mut result = [0; 3];
        assert_eq!(
            get_item_indices_in_window(&items, &mut result, -1, 0, 10, 0),
            Err(WindowError::Negative {
                argument: "items_count",
                value: -1
            })
        );
        assert_eq!(
            get_item_indices_in_window(&items, &mut result, 4, 0, 10, 0),
            Err(WindowError::CountOutOfRange { count: 4, len: 3 })
        );
        let mut short = [0; 2];
        assert_eq!(
            get_item_indices_in_window(&items, &mut short, 3, 0, 10, 0),
            Err(WindowError::OutputTooSmall {
                required: 3,
                len: 2
            })
        );
    }

    #[test]
    fn paddings() {
        let items = items();
        assert_eq!(get_top_padding(&items, 0), Ok(0));
        assert_eq!(get_top_padding(&items, 2), Ok(20));
        assert_eq!(get_bottom_padding(&items, 3, 0), Ok(20));
        assert_eq!(get_bottom_padding(&items, 3, 2), Ok(0));
    }

    #[test]
    fn padding_arguments_are_checked() {
        let items = items();
        assert_eq!(
            get_top_padding(&items, -1),
            Err(WindowError::Negative {
                argument: "first_item_index",
                value: -1
            })
        );
        assert_eq!(
            get_top_padding(&items, 3),
            Err(WindowError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            get_bottom_padding(&items, 0, 0),
            Err(WindowError::EmptySequence)
        );
        assert_eq!(
            get_bottom_padding(&items, 3, -2),
            Err(WindowError::Negative {
                argument: "last_item_index",
                value: -2
            })
        );
        assert_eq!(
            get_bottom_padding(&items, 3, 3),
            Err(WindowError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn paddings_wrap_to_32_bits() {
        // Offset -1 decodes as 0xFFFF_FFFF, which wraps back to -1.
        let items = [make_item(1, -1)];
        assert_eq!(get_top_padding(&items, 0), Ok(-1));
    }
}
