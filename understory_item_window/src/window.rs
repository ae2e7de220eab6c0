// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The expanded viewport and the window membership predicate.

use crate::ItemSpan;

/// A viewport along the scroll axis, widened on both sides by a preload margin.
///
/// The expanded span is `[cursor_offset - window_size, cursor_offset + cursor_size + window_size]`,
/// closed at both ends. Edges are computed exactly and clamped to the `i64`
/// range, so extreme arguments saturate instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Window {
    /// Scroll position: where the viewport starts.
    pub cursor_offset: i64,
    /// Extent of the viewport.
    pub cursor_size: i64,
    /// Preload margin added before and after the viewport.
    pub window_size: i64,
}

impl Window {
    /// Creates a window from a scroll position, viewport extent, and preload margin.
    #[must_use]
    pub const fn new(cursor_offset: i64, cursor_size: i64, window_size: i64) -> Self {
        Self {
            cursor_offset,
            cursor_size,
            window_size,
        }
    }

    /// Start of the expanded span (inclusive), saturating at `i64::MIN`.
    #[must_use]
    pub fn start(&self) -> i64 {
        saturate(i128::from(self.cursor_offset) - i128::from(self.window_size))
    }

    /// End of the expanded span (inclusive), saturating at `i64::MAX`.
    #[must_use]
    pub fn end(&self) -> i64 {
        saturate(
            i128::from(self.cursor_offset)
                + i128::from(self.cursor_size)
                + i128::from(self.window_size),
        )
    }

    /// Returns `true` if `item` overlaps or touches the expanded span.
    ///
    /// An item starting exactly at [`end`](Self::end), or ending exactly at
    /// [`start`](Self::start), is inside.
    #[must_use]
    pub fn contains<T: ItemSpan + ?Sized>(&self, item: &T) -> bool {
        item.offset() <= self.end() && item.end() >= self.start()
    }
}

/// Clamps an exact edge back into the `i64` range.
fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Returns `true` if `item` lies within the viewport widened by `window_size`.
///
/// This is [`Window::contains`] spelled with loose arguments.
#[must_use]
pub fn is_in_window<T: ItemSpan + ?Sized>(
    item: &T,
    cursor_offset: i64,
    cursor_size: i64,
    window_size: i64,
) -> bool {
    Window::new(cursor_offset, cursor_size, window_size).contains(item)
}
