// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot window query with paddings.

use alloc::vec::Vec;

use crate::{ItemSpan, Window, bottom_padding, query_window_into, top_padding};

/// Indices to realize for a window, plus the spacer extents around them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowLayout {
    /// Ascending indices of the items inside the window.
    pub indices: Vec<usize>,
    /// Space before the first realized item. Zero when nothing is realized.
    pub top_padding: i64,
    /// Space after the last realized item. Zero when nothing is realized.
    pub bottom_padding: i64,
}

impl WindowLayout {
    /// Returns `true` if no item is inside the window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// First realized index, if any.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Last realized index, if any.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

/// Scans `items` for `window` and computes both paddings from the result.
///
/// Paddings are measured against the whole of `items`. An empty window gets
/// zero paddings; hosts that want to keep the scroll extent in that case can
/// fall back to the end of the last item.
///
/// ```rust
/// use understory_item_window::{Item, Window, compute_window_layout};
///
/// let items = [Item::new(10, 0), Item::new(10, 10), Item::new(10, 20)];
/// let layout = compute_window_layout(&items, Window::new(12, 5, 0));
/// assert_eq!(layout.indices, [1]);
/// assert_eq!(layout.top_padding, 10);
/// assert_eq!(layout.bottom_padding, 10);
/// ```
#[must_use]
pub fn compute_window_layout<T: ItemSpan>(items: &[T], window: Window) -> WindowLayout {
    let mut indices = Vec::new();
    query_window_into(items, window, &mut indices);
    let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
        return WindowLayout::default();
    };
    WindowLayout {
        top_padding: top_padding(items, first),
        bottom_padding: bottom_padding(items, items.len(), last),
        indices,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{WindowLayout, compute_window_layout};
    use crate::{Item, Window};

    fn items(sizes: &[i32]) -> Vec<Item> {
        let mut offset = 0;
        sizes
            .iter()
            .map(|&size| {
                let item = Item::new(size, offset);
                offset += size;
                item
            })
            .collect()
    }

    #[test]
    fn empty_window_has_no_padding() {
        let items = items(&[10, 10]);
        let layout = compute_window_layout(&items, Window::new(100, 10, 0));
        assert!(layout.is_empty());
        assert_eq!(layout, WindowLayout::default());
        assert_eq!(layout.first(), None);

        let layout = compute_window_layout::<Item>(&[], Window::new(0, 10, 0));
        assert!(layout.is_empty());
    }

    #[test]
    fn paddings_and_indices_sum_to_content() {
        let items = items(&[5, 20, 7, 13, 40, 2, 9]);
        let layout = compute_window_layout(&items, Window::new(24, 10, 2));
        assert_eq!(layout.indices, [1, 2, 3]);
        assert_eq!(layout.first(), Some(1));
        assert_eq!(layout.last(), Some(3));

        let realized: i64 = layout
            .indices
            .iter()
            .map(|&i| i64::from(items[i].size))
            .sum();
        assert_eq!(layout.top_padding + realized + layout.bottom_padding, 96);
    }
}
