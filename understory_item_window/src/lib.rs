// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_item_window --heading-base-level=0

//! Understory Item Window: which items of a 1D strip to realize for a viewport.
//!
//! Given an ordered sequence of variable-sized items, each with an offset and a
//! size along the scroll axis, and a viewport plus a symmetric preload margin,
//! this crate answers two questions for virtualized list rendering:
//!
//! - Which item indices overlap the widened viewport?
//! - How much space lies before the first and after the last of them, so the
//!   scroll container keeps its full extent without laying out everything else?
//!
//! Everything here is a pure function of its arguments. The crate does not own
//! the items, keep state between calls, or know about widgets.
//!
//! The core pieces are:
//!
//! - [`Item`] and [`PackedItem`]: an item as two fields, or packed into one
//!   `i64` with [`encode`], [`decode_size`], and [`decode_offset`].
//! - [`ItemSpan`]: the trait every query is generic over, implemented for both
//!   representations and for raw packed `i64` values.
//! - [`Window`] and [`is_in_window`]: the inclusive membership test.
//! - [`query_window`]: a linear scan returning matching indices in order, with
//!   [`query_window_into`] for buffer reuse and [`sorted_range_in_window`] as a
//!   binary-search shortcut for monotonic input.
//! - [`top_padding`] and [`bottom_padding`]: spacer extents around the realized
//!   run, with checked `try_*` variants.
//! - [`compute_window_layout`]: all of the above in one call.
//! - [`raw`]: the flat-buffer calling convention for callers across a runtime
//!   boundary; on `wasm32` these are also exported through `wasm-bindgen`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_item_window::{Item, bottom_padding, query_window, top_padding};
//!
//! // Three items, 10 units each, laid out back to back.
//! let items = [Item::new(10, 0), Item::new(10, 10), Item::new(10, 20)];
//!
//! // Viewport at 12 with extent 5 and no preload margin.
//! let visible = query_window(&items, 12, 5, 0);
//! assert_eq!(visible, [1]);
//!
//! let first = visible[0];
//! let last = visible[visible.len() - 1];
//! assert_eq!(top_padding(&items, first), 10);
//! assert_eq!(bottom_padding(&items, items.len(), last), 10);
//! ```
//!
//! Both window edges are inclusive: an item that merely touches the widened
//! viewport is realized.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod item;
mod layout;
mod padding;
mod query;
pub mod raw;
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "`wasm_bindgen` expands to unsafe glue code")]
mod wasm;
mod window;

pub use error::WindowError;
pub use item::{Item, ItemSpan, OFFSET_MASK, PackedItem, decode_offset, decode_size, encode};
pub use layout::{WindowLayout, compute_window_layout};
pub use padding::{bottom_padding, top_padding, try_bottom_padding, try_top_padding};
pub use query::{indices_in_window, query_window, query_window_into, sorted_range_in_window};
pub use window::{Window, is_in_window};
