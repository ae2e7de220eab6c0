// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WebAssembly exports of the [`raw`](crate::raw) entry points.
//!
//! JavaScript passes items as a `BigInt64Array` and receives indices in an
//! `Int32Array`. Rejected arguments surface as thrown `Error`s.

use alloc::string::ToString;

use wasm_bindgen::prelude::*;

use crate::{WindowError, raw};

fn to_js(err: WindowError) -> JsError {
    JsError::new(&err.to_string())
}

/// Packs `size` and `offset` into one `i64` (a `BigInt` on the JS side).
#[wasm_bindgen]
pub(crate) fn make_item(size: i32, offset: i32) -> i64 {
    raw::make_item(size, offset)
}

/// Writes indices of items inside the window into `result` and returns the count.
#[wasm_bindgen]
pub(crate) fn get_item_indices_in_window(
    items: &[i64],
    result: &mut [i32],
    items_count: i32,
    cursor_offset: i32,
    cursor_size: i32,
    window_size: i32,
) -> Result<i32, JsError> {
    raw::get_item_indices_in_window(
        items,
        result,
        items_count,
        cursor_offset,
        cursor_size,
        window_size,
    )
    .map_err(to_js)
}

/// Space before `items[first_item_index]`.
#[wasm_bindgen]
pub(crate) fn get_top_padding(items: &[i64], first_item_index: i32) -> Result<i32, JsError> {
    raw::get_top_padding(items, first_item_index).map_err(to_js)
}

/// Space after `items[last_item_index]` up to the end of `items[total_items - 1]`.
#[wasm_bindgen]
pub(crate) fn get_bottom_padding(
    items: &[i64],
    total_items: i32,
    last_item_index: i32,
) -> Result<i32, JsError> {
    raw::get_bottom_padding(items, total_items, last_item_index).map_err(to_js)
}
