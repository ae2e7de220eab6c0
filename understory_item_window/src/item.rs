// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item representations and the packed 64-bit item codec.
//!
//! An item is a `size` and an `offset` along the scroll axis. Hosts that move
//! items across a runtime boundary pack both into one `i64`:
//!
//! ```text
//! packed = (size << 32) | (offset & 0xFFFF_FFFF)
//! ```
//!
//! Decoding is deliberately asymmetric. The size comes back through an
//! arithmetic shift and keeps its sign; the offset comes back through a mask
//! and is zero-extended, so an offset whose top bit is set decodes as a large
//! positive value. Existing packed buffers depend on this exact behavior.

/// Mask selecting the offset half of a packed item.
pub const OFFSET_MASK: i64 = 0xFFFF_FFFF;

/// Packs `size` and `offset` into a single `i64`.
///
/// No validation is performed. Each half is stored as its 32-bit pattern.
#[must_use]
pub const fn encode(size: i32, offset: i32) -> i64 {
    ((size as i64) << 32) | (offset as i64 & OFFSET_MASK)
}

/// Recovers the size from a packed item (sign-preserving).
#[must_use]
pub const fn decode_size(packed: i64) -> i64 {
    packed >> 32
}

/// Recovers the offset from a packed item (zero-extended low 32 bits).
#[must_use]
pub const fn decode_offset(packed: i64) -> i64 {
    packed & OFFSET_MASK
}

/// A span along the scroll axis: where an item starts and how far it extends.
///
/// Every query in this crate is generic over this trait so that hosts can pass
/// whichever representation they already hold: [`Item`] values, [`PackedItem`]
/// values, or a flat `&[i64]` of packed items.
pub trait ItemSpan {
    /// Start of the item, measured from the start of the whole sequence.
    fn offset(&self) -> i64;

    /// Extent of the item along the scroll axis.
    fn size(&self) -> i64;

    /// One past the end of the item (`offset + size`).
    fn end(&self) -> i64 {
        self.offset() + self.size()
    }
}

impl<T: ItemSpan + ?Sized> ItemSpan for &T {
    fn offset(&self) -> i64 {
        (**self).offset()
    }

    fn size(&self) -> i64 {
        (**self).size()
    }

    fn end(&self) -> i64 {
        (**self).end()
    }
}

/// A raw `i64` is interpreted as a packed item.
impl ItemSpan for i64 {
    fn offset(&self) -> i64 {
        decode_offset(*self)
    }

    fn size(&self) -> i64 {
        decode_size(*self)
    }
}

/// A single item with an explicit size and offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Item {
    /// Extent along the scroll axis. Expected to be non-negative.
    pub size: i32,
    /// Start position, measured from the start of the whole sequence.
    pub offset: i32,
}

impl Item {
    /// Creates an item from its size and offset.
    #[must_use]
    pub const fn new(size: i32, offset: i32) -> Self {
        Self { size, offset }
    }

    /// Packs this item into its 64-bit wire form.
    #[must_use]
    pub const fn pack(self) -> PackedItem {
        PackedItem(encode(self.size, self.offset))
    }
}

impl ItemSpan for Item {
    fn offset(&self) -> i64 {
        i64::from(self.offset)
    }

    fn size(&self) -> i64 {
        i64::from(self.size)
    }
}

/// An item in its packed 64-bit form.
///
/// See [`encode`], [`decode_size`], and [`decode_offset`] for the bit layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PackedItem(i64);

impl PackedItem {
    /// Packs `size` and `offset`. Equivalent to [`encode`].
    #[must_use]
    pub const fn new(size: i32, offset: i32) -> Self {
        Self(encode(size, offset))
    }

    /// Wraps an already packed value.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the packed value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Decoded size.
    #[must_use]
    pub const fn size(self) -> i64 {
        decode_size(self.0)
    }

    /// Decoded offset.
    #[must_use]
    pub const fn offset(self) -> i64 {
        decode_offset(self.0)
    }

    /// Converts back to an [`Item`] if both decoded fields fit in an `i32`.
    ///
    /// Returns `None` for offsets that decode above `i32::MAX`, which is what
    /// a negative offset turns into after packing.
    #[must_use]
    pub fn to_item(self) -> Option<Item> {
        Some(Item {
            size: i32::try_from(self.size()).ok()?,
            offset: i32::try_from(self.offset()).ok()?,
        })
    }
}

impl ItemSpan for PackedItem {
    fn offset(&self) -> i64 {
        decode_offset(self.0)
    }

    fn size(&self) -> i64 {
        decode_size(self.0)
    }
}

impl From<Item> for PackedItem {
    fn from(item: Item) -> Self {
        item.pack()
    }
}

impl From<PackedItem> for i64 {
    fn from(item: PackedItem) -> Self {
        item.0
    }
}
