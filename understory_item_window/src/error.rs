// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the checked query entry points.

use core::fmt;

/// Error returned when an index, count, or buffer does not fit the item sequence.
///
/// The panicking helpers ([`top_padding`](crate::top_padding),
/// [`bottom_padding`](crate::bottom_padding)) report the same conditions as
/// panics; the `try_*` helpers and the flat-buffer entry points in
/// [`raw`](crate::raw) return them instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// An item index was not below the length it indexes into.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of addressable items.
        len: usize,
    },
    /// A padding query was made against an empty sequence.
    EmptySequence,
    /// An item count exceeded the number of items actually supplied.
    CountOutOfRange {
        /// The requested count.
        count: usize,
        /// The number of items in the buffer.
        len: usize,
    },
    /// The output buffer cannot hold every possible match.
    OutputTooSmall {
        /// Minimum length the output buffer must have.
        required: usize,
        /// Actual length of the output buffer.
        len: usize,
    },
    /// A count or index argument crossing the flat-buffer boundary was negative.
    Negative {
        /// Name of the argument.
        argument: &'static str,
        /// The value that was passed.
        value: i32,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "item index {index} out of range for {len} items")
            }
            Self::EmptySequence => f.write_str("item sequence is empty"),
            Self::CountOutOfRange { count, len } => {
                write!(f, "item count {count} exceeds the {len} items supplied")
            }
            Self::OutputTooSmall { required, len } => write!(
                f,
                "output buffer of length {len} is shorter than the required {required}"
            ),
            Self::Negative { argument, value } => {
                write!(f, "`{argument}` must not be negative, got {value}")
            }
        }
    }
}

impl core::error::Error for WindowError {}

/// Checks that `index` addresses one of `len` items.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), WindowError> {
    if index < len {
        Ok(())
    } else {
        Err(WindowError::IndexOutOfRange { index, len })
    }
}
