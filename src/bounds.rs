//! The single bounds gate in front of every region access.

use crate::{Result, ViewError};

/// Checks that `size` bytes starting at `offset` lie inside a window of
/// `window_len` bytes.
///
/// `offset + size` is computed with `checked_add`; overflow reports as
/// out of bounds rather than wrapping.
#[inline]
pub(crate) fn check(window_len: usize, offset: usize, size: usize) -> Result<()> {
    match offset.checked_add(size) {
        Some(end) if end <= window_len => Ok(()),
        _ => Err(ViewError::OutOfBounds {
            offset,
            size,
            window_len,
        }),
    }
}
