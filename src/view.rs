//! Window construction, subviews, and byte-range operations.

use alloc::vec::Vec;
use core::fmt;

use crate::{ByteRegion, Result, ViewError, bounds};

/// A validated `(offset, length)` window over a [`ByteRegion`].
///
/// The window is fixed once built; constructing a new view is the only way
/// to re-window. Cloning a view (or taking a [`subview`](Self::subview))
/// shares the backing region, so writes through one view are visible
/// through every alias. [`copy`](Self::copy) is the one operation that
/// duplicates storage.
///
/// Writes take `&self`: mutation goes through the shared region, matching
/// the aliasing model above.
#[derive(Clone)]
pub struct ByteView {
    region: ByteRegion,
    offset: usize,
    length: usize,
}

impl ByteView {
    /// A view over the whole region.
    pub fn new(region: ByteRegion) -> Self {
        let length = region.len();
        Self {
            region,
            offset: 0,
            length,
        }
    }

    /// A view from `offset` to the end of the region.
    ///
    /// Fails with [`ViewError::OffsetOutOfBounds`] if `offset` lies past
    /// the region. `offset == region.len()` yields an empty view.
    pub fn at_offset(region: ByteRegion, offset: usize) -> Result<Self> {
        if offset > region.len() {
            return Err(ViewError::OffsetOutOfBounds {
                offset,
                region_len: region.len(),
            });
        }
        let length = region.len() - offset;
        Ok(Self {
            region,
            offset,
            length,
        })
    }

    /// The general constructor: window of `length` bytes at `offset`.
    ///
    /// `length: None` means "rest of the region", as in
    /// [`at_offset`](Self::at_offset). With an explicit length, fails with
    /// [`ViewError::LengthExceedsBounds`] if `offset + length` extends past
    /// the region.
    pub fn from_region(region: ByteRegion, offset: usize, length: Option<usize>) -> Result<Self> {
        let Some(length) = length else {
            return Self::at_offset(region, offset);
        };
        match offset.checked_add(length) {
            Some(end) if end <= region.len() => Ok(Self {
                region,
                offset,
                length,
            }),
            _ => Err(ViewError::LengthExceedsBounds {
                offset,
                length,
                region_len: region.len(),
            }),
        }
    }

    /// Length of the window in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the window is zero bytes long.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The window's offset into the backing region.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// A zero-copy window over `length` bytes starting at `start`.
    ///
    /// The subview shares the backing region: writes through it are
    /// visible through `self` and vice versa. An empty range is allowed.
    pub fn subview(&self, start: usize, length: usize) -> Result<ByteView> {
        bounds::check(self.length, start, length)?;
        Ok(Self {
            region: self.region.clone(),
            offset: self.offset + start,
            length,
        })
    }

    /// Duplicates the window into a freshly allocated region.
    ///
    /// The returned view starts at offset zero and never aliases `self`.
    /// This is the only accessor that allocates.
    pub fn copy(&self) -> ByteView {
        ByteView::new(ByteRegion::from_vec(self.to_vec()))
    }

    /// Copies the window's bytes into a new `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_window(|win| win.to_vec())
    }

    /// Reads `dst.len()` bytes starting at `offset` into `dst`.
    pub fn read_bytes(&self, offset: usize, dst: &mut [u8]) -> Result<()> {
        bounds::check(self.length, offset, dst.len())?;
        self.with_window(|win| dst.copy_from_slice(&win[offset..offset + dst.len()]));
        Ok(())
    }

    /// Writes all of `src` starting at `offset`.
    ///
    /// On failure no bytes are written.
    pub fn write_bytes(&self, offset: usize, src: &[u8]) -> Result<()> {
        bounds::check(self.length, offset, src.len())?;
        self.with_window_mut(|win| win[offset..offset + src.len()].copy_from_slice(src));
        Ok(())
    }

    /// Sets every byte in the window to `byte`.
    pub fn fill(&self, byte: u8) {
        self.with_window_mut(|win| win.fill(byte));
    }

    /// Runs `f` with shared access to the window's bytes.
    #[inline]
    pub(crate) fn with_window<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.region
            .with(|bytes| f(&bytes[self.offset..self.offset + self.length]))
    }

    /// Runs `f` with exclusive access to the window's bytes.
    #[inline]
    pub(crate) fn with_window_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        self.region
            .with_mut(|bytes| f(&mut bytes[self.offset..self.offset + self.length]))
    }

    /// Reads `N` bytes at `offset` into a fixed array.
    #[inline]
    pub(crate) fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        bounds::check(self.length, offset, N)?;
        let mut raw = [0u8; N];
        self.with_window(|win| raw.copy_from_slice(&win[offset..offset + N]));
        Ok(raw)
    }

    /// Writes a fixed array of `N` bytes at `offset`.
    #[inline]
    pub(crate) fn write_array<const N: usize>(&self, offset: usize, raw: [u8; N]) -> Result<()> {
        bounds::check(self.length, offset, N)?;
        self.with_window_mut(|win| win[offset..offset + N].copy_from_slice(&raw));
        Ok(())
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("offset", &self.offset)
            .field("length", &self.length)
            .finish()
    }
}
