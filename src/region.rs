//! Shared backing storage for views.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Fixed-length contiguous byte storage, shared by any number of views.
///
/// Cloning a `ByteRegion` shares the same bytes; the storage is never
/// copied or resized after construction. Regions are single-threaded
/// (`!Send + !Sync`); callers needing cross-thread access serialize it
/// externally and move owned bytes instead.
#[derive(Clone)]
pub struct ByteRegion {
    bytes: Rc<RefCell<Box<[u8]>>>,
    len: usize,
}

impl ByteRegion {
    /// Allocates a zero-filled region of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self::from_vec(vec![0; len])
    }

    /// Takes ownership of `bytes` as the backing storage.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            bytes: Rc::new(RefCell::new(bytes.into_boxed_slice())),
            len,
        }
    }

    /// Copies `bytes` into a freshly allocated region.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Length of the region in bytes. Fixed for the region's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the region holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Runs `f` with shared access to the bytes.
    ///
    /// The borrow must not escape the closure; views rely on this to keep
    /// aliased access free of borrow conflicts.
    #[inline]
    pub(crate) fn with<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes.borrow())
    }

    /// Runs `f` with exclusive access to the bytes.
    #[inline]
    pub(crate) fn with_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        f(&mut self.bytes.borrow_mut())
    }
}

impl From<Vec<u8>> for ByteRegion {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for ByteRegion {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for ByteRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteRegion").field("len", &self.len).finish()
    }
}
