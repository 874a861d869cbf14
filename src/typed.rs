//! Typed fixed-layout access via zerocopy.
//!
//! For `#[repr(C)]` types implementing zerocopy's traits, a view can read
//! and write whole values through the same bounds gate as the scalar
//! accessors. Access is by copy; byte order is whatever the type's layout
//! says, so these are for host-defined layouts, not wire formats.

use core::mem::size_of;

use crate::{ByteView, Result, bounds};

impl ByteView {
    /// Reads a fixed-layout value at `offset` by copy.
    ///
    /// ```
    /// use byteview::{ByteRegion, ByteView};
    ///
    /// let view = ByteView::new(ByteRegion::from_slice(&[1, 0, 0, 0]));
    /// let value: u32 = view.read(0).unwrap();
    /// assert_eq!(value, u32::from_ne_bytes([1, 0, 0, 0]));
    /// ```
    pub fn read<T>(&self, offset: usize) -> Result<T>
    where
        T: zerocopy::FromBytes,
    {
        bounds::check(self.len(), offset, size_of::<T>())?;
        let value = self.with_window(|win| {
            // The bounds gate guarantees an exact-size slice.
            let Ok(value) = T::read_from_bytes(&win[offset..offset + size_of::<T>()]) else {
                unreachable!()
            };
            value
        });
        Ok(value)
    }

    /// Writes a fixed-layout value at `offset` by copy.
    ///
    /// On failure no bytes are written.
    pub fn write<T>(&self, offset: usize, value: &T) -> Result<()>
    where
        T: zerocopy::IntoBytes + zerocopy::Immutable,
    {
        let raw = value.as_bytes();
        bounds::check(self.len(), offset, raw.len())?;
        self.with_window_mut(|win| win[offset..offset + raw.len()].copy_from_slice(raw));
        Ok(())
    }
}
