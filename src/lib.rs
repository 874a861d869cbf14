//! Bounds-checked, endianness-aware typed views over shared byte regions.
//!
//! A [`ByteRegion`] is a fixed-length, reference-counted byte buffer. A
//! [`ByteView`] is a validated `(offset, length)` window into a region,
//! exposing fixed-width integer and float accessors. Every access runs
//! through a single bounds gate before touching memory; on failure nothing
//! is read or written.
//!
//! Multi-byte accessors default to big-endian (network byte order). The
//! `_le` variants select little-endian.
//!
//! # Reading and writing scalars
//!
//! ```
//! use byteview::{ByteRegion, ByteView};
//!
//! let view = ByteView::new(ByteRegion::new(8));
//!
//! view.set_u32(0, 0x12345678).unwrap();
//! assert_eq!(view.get_u32(0).unwrap(), 0x12345678);
//! assert_eq!(view.get_u32_le(0).unwrap(), 0x78563412);
//! assert_eq!(view.get_u8(0).unwrap(), 0x12);
//! ```
//!
//! # Windows share storage, copies do not
//!
//! ```
//! use byteview::{ByteRegion, ByteView};
//!
//! let view = ByteView::new(ByteRegion::from_slice(&[1, 2, 3, 4]));
//!
//! let sub = view.subview(2, 2).unwrap();
//! sub.set_u8(0, 99).unwrap();
//! assert_eq!(view.get_u8(2).unwrap(), 99); // aliased
//!
//! let copy = view.copy();
//! copy.set_u8(0, 7).unwrap();
//! assert_eq!(view.get_u8(0).unwrap(), 1); // independent
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bounds;
mod codec;
mod error;
mod region;
mod typed;
mod view;

pub use error::{Result, ViewError};
pub use region::ByteRegion;
pub use view::ByteView;

#[cfg(test)]
mod tests;
