//! Fixed-width scalar accessors.
//!
//! Unsuffixed multi-byte accessors are big-endian (network byte order);
//! the `_le` variants are little-endian. Offsets are relative to the
//! view's window. Every accessor runs the bounds gate before touching
//! memory and propagates its failure unchanged.

use crate::{ByteView, Result};

// Macro for multi-byte integer accessors, one big-endian and one
// little-endian family per type.
macro_rules! impl_int_accessors {
    ($($ty:ty => $get:ident, $get_le:ident, $set:ident, $set_le:ident;)+) => {
        impl ByteView {
            $(
                #[doc = concat!("Reads a big-endian `", stringify!($ty), "` at `offset`.")]
                #[inline]
                pub fn $get(&self, offset: usize) -> Result<$ty> {
                    Ok(<$ty>::from_be_bytes(self.read_array(offset)?))
                }

                #[doc = concat!("Reads a little-endian `", stringify!($ty), "` at `offset`.")]
                #[inline]
                pub fn $get_le(&self, offset: usize) -> Result<$ty> {
                    Ok(<$ty>::from_le_bytes(self.read_array(offset)?))
                }

                #[doc = concat!("Writes `value` as a big-endian `", stringify!($ty), "` at `offset`.")]
                #[inline]
                pub fn $set(&self, offset: usize, value: $ty) -> Result<()> {
                    self.write_array(offset, value.to_be_bytes())
                }

                #[doc = concat!("Writes `value` as a little-endian `", stringify!($ty), "` at `offset`.")]
                #[inline]
                pub fn $set_le(&self, offset: usize, value: $ty) -> Result<()> {
                    self.write_array(offset, value.to_le_bytes())
                }
            )+
        }
    };
}

impl_int_accessors! {
    u16 => get_u16, get_u16_le, set_u16, set_u16_le;
    i16 => get_i16, get_i16_le, set_i16, set_i16_le;
    u32 => get_u32, get_u32_le, set_u32, set_u32_le;
    i32 => get_i32, get_i32_le, set_i32, set_i32_le;
    u64 => get_u64, get_u64_le, set_u64, set_u64_le;
    i64 => get_i64, get_i64_le, set_i64, set_i64_le;
}

// u8/i8 are a special case - single byte, no endianness.
impl ByteView {
    /// Reads a `u8` at `offset`.
    #[inline]
    pub fn get_u8(&self, offset: usize) -> Result<u8> {
        let [byte] = self.read_array(offset)?;
        Ok(byte)
    }

    /// Writes a `u8` at `offset`.
    #[inline]
    pub fn set_u8(&self, offset: usize, value: u8) -> Result<()> {
        self.write_array(offset, [value])
    }

    /// Reads an `i8` at `offset`.
    #[inline]
    pub fn get_i8(&self, offset: usize) -> Result<i8> {
        let [byte] = self.read_array(offset)?;
        Ok(byte as i8)
    }

    /// Writes an `i8` at `offset`.
    #[inline]
    pub fn set_i8(&self, offset: usize, value: i8) -> Result<()> {
        self.write_array(offset, [value as u8])
    }
}

// Floats are a pure bit-pattern transcode over the integer paths; no
// rounding or normalization anywhere, NaN payloads survive intact.
impl ByteView {
    /// Reads a big-endian IEEE-754 `f32` at `offset`.
    #[inline]
    pub fn get_f32(&self, offset: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32(offset)?))
    }

    /// Reads a little-endian IEEE-754 `f32` at `offset`.
    #[inline]
    pub fn get_f32_le(&self, offset: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32_le(offset)?))
    }

    /// Writes `value` as a big-endian IEEE-754 `f32` at `offset`.
    #[inline]
    pub fn set_f32(&self, offset: usize, value: f32) -> Result<()> {
        self.set_u32(offset, value.to_bits())
    }

    /// Writes `value` as a little-endian IEEE-754 `f32` at `offset`.
    #[inline]
    pub fn set_f32_le(&self, offset: usize, value: f32) -> Result<()> {
        self.set_u32_le(offset, value.to_bits())
    }

    /// Reads a big-endian IEEE-754 `f64` at `offset`.
    #[inline]
    pub fn get_f64(&self, offset: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64(offset)?))
    }

    /// Reads a little-endian IEEE-754 `f64` at `offset`.
    #[inline]
    pub fn get_f64_le(&self, offset: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64_le(offset)?))
    }

    /// Writes `value` as a big-endian IEEE-754 `f64` at `offset`.
    #[inline]
    pub fn set_f64(&self, offset: usize, value: f64) -> Result<()> {
        self.set_u64(offset, value.to_bits())
    }

    /// Writes `value` as a little-endian IEEE-754 `f64` at `offset`.
    #[inline]
    pub fn set_f64_le(&self, offset: usize, value: f64) -> Result<()> {
        self.set_u64_le(offset, value.to_bits())
    }
}
