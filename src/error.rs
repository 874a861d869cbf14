use core::fmt;

/// Validation failure raised by view construction or access.
///
/// Every variant carries the numbers that failed the check, so callers can
/// report exactly which access was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// A construction offset lies past the end of the region.
    OffsetOutOfBounds {
        /// Requested window offset.
        offset: usize,
        /// Length of the backing region.
        region_len: usize,
    },
    /// A construction window (`offset + length`) extends past the region.
    LengthExceedsBounds {
        /// Requested window offset.
        offset: usize,
        /// Requested window length.
        length: usize,
        /// Length of the backing region.
        region_len: usize,
    },
    /// An access (`offset + size`) would touch bytes outside the window.
    OutOfBounds {
        /// Window-relative offset of the access.
        offset: usize,
        /// Size of the access in bytes.
        size: usize,
        /// Length of the view's window.
        window_len: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffsetOutOfBounds { offset, region_len } => {
                write!(
                    f,
                    "offset out of bounds: offset {offset} exceeds region of {region_len} bytes"
                )
            }
            Self::LengthExceedsBounds {
                offset,
                length,
                region_len,
            } => {
                write!(
                    f,
                    "length exceeds bounds: window {offset}+{length} exceeds region of {region_len} bytes"
                )
            }
            Self::OutOfBounds {
                offset,
                size,
                window_len,
            } => {
                write!(
                    f,
                    "out of bounds: access {offset}+{size} exceeds window of {window_len} bytes"
                )
            }
        }
    }
}

// Rust 1.81+
impl core::error::Error for ViewError {}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ViewError>;
