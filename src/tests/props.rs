//! Round-trip properties over the width/signedness/endianness grid.

use proptest::prelude::*;

use crate::{ByteRegion, ByteView};

macro_rules! roundtrip_props {
    ($($name:ident, $name_le:ident: $ty:ty, $size:expr, $get:ident, $get_le:ident, $set:ident, $set_le:ident;)+) => {
        proptest! {
            $(
                #[test]
                fn $name(value in any::<$ty>(), pad in 0usize..8) {
                    let view = ByteView::at_offset(ByteRegion::new(pad + $size), pad).unwrap();
                    view.$set(0, value).unwrap();
                    prop_assert_eq!(view.$get(0).unwrap(), value);
                }

                #[test]
                fn $name_le(value in any::<$ty>(), pad in 0usize..8) {
                    let view = ByteView::at_offset(ByteRegion::new(pad + $size), pad).unwrap();
                    view.$set_le(0, value).unwrap();
                    prop_assert_eq!(view.$get_le(0).unwrap(), value);
                }
            )+
        }
    };
}

roundtrip_props! {
    roundtrip_u16_be, roundtrip_u16_le: u16, 2, get_u16, get_u16_le, set_u16, set_u16_le;
    roundtrip_i16_be, roundtrip_i16_le: i16, 2, get_i16, get_i16_le, set_i16, set_i16_le;
    roundtrip_u32_be, roundtrip_u32_le: u32, 4, get_u32, get_u32_le, set_u32, set_u32_le;
    roundtrip_i32_be, roundtrip_i32_le: i32, 4, get_i32, get_i32_le, set_i32, set_i32_le;
    roundtrip_u64_be, roundtrip_u64_le: u64, 8, get_u64, get_u64_le, set_u64, set_u64_le;
    roundtrip_i64_be, roundtrip_i64_le: i64, 8, get_i64, get_i64_le, set_i64, set_i64_le;
}

proptest! {
    #[test]
    fn roundtrip_u8(value in any::<u8>(), pad in 0usize..8) {
        let view = ByteView::at_offset(ByteRegion::new(pad + 1), pad).unwrap();
        view.set_u8(0, value).unwrap();
        prop_assert_eq!(view.get_u8(0).unwrap(), value);
        prop_assert_eq!(view.get_i8(0).unwrap() as u8, value);
    }

    // Floats compare by bit pattern so NaN inputs stay meaningful.
    #[test]
    fn roundtrip_f32_bits(bits in any::<u32>()) {
        let view = ByteView::new(ByteRegion::new(4));
        view.set_f32(0, f32::from_bits(bits)).unwrap();
        prop_assert_eq!(view.get_f32(0).unwrap().to_bits(), bits);
        view.set_f32_le(0, f32::from_bits(bits)).unwrap();
        prop_assert_eq!(view.get_f32_le(0).unwrap().to_bits(), bits);
    }

    #[test]
    fn roundtrip_f64_bits(bits in any::<u64>()) {
        let view = ByteView::new(ByteRegion::new(8));
        view.set_f64(0, f64::from_bits(bits)).unwrap();
        prop_assert_eq!(view.get_f64(0).unwrap().to_bits(), bits);
        view.set_f64_le(0, f64::from_bits(bits)).unwrap();
        prop_assert_eq!(view.get_f64_le(0).unwrap().to_bits(), bits);
    }

    // Opposite byte orders agree through byte reversal.
    #[test]
    fn endianness_mirror_u32(value in any::<u32>()) {
        let view = ByteView::new(ByteRegion::new(4));
        view.set_u32(0, value).unwrap();
        prop_assert_eq!(view.get_u32_le(0).unwrap(), value.swap_bytes());
    }

    // A write through any subview reads back identically through the parent.
    #[test]
    fn subview_writes_are_visible_to_parent(
        value in any::<u16>(),
        start in 0usize..6,
    ) {
        let view = ByteView::new(ByteRegion::new(8));
        let sub = view.subview(start, 2).unwrap();
        sub.set_u16(0, value).unwrap();
        prop_assert_eq!(view.get_u16(start).unwrap(), value);
    }

    // Out-of-window accesses fail and leave the bytes untouched.
    #[test]
    fn rejected_writes_leave_no_trace(offset in 5usize..64) {
        let view = ByteView::new(ByteRegion::new(8));
        prop_assert!(view.set_u32(offset, 0xffff_ffff).is_err());
        prop_assert_eq!(view.to_vec(), std::vec![0u8; 8]);
    }
}
