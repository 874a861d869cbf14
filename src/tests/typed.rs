use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{ByteRegion, ByteView};

#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Debug, PartialEq)]
#[repr(C)]
struct Header {
    tag: u32,
    len: u32,
}

#[test]
fn typed_round_trip() {
    let view = ByteView::new(ByteRegion::new(8));
    let header = Header {
        tag: 0x4d41_4743,
        len: 128,
    };

    view.write(0, &header).unwrap();
    let back: Header = view.read(0).unwrap();
    assert_eq!(back, header);
}

#[test]
fn typed_access_respects_the_window() {
    let view = ByteView::new(ByteRegion::new(8));
    assert!(view.write(1, &Header { tag: 0, len: 0 }).is_err());
    assert!(view.read::<Header>(4).is_err());
    assert!(view.read::<Header>(0).is_ok());
}

#[test]
fn typed_write_matches_native_layout() {
    let view = ByteView::new(ByteRegion::new(4));
    view.write(0, &0xdead_beefu32).unwrap();
    let expected = 0xdead_beefu32.to_ne_bytes();
    assert_eq!(view.to_vec(), expected);
}
