use proptest::{
    arbitrary::{any, Arbitrary}, collection::vec, prop_assert_eq,
    prop_assume, proptest,
};

use crate::{InvalidKeyLength, Key, ALGORITHM};

const SEQUENTIAL: [u8; Key::LEN] =
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

#[test]
fn halves_are_little_endian() {
    let key = Key::from_bytes(SEQUENTIAL);

    assert_eq!(key.left_half(), 0x0706_0504_0302_0100);
    assert_eq!(key.right_half(), 0x0f0e_0d0c_0b0a_0908);
}

#[test]
fn high_bytes_are_zero_extended() {
    let mut bytes = [0; Key::LEN];
    bytes[0] = 0x80;
    bytes[7] = 0xff;
    bytes[8] = 0xff;

    let key = Key::from_bytes(bytes);

    assert_eq!(key.left_half(), 0xff00_0000_0000_0080);
    assert_eq!(key.right_half(), 0x0000_0000_0000_00ff);
}

#[test]
fn rejects_wrong_lengths() {
    assert_eq!(Key::new(&[]), Err(InvalidKeyLength { length: 0 }));
    assert_eq!(Key::new(&[0; 15]), Err(InvalidKeyLength { length: 15 }));
    assert_eq!(Key::new(&[0; 17]), Err(InvalidKeyLength { length: 17 }));
    assert_eq!(
        Key::try_from(&[0u8; 32][..]),
        Err(InvalidKeyLength { length: 32 })
    );
}

#[test]
fn error_message_names_both_lengths() {
    let error = Key::new(&[0; 3]).unwrap_err();

    assert_eq!(error.to_string(), "SipHash key must be 16 bytes, got 3");
}

#[test]
fn debug_hides_key_material() {
    let key = Key::from_bytes([0xab; Key::LEN]);

    assert_eq!(format!("{key:?}"), "Key { .. }");
}

#[test]
fn algorithm_name() {
    let key = Key::from_bytes(SEQUENTIAL);

    assert_eq!(key.algorithm(), "SipHash-2-4");
    assert_eq!(ALGORITHM, "SipHash-2-4");
}

proptest! {
    #[test]
    fn accepts_any_sixteen_bytes(bytes in vec(any::<u8>(), Key::LEN)) {
        let key = Key::new(&bytes).unwrap();

        prop_assert_eq!(key.as_bytes().as_slice(), bytes.as_slice());
        prop_assert_eq!(key.as_ref(), bytes.as_slice());
    }

    #[test]
    fn rejects_any_other_length(bytes in vec(any::<u8>(), 0..64)) {
        prop_assume!(bytes.len() != Key::LEN);

        let expected = Err(InvalidKeyLength { length: bytes.len() });

        prop_assert_eq!(Key::new(&bytes), expected);
    }

    #[test]
    fn halves_round_trip(key in Key::arbitrary()) {
        let rebuilt = Key::from_halves(key.left_half(), key.right_half());

        prop_assert_eq!(rebuilt, key);
    }
}
