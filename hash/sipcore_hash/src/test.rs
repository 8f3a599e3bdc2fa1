use std::hash::{BuildHasher, Hasher as _};

use proptest::{
    arbitrary::{any, Arbitrary},
    collection::vec,
    prop_assert_eq, proptest,
};
use sipcore::Key;

use crate::{BuildSipHasher24, HashMap, HashSet, SipHasher24};

fn sequential_key() -> Key {
    Key::from_bytes([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
}

#[test]
fn write_then_finish_matches_the_core() {
    let mut hasher = SipHasher24::new(sequential_key());
    hasher.write(b"ab");
    hasher.write(b"cdef");

    assert_eq!(hasher.finish(), 0x2a6e_77e7_33c7_c05d);
}

#[test]
fn finish_can_be_called_repeatedly() {
    let mut hasher = SipHasher24::new(sequential_key());
    hasher.write(b"SipHash");

    assert_eq!(hasher.finish(), 0x8325_0932_42a9_6f60);
    assert_eq!(hasher.finish(), 0x8325_0932_42a9_6f60);

    hasher.write_u8(b'!');
    assert_eq!(hasher.finish(), sipcore::hash(&sequential_key(), b"SipHash!"));
}

#[test]
fn integers_are_written_little_endian() {
    let mut hasher = SipHasher24::new(sequential_key());
    hasher.write_u32(0x6463_6261);
    hasher.write_i16(0x6665);

    assert_eq!(hasher.finish(), 0x2a6e_77e7_33c7_c05d);
}

#[test]
fn built_hashers_start_fresh() {
    let build = BuildSipHasher24::new(sequential_key());

    let mut first = build.build_hasher();
    first.write(b"abc");

    let second = build.build_hasher();

    assert_eq!(second.inner().total_len(), 0);
    assert_eq!(second.finish(), 0x726f_db47_dd0e_0e31);
    assert_eq!(build.key(), &sequential_key());
}

#[test]
fn hash_one_is_deterministic_per_key() {
    let build = BuildSipHasher24::new(sequential_key());
    let other = BuildSipHasher24::new(Key::from_bytes([0; Key::LEN]));

    assert_eq!(build.hash_one("pernix"), build.hash_one("pernix"));
    assert_ne!(build.hash_one("pernix"), other.hash_one("pernix"));
}

#[test]
fn keyed_collections() {
    let build = BuildSipHasher24::new(sequential_key());

    let mut map = HashMap::with_hasher(build);
    map.insert("one", 1);
    map.insert("two", 2);

    let mut set = HashSet::with_hasher(build);
    set.insert(42u64);

    assert_eq!(map.get("one"), Some(&1));
    assert_eq!(map.get("two"), Some(&2));
    assert!(map.get("three").is_none());
    assert!(set.contains(&42));
}

#[test]
fn debug_never_shows_key_material() {
    let key = Key::from_bytes([0xab; Key::LEN]);

    assert_eq!(
        format!("{:?}", SipHasher24::new(key)),
        "SipHasher24(Hasher { state: Fresh, total_len: 0, .. })"
    );
    assert_eq!(
        format!("{:?}", BuildSipHasher24::new(key)),
        "BuildSipHasher24 { key: Key { .. } }"
    );
}

proptest! {
    #[test]
    fn split_writes_match_a_single_write(
        key in Key::arbitrary(),
        message in vec(any::<u8>(), 0..128),
        cut in 0usize..128,
    ) {
        let cut = cut.min(message.len());

        let mut split = SipHasher24::new(key);
        split.write(&message[..cut]);
        split.write(&message[cut..]);

        let mut whole = SipHasher24::new(key);
        whole.write(&message);

        prop_assert_eq!(split.finish(), whole.finish());
        prop_assert_eq!(whole.finish(), sipcore::hash(&key, &message));
    }
}
