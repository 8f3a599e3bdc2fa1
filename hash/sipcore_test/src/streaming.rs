//! Tests for feeding messages through the streaming interface.

use std::io::Read;

use proptest::{
    arbitrary::{any, Arbitrary},
    collection::vec,
    prop_assert_eq, proptest,
};
use sipcore::{Hasher, Key, State};

fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }

fn sequential_key() -> Key {
    Key::from_bytes([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
}

#[test]
fn chunked_scenarios() {
    let scenarios: [(&[&[u8]], u64); 7] = [
        (&[], 0x726f_db47_dd0e_0e31),
        (&[b"a"], 0x2ba3_e8e9_a711_48ca),
        (&[b"abcdef"], 0x2a6e_77e7_33c7_c05d),
        (&[b"ab", b"cdef"], 0x2a6e_77e7_33c7_c05d),
        (&[b"a", b"", b"bcde", b"f"], 0x2a6e_77e7_33c7_c05d),
        (&[b"Sip", b"Hash"], 0x8325_0932_42a9_6f60),
        (&[b"1234567", b"8"], 0x0213_0609_caea_37eb),
    ];

    for (chunks, expected) in scenarios {
        let mut hasher = Hasher::new(sequential_key());
        for chunk in chunks {
            hasher.update(chunk);
        }

        assert_eq!(hasher.finalize(), expected, "chunks {chunks:?}");
    }
}

#[test]
fn one_million_zero_bytes_through_io_copy() {
    let mut hasher = Hasher::new(sequential_key());

    let copied =
        std::io::copy(&mut std::io::repeat(0).take(1_000_000), &mut hasher)
            .unwrap();

    assert_eq!(copied, 1_000_000);
    // 1_000_000 = 3906 * 256 + 64
    assert_eq!(hasher.total_len(), 64);
    assert_eq!(hasher.finalize(), 0x2820_5108_397a_a742);
}

#[test]
fn misuse_after_finalize_is_not_fatal() {
    init_logger();

    let mut hasher = Hasher::new(sequential_key());
    hasher.update(b"abc");
    let first = hasher.finalize();

    hasher.update(b"abc");
    hasher.finalize();
    assert_eq!(hasher.state(), State::Finalized);

    hasher.reset();
    hasher.update(b"abc");
    assert_eq!(hasher.finalize(), first);
}

#[test]
fn shared_key_across_threads() {
    let key = sequential_key();

    let digests = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let mut hasher = Hasher::new(key);
                    for chunk in b"SipHash".chunks(2) {
                        hasher.update(chunk);
                    }
                    hasher.finalize()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert!(digests.iter().all(|digest| *digest == 0x8325_0932_42a9_6f60));
}

proptest! {
    #[test]
    fn any_partition_matches_one_shot(
        key in Key::arbitrary(),
        chunks in vec(vec(any::<u8>(), 0..24), 0..16),
    ) {
        let message = chunks.concat();

        let mut hasher = Hasher::new(key);
        for chunk in &chunks {
            hasher.update(chunk);
        }

        prop_assert_eq!(hasher.finalize(), sipcore::hash(&key, &message));
    }

    #[test]
    fn std_adapter_agrees_with_the_core(
        key in Key::arbitrary(),
        chunks in vec(vec(any::<u8>(), 0..24), 0..16),
    ) {
        use std::hash::Hasher as _;

        let mut adapter = sipcore_hash::SipHasher24::new(key);
        for chunk in &chunks {
            adapter.write(chunk);
        }

        prop_assert_eq!(adapter.finish(), sipcore::hash(&key, &chunks.concat()));
    }
}
