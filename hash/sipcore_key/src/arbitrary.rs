//! Arbitrary implementations for [`Key`].

use proptest::{
    array::uniform16,
    num::u8,
    prelude::{Arbitrary, BoxedStrategy, Strategy},
};

use crate::Key;

impl Arbitrary for Key {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        uniform16(u8::ANY).prop_map(Self::from_bytes).boxed()
    }
}
