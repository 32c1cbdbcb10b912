#![cfg(feature = "proptest")]

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{ALPHABET_LEN, Alphabet, DEFAULT_ALPHABET};

/// Generates alphabets by shuffling a pool of ASCII and Latin-1
/// symbols and keeping the first 64.
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
impl Arbitrary for Alphabet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let pool: Vec<char> = DEFAULT_ALPHABET
            .chars()
            .chain('\u{c0}'..='\u{ff}')
            .collect();
        Just(pool)
            .prop_shuffle()
            .prop_map(|symbols| {
                Alphabet::from_chars(&symbols[..ALPHABET_LEN]).expect("pool symbols are distinct")
            })
            .boxed()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Codec;

    proptest! {
        #[test]
        fn proptest_arbitrary_alphabet(alphabet in any::<Alphabet>(), data in prop::collection::vec(any::<u8>(), 0..64)) {
            let codec = Codec::with_alphabet(alphabet);
            let text = codec.encode(&data).unwrap();
            prop_assert!(text.chars().all(|c| codec.alphabet().contains(c)));
            prop_assert_eq!(codec.decode(&text).unwrap(), data);
        }
    }
}
