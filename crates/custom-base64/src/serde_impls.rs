#![cfg(feature = "serde")]

use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::{Alphabet, Codec};

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AlphabetVisitor;
        impl Visitor<'_> for AlphabetVisitor {
            type Value = Alphabet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string of 64 distinct characters")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Alphabet::new(v).map_err(E::custom)
            }
        }
        deserializer.deserialize_str(AlphabetVisitor)
    }
}

/// A [`Codec`] serializes as its alphabet.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Codec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.alphabet().serialize(serializer)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Codec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Alphabet::deserialize(deserializer).map(Codec::with_alphabet)
    }
}
