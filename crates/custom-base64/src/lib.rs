//! Unpadded Base64 encoding with caller-supplied alphabets.
//!
//! Any 64 distinct `char`s can serve as the [`Alphabet`]. The
//! encoding never adds padding, so the output only contains
//! symbols from the active alphabet and `n` bytes always encode
//! to `ceil(n*8/6)` symbols.
//!
//! ```
//! use custom_base64::{Codec, DEFAULT_ALPHABET};
//!
//! let codec = Codec::new();
//! assert_eq!(codec.alphabet().as_str(), DEFAULT_ALPHABET);
//!
//! let text = codec.encode(&[0xde, 0xad, 0xbe, 0xef])?;
//! assert_eq!(text, "3q2+7w");
//! assert_eq!(codec.decode(&text)?, [0xde, 0xad, 0xbe, 0xef]);
//! # Ok::<(), custom_base64::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod alphabet;
mod codec;
mod error;
mod phase;
mod proptest_impls;
mod serde_impls;

pub use alphabet::{ALPHABET_LEN, Alphabet, DEFAULT_ALPHABET};
pub use codec::{Codec, decoded_len, encoded_len};
pub use error::{Error, InvalidAlphabet, InvalidAlphabetKind};
