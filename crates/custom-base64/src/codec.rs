use alloc::{string::String, vec::Vec};
use core::{fmt, mem};

use buggy::BugExt;
use tracing::{debug, trace};

use crate::{
    alphabet::Alphabet,
    error::{Error, InvalidAlphabet},
    phase::Phase,
};

/// Selects the low six bits of a byte.
const MASK: u8 = 0x3f;

/// Returns the number of symbols needed to encode `n` bytes,
/// `ceil(n*8/6)`, or `None` if it overflows.
pub const fn encoded_len(n: usize) -> Option<usize> {
    // Every three bytes become four symbols. A trailing one
    // or two bytes need two or three more.
    let tail = match n % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };
    match (n / 3).checked_mul(4) {
        Some(whole) => whole.checked_add(tail),
        None => None,
    }
}

/// Returns the number of bytes decoded from `n` symbols,
/// `floor(n*6/8)`.
// Cannot overflow: the result is at most `n`.
#[allow(clippy::arithmetic_side_effects)]
pub const fn decoded_len(n: usize) -> usize {
    (n / 4) * 3 + (n % 4) * 3 / 4
}

/// Encodes bytes to text and back using a configurable
/// [`Alphabet`].
///
/// The output has no padding: `n` bytes always encode to
/// exactly [`encoded_len(n)`][encoded_len] symbols. The
/// alphabet is not recorded in the output, so text must be
/// decoded by a codec with the same alphabet that encoded it.
///
/// ```
/// use custom_base64::Codec;
///
/// let mut codec = Codec::new();
/// let text = codec.encode(b"hello")?;
/// assert_eq!(text, "aGVsbG8");
/// assert_eq!(codec.decode(&text)?, b"hello");
///
/// // Rotate the alphabet by one.
/// codec.set_alphabet("BCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-A")?;
/// assert_eq!(codec.encode(b"hello")?, "bHWtcH9");
/// # Ok::<(), custom_base64::Error>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    /// Creates a codec that uses the
    /// [default alphabet][crate::DEFAULT_ALPHABET].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec that uses `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Creates a codec from an alphabet string.
    pub fn from_alphabet_str(alphabet: &str) -> Result<Self, InvalidAlphabet> {
        Alphabet::new(alphabet).map(Self::with_alphabet)
    }

    /// Returns the active alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Replaces the active alphabet with `candidate`.
    ///
    /// If `candidate` is not a valid alphabet the active
    /// alphabet is left unchanged.
    pub fn set_alphabet(&mut self, candidate: &str) -> Result<(), InvalidAlphabet> {
        match Alphabet::new(candidate) {
            Ok(alphabet) => {
                self.replace_alphabet(alphabet);
                Ok(())
            }
            Err(err) => {
                debug!(%err, "rejected alphabet");
                Err(err)
            }
        }
    }

    /// Replaces the active alphabet, returning the previous
    /// one.
    pub fn replace_alphabet(&mut self, alphabet: Alphabet) -> Alphabet {
        debug!(%alphabet, "replacing alphabet");
        mem::replace(&mut self.alphabet, alphabet)
    }

    /// Encodes `data` as text.
    pub fn encode(&self, data: &[u8]) -> Result<String, Error> {
        let n = encoded_len(data.len()).assume("`data.len()` is at most `isize::MAX`")?;
        let mut out = String::with_capacity(n);
        self.encode_to(data, &mut out)?;
        Ok(out)
    }

    /// Encodes `data`, writing the symbols to `out`.
    ///
    /// Returns [`Error::Encoding`] if `out` rejects a symbol.
    pub fn encode_to<W>(&self, data: &[u8], out: &mut W) -> Result<(), Error>
    where
        W: fmt::Write + ?Sized,
    {
        let want = encoded_len(data.len()).assume("`data.len()` is at most `isize::MAX`")?;

        let mut written = 0usize;
        let mut phase = Phase::Carry0;
        let mut carry = 0u8;
        let mut bytes = data.iter().copied().peekable();
        while let Some(&b) = bytes.peek() {
            let sextet = match phase {
                Phase::Carry0 => {
                    carry = (b << 4) & MASK;
                    b >> 2
                }
                Phase::Carry2 => {
                    let s = carry | (b >> 4);
                    carry = (b << 2) & MASK;
                    s
                }
                Phase::Carry4 => {
                    let s = carry | (b >> 6);
                    carry = b & MASK;
                    s
                }
                Phase::Carry6 => mem::take(&mut carry),
            };
            // Flushing a whole carried sextet does not consume
            // `b`.
            if phase != Phase::Carry6 {
                bytes.next();
            }
            self.put(out, sextet)?;
            written = written.checked_add(1).assume("`written <= want`")?;
            phase = phase.next();
        }

        if carry != 0 {
            self.put(out, carry)?;
        } else if written < want {
            self.put(out, 0)?;
        }
        Ok(())
    }

    fn put<W>(&self, out: &mut W, sextet: u8) -> Result<(), Error>
    where
        W: fmt::Write + ?Sized,
    {
        let symbol = self
            .alphabet
            .symbol(sextet)
            .assume("`sextet` is less than 64")?;
        out.write_char(symbol)?;
        Ok(())
    }

    /// Decodes `text` into bytes.
    ///
    /// Every symbol must be part of the active alphabet. Bits
    /// past the last whole byte are ignored.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let sextets = text
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                self.alphabet
                    .value_of(symbol)
                    .ok_or(Error::UnknownSymbol { symbol, index })
            })
            .collect::<Result<Vec<u8>, _>>()
            .inspect_err(|err| trace!(%err, "unable to decode"))?;

        let mut out = Vec::with_capacity(decoded_len(sextets.len()));
        let mut phase = Phase::Carry0;
        for pair in sextets.windows(2) {
            let (hi, lo) = (pair[0], pair[1]);
            let b = match phase {
                Phase::Carry0 => (hi << 2) | (lo >> 4),
                Phase::Carry2 => (hi << 4) | (lo >> 2),
                Phase::Carry4 => (hi << 6) | lo,
                // `hi` was entirely spent on the previous byte.
                Phase::Carry6 => {
                    phase = phase.next();
                    continue;
                }
            };
            out.push(b);
            phase = phase.next();
        }
        debug_assert_eq!(out.len(), decoded_len(sextets.len()));
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;
    use crate::{DEFAULT_ALPHABET, InvalidAlphabetKind};

    #[test]
    fn test_lengths() {
        let tests = [
            (0, 0, 0),
            (1, 2, 1),
            (2, 3, 2),
            (3, 4, 3),
            (4, 6, 4),
            (5, 7, 5),
            (30, 40, 30),
        ];
        for (n, enc, dec) in tests {
            assert_eq!(encoded_len(n), Some(enc), "{n}");
            assert_eq!(decoded_len(enc), dec, "{n}");
        }
        assert_eq!(decoded_len(5), 3);
        assert_eq!(encoded_len(usize::MAX), None);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Codec::new().encode(&[]).unwrap(), "");
        assert_eq!(Codec::new().decode("").unwrap(), b"");
    }

    #[test]
    fn test_encode_zero_byte() {
        let codec = Codec::new();
        assert_eq!(codec.encode(&[0x00]).unwrap(), "AA");
        assert_eq!(codec.encode(&[0x00, 0x00, 0x00]).unwrap(), "AAAA");
        assert_eq!(codec.decode("AA").unwrap(), [0x00]);
    }

    #[test]
    fn test_known_values() {
        let tests: &[(&[u8], &str)] = &[
            (b"f", "Zg"),
            (b"fo", "Zm8"),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg"),
            (b"fooba", "Zm9vYmE"),
            (b"foobar", "Zm9vYmFy"),
            (&[0xff], "-w"),
            (&[0xff, 0xff, 0xff], "----"),
            (&[0xfb, 0xef, 0xbe], "++++"),
            (&[0x00, 0x00, 0x3f], "AAA-"),
        ];
        let codec = Codec::new();
        for (i, &(data, text)) in tests.iter().enumerate() {
            assert_eq!(codec.encode(data).unwrap(), text, "#{i}");
            assert_eq!(codec.decode(text).unwrap(), data, "#{i}");
        }
    }

    #[test]
    fn test_decode_unknown_symbol() {
        let err = Codec::new().decode("A!").unwrap_err();
        assert!(
            matches!(err, Error::UnknownSymbol { symbol: '!', index: 1 }),
            "{err:?}"
        );
    }

    #[test]
    fn test_decode_unknown_symbol_past_last_byte() {
        // The fifth symbol contributes no bits to the output, but
        // it still has to be part of the alphabet.
        let err = Codec::new().decode("AAAA=").unwrap_err();
        assert!(
            matches!(err, Error::UnknownSymbol { symbol: '=', index: 4 }),
            "{err:?}"
        );
    }

    #[test]
    fn test_decode_drops_trailing_bits() {
        let codec = Codec::new();
        // "Zh" carries "f" plus four non-zero trailing bits.
        assert_eq!(codec.decode("Zh").unwrap(), b"f");
        assert_eq!(codec.decode("Z").unwrap(), b"");
    }

    #[test]
    fn test_set_alphabet_rejected_keeps_previous() {
        let mut codec = Codec::new();
        let err = codec.set_alphabet("short").unwrap_err();
        assert_eq!(err.kind(), InvalidAlphabetKind::WrongLength);

        let dup = format!("{}{}", &DEFAULT_ALPHABET[1..], &DEFAULT_ALPHABET[1..2]);
        let err = codec.set_alphabet(&dup).unwrap_err();
        assert_eq!(err.kind(), InvalidAlphabetKind::Duplicate);

        assert_eq!(codec.alphabet().as_str(), DEFAULT_ALPHABET);
        assert_eq!(codec.encode(&[0x00]).unwrap(), "AA");
    }

    #[test]
    fn test_set_alphabet_non_ascii() {
        let mut codec = Codec::new();
        let alpha = format!("{}Ü", &DEFAULT_ALPHABET[1..]);
        codec.set_alphabet(&alpha).unwrap();
        assert_eq!(codec.alphabet().as_str(), alpha);

        let text = codec.encode(&[0xff, 0xff, 0xff]).unwrap();
        assert_eq!(text, "ÜÜÜÜ");
        assert_eq!(codec.decode(&text).unwrap(), [0xff, 0xff, 0xff]);
        // 'A' is no longer part of the alphabet.
        assert!(matches!(
            codec.decode("AA"),
            Err(Error::UnknownSymbol { symbol: 'A', index: 0 })
        ));
    }

    #[test]
    fn test_replace_alphabet() {
        let mut codec = Codec::new();
        let rev: String = DEFAULT_ALPHABET.chars().rev().collect();
        let old = codec.replace_alphabet(Alphabet::new(&rev).unwrap());
        assert_eq!(old, Alphabet::standard());
        assert_eq!(codec.encode(&[0x00]).unwrap(), "--");
    }

    #[test]
    fn test_encode_to_failing_writer() {
        struct Full;
        impl fmt::Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        let err = Codec::new().encode_to(b"x", &mut Full).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)), "{err:?}");
    }
}
