use alloc::{string::String, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::error::{InvalidAlphabet, InvalidAlphabetRepr};

/// The number of symbols in an alphabet.
pub const ALPHABET_LEN: usize = 64;

/// The alphabet used by [`Codec::new`][crate::Codec::new].
///
/// Unlike RFC 4648 it ends in `+-` and there is no padding
/// symbol.
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-";

/// Marks an ASCII character that is not part of the alphabet.
const NONE: u8 = 255;

#[allow(clippy::arithmetic_side_effects, clippy::cast_lossless)]
const DEFAULT_SYMBOLS: [char; ALPHABET_LEN] = {
    let b = DEFAULT_ALPHABET.as_bytes();
    let mut symbols = ['\0'; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        symbols[i] = b[i] as char;
        i += 1;
    }
    symbols
};

#[allow(clippy::arithmetic_side_effects)]
const DEFAULT_ASCII: [u8; 128] = {
    let b = DEFAULT_ALPHABET.as_bytes();
    let mut table = [NONE; 128];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[b[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// An ordered set of 64 distinct symbols.
///
/// The symbol at index `i` encodes the sextet `i`. An
/// `Alphabet` is validated on construction and immutable
/// afterward.
#[derive(Clone)]
pub struct Alphabet {
    symbols: [char; ALPHABET_LEN],
    text: String,
    /// Inverse table for ASCII symbols.
    ascii: [u8; 128],
    /// Inverse table for everything else, sorted by symbol.
    other: Vec<(char, u8)>,
}

impl Alphabet {
    /// Creates an alphabet from a string of 64 distinct
    /// characters.
    pub fn new(s: &str) -> Result<Self, InvalidAlphabet> {
        let symbols: Vec<char> = s.chars().collect();
        Self::from_chars(&symbols)
    }

    /// Creates an alphabet from 64 distinct characters.
    pub fn from_chars(symbols: &[char]) -> Result<Self, InvalidAlphabet> {
        let symbols = <[char; ALPHABET_LEN]>::try_from(symbols)
            .map_err(|_| InvalidAlphabet(InvalidAlphabetRepr::WrongLength { len: symbols.len() }))?;

        let mut sorted: Vec<(char, u8)> = symbols.iter().copied().zip(0u8..).collect();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0].0 == w[1].0) {
            let (a, b) = (usize::from(pair[0].1), usize::from(pair[1].1));
            return Err(InvalidAlphabet(InvalidAlphabetRepr::Duplicate {
                symbol: pair[0].0,
                first: a.min(b),
                second: a.max(b),
            }));
        }

        let mut ascii = [NONE; 128];
        let mut other = Vec::new();
        for (c, v) in sorted {
            match ascii.get_mut(c as usize) {
                Some(slot) => *slot = v,
                None => other.push((c, v)),
            }
        }

        Ok(Self {
            symbols,
            text: symbols.iter().collect(),
            ascii,
            other,
        })
    }

    /// Returns the default alphabet, [`DEFAULT_ALPHABET`].
    pub fn standard() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS,
            text: String::from(DEFAULT_ALPHABET),
            ascii: DEFAULT_ASCII,
            other: Vec::new(),
        }
    }

    /// Returns the symbol that encodes `value`, or `None` if
    /// `value` is not a sextet.
    #[inline]
    pub fn symbol(&self, value: u8) -> Option<char> {
        self.symbols.get(usize::from(value)).copied()
    }

    /// Returns the sextet encoded by `symbol`, or `None` if the
    /// symbol is not part of the alphabet.
    #[inline]
    pub fn value_of(&self, symbol: char) -> Option<u8> {
        match self.ascii.get(symbol as usize) {
            Some(&NONE) => None,
            Some(&v) => Some(v),
            None => self
                .other
                .binary_search_by_key(&symbol, |&(c, _)| c)
                .ok()
                .and_then(|i| self.other.get(i))
                .map(|&(_, v)| v),
        }
    }

    /// Reports whether `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.value_of(symbol).is_some()
    }

    /// Returns the symbols in sextet order.
    pub fn symbols(&self) -> &[char; ALPHABET_LEN] {
        &self.symbols
    }

    /// Returns the alphabet as a string.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Eq for Alphabet {}
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Hash for Alphabet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.text)
    }
}

impl AsRef<str> for Alphabet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Alphabet {
    type Err = InvalidAlphabet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = InvalidAlphabet;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = InvalidAlphabet;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}
