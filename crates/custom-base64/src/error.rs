use core::fmt;

use buggy::Bug;

/// Not a valid [`Alphabet`][crate::Alphabet].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(transparent)]
pub struct InvalidAlphabet(pub(crate) InvalidAlphabetRepr);

impl InvalidAlphabet {
    /// Reports why the alphabet was rejected.
    pub fn kind(&self) -> InvalidAlphabetKind {
        match self.0 {
            InvalidAlphabetRepr::WrongLength { .. } => InvalidAlphabetKind::WrongLength,
            InvalidAlphabetRepr::Duplicate { .. } => InvalidAlphabetKind::Duplicate,
        }
    }
}

/// The reason an alphabet was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidAlphabetKind {
    /// The alphabet did not have exactly 64 symbols.
    WrongLength,
    /// A symbol occurred more than once.
    Duplicate,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub(crate) enum InvalidAlphabetRepr {
    #[error("alphabet must have exactly 64 symbols, got {len}")]
    WrongLength {
        /// Number of symbols in the candidate.
        len: usize,
    },
    #[error("alphabet symbol {symbol:?} repeats at indices {first} and {second}")]
    Duplicate {
        symbol: char,
        first: usize,
        second: usize,
    },
}

/// An error returned by [`Codec`][crate::Codec].
#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    /// The alphabet could not be used.
    #[error(transparent)]
    InvalidAlphabet(#[from] InvalidAlphabet),
    /// The text contained a symbol that is not in the active
    /// alphabet.
    #[error("symbol {symbol:?} at index {index} is not in the alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
        /// Index of the symbol, in `char`s.
        index: usize,
    },
    /// The output could not accept an encoded symbol.
    #[error("unable to write encoded symbol")]
    Encoding(#[source] fmt::Error),
    /// An internal invariant was violated.
    #[error("{0}")]
    Bug(Bug),
}

impl From<Bug> for Error {
    fn from(bug: Bug) -> Self {
        Self::Bug(bug)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Encoding(err)
    }
}
