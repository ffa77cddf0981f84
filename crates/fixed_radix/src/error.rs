use smol_str::SmolStr;

use crate::format::Variant;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Empty input")]
    Empty,

    #[error("Negative values cannot be encoded")]
    Negative,

    #[error("Value does not fit in 128 bits")]
    Overflow,

    #[error("Invalid hexidecimal digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid character '{symbol}' at position {index}")]
    InvalidSymbol { symbol: char, index: usize },

    #[error("Unsupported radix: {0}")]
    UnsupportedRadix(SmolStr),

    #[error("Unknown alphabet: {0}")]
    UnknownAlphabet(SmolStr),

    #[error("Base {radix} has no {variant} alphabet")]
    UnsupportedVariant { radix: u32, variant: Variant },
}

impl Error {
    /// The input value itself is not a valid non-negative 128-bit value
    pub fn is_precondition(&self) -> bool {
        !self.is_unsupported()
    }

    /// The requested radix or alphabet does not exist
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedRadix(_) | Error::UnknownAlphabet(_) | Error::UnsupportedVariant { .. }
        )
    }
}
