use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use smol_str::SmolStr;

use crate::{Error, Format};

/// A 128-bit digest, treated as one big-endian unsigned integer.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Digest(u128);

impl Digest {
    /// Size of a digest in bytes
    pub const LEN: usize = 16;

    pub const ZERO: Digest = Digest(0);
    pub const MAX: Digest = Digest(u128::MAX);

    #[inline]
    pub const fn from_bytes(bytes: [u8; 16]) -> Digest {
        Digest(u128::from_be_bytes(bytes))
    }

    #[inline]
    pub const fn from_u128(value: u128) -> Digest {
        Digest(value)
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn as_u128(self) -> u128 {
        self.0
    }

    /// Raw digest output, which must be exactly 16 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Digest, Error> {
        match <[u8; 16]>::try_from(bytes) {
            Ok(bytes) => Ok(Digest::from_bytes(bytes)),
            Err(_) => Err(Error::InvalidLength {
                expected: Self::LEN,
                found: bytes.len(),
            }),
        }
    }

    /// Big-endian integer of any length, as long as the value itself fits in 128 bits.
    ///
    /// An empty slice is zero.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Digest, Error> {
        let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[first..];

        if significant.len() > Self::LEN {
            return Err(Error::Overflow);
        }

        let mut buf = [0u8; 16];
        buf[Self::LEN - significant.len()..].copy_from_slice(significant);

        Ok(Digest::from_bytes(buf))
    }

    /// Parses a hexidecimal integer of up to 128 significant bits.
    ///
    /// Leading zeroes and a `+` sign are accepted, so `"00ff"` and `"ff"` are the same digest.
    pub fn parse_hex(s: &str) -> Result<Digest, Error> {
        let digits = match s.as_bytes().first() {
            None => return Err(Error::Empty),
            Some(b'-') => return Err(Error::Negative),
            Some(b'+') => &s[1..],
            Some(_) => s,
        };

        if digits.is_empty() {
            return Err(Error::Empty);
        }

        if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex::FromHexError::InvalidHexCharacter { c, index }));
        }

        let digits = digits.trim_start_matches('0').as_bytes();

        if digits.len() > Self::LEN * 2 {
            return Err(Error::Overflow);
        }

        // left-pad to an even, fixed number of nibbles
        let mut padded = [b'0'; 32];
        padded[32 - digits.len()..].copy_from_slice(digits);

        let mut bytes = [0u8; 16];
        hex::decode_to_slice(padded, &mut bytes)?;

        Ok(Digest::from_bytes(bytes))
    }

    /// 32 lowercase hexidecimal characters
    pub fn to_hex(self) -> SmolStr {
        let mut buf = [0u8; 32];

        match hex::encode_to_slice(self.to_bytes(), &mut buf) {
            // hex output is always ASCII
            Ok(()) => SmolStr::new(unsafe { std::str::from_utf8_unchecked(&buf) }),
            Err(_) => unreachable!("32 bytes is exactly enough for 16 bytes of hex"),
        }
    }

    #[inline]
    pub fn encode(self, format: Format) -> SmolStr {
        crate::encode(self, format)
    }
}

impl From<[u8; 16]> for Digest {
    #[inline]
    fn from(bytes: [u8; 16]) -> Digest {
        Digest::from_bytes(bytes)
    }
}

impl From<u128> for Digest {
    #[inline]
    fn from(value: u128) -> Digest {
        Digest(value)
    }
}

impl From<Digest> for u128 {
    #[inline]
    fn from(digest: Digest) -> u128 {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = Error;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Digest::from_slice(bytes)
    }
}

impl TryFrom<i128> for Digest {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        match u128::try_from(value) {
            Ok(value) => Ok(Digest(value)),
            Err(_) => Err(Error::Negative),
        }
    }
}

impl FromStr for Digest {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::parse_hex(s)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}
