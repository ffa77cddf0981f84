//! MD5 as a digest source, with one helper per output format.

use ::md5::{Digest as _, Md5};
use smol_str::SmolStr;

use crate::{encode, Digest, Format};

pub fn md5(data: impl AsRef<[u8]>) -> Digest {
    let hash = Md5::digest(data.as_ref());

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash);

    Digest::from_bytes(bytes)
}

pub fn md5_encoded(data: impl AsRef<[u8]>, format: Format) -> SmolStr {
    encode(md5(data), format)
}

/// 39 decimal digits
pub fn md5_base10(data: impl AsRef<[u8]>) -> SmolStr {
    md5_encoded(data, Format::BASE10)
}

/// 25 characters of `[0-9a-z]`
pub fn md5_base36(data: impl AsRef<[u8]>) -> SmolStr {
    md5_encoded(data, Format::BASE36)
}

/// 22 characters of `[0-9a-zA-Z]`
pub fn md5_base62(data: impl AsRef<[u8]>) -> SmolStr {
    md5_encoded(data, Format::BASE62)
}

/// 22 characters of `[0-9A-Za-z]`, the case-swapped counterpart of [`md5_base62`]
pub fn md5_base62_upper_first(data: impl AsRef<[u8]>) -> SmolStr {
    md5_encoded(data, Format::BASE62_SWAPPED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_digest() {
        assert_eq!(md5("").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5("abc").to_hex(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5(b"hello world"), md5("hello world"));
    }

    #[test]
    fn test_md5_empty() {
        assert_eq!(md5_base10(""), "281949768489412648962353822266799178366");
        assert_eq!(md5_base36(""), "ck2u8j60r58fu0sgyxrigm3cu");
        assert_eq!(md5_base62(""), "6sfSqfOwzkG7dz3i6Vldpk");
        assert_eq!(md5_base62_upper_first(""), "6SFsQFoWZKg7DZ3I6vLDPK");
    }

    #[test]
    fn test_md5_hello_world() {
        assert_eq!(md5_base10("hello world"), "125893641179230474042701625388361764291");
        assert_eq!(md5_base36("hello world"), "5luw5ld8t195dpiliva0krvsz");
        assert_eq!(md5_base62("hello world"), "2SIyH7gjExZ74B2pirixcT");
        assert_eq!(md5_base62_upper_first("hello world"), "2siYh7GJeXz74b2PIRIXCt");
    }

    #[test]
    fn test_md5_abc() {
        assert_eq!(md5_base10("abc"), "191415658344158766168031473277922803570");
        assert_eq!(md5_base36("abc"), "8iwzik1bwczwanvt8k8d8ylwy");
        assert_eq!(md5_base62("abc"), "4nJuKtAZ87fzTO8HBwio6e");
        assert_eq!(md5_base62_upper_first("abc"), "4NjUkTaz87FZto8hbWIO6E");
    }
}
