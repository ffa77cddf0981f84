use crate::{Digest, Error, Format};

/// Parses a string in the given format back into a digest.
///
/// Any number of leading zero symbols are accepted, so the input need not be fixed-width.
pub fn decode(s: &str, format: Format) -> Result<Digest, Error> {
    if s.is_empty() {
        return Err(Error::Empty);
    }

    let alphabet = format.alphabet();
    let radix = alphabet.radix() as u128;

    let mut x: u128 = 0;

    for (index, symbol) in s.char_indices() {
        let digit = match u8::try_from(symbol).ok().and_then(|c| alphabet.digit(c)) {
            Some(digit) => digit,
            None => return Err(Error::InvalidSymbol { symbol, index }),
        };

        x = match x.checked_mul(radix).and_then(|x| x.checked_add(digit as u128)) {
            Some(x) => x,
            None => return Err(Error::Overflow),
        };
    }

    Ok(Digest::from_u128(x))
}

/// Like [`decode`], but only accepts exactly `format.width()` characters
pub fn decode_fixed(s: &str, format: Format) -> Result<Digest, Error> {
    if s.len() != format.width() {
        return Err(Error::InvalidLength {
            expected: format.width(),
            found: s.len(),
        });
    }

    decode(s, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known() {
        assert_eq!(decode("7N42dgm5tFLK9N8MT7fHC7", Format::BASE62), Ok(Digest::MAX));
        assert_eq!(decode("7n42DGM5Tflk9n8mt7Fhc7", Format::BASE62_SWAPPED), Ok(Digest::MAX));
        assert_eq!(decode("f5lxx1zz5pnorynqglhzmsp33", Format::BASE36), Ok(Digest::MAX));
        assert_eq!(decode("340282366920938463463374607431768211455", Format::BASE10), Ok(Digest::MAX));

        assert_eq!(decode("10", Format::BASE62), Ok(Digest::from_u128(62)));
        assert_eq!(decode("0000000000000000000010", Format::BASE62), Ok(Digest::from_u128(62)));
        assert_eq!(decode("0", Format::BASE36), Ok(Digest::ZERO));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("", Format::BASE10), Err(Error::Empty));

        assert_eq!(
            decode("12a", Format::BASE10),
            Err(Error::InvalidSymbol { symbol: 'a', index: 2 })
        );

        assert_eq!(
            decode("ck_2", Format::BASE36),
            Err(Error::InvalidSymbol { symbol: '_', index: 2 })
        );

        assert_eq!(
            decode("0é", Format::BASE62),
            Err(Error::InvalidSymbol { symbol: 'é', index: 1 })
        );

        // 2^128
        assert_eq!(decode("340282366920938463463374607431768211456", Format::BASE10), Err(Error::Overflow));
        assert_eq!(decode("zzzzzzzzzzzzzzzzzzzzzzzzz", Format::BASE36), Err(Error::Overflow));
    }

    #[test]
    fn test_decode_base36_case_insensitive() {
        let lower = decode("ck2u8j60r58fu0sgyxrigm3cu", Format::BASE36);

        assert_eq!(lower, Ok("d41d8cd98f00b204e9800998ecf8427e".parse().unwrap()));
        assert_eq!(decode("CK2U8J60R58FU0SGYXRIGM3CU", Format::BASE36), lower);
        assert_eq!(decode("Ck2U8j60R58fU0sGyXrIgM3cU", Format::BASE36), lower);
        assert_eq!(decode("F5LXX1ZZ5PNORYNQGLHZMSP33", Format::BASE36), Ok(Digest::MAX));
        assert_eq!(decode("Z", Format::BASE36), Ok(Digest::from_u128(35)));

        // case still matters in base 62
        assert_ne!(decode("abc", Format::BASE62), decode("ABC", Format::BASE62));
        assert_eq!(
            decode("1A", Format::BASE10),
            Err(Error::InvalidSymbol { symbol: 'A', index: 1 })
        );
    }

    #[test]
    fn test_decode_fixed() {
        assert_eq!(
            decode_fixed("10", Format::BASE62),
            Err(Error::InvalidLength { expected: 22, found: 2 })
        );

        assert_eq!(decode_fixed("0000000000000000000010", Format::BASE62), Ok(Digest::from_u128(62)));
    }
}
