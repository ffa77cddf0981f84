//! Symbol tables for each supported radix.
//!
//! Tables are built in `const` context along with their reverse lookup, so a duplicate or
//! non-ASCII symbol is a compile error rather than a runtime surprise.

const INVALID: u8 = 0xFF;

/// An ordered set of distinct ASCII symbols, where the symbol at index `i` represents digit `i`.
#[derive(Debug)]
pub struct Alphabet {
    symbols: &'static [u8],
    lookup: [u8; 256],
}

impl Alphabet {
    const fn new(symbols: &'static [u8]) -> Alphabet {
        assert!(symbols.len() >= 2 && symbols.len() < INVALID as usize, "Invalid alphabet size");

        let mut lookup = [INVALID; 256];
        let mut i = 0;

        while i < symbols.len() {
            let c = symbols[i];

            assert!(c.is_ascii(), "Alphabet symbols must be ASCII");
            assert!(lookup[c as usize] == INVALID, "Duplicate symbol in alphabet");

            lookup[c as usize] = i as u8;
            i += 1;
        }

        Alphabet { symbols, lookup }
    }

    /// Also maps the opposite case of every letter to the same digit. Encoding is unaffected.
    const fn case_insensitive(mut self) -> Alphabet {
        let mut i = 0;

        while i < self.symbols.len() {
            let c = self.symbols[i];

            let folded = match c.is_ascii_lowercase() {
                true => c.to_ascii_uppercase(),
                false => c.to_ascii_lowercase(),
            };

            if folded != c {
                assert!(self.lookup[folded as usize] == INVALID, "Alphabet is not case-insensitive");
                self.lookup[folded as usize] = i as u8;
            }

            i += 1;
        }

        self
    }

    /// Number of symbols, which is also the radix
    #[inline(always)]
    pub const fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    #[inline(always)]
    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The symbol for digit zero, used for left-padding
    #[inline(always)]
    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    /// Symbol for the given digit.
    ///
    /// # Panics
    ///
    /// If `digit >= self.radix()`
    #[inline(always)]
    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    /// Digit value of the given symbol, if it belongs to this alphabet
    #[inline(always)]
    pub fn digit(&self, symbol: u8) -> Option<u8> {
        match self.lookup[symbol as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.lookup[symbol as usize] != INVALID
    }
}

pub static DECIMAL: Alphabet = Alphabet::new(b"0123456789");

/// Encodes with lowercase letters, decodes either case
pub static BASE36: Alphabet = Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyz").case_insensitive();

/// Digits, then lowercase, then uppercase
pub static BASE62: Alphabet = Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Digits, then uppercase, then lowercase. Follows ASCII order, as GMP does.
pub static BASE62_SWAPPED: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix() {
        assert_eq!(DECIMAL.radix(), 10);
        assert_eq!(BASE36.radix(), 36);
        assert_eq!(BASE62.radix(), 62);
        assert_eq!(BASE62_SWAPPED.radix(), 62);
    }

    #[test]
    fn test_zero_symbol() {
        for alphabet in [&DECIMAL, &BASE36, &BASE62, &BASE62_SWAPPED] {
            assert_eq!(alphabet.zero(), b'0');
        }
    }

    #[test]
    fn test_lookup_matches_symbols() {
        for alphabet in [&DECIMAL, &BASE36, &BASE62, &BASE62_SWAPPED] {
            for (i, &c) in alphabet.symbols().iter().enumerate() {
                assert_eq!(alphabet.symbol(i), c);
                assert_eq!(alphabet.digit(c), Some(i as u8));
            }
        }

        assert_eq!(DECIMAL.digit(b'a'), None);
        assert_eq!(BASE36.digit(b'-'), None);
        assert_eq!(BASE62.digit(b'-'), None);
        assert!(!BASE62.contains(0xFF));
    }

    #[test]
    fn test_base36_either_case() {
        for (i, &c) in BASE36.symbols().iter().enumerate() {
            assert_eq!(BASE36.digit(c.to_ascii_uppercase()), Some(i as u8));
        }

        assert_eq!(BASE36.digit(b'A'), Some(10));
        assert_eq!(BASE36.digit(b'Z'), Some(35));
        assert!(BASE36.symbols().iter().all(|c| !c.is_ascii_uppercase()));

        // letters are distinct digits in base 62
        assert_ne!(BASE62.digit(b'a'), BASE62.digit(b'A'));
    }

    #[test]
    fn test_base62_ordering() {
        assert_eq!(BASE62.digit(b'a'), Some(10));
        assert_eq!(BASE62.digit(b'A'), Some(36));

        assert_eq!(BASE62_SWAPPED.digit(b'A'), Some(10));
        assert_eq!(BASE62_SWAPPED.digit(b'a'), Some(36));

        // same digit, opposite case
        for i in 10..62 {
            assert_eq!(BASE62.symbol(i).swap_case(), BASE62_SWAPPED.symbol(i));
        }
    }

    trait SwapCase {
        fn swap_case(self) -> Self;
    }

    impl SwapCase for u8 {
        fn swap_case(self) -> u8 {
            if self.is_ascii_lowercase() {
                self.to_ascii_uppercase()
            } else {
                self.to_ascii_lowercase()
            }
        }
    }
}
