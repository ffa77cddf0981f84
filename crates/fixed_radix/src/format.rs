use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, Alphabet};
use crate::Error;

/// Number of digits needed to represent `u128::MAX` in the given radix
pub const fn fixed_width(radix: u128) -> usize {
    let mut x = u128::MAX;
    let mut width = 0;

    while x != 0 {
        x /= radix;
        width += 1;
    }

    width
}

pub const WIDTH_10: usize = fixed_width(10);
pub const WIDTH_36: usize = fixed_width(36);
pub const WIDTH_62: usize = fixed_width(62);

/// Largest width of any supported format, suitable for stack buffers
pub const MAX_WIDTH: usize = WIDTH_10;

const _: () = {
    assert!(WIDTH_10 == 39);
    assert!(WIDTH_36 == 25);
    assert!(WIDTH_62 == 22);
    assert!(MAX_WIDTH >= WIDTH_36 && MAX_WIDTH >= WIDTH_62);
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Radix {
    Base10,
    Base36,
    Base62,
}

impl Radix {
    pub const fn from_value(radix: u32) -> Result<Radix, u32> {
        Ok(match radix {
            10 => Radix::Base10,
            36 => Radix::Base36,
            62 => Radix::Base62,
            _ => return Err(radix),
        })
    }

    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Base10 => 10,
            Radix::Base36 => 36,
            Radix::Base62 => 62,
        }
    }

    /// Fixed output width for this radix
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Radix::Base10 => WIDTH_10,
            Radix::Base36 => WIDTH_36,
            Radix::Base62 => WIDTH_62,
        }
    }
}

impl FromStr for Radix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("base") => &s[4..],
            _ => s,
        };

        match digits.parse::<u32>().map(Radix::from_value) {
            Ok(Ok(radix)) => Ok(radix),
            _ => Err(Error::UnsupportedRadix(s.into())),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

/// Letter ordering within an alphabet. Only base 62 has more than one.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// Digits, lowercase, uppercase
    #[default]
    Standard,

    /// Digits, uppercase, lowercase
    SwappedCase,
}

impl Variant {
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::SwappedCase => "swapped-case",
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const STANDARD: &[&str] = &["standard", "std"];
        const SWAPPED: &[&str] = &["swapped-case", "swapped", "upper-first"];

        if STANDARD.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            return Ok(Variant::Standard);
        }

        if SWAPPED.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            return Ok(Variant::SwappedCase);
        }

        Err(Error::UnknownAlphabet(s.into()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated radix and alphabet pair.
///
/// Textual form is `<radix>[:<variant>]`, such as `36`, `base62` or `62:swapped-case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    radix: Radix,
    variant: Variant,
}

impl Default for Format {
    fn default() -> Self {
        Format::BASE62
    }
}

impl Format {
    pub const BASE10: Format = Format { radix: Radix::Base10, variant: Variant::Standard };
    pub const BASE36: Format = Format { radix: Radix::Base36, variant: Variant::Standard };
    pub const BASE62: Format = Format { radix: Radix::Base62, variant: Variant::Standard };
    pub const BASE62_SWAPPED: Format = Format { radix: Radix::Base62, variant: Variant::SwappedCase };

    /// Every supported format
    pub const ALL: [Format; 4] = [Format::BASE10, Format::BASE36, Format::BASE62, Format::BASE62_SWAPPED];

    pub fn new(radix: Radix, variant: Variant) -> Result<Format, Error> {
        match (radix, variant) {
            (_, Variant::Standard) | (Radix::Base62, Variant::SwappedCase) => Ok(Format { radix, variant }),
            _ => Err(Error::UnsupportedVariant { radix: radix.value(), variant }),
        }
    }

    #[inline]
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    #[inline]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Exact length of every string encoded in this format
    #[inline]
    pub const fn width(&self) -> usize {
        self.radix.width()
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        match (self.radix, self.variant) {
            (Radix::Base10, _) => &alphabet::DECIMAL,
            (Radix::Base36, _) => &alphabet::BASE36,
            (Radix::Base62, Variant::Standard) => &alphabet::BASE62,
            (Radix::Base62, Variant::SwappedCase) => &alphabet::BASE62_SWAPPED,
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.split_once(':') {
            None => Format::new(s.parse()?, Variant::Standard),
            Some((radix, variant)) => Format::new(radix.parse()?, variant.parse()?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Variant::Standard => write!(f, "{}", self.radix),
            variant => write!(f, "{}:{variant}", self.radix),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Format;

    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Format {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Format {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct Visitor;

            impl<'de> de::Visitor<'de> for Visitor {
                type Value = Format;

                fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    f.write_str("radix 10, 36 or 62, optionally followed by `:variant`")
                }

                fn visit_u64<E: de::Error>(self, value: u64) -> Result<Format, E> {
                    self.visit_str(&value.to_string())
                }

                fn visit_i64<E: de::Error>(self, value: i64) -> Result<Format, E> {
                    self.visit_str(&value.to_string())
                }

                fn visit_str<E: de::Error>(self, value: &str) -> Result<Format, E> {
                    value.parse().map_err(E::custom)
                }
            }

            deserializer.deserialize_any(Visitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(Format::BASE10.width(), 39);
        assert_eq!(Format::BASE36.width(), 25);
        assert_eq!(Format::BASE62.width(), 22);
        assert_eq!(Format::BASE62_SWAPPED.width(), 22);

        // 2^128 - 1 just fits, 2^128 would not
        assert_eq!(u128::MAX.to_string().len(), WIDTH_10);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("10".parse::<Format>(), Ok(Format::BASE10));
        assert_eq!("base36".parse::<Format>(), Ok(Format::BASE36));
        assert_eq!("Base62".parse::<Format>(), Ok(Format::BASE62));
        assert_eq!("62:standard".parse::<Format>(), Ok(Format::BASE62));
        assert_eq!("62:swapped-case".parse::<Format>(), Ok(Format::BASE62_SWAPPED));
        assert_eq!("base62:upper-first".parse::<Format>(), Ok(Format::BASE62_SWAPPED));
    }

    #[test]
    fn test_parse_format_errors() {
        assert_eq!("16".parse::<Format>(), Err(Error::UnsupportedRadix("16".into())));
        assert_eq!("hex".parse::<Format>(), Err(Error::UnsupportedRadix("hex".into())));
        assert_eq!("".parse::<Format>(), Err(Error::UnsupportedRadix("".into())));
        assert_eq!("62:reversed".parse::<Format>(), Err(Error::UnknownAlphabet("reversed".into())));

        let err = "36:swapped".parse::<Format>().unwrap_err();
        assert_eq!(err, Error::UnsupportedVariant { radix: 36, variant: Variant::SwappedCase });
        assert!(err.is_unsupported());

        assert!(Format::new(Radix::Base10, Variant::SwappedCase).is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }

        assert_eq!(Format::BASE62_SWAPPED.to_string(), "62:swapped-case");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Format::BASE62_SWAPPED).unwrap(), r#""62:swapped-case""#);
        assert_eq!(serde_json::from_str::<Format>(r#""36""#).unwrap(), Format::BASE36);
        assert_eq!(serde_json::from_str::<Format>("10").unwrap(), Format::BASE10);
        assert!(serde_json::from_str::<Format>("-10").is_err());
    }

    #[test]
    fn test_radix_from_value() {
        assert_eq!(Radix::from_value(36), Ok(Radix::Base36));
        assert_eq!(Radix::from_value(64), Err(64));
    }
}
