use std::path::PathBuf;
use std::str::FromStr;

use fixed_radix::Format;

pub fn parse<T: FromStr>(s: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match s.parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring invalid value {s:?}: {e}");
            default
        }
    }
}

pub fn parse_boolean(value: &str, default: bool) -> bool {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        true
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        false
    } else {
        log::warn!("Ignoring invalid boolean {value:?}");
        default
    }
}

pub fn parse_format(value: &str) -> Format {
    parse(value, Format::default())
}

/// Empty paths count as unset
pub fn parse_path(value: &str) -> Option<PathBuf> {
    match value.trim() {
        "" => None,
        value => Some(PathBuf::from(value)),
    }
}
