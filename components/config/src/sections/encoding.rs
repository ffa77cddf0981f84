use fixed_radix::Format;

use crate::util;

section! {
    #[serde(default)]
    pub struct Encoding {
        /// Output format: `10`, `36`, `62` or `62:swapped-case`
        pub format: Format = Format::BASE62 => "RADIX_FORMAT" | util::parse_format,

        /// Print every supported format instead of just `format`
        pub all: bool = false => "RADIX_ALL" | util::parse_boolean[false],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides() {
        let mut encoding = Encoding::default();

        std::env::set_var("RADIX_FORMAT", "base36");
        std::env::set_var("RADIX_ALL", "true");
        encoding.apply_overrides();
        std::env::remove_var("RADIX_FORMAT");
        std::env::remove_var("RADIX_ALL");

        assert_eq!(encoding.format, Format::BASE36);
        assert!(encoding.all);
    }
}
