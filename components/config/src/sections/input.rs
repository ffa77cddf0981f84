use crate::util;

section! {
    #[serde(default)]
    pub struct Input {
        /// Inputs are hexidecimal digests rather than data to be hashed
        pub hex: bool = false => "RADIX_HEX_INPUT" | util::parse_boolean[false],

        /// Strip surrounding whitespace from lines read on stdin
        pub trim: bool = true => "RADIX_TRIM" | util::parse_boolean[true],
    }
}
