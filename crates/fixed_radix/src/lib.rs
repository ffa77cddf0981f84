//! Fixed-width text encodings of 128-bit digests.
//!
//! A [`Digest`] is rendered in base 10, base 36 or one of two base 62 alphabets, and the
//! output always has the same length for a given [`Format`] no matter how small the value is:
//!
//! | format           | alphabet      | width |
//! |------------------|---------------|-------|
//! | `10`             | `0-9`         | 39    |
//! | `36`             | `0-9a-z`      | 25    |
//! | `62`             | `0-9a-zA-Z`   | 22    |
//! | `62:swapped-case`| `0-9A-Za-z`   | 22    |
//!
//! ```
//! use fixed_radix::{md5, Format};
//!
//! let id = md5::md5_encoded("hello world", Format::BASE62);
//! assert_eq!(id, "2SIyH7gjExZ74B2pirixcT");
//! ```

pub mod alphabet;
pub mod decode;
pub mod digest;
pub mod encode;
pub mod error;
pub mod format;
pub mod md5;

pub use decode::{decode, decode_fixed};
pub use digest::Digest;
pub use encode::{encode, encode_into, encode_u128};
pub use error::Error;
pub use format::{Format, Radix, Variant, MAX_WIDTH};
