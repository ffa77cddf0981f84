use smol_str::SmolStr;

use crate::alphabet::Alphabet;
use crate::format::{Radix, MAX_WIDTH};
use crate::{Digest, Format};

/// Writes the digits of `x` into the tail of `out`, most significant first.
///
/// `out` must already be filled with the zero symbol and be wide enough for `x`.
#[inline(always)]
fn fill<const RADIX: u128>(mut x: u128, alphabet: &Alphabet, out: &mut [u8]) {
    debug_assert_eq!(alphabet.radix() as u128, RADIX);

    let mut i = out.len();

    while x != 0 {
        i -= 1;
        out[i] = alphabet.symbol((x % RADIX) as usize);
        x /= RADIX;
    }
}

/// Encodes into `buf`, returning the `format.width()` prefix as a string.
pub fn encode_into(digest: Digest, format: Format, buf: &mut [u8; MAX_WIDTH]) -> &str {
    let alphabet = format.alphabet();
    let out = &mut buf[..format.width()];

    out.fill(alphabet.zero());

    let x = digest.as_u128();

    // constant divisors let the compiler avoid a full 128-bit division per digit
    match format.radix() {
        Radix::Base10 => fill::<10>(x, alphabet, out),
        Radix::Base36 => fill::<36>(x, alphabet, out),
        Radix::Base62 => fill::<62>(x, alphabet, out),
    }

    // alphabets are ASCII-only
    unsafe { std::str::from_utf8_unchecked(out) }
}

/// Encodes a digest as a zero-padded string of exactly `format.width()` characters
pub fn encode(digest: Digest, format: Format) -> SmolStr {
    let mut buf = [0u8; MAX_WIDTH];
    SmolStr::new(encode_into(digest, format, &mut buf))
}

#[inline]
pub fn encode_u128(x: u128, format: Format) -> SmolStr {
    encode(Digest::from_u128(x), format)
}
