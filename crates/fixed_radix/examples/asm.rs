use fixed_radix::{encode_into, Digest, Format, MAX_WIDTH};
use smol_str::SmolStr;

#[inline(never)]
#[no_mangle]
pub fn test128_to_b62(x: u128, buf: &mut [u8; MAX_WIDTH]) -> usize {
    encode_into(Digest::from_u128(x), Format::BASE62, buf).len()
}

#[inline(never)]
#[no_mangle]
pub fn test128_to_b10(x: u128, buf: &mut [u8; MAX_WIDTH]) -> usize {
    encode_into(Digest::from_u128(x), Format::BASE10, buf).len()
}

#[inline(never)]
#[no_mangle]
pub fn test128_to_b36(x: u128) -> SmolStr {
    fixed_radix::encode_u128(x, Format::BASE36)
}

#[inline(never)]
#[no_mangle]
pub fn test128_to_hex(x: u128) -> SmolStr {
    Digest::from_u128(x).to_hex()
}

fn main() {}
