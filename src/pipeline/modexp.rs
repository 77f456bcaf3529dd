use num_bigint::BigInt;

/// Public exponent of the obfuscating exponentiation
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Fixed modulus: 2^128 - 159
/// Built arithmetically so construction cannot fail
pub fn modulus() -> BigInt {
    (BigInt::from(1u8) << 128usize) - BigInt::from(159u8)
}

/// Raise the input, read as a signed big-endian integer, to the fixed
/// public exponent modulo `modulus()`, and return the result's signed
/// big-endian byte encoding
/// Pure obfuscation: the modulus and exponent are public and nothing ever
/// inverts this. `modpow` rounds like `mod_floor`, so negative inputs land
/// in `[0, modulus)` as well.
pub fn modexp_transform(data: &[u8]) -> Vec<u8> {
    let value = BigInt::from_signed_bytes_be(data);
    let reduced = value.modpow(&BigInt::from(PUBLIC_EXPONENT), &modulus());
    reduced.to_signed_bytes_be()
}
