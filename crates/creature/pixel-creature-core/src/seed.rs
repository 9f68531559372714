//! Name hashing and seed combination.

/// Substituted whenever a seed would otherwise be zero (xorshift fixed point).
pub const FALLBACK_SEED: u32 = 0x9e37_79b9;

/// Offset added to each character's position when weighting its code.
const POSITION_OFFSET: u32 = 17;

/// Sum of each lower-cased UTF-16 code unit weighted by `index + 17`.
///
/// The name is trimmed first. Arithmetic wraps at 32 bits, so arbitrarily
/// long names still hash to a well-defined value; `""` hashes to `0`.
pub fn name_to_seed(name: &str) -> u32 {
    name.trim()
        .to_lowercase()
        .encode_utf16()
        .enumerate()
        .fold(0u32, |acc, (index, unit)| {
            let weight = (index as u32).wrapping_add(POSITION_OFFSET);
            acc.wrapping_add(u32::from(unit).wrapping_mul(weight))
        })
}

/// XOR the name hash with a variation value, never returning zero.
pub fn combine_seed(name: &str, variation_seed: u32) -> u32 {
    match name_to_seed(name) ^ variation_seed {
        0 => FALLBACK_SEED,
        seed => seed,
    }
}
