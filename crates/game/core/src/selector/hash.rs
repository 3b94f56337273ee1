//! String hashing for selector seeds.

/// Polynomial rolling hash (`h = h * 31 + c`) over UTF-16 code units.
///
/// Accumulates in wrapping signed 32-bit arithmetic and returns the magnitude,
/// so the result always fits in `u32` (`i32::MIN` maps to `2^31`). UTF-16 units
/// are used rather than bytes or scalar values so non-ASCII pack names hash the
/// same way they do in the browser.
pub fn hash_str(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Seed for a pack on a given calendar date.
///
/// The sum of the two hashes wraps at 32 bits, which the generator would do on
/// its first step anyway.
pub fn daily_seed(pack_id: &str, date: &str) -> u32 {
    hash_str(date).wrapping_add(hash_str(pack_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hashes() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("a"), 97);
        assert_eq!(hash_str("pixar"), 106_680_848);
        assert_eq!(hash_str("2024-06-15"), 613_192_642);
        assert_eq!(hash_str("hello world"), 1_794_106_052);
    }

    #[test]
    fn minimum_signed_hash_maps_to_two_pow_31() {
        assert_eq!(hash_str("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn non_ascii_hashes_by_utf16_unit() {
        assert_eq!(hash_str("été"), 227_742);
    }

    #[test]
    fn daily_seed_sums_both_hashes() {
        assert_eq!(daily_seed("pixar", "2024-06-15"), 106_680_848 + 613_192_642);
    }
}
