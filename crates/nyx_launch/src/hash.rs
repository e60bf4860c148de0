//! Hash-secret derivation.
//!
//! The interpreter core perturbs its string hashing with a process-wide
//! 64-bit secret. The launcher derives that secret here from the resolved
//! seed mode so the core never has to know where the seed came from.

use std::time::{SystemTime, UNIX_EPOCH};

/// Expand a 32-bit seed into the 64-bit process hash secret.
///
/// FNV-1a over the little-endian seed bytes; a given seed always expands
/// to the same secret, so fixed-seed processes hash reproducibly.
pub fn derive_secret(seed: u32) -> u64 {
    const FNV_OFFSET: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;
    let mut h = FNV_OFFSET;
    for b in seed.to_le_bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Draw a fresh seed for `HashSeed::Random` configurations.
///
/// Never returns 0: a zero seed means randomization is disabled.
pub fn random_seed() -> u32 {
    let mut state = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        | 1;
    state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    let seed = (state >> 32) as u32;
    if seed == 0 { 1 } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_deterministic_per_seed() {
        assert_eq!(derive_secret(0), derive_secret(0));
        assert_eq!(derive_secret(42), derive_secret(42));
    }

    #[test]
    fn distinct_seeds_expand_to_distinct_secrets() {
        assert_ne!(derive_secret(0), derive_secret(1));
        assert_ne!(derive_secret(1), derive_secret(2));
    }

    #[test]
    fn random_seed_is_never_zero() {
        for _ in 0..64 {
            assert_ne!(random_seed(), 0);
        }
    }
}
