//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the excitation pipeline flows through this module so
//! that a given seed reproduces the same output byte-for-byte across runs.
//! Component seeds are derived with BLAKE3 so that independent random
//! streams never overlap.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
///
/// # Arguments
/// * `seed` - A 32-bit seed value
///
/// # Returns
/// A deterministically initialized PCG32 generator
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific component from the base seed using a
/// string key.
///
/// Uses BLAKE3 to hash the base seed concatenated with the component key,
/// producing an independent seed for each component.
///
/// # Arguments
/// * `base_seed` - The caller's base seed (u32)
/// * `key` - A string identifier for the component (e.g., "excitation")
///
/// # Returns
/// A derived u32 seed for the component
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    // Concatenate base_seed (as little-endian bytes) and key (as UTF-8)
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    // Hash with BLAKE3
    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a specific component.
///
/// Convenience function that derives the component seed and creates the RNG.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f64> = (0..100).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..100).map(|_| rng2.gen()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);

        let values1: Vec<f64> = (0..10).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..10).map(|_| rng2.gen()).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_component_seed_derivation() {
        let base = 42u32;

        let seed_excitation = derive_component_seed(base, "excitation");
        let seed_other = derive_component_seed(base, "dither");
        assert_ne!(seed_excitation, seed_other);

        // Same key produces same seed
        let seed_excitation2 = derive_component_seed(base, "excitation");
        assert_eq!(seed_excitation, seed_excitation2);
    }

    #[test]
    fn test_component_rng_independence() {
        let mut rng_a = create_component_rng(42, "excitation");
        let mut rng_b = create_component_rng(42, "dither");

        let values_a: Vec<f64> = (0..10).map(|_| rng_a.gen()).collect();
        let values_b: Vec<f64> = (0..10).map(|_| rng_b.gen()).collect();

        assert_ne!(values_a, values_b);
    }
}
