use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG for a game seed.
///
/// Implementation detail:
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - The returned RNG drives shuffling, random reinsertion and random card
///   sampling; equal seeds replay equal games.
#[inline]
pub fn rng_from_seed(seed: u64) -> impl Rng {
    Pcg64::seed_from_u64(seed)
}
