//! IV generation with an explicit randomness fallback chain.
//!
//! IVs come from the operating system's strong random source whenever it is
//! available. If that fails, generation falls back to the thread-local
//! generator, and as a last resort to a clock-seeded PRNG. The tier that was
//! actually used is reported alongside the bytes so callers can surface it
//! in diagnostics.

use rand::rngs::{OsRng, StdRng};
use rand::{thread_rng, RngCore, SeedableRng};

/// The randomness source tier that produced a value.
///
/// Tiers are ordered strongest first; [`RandomTier::SeededClock`] is a
/// known weakness kept only so encryption keeps working on hosts where no
/// random device can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomTier {
    /// OS-provided strong random source.
    OsStrong,
    /// Thread-local generator, reseeded periodically from the OS.
    ThreadLocal,
    /// PRNG seeded from the system clock. Not cryptographically strong.
    SeededClock,
}

/// Fill `buf` with random bytes, returning the tier that supplied them.
pub fn fill_random(buf: &mut [u8]) -> RandomTier {
    if OsRng.try_fill_bytes(buf).is_ok() {
        return RandomTier::OsStrong;
    }
    if thread_rng().try_fill_bytes(buf).is_ok() {
        return RandomTier::ThreadLocal;
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    StdRng::seed_from_u64(seed).fill_bytes(buf);
    RandomTier::SeededClock
}

/// Generate a fresh IV of `len` bytes.
pub fn generate_iv(len: usize) -> (Vec<u8>, RandomTier) {
    let mut iv = vec![0u8; len];
    let tier = fill_random(&mut iv);
    (iv, tier)
}
