//! Operating system entropy exposed as `rand_core` traits.

use rand_core::{CryptoRng, RngCore};

/// Scale factor mapping the top 53 bits of a `u64` onto `[0, 1)`.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Human readable name of the entropy backing [`SecureRandom`].
pub fn entropy_source() -> &'static str {
    "getrandom (OS CSPRNG)"
}

/// Cryptographically secure random source backed by `getrandom`.
///
/// Stateless: every draw reads fresh bytes from the operating system, which
/// seeds itself. There is no reseed operation.
///
/// # Panics
///
/// Every method panics if the operating system cannot supply entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom;

impl SecureRandom {
    pub fn new() -> Self {
        SecureRandom
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        if let Err(e) = getrandom::fill(dst) {
            panic!("secure random: OS entropy source failed: {e}");
        }
    }
}

impl CryptoRng for SecureRandom {}

// =============================================================================
// Uniform floats
// =============================================================================

/// Uniform doubles in `[0, 1)` drawn from 64 random bits.
pub trait UnitFloat {
    /// Returns a double in `[0, 1)`.
    ///
    /// The low 11 bits of the draw are discarded so the remaining 53 fit the
    /// mantissa exactly. The result is never rounded up to `1.0`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UnitFloat for R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }
}
