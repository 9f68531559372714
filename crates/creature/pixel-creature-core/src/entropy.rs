//! Variation-seed sources.
//!
//! The generator never reaches for global randomness itself: callers hand it
//! an [`EntropySource`], which makes every output reproducible in tests.

/// Supplies the per-call variation seed.
pub trait EntropySource {
    fn next_u32(&mut self) -> u32;
}

/// Always yields the same value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedEntropy(pub u32);

impl EntropySource for FixedEntropy {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

impl<F> EntropySource for F
where
    F: FnMut() -> u32,
{
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self()
    }
}

/// Operating-system randomness, falling back to the thread-local PRNG when
/// the OS source is unavailable.
#[cfg(feature = "system-entropy")]
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemEntropy;

#[cfg(feature = "system-entropy")]
impl EntropySource for SystemEntropy {
    fn next_u32(&mut self) -> u32 {
        use rand::RngCore;

        let mut bytes = [0u8; 4];
        match rand::rngs::OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => u32::from_le_bytes(bytes),
            Err(err) => {
                log::debug!("OS entropy unavailable ({err}); using thread_rng");
                rand::thread_rng().next_u32()
            }
        }
    }
}
