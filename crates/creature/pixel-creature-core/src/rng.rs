//! 32-bit xorshift generator driving every random decision of a generation.

use crate::seed::FALLBACK_SEED;

/// Inclusive integer range used by preset tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Xorshift (13, 17, 5) over a `u32` state.
///
/// The output sequence is a pure function of the seed and the number of calls.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// `state / 0xFFFFFFFF`, so `1.0` is reachable for the single state `u32::MAX`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform integer in `[min, max]`.
    pub fn int_between(&mut self, min: i32, max: i32) -> i32 {
        scale_unit(self.next_f64(), min, max)
    }

    #[inline]
    pub fn int_in(&mut self, range: IntRange) -> i32 {
        self.int_between(range.min, range.max)
    }

    /// Uniform pick from a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty; every table this is called on is static and
    /// non-empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        debug_assert!(!items.is_empty(), "choose() called on an empty slice");
        let index = self.int_between(0, items.len() as i32 - 1);
        &items[index as usize]
    }

    /// `true` with probability just under one half (`next() > 0.5`).
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }
}

/// `floor(unit * (max - min + 1)) + min`, capped at `max` for `unit == 1.0`.
#[inline]
fn scale_unit(unit: f64, min: i32, max: i32) -> i32 {
    let span = f64::from(max - min + 1);
    ((unit * span).floor() as i32 + min).min(max)
}
