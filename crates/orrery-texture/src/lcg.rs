//! Linear-congruential pseudo-random sequence used by every texture strategy.

/// Multiplier from Numerical Recipes.
const MULTIPLIER: u32 = 1_664_525;
/// Increment from Numerical Recipes.
const INCREMENT: u32 = 1_013_904_223;
/// 2^32, used to map the 32-bit state into `[0, 1)`.
const STATE_RANGE: f64 = 4_294_967_296.0;

/// 32-bit LCG: `s = s * 1664525 + 1013904223 (mod 2^32)`.
///
/// Cheap and fully deterministic, so the same seed always yields the same
/// sequence on every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator whose first output is derived from `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return it.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / STATE_RANGE
    }

    /// Next value in `[-amplitude / 2, amplitude / 2)`.
    #[inline]
    pub fn centered(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() - 0.5) * amplitude
    }

    /// Next value in `[min, min + span)`.
    #[inline]
    pub fn span(&mut self, min: f64, span: f64) -> f64 {
        min + self.next_f64() * span
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}
