//! Seeded generator used for daily target selection.
//!
//! # Determinism
//!
//! The sequence must match the browser client bit for bit, so every step is
//! expressed in wrapping 32-bit arithmetic and the unit value is produced by a
//! single exact division in `f64`.

/// Mulberry32 pseudo-random generator.
///
/// A 32-bit additive counter (Weyl sequence) passed through a multiply/xorshift
/// finalizer. Small state, fast, and trivially portable, which is what the
/// daily selection needs; it is not meant for anything security related.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Weyl sequence increment.
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// 2^32 as an exact float, used to map outputs into `[0, 1)`.
    const UNIT_DIVISOR: f64 = 4_294_967_296.0;

    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);

        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advances the generator and returns a value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::UNIT_DIVISOR
    }

    /// Draws an index in `[0, len)`. Returns 0 for an empty range.
    pub fn next_index(&mut self, len: usize) -> usize {
        scale(self.next_unit(), 0, len)
    }
}

/// Scales a unit draw into `[min, max)` by flooring, clamping to `min` when the
/// range is empty.
pub(crate) fn scale(unit: f64, min: usize, max: usize) -> usize {
    if max <= min {
        return min;
    }
    let span = (max - min) as f64;
    min + (unit * span).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_zero_matches_reference_sequence() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
        assert_eq!(rng.next_u32(), 958_946_056);
    }

    #[test]
    fn seed_42_matches_reference_sequence() {
        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_u32(), 2_581_720_956);
        assert_eq!(rng.next_u32(), 1_925_393_290);
    }

    #[test]
    fn unit_values_stay_below_one() {
        let mut rng = Mulberry32::new(0xDEAD_BEEF);
        for _ in 0..10_000 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn scale_clamps_empty_ranges() {
        assert_eq!(scale(0.99, 4, 4), 4);
        assert_eq!(scale(0.5, 7, 3), 7);
        assert_eq!(scale(0.999_999, 0, 10), 9);
    }
}
