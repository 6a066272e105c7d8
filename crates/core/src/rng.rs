//! RNG module - seeded random source for spawns
//!
//! The game draws from a `rand_pcg::Pcg32` by default. Everything that needs
//! randomness goes through the helpers here so a seed fully determines the
//! sequence of spawn positions, lifetimes and intervals.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::GridPos;

/// Default random source.
pub type GameRng = Pcg32;

/// Create the default RNG from a seed.
pub fn seeded(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Uniform draw from `[lo, hi]`.
///
/// A collapsed window (`hi <= lo`) returns `lo` without consuming a draw.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    rng.random_range(lo..=hi)
}

/// Uniformly random tile on a `cols x rows` grid.
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R, cols: u8, rows: u8) -> GridPos {
    let col = rng.random_range(0..cols.max(1) as i16);
    let row = rng.random_range(0..rows.max(1) as i16);
    GridPos::new(col, row)
}
