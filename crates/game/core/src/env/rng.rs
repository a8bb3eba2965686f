//! RNG oracle for injectable random number generation.
//!
//! Every random draw in the game (species choice, reward item, decorator coin,
//! damage rolls, warlock attack bands) flows through a single [`RngOracle`]
//! threaded into the generation and combat entry points. Nothing in the core
//! owns a hidden generator.
//!
//! # Determinism
//!
//! [`PcgRng`] produces the same sequence for the same seed, so a whole session
//! can be replayed. [`ScriptedRng`] replays an exact list of draws and is what
//! tests use to force particular rolls.

use std::collections::VecDeque;

/// Source of uniformly distributed integers.
///
/// All ranges are inclusive on both ends. Implementations only need
/// [`next_u32`](Self::next_u32); the remaining methods derive from
/// [`range`](Self::range), which scripted sources override to replay exact values.
pub trait RngOracle: Send {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32() % span)
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.range(1, sides)
    }

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used to pick a warlock's attack band.
    fn roll_d100(&mut self) -> u32 {
        self.range(1, 100)
    }

    /// Fair coin: `true` for heads.
    fn coin_flip(&mut self) -> bool {
        self.range(0, 1) == 0
    }

    /// Uniform index into a collection of `len` elements (`len` must be non-zero).
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on an empty collection");
        let upper = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.range(0, upper) as usize
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose stream is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let current = self.state;
        self.state = Self::pcg_step(current);
        Self::pcg_output(current)
    }
}

/// Replays a fixed list of draws in order.
///
/// Each call to [`range`](RngOracle::range) consumes the next scripted value,
/// which must already lie inside the requested bounds. Scripted values are
/// outcomes, not raw entropy: scripting `3` for a `1..=4` damage roll yields
/// exactly `3 × level` damage.
///
/// # Panics
///
/// Panics when the script runs out or a value falls outside the requested
/// range; a mis-scripted replay is a bug in the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    script: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    /// Appends further draws to the end of the script.
    pub fn push(&mut self, values: impl IntoIterator<Item = u32>) {
        self.script.extend(values);
    }

    /// Number of draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn pop(&mut self) -> u32 {
        match self.script.pop_front() {
            Some(value) => value,
            None => panic!("scripted rng exhausted"),
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.pop()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        let value = self.pop();
        assert!(
            (min..=max).contains(&value),
            "scripted value {value} outside requested range {min}..={max}"
        );
        value
    }
}

/// Compute deterministic seed from session components.
///
/// Combines multiple entropy sources so that each floor (and each independent
/// stream within a floor) gets its own seed.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at session start (for replay/determinism)
/// * `floor` - Floor counter (increments on every descent)
/// * `context` - Distinguishes independent streams on the same floor
pub fn compute_seed(game_seed: u64, floor: u64, context: u32) -> u64 {
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = game_seed;

    hash ^= floor.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
