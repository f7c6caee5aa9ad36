//! Seed policy and the generator's random stream
//!
//! One `PromptRng` is owned by one generator. It is initialized exactly once
//! at construction, in one of two modes:
//! - **Linked**: derived deterministically from a caller seed, so identical
//!   seeds replay identical prompt sequences.
//! - **Unlinked**: drawn from OS entropy regardless of any caller seed, so
//!   separately constructed generators diverge.
//!
//! In both modes the stream continues across calls; it is never re-seeded
//! per pick or per prompt.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random stream owned by one prompt generator
#[derive(Debug)]
pub struct PromptRng {
    rng: StdRng,
}

impl PromptRng {
    /// Linked mode: derive the stream from a seed
    pub fn linked(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Unlinked mode: initialize from OS entropy
    pub fn unlinked() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw a pick count from the inclusive `[min, max]` range
    ///
    /// Bounds given in the wrong order are swapped. A degenerate range
    /// returns the bound without consuming a draw, so fixed-count groups
    /// do not advance the stream for the count.
    pub fn pick_count(&mut self, min: usize, max: usize) -> usize {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if min == max {
            min
        } else {
            self.rng.gen_range(min..=max)
        }
    }

    /// Draw a uniform index into a list of `len` elements
    ///
    /// `len` must be at least 1.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
