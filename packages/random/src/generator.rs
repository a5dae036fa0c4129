//! Seeded string generation
//!
//! The random source is owned by the generator and advances on every call.
//! It sits behind a mutex so one generator can serve concurrent callers; a
//! whole value is drawn under a single lock acquisition, so for a fixed seed
//! each value is a contiguous slice of the seeded sequence.

use crate::config::Alphabet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Draws strings of a requested length from a fixed alphabet
pub struct Generator {
    alphabet: Alphabet,
    rng: Mutex<StdRng>,
}

impl Generator {
    /// Create a generator whose random source is seeded with `seed`
    #[must_use]
    pub fn new(seed: u64, alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Alphabet characters are drawn from
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generate `length` characters, each drawn uniformly from the alphabet
    ///
    /// Allocates the whole value up front; callers bound `length` (requests are
    /// capped at [`MAX_LENGTH`](crate::config::MAX_LENGTH)).
    #[must_use]
    pub fn generate(&self, length: usize) -> String {
        let chars = self.alphabet.as_chars();
        // A panic elsewhere cannot leave the RNG in a torn state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("alphabet_len", &self.alphabet.len())
            .finish_non_exhaustive()
    }
}
