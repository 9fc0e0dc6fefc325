//! Deterministic random number generation for board generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical board
//! - **Injectable**: Sessions never touch a global generator; callers pass
//!   a `GameRng` into `start_new_game`
//! - **Replayable**: the state captured before a deal is serializable and
//!   restores in O(1), so any dealt board can be dealt again
//!
//! ```
//! use same_game::core::{Color, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! let first: Vec<Color> = (0..8).map(|_| rng.gen_color(4)).collect();
//! let second: Vec<Color> = (0..8).map(|_| replay.gen_color(4)).collect();
//! assert_eq!(first, second);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::tile::Color;

/// Deterministic RNG used to color freshly generated boards.
///
/// Uses ChaCha8 for speed while keeping high-quality uniform draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept, so the board can still be reproduced from
    /// `seed()` afterwards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a tile color uniformly from `[0, palette_size)`.
    ///
    /// `palette_size` is validated by `GameConfig`; zero is clamped to one
    /// color rather than panicking.
    pub fn gen_color(&mut self, palette_size: usize) -> Color {
        let upper = palette_size.clamp(1, u8::MAX as usize);
        Color(self.inner.gen_range(0..upper) as u8)
    }

    /// Position in the stream, enough to resume drawing from here.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume the stream at a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Where a color stream stood, e.g. right before a board was dealt.
///
/// Stores the ChaCha8 word position, so its size does not depend on how
/// many colors were drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream was created from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
