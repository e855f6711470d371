use std::{fmt::Write as _, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::Board;

/// Threshold on the value draw: draws below it place a 2, the rest a 4.
const TWO_THRESHOLD: f64 = 0.9;

/// Seed for deterministic tile spawning.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator behind [`TileSpawner`]. Using the same seed reproduces the same
/// sequence of spawn positions and values, enabling:
///
/// - Reproducible games for debugging
/// - Deterministic testing
/// - Repeatable benchmark runs
///
/// Serializes as a 32-character hex string, and parses from the same format
/// (for command-line flags).
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use tilefold_engine::{GameSession, SpawnSeed};
///
/// // Generate a random seed
/// let seed: SpawnSeed = rand::rng().random();
///
/// // Two sessions with the same seed spawn identical tiles
/// let session1 = GameSession::with_seed(4, seed)?;
/// let session2 = GameSession::with_seed(4, seed)?;
/// # Ok::<_, tilefold_engine::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpawnSeed([u8; 16]);

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid spawn seed {input:?}: expected 32 hex characters")]
pub struct ParseSeedError {
    pub input: String,
}

impl FromStr for SpawnSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SpawnSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for SpawnSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SpawnSeed` values with `rng.random()`.
impl Distribution<SpawnSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SpawnSeed(seed)
    }
}

/// Places new tiles on the board.
///
/// Owns the random source for both the target-cell and the value draws, so a
/// fixed [`SpawnSeed`] reproduces an exact spawn sequence.
///
/// # Placement heuristic
///
/// The target cell is not uniform in general: when the smallest tile on the
/// board is exactly 2, the new tile lands on the empty cell nearest (by
/// Manhattan distance) to the first occurrence of that minimum, ties going
/// to the earliest cell in row-major order. Any other board state — no tiles
/// at all, or a minimum above 2 — picks uniformly among the empty cells.
///
/// The value is 2 when the draw stays below 0.9 and 4 otherwise; when the
/// board minimum is not 2, the draw is first stretched by
/// `floor(log2(max(score, 1)))`. The stretched draw is not clamped back into
/// `[0, 1)`, so at high scores it exceeds the threshold almost always and 4s
/// dominate.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: Pcg32,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSpawner {
    /// Creates a spawner with a random seed.
    ///
    /// For deterministic spawning, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic spawning.
    #[must_use]
    pub fn with_seed(seed: SpawnSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Places one new tile and returns its position, or `None` (leaving the
    /// board untouched) when no cell is empty.
    pub fn spawn(&mut self, board: &mut Board, score: u64) -> Option<(usize, usize)> {
        let empty = empty_cells(board);
        if empty.is_empty() {
            return None;
        }
        let minimum = minimum_tile(board);

        let (row, col) = match minimum {
            Some((2, min_pos)) => *empty
                .iter()
                .min_by_key(|&&pos| manhattan(pos, min_pos))
                .expect("empty cell list checked non-empty above"),
            _ => empty[self.rng.random_range(0..empty.len())],
        };

        let draw = self.rng.random::<f64>();
        let draw = match minimum {
            Some((2, _)) => draw,
            _ => draw * f64::from(score.max(1).ilog2()),
        };
        let value = if draw < TWO_THRESHOLD { 2 } else { 4 };

        board.set(row, col, value);
        Some((row, col))
    }
}

/// Empty cells in row-major order.
///
/// The order is load-bearing: it breaks distance ties during spawn
/// targeting.
fn empty_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (row, values) in board.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if value == 0 {
                cells.push((row, col));
            }
        }
    }
    cells
}

/// Minimum non-zero tile and the first position holding it in row-major
/// order, or `None` on an all-empty board.
fn minimum_tile(board: &Board) -> Option<(u32, (usize, usize))> {
    let mut minimum = None;
    for (row, values) in board.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            match minimum {
                Some((best, _)) if best <= value => {}
                _ => minimum = Some((value, (row, col))),
            }
        }
    }
    minimum
}

fn manhattan((r1, c1): (usize, usize), (r2, c2): (usize, usize)) -> usize {
    r1.abs_diff(r2) + c1.abs_diff(c2)
}
