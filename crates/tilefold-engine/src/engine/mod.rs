//! Game logic driving the board: moves, tile spawning, and termination.
//!
//! This module provides the high-level logic that operates on the core data
//! structures to implement the sliding-merge puzzle:
//!
//! - [`slide_and_merge`] / [`apply_move`] - the line transform and its four
//!   directional compositions
//! - [`TileSpawner`] - weighted-random placement of new tiles
//! - [`SpawnSeed`] - seed for deterministic spawn sequences
//! - [`is_game_over`] - terminal-state detection
//! - [`GameStats`] - score and turn counters
//! - [`GameSession`] - a full game wiring the pieces together
//!
//! # Game flow
//!
//! A typical game progresses as follows:
//!
//! 1. Create a [`GameSession`]; the board is seeded with two tiles
//! 2. Player/AI picks a direction; [`GameSession::advance`] slides and
//!    merges the board toward it
//! 3. While a move remains possible, one new tile is spawned after the move
//! 4. When no move can change the board, the session flips to game over
//!
//! # Example
//!
//! ```
//! use tilefold_engine::{Direction, GameSession};
//!
//! let mut session = GameSession::new(4)?;
//! session.advance(Direction::Left);
//! session.advance(Direction::Up);
//!
//! println!("score: {}", session.stats().score());
//! # Ok::<_, tilefold_engine::BoardSizeError>(())
//! ```

pub use self::{game_over::*, session::*, slide::*, spawner::*, stats::*};

mod game_over;
mod session;
mod slide;
mod spawner;
mod stats;
