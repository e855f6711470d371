use crate::{
    BoardSizeError,
    core::{Board, Direction},
};

use super::{GameStats, SpawnSeed, TileSpawner, game_over, slide};

/// Play state of a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// One game of the sliding-merge puzzle.
///
/// Owns the board, the score, and the tile spawner. Rendering and input
/// layers hold a reference to the session and drive it — either through
/// [`advance`](Self::advance) for the full turn flow, or through the
/// lower-level operations ([`apply`](Self::apply), [`add_tile`](Self::add_tile))
/// when they orchestrate turns themselves.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    stats: GameStats,
    spawner: TileSpawner,
    state: SessionState,
}

impl GameSession {
    /// Creates a session on a `size`×`size` board with a random spawn seed.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        Self::with_spawner(size, TileSpawner::new())
    }

    /// Like [`Self::new`], but with a fixed seed for reproducible spawns.
    pub fn with_seed(size: usize, seed: SpawnSeed) -> Result<Self, BoardSizeError> {
        Self::with_spawner(size, TileSpawner::with_seed(seed))
    }

    fn with_spawner(size: usize, spawner: TileSpawner) -> Result<Self, BoardSizeError> {
        let mut session = Self {
            board: Board::new(size)?,
            stats: GameStats::new(),
            spawner,
            state: SessionState::Playing,
        };
        session.reset();
        Ok(session)
    }

    /// Starts a fresh game: clears the grid, zeroes the score, then seeds
    /// the board with two spawned tiles.
    pub fn reset(&mut self) {
        self.board.clear();
        self.stats.reset();
        self.state = SessionState::Playing;
        self.add_tile();
        self.add_tile();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.state
    }

    /// Slides and merges the board toward `direction`, accumulating merge
    /// points into the score.
    pub fn apply(&mut self, direction: Direction) {
        let gained = slide::apply_move(&mut self.board, direction);
        self.stats.record_move(gained);
    }

    /// Applies the move named by a numeric direction code.
    ///
    /// Codes outside `0..=3` are ignored without error, matching the
    /// tolerance expected for unmapped key input.
    pub fn apply_code(&mut self, code: u8) {
        if let Some(direction) = Direction::from_code(code) {
            self.apply(direction);
        }
    }

    /// Spawns one tile, or nothing if the board is full.
    pub fn add_tile(&mut self) {
        let score = self.stats.score();
        self.spawner.spawn(&mut self.board, score);
    }

    /// Whether any move is still possible.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        game_over::is_game_over(&self.board)
    }

    /// Advances one full turn: move, then game-over check, then spawn.
    ///
    /// A tile is spawned after every move on a non-terminal board — even a
    /// move that shifted nothing. Once the session reaches game over,
    /// further calls do nothing.
    pub fn advance(&mut self, direction: Direction) {
        if !self.state.is_playing() {
            return;
        }
        self.apply(direction);
        if self.is_game_over() {
            self.state = SessionState::GameOver;
        } else {
            self.add_tile();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_session(size: usize) -> GameSession {
        let seed: SpawnSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
        GameSession::with_seed(size, seed).unwrap()
    }

    fn non_zero_cells(session: &GameSession) -> Vec<u32> {
        session
            .board()
            .rows()
            .flatten()
            .copied()
            .filter(|&v| v != 0)
            .collect()
    }

    #[test]
    fn test_reset_seeds_two_tiles_with_zero_score() {
        let mut session = seeded_session(4);
        session.advance(Direction::Left);
        session.advance(Direction::Up);
        session.reset();

        let tiles = non_zero_cells(&session);
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|&v| v == 2 || v == 4));
        assert_eq!(session.stats().score(), 0);
        assert_eq!(session.stats().turns(), 0);
        assert!(session.session_state().is_playing());
    }

    #[test]
    fn test_new_session_starts_seeded() {
        let session = seeded_session(4);
        assert_eq!(non_zero_cells(&session).len(), 2);
        assert_eq!(session.stats().score(), 0);
    }

    #[test]
    fn test_apply_scores_merges() {
        let mut session = seeded_session(4);
        session.board.clear();
        session.board.set(0, 0, 2);
        session.board.set(0, 3, 2);

        session.apply(Direction::Left);
        assert_eq!(session.board.get(0, 0), 4);
        assert_eq!(session.stats().score(), 4);
        assert_eq!(session.stats().turns(), 1);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut session = seeded_session(4);
        let mut last_score = session.stats().score();
        for _ in 0..50 {
            for direction in Direction::ALL {
                session.advance(direction);
                assert!(session.stats().score() >= last_score);
                last_score = session.stats().score();
            }
        }
    }

    #[test]
    fn test_apply_code_matches_direction() {
        let mut by_code = seeded_session(4);
        let mut by_direction = by_code.clone();
        by_code.apply_code(2);
        by_direction.apply(Direction::Left);
        assert_eq!(by_code.board, by_direction.board);
        assert_eq!(by_code.stats().score(), by_direction.stats().score());
    }

    #[test]
    fn test_apply_code_ignores_unknown_codes() {
        let mut session = seeded_session(4);
        let board = session.board.clone();
        let turns = session.stats().turns();
        for code in [4, 9, u8::MAX] {
            session.apply_code(code);
        }
        assert_eq!(session.board, board);
        assert_eq!(session.stats().turns(), turns);
    }

    #[test]
    fn test_advance_spawns_even_after_noop_move() {
        let mut session = seeded_session(4);
        session.board.clear();
        session.board.set(0, 0, 2);
        session.board.set(0, 1, 4);

        // Both tiles already sit against the left edge: the move changes
        // nothing, yet a tile is still spawned.
        session.advance(Direction::Left);
        assert_eq!(non_zero_cells(&session).len(), 3);
        assert_eq!(session.board.get(0, 0), 2);
        assert_eq!(session.board.get(0, 1), 4);
    }

    #[test]
    fn test_advance_flips_to_game_over_without_spawning() {
        let mut session = seeded_session(4);
        session.board.clear();
        for row in 0..4 {
            for col in 0..4 {
                let value = if (row + col) % 2 == 0 { 2 } else { 4 };
                session.board.set(row, col, value);
            }
        }

        // The checkerboard is unchanged by any move, so the post-move board
        // is terminal.
        session.advance(Direction::Right);
        assert!(session.session_state().is_game_over());
        assert!(session.is_game_over());

        let board = session.board.clone();
        let turns = session.stats().turns();
        session.advance(Direction::Left);
        assert_eq!(session.board, board);
        assert_eq!(session.stats().turns(), turns);
    }

    #[test]
    fn test_add_tile_on_full_board_is_a_noop() {
        let mut session = seeded_session(2);
        session.board.clear();
        for row in 0..2 {
            for col in 0..2 {
                session.board.set(row, col, 2);
            }
        }
        let board = session.board.clone();
        session.add_tile();
        assert_eq!(session.board, board);
    }

    #[test]
    fn test_same_seed_reproduces_whole_games() {
        let seed: SpawnSeed = "fedcba98765432100123456789abcdef".parse().unwrap();
        let mut session1 = GameSession::with_seed(4, seed).unwrap();
        let mut session2 = GameSession::with_seed(4, seed).unwrap();
        for _ in 0..30 {
            for direction in Direction::ALL {
                session1.advance(direction);
                session2.advance(direction);
            }
        }
        assert_eq!(session1.board, session2.board);
        assert_eq!(session1.stats().score(), session2.stats().score());
    }

    #[test]
    fn test_rejects_unsupported_board_size() {
        assert!(GameSession::new(1).is_err());
        assert!(GameSession::new(Board::MAX_SIZE + 1).is_err());
    }
}
