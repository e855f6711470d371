pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(
    "board size {size} not supported: expected {}..={}",
    Board::MIN_SIZE,
    Board::MAX_SIZE
)]
pub struct BoardSizeError {
    pub size: usize,
}
