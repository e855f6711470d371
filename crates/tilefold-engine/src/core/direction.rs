/// The four directions a move can compact the board toward.
///
/// The numeric codes are part of the public interface: input layers map raw
/// key events to these codes, and codes outside the mapping are treated as
/// unmapped input (no move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions, in code order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Maps a numeric direction code (0=Up, 1=Down, 2=Left, 3=Right).
    ///
    /// Returns `None` for codes outside the mapping.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Up),
            1 => Some(Self::Down),
            2 => Some(Self::Left),
            3 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the numeric code of this direction.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}
