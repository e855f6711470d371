use crate::core::Board;

/// Whether no move can change the board.
///
/// A board is terminal only when every cell is occupied and no two adjacent
/// cells hold equal values. The adjacency scan checks, for each `(i, j)`
/// with `j < N - 1`, the row pair `(i, j)`/`(i, j + 1)` before the column
/// pair `(j, i)`/`(j + 1, i)`, returning as soon as any pair matches;
/// sweeping `i` over the full index range makes the swapped-index check
/// cover every vertical pair as well.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    if board.has_empty_cell() {
        return false;
    }

    let n = board.size();
    for i in 0..n {
        for j in 0..n - 1 {
            if board.get(i, j) == board.get(i, j + 1) || board.get(j, i) == board.get(j + 1, i) {
                return false;
            }
        }
    }
    true
}
