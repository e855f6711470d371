use arrayvec::ArrayVec;

use crate::core::{Board, Direction};

/// One row or column of the board, buffered for the slide transform.
pub type Line = ArrayVec<u32, { Board::MAX_SIZE }>;

/// Compacts a line toward index 0, merging equal neighbours once each.
///
/// Zero entries are removed first, preserving relative order. The scan then
/// walks the packed values left to right: a pair of equal values emits their
/// doubled value and consumes both, so a freshly merged tile never merges
/// again in the same pass. The output is padded back to the input length
/// with zeros.
///
/// Returns the transformed line and the total value gained from merges.
#[must_use]
pub fn slide_and_merge(line: &[u32]) -> (Line, u64) {
    let packed: Line = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = Line::new();
    let mut gained = 0;
    let mut i = 0;
    while i < packed.len() {
        if i + 1 < packed.len() && packed[i] == packed[i + 1] {
            let merged = packed[i] * 2;
            out.push(merged);
            gained += u64::from(merged);
            i += 2;
        } else {
            out.push(packed[i]);
            i += 1;
        }
    }
    while out.len() < line.len() {
        out.push(0);
    }

    (out, gained)
}

/// Applies one directional move to the whole board.
///
/// Left runs [`slide_and_merge`] over each row as stored; Right reverses
/// each row around the transform; Up and Down transpose the board and reuse
/// the Left and Right procedures. Returns the summed merge gains of all
/// lines.
pub fn apply_move(board: &mut Board, direction: Direction) -> u64 {
    match direction {
        Direction::Left => slide_rows(board, false),
        Direction::Right => slide_rows(board, true),
        Direction::Up => {
            board.transpose();
            let gained = slide_rows(board, false);
            board.transpose();
            gained
        }
        Direction::Down => {
            board.transpose();
            let gained = slide_rows(board, true);
            board.transpose();
            gained
        }
    }
}

fn slide_rows(board: &mut Board, reversed: bool) -> u64 {
    let mut gained = 0;
    for row in 0..board.size() {
        let mut line: Line = board.row(row).iter().copied().collect();
        if reversed {
            line.reverse();
        }
        let (mut merged, line_gain) = slide_and_merge(&line);
        if reversed {
            merged.reverse();
        }
        board.set_row(row, &merged);
        gained += line_gain;
    }
    gained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: &[&[u32]]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                board.set(i, j, value);
            }
        }
        board
    }

    #[test]
    fn test_merge_pairs_once_each() {
        let (line, gained) = slide_and_merge(&[2, 2, 2, 2]);
        assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(gained, 8);
    }

    #[test]
    fn test_merged_tile_does_not_remerge() {
        // The 4 produced by the leading pair must not merge with the
        // pre-existing 4 in the same pass.
        let (line, gained) = slide_and_merge(&[2, 2, 4, 0]);
        assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(gained, 4);
    }

    #[test]
    fn test_compaction_without_merges() {
        let (line, gained) = slide_and_merge(&[0, 2, 0, 4]);
        assert_eq!(line.as_slice(), &[2, 4, 0, 0]);
        assert_eq!(gained, 0);
    }

    #[test]
    fn test_all_zero_line() {
        let (line, gained) = slide_and_merge(&[0, 0, 0, 0]);
        assert_eq!(line.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(gained, 0);
    }

    #[test]
    fn test_gap_separated_equal_tiles_merge() {
        let (line, gained) = slide_and_merge(&[2, 0, 0, 2]);
        assert_eq!(line.as_slice(), &[4, 0, 0, 0]);
        assert_eq!(gained, 4);
    }

    #[test]
    fn test_merge_conserves_total_magnitude() {
        for line in [
            [2, 2, 2, 2],
            [4, 4, 2, 2],
            [0, 2, 0, 4],
            [8, 0, 8, 2],
            [0, 0, 0, 0],
        ] {
            let (out, _) = slide_and_merge(&line);
            let before: u32 = line.iter().sum();
            let after: u32 = out.iter().sum();
            assert_eq!(before, after, "line {line:?} changed total magnitude");
        }
    }

    #[test]
    fn test_gained_equals_sum_of_merged_values() {
        let (line, gained) = slide_and_merge(&[4, 4, 2, 2]);
        assert_eq!(line.as_slice(), &[8, 4, 0, 0]);
        assert_eq!(gained, 12);
    }

    #[test]
    fn test_move_left() {
        let mut board = board_from_rows(&[
            &[2, 2, 0, 4],
            &[0, 0, 2, 0],
            &[4, 0, 4, 4],
            &[0, 0, 0, 0],
        ]);
        let gained = apply_move(&mut board, Direction::Left);
        let expected = board_from_rows(&[
            &[4, 4, 0, 0],
            &[2, 0, 0, 0],
            &[8, 4, 0, 0],
            &[0, 0, 0, 0],
        ]);
        assert_eq!(board, expected);
        assert_eq!(gained, 12);
    }

    #[test]
    fn test_move_right() {
        let mut board = board_from_rows(&[
            &[2, 2, 0, 4],
            &[0, 0, 2, 0],
            &[4, 0, 4, 4],
            &[0, 0, 0, 0],
        ]);
        let gained = apply_move(&mut board, Direction::Right);
        let expected = board_from_rows(&[
            &[0, 0, 4, 4],
            &[0, 0, 0, 2],
            &[0, 0, 4, 8],
            &[0, 0, 0, 0],
        ]);
        assert_eq!(board, expected);
        assert_eq!(gained, 12);
    }

    #[test]
    fn test_move_up_and_down() {
        let mut up = board_from_rows(&[
            &[2, 0, 4, 0],
            &[2, 2, 0, 0],
            &[0, 2, 4, 0],
            &[4, 0, 2, 0],
        ]);
        let gained = apply_move(&mut up, Direction::Up);
        let expected = board_from_rows(&[
            &[4, 4, 8, 0],
            &[4, 0, 2, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        assert_eq!(up, expected);
        assert_eq!(gained, 16);

        let mut down = board_from_rows(&[
            &[2, 0, 4, 0],
            &[2, 2, 0, 0],
            &[0, 2, 4, 0],
            &[4, 0, 2, 0],
        ]);
        let gained = apply_move(&mut down, Direction::Down);
        let expected = board_from_rows(&[
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[4, 0, 8, 0],
            &[4, 4, 2, 0],
        ]);
        assert_eq!(down, expected);
        assert_eq!(gained, 16);
    }

    fn reverse_rows(board: &Board) -> Board {
        let mut reversed = Board::new(board.size()).unwrap();
        for (i, row) in board.rows().enumerate() {
            for (j, &value) in row.iter().rev().enumerate() {
                reversed.set(i, j, value);
            }
        }
        reversed
    }

    #[test]
    fn test_right_is_mirrored_left() {
        let board = board_from_rows(&[
            &[2, 2, 4, 4],
            &[0, 2, 2, 2],
            &[8, 0, 0, 8],
            &[2, 4, 2, 4],
        ]);

        let mut via_right = board.clone();
        apply_move(&mut via_right, Direction::Right);

        let mut via_left = reverse_rows(&board);
        apply_move(&mut via_left, Direction::Left);
        let via_left = reverse_rows(&via_left);

        assert_eq!(via_right, via_left);
    }

    #[test]
    fn test_vertical_moves_are_transposed_horizontal_moves() {
        let board = board_from_rows(&[
            &[2, 2, 4, 4],
            &[0, 2, 2, 2],
            &[8, 0, 0, 8],
            &[2, 4, 2, 4],
        ]);

        for (vertical, horizontal) in [
            (Direction::Up, Direction::Left),
            (Direction::Down, Direction::Right),
        ] {
            let mut direct = board.clone();
            apply_move(&mut direct, vertical);

            let mut transposed = board.clone();
            transposed.transpose();
            apply_move(&mut transposed, horizontal);
            transposed.transpose();

            assert_eq!(direct, transposed, "mismatch for {vertical:?}");
        }
    }
}
