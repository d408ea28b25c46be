use std::fmt;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major 3x3 board. `Copy`, so search branches work on their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// Returns a copy with `mark` placed at `index`; `self` is left untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let base = row * BOARD_SIZE;
            let symbols: Vec<char> = (base..base + BOARD_SIZE)
                .map(|i| match self.cells[i] {
                    Some(mark) => mark.symbol(),
                    None => '.',
                })
                .collect();
            write!(f, "{} {} {}", symbols[0], symbols[1], symbols[2])?;
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| cell.is_none().then_some(index))
        .collect()
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [None; CELL_COUNT];
    let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(symbols.len(), CELL_COUNT, "layout must describe 9 cells");
    for (i, symbol) in symbols.into_iter().enumerate() {
        cells[i] = match symbol {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_are_in_scan_order() {
        let board = board_from_str("X.O ... OX.");
        assert_eq!(get_available_moves(&board), vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.mark_count(), 1);
    }

    #[test]
    fn test_from_cells_matches_placed_marks() {
        let mut cells = [None; CELL_COUNT];
        cells[0] = Some(Mark::X);
        cells[4] = Some(Mark::O);
        let board = Board::from_cells(cells);
        assert_eq!(board, Board::new().with_mark(0, Mark::X).with_mark(4, Mark::O));
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.mark_count(), 2);
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::new().is_full());
        assert!(board_from_str("XOX XOO OXX").is_full());
        assert!(!board_from_str("XOX XOO OX.").is_full());
    }

    #[test]
    fn test_out_of_range_index_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_empty_at(9));
        assert_eq!(board.get(42), None);
    }

    #[test]
    fn test_display_renders_rows() {
        let board = board_from_str("X.. .O. ..X");
        assert_eq!(board.to_string(), "X . .\n. O .\n. . X");
    }
}
