use super::board::Board;
use super::types::{LineKind, WinResult, WinningLine};

/// Scan order is significant: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = [
    WinningLine::new(LineKind::Horizontal, 0, [0, 1, 2]),
    WinningLine::new(LineKind::Horizontal, 1, [3, 4, 5]),
    WinningLine::new(LineKind::Horizontal, 2, [6, 7, 8]),
    WinningLine::new(LineKind::Vertical, 0, [0, 3, 6]),
    WinningLine::new(LineKind::Vertical, 1, [1, 4, 7]),
    WinningLine::new(LineKind::Vertical, 2, [2, 5, 8]),
    WinningLine::new(LineKind::Diagonal, 0, [0, 4, 8]),
    WinningLine::new(LineKind::Diagonal, 1, [2, 4, 6]),
];

/// First completed line in scan order, if any.
pub fn evaluate_board(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells;
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(WinResult {
            winner: mark,
            line: *line,
        })
    })
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate_board(board).is_none()
}
