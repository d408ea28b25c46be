use common::games::tictactoe::{Board, GameOutcome, Mark, WinningLine, BOARD_SIZE, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Cell(usize),
    Quit,
}

/// Empty cells show their 1-based number so the player knows what to type.
/// Cells of the winning line are wrapped in brackets.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                let symbol = match board.get(index) {
                    Some(mark) => mark.symbol(),
                    None => char::from(b'1' + index as u8),
                };
                if winning_line.is_some_and(|line| line.cells.contains(&index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row + 1 < BOARD_SIZE {
            out.push_str("---+---+---\n");
        }
    }
    out
}

pub fn parse_input(input: &str) -> Result<InputCommand, String> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(InputCommand::Quit);
    }
    let position: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", trimmed))?;
    if !(1..=CELL_COUNT).contains(&position) {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }
    Ok(InputCommand::Cell(position - 1))
}

pub fn describe_outcome(
    outcome: GameOutcome,
    human_mark: Mark,
    winning_line: Option<WinningLine>,
) -> String {
    match (outcome, winning_line) {
        (GameOutcome::Draw, _) => "It's a draw.".to_string(),
        (GameOutcome::Winner(mark), Some(line)) if mark == human_mark => {
            format!("You win with {} on {}!", mark, line)
        }
        (GameOutcome::Winner(mark), Some(line)) => {
            format!("The computer wins with {} on {}.", mark, line)
        }
        (GameOutcome::Winner(mark), None) if mark == human_mark => "You win!".to_string(),
        (GameOutcome::Winner(_), None) => "The computer wins.".to_string(),
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
