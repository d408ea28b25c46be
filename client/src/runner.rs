use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use common::games::SessionRng;
use common::games::tictactoe::{
    DifficultySettings, GameOutcome, GameStatus, Mark, TicTacToeGameState,
};
use common::log;

use crate::terminal_ui::{describe_outcome, is_yes, parse_input, render_board, InputCommand};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionScore {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SessionScore {
    pub fn record(&mut self, outcome: GameOutcome, human_mark: Mark) {
        match outcome {
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Winner(mark) if mark == human_mark => self.wins += 1,
            GameOutcome::Winner(_) => self.losses += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

enum TurnResult {
    Continue,
    Quit,
}

pub struct GameRunner<R, W> {
    input: Lines<R>,
    output: W,
    settings: DifficultySettings,
    think_delay: Duration,
    rng: Option<SessionRng>,
    score: SessionScore,
}

impl<R, W> GameRunner<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        input: R,
        output: W,
        settings: DifficultySettings,
        think_delay: Duration,
        rng: SessionRng,
    ) -> Self {
        Self {
            input: input.lines(),
            output,
            settings,
            think_delay,
            rng: Some(rng),
            score: SessionScore::default(),
        }
    }

    /// Plays games until the player quits, declines a rematch or input ends.
    pub async fn run(&mut self, mut state: TicTacToeGameState) -> Result<SessionScore, String> {
        loop {
            state.start()?;
            log!(
                "Game started: human plays {}, difficulty {}",
                state.human_mark(),
                state.difficulty()
            );
            writeln!(
                self.output,
                "You are {} against the {} computer. Enter 1-9 to play, q to quit.",
                state.human_mark(),
                state.difficulty()
            )
            .map_err(|e| e.to_string())?;

            state = match self.play_game(state).await? {
                (state, TurnResult::Continue) => state,
                (_, TurnResult::Quit) => break,
            };

            if let Some(outcome) = state.outcome() {
                self.report_outcome(&state, outcome)?;
            }

            self.write_flush("Play again? [y/N] ")?;
            match self.next_line().await? {
                Some(answer) if is_yes(&answer) => state.reset(),
                _ => break,
            }
        }

        log!(
            "Session finished after {} games: {} won, {} lost, {} drawn",
            self.score.games(),
            self.score.wins,
            self.score.losses,
            self.score.draws
        );
        Ok(self.score)
    }

    async fn play_game(
        &mut self,
        mut state: TicTacToeGameState,
    ) -> Result<(TicTacToeGameState, TurnResult), String> {
        while state.status() == GameStatus::Playing {
            if state.is_computer_turn() {
                state = self.computer_turn(state).await?;
                continue;
            }
            if let TurnResult::Quit = self.human_turn(&mut state).await? {
                log!("Player quit mid-game");
                return Ok((state, TurnResult::Quit));
            }
        }
        Ok((state, TurnResult::Continue))
    }

    async fn human_turn(&mut self, state: &mut TicTacToeGameState) -> Result<TurnResult, String> {
        let board = render_board(state.board(), None);
        writeln!(self.output, "\n{}", board).map_err(|e| e.to_string())?;
        loop {
            self.write_flush("Your move: ")?;
            let Some(line) = self.next_line().await? else {
                return Ok(TurnResult::Quit);
            };
            let message = match parse_input(&line) {
                Ok(InputCommand::Quit) => return Ok(TurnResult::Quit),
                Ok(InputCommand::Cell(index)) => match state.place_human_mark(index) {
                    Ok(()) => {
                        log!("Human placed {} at cell {}", state.human_mark(), index + 1);
                        return Ok(TurnResult::Continue);
                    }
                    Err(message) => message,
                },
                Err(message) => message,
            };
            writeln!(self.output, "{}", message).map_err(|e| e.to_string())?;
        }
    }

    async fn computer_turn(
        &mut self,
        mut state: TicTacToeGameState,
    ) -> Result<TicTacToeGameState, String> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let settings = self.settings;
        let mut rng = self
            .rng
            .take()
            .ok_or_else(|| "Random source is already in use".to_string())?;
        // Impossible mode walks the full game tree, keep it off the async workers.
        let (state, rng, result) = tokio::task::spawn_blocking(move || {
            let result = state.play_computer_move(&settings, &mut rng);
            (state, rng, result)
        })
        .await
        .map_err(|e| format!("Computer move task failed: {}", e))?;
        self.rng = Some(rng);

        let index = result?;
        log!("Computer placed {} at cell {}", state.computer_mark(), index + 1);
        writeln!(self.output, "Computer plays {}.", index + 1).map_err(|e| e.to_string())?;
        Ok(state)
    }

    fn report_outcome(
        &mut self,
        state: &TicTacToeGameState,
        outcome: GameOutcome,
    ) -> Result<(), String> {
        self.score.record(outcome, state.human_mark());
        log!("Game over: {:?}", outcome);
        writeln!(
            self.output,
            "\n{}\n{}\nScore: {} won, {} lost, {} drawn",
            render_board(state.board(), state.winning_line()),
            describe_outcome(outcome, state.human_mark(), state.winning_line()),
            self.score.wins,
            self.score.losses,
            self.score.draws
        )
        .map_err(|e| e.to_string())
    }

    async fn next_line(&mut self) -> Result<Option<String>, String> {
        self.input
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))
    }

    fn write_flush(&mut self, text: &str) -> Result<(), String> {
        write!(self.output, "{}", text).map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())
    }
}
