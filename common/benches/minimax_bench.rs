use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    calculate_move, evaluate_board, Board, BotInput, Difficulty, DifficultySettings, Mark,
};

fn bench_single_move(difficulty: Difficulty, board: Board, rng: &mut SessionRng) {
    let input = BotInput {
        board,
        computer_mark: Mark::X,
    };
    black_box(calculate_move(difficulty, &input, &DifficultySettings::default(), rng));
}

fn bench_impossible_self_play() {
    let settings = DifficultySettings::default();
    let mut rng = SessionRng::new(0);
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while evaluate_board(&board).is_none() && !board.is_full() {
        let input = BotInput {
            board,
            computer_mark: current_mark,
        };
        match calculate_move(Difficulty::Impossible, &input, &settings, &mut rng) {
            Some(index) => {
                board = board.with_mark(index, current_mark);
                current_mark = current_mark.opponent();
            }
            None => break,
        }
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    let mut rng = SessionRng::new(42);

    group.bench_function("impossible_empty_board", |b| {
        b.iter(|| bench_single_move(Difficulty::Impossible, Board::new(), &mut rng))
    });

    let mid_game = Board::new().with_mark(4, Mark::O).with_mark(0, Mark::X);
    group.bench_function("impossible_mid_game", |b| {
        b.iter(|| bench_single_move(Difficulty::Impossible, mid_game, &mut rng))
    });

    group.bench_function("hard_empty_board", |b| {
        b.iter(|| bench_single_move(Difficulty::Hard, Board::new(), &mut rng))
    });

    group.bench_function("impossible_self_play", |b| b.iter(bench_impossible_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
