use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{Board, Mark, find_best_move};

fn mid_game_board() -> Board {
    "X...O..X.".parse().unwrap()
}

fn bench_self_play_game(pruning: bool) {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !board.is_terminal() {
        let record = find_best_move(&board, current_mark, pruning);
        match record.position {
            Some(position) => {
                board.apply(position, current_mark).unwrap();
                current_mark = current_mark.opponent().unwrap();
            }
            None => break,
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    for (name, pruning) in [("pruned", true), ("unpruned", false)] {
        group.bench_function(format!("empty_board_{}", name), |b| {
            b.iter(|| find_best_move(black_box(&Board::new()), Mark::X, pruning))
        });

        group.bench_function(format!("mid_game_{}", name), |b| {
            let board = mid_game_board();
            b.iter(|| find_best_move(black_box(&board), Mark::O, pruning))
        });

        group.bench_function(format!("self_play_{}", name), |b| {
            b.iter(|| bench_self_play_game(pruning))
        });
    }

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
