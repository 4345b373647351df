use reversi::board::piece::Piece;
use reversi::board::Board;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let midgame = play_out(Board::new(8), 20);

    c.bench_function("possible moves 8x8 opening", |b| {
        let board = Board::new(8);
        b.iter(|| black_box(&board).possible_moves(Piece::Black))
    });
    c.bench_function("possible moves 8x8 midgame", |b| {
        b.iter(|| black_box(&midgame).possible_moves(Piece::White))
    });
    c.bench_function("place and undo 8x8 midgame", |b| {
        let mut board = midgame.clone();
        let moves = board.possible_moves(Piece::White);
        b.iter(|| {
            for reversi_move in &moves {
                let placement = board.place_piece(reversi_move).unwrap();
                board.undo(&placement).unwrap();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Plays `plies` highest ranked moves from `board`.
fn play_out(mut board: Board, plies: usize) -> Board {
    let mut turn = Piece::Black;
    for _ in 0..plies {
        if let Some(reversi_move) = board.possible_moves(turn).first() {
            board.place_piece(reversi_move).unwrap();
        }
        turn = turn.opponent();
    }
    board
}
