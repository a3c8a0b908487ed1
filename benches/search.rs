//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - Minimax search at the difficulty-preset depths, with and without pruning
//! - Full MCTS search with varying simulation counts
//! - Board primitives (drop/undo, win detection) and static evaluation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use connect4_engine::{
    evaluate, Board, HeuristicRollout, MctsConfig, MctsEngine, MinimaxConfig, MinimaxEngine,
    Player,
};

/// A midgame position: six plies into a center fight.
fn midgame_board() -> Board {
    let mut board = Board::new();
    let drops = [
        (3, Player::Red),
        (3, Player::Yellow),
        (2, Player::Red),
        (4, Player::Yellow),
        (4, Player::Red),
        (2, Player::Yellow),
    ];
    for (col, player) in drops {
        board.drop_piece(col, player).unwrap();
    }
    board
}

// =============================================================================
// Minimax Benchmarks
// =============================================================================

fn bench_minimax_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_depths");
    let board = midgame_board();

    // Difficulty presets use depths 2, 4, and 6.
    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::new("pruned", depth), &depth, |b, &depth| {
            let engine = MinimaxEngine::new(MinimaxConfig::default().with_depth(depth));
            b.iter(|| black_box(engine.select_move(&board, Player::Red).unwrap()));
        });
    }

    group.finish();
}

fn bench_minimax_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_pruning");
    let board = midgame_board();
    let depth = 5u32;

    group.bench_function("with_pruning", |b| {
        let engine = MinimaxEngine::new(MinimaxConfig::default().with_depth(depth));
        b.iter(|| black_box(engine.select_move(&board, Player::Red).unwrap()));
    });

    group.bench_function("without_pruning", |b| {
        let engine =
            MinimaxEngine::new(MinimaxConfig::default().with_depth(depth).without_pruning());
        b.iter(|| black_box(engine.select_move(&board, Player::Red).unwrap()));
    });

    group.finish();
}

// =============================================================================
// MCTS Benchmarks
// =============================================================================

fn bench_mcts_simulations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_simulations");
    let board = midgame_board();

    // Difficulty presets use 500, 1000, and 2000 simulations.
    for sims in [500u32, 1000, 2000] {
        group.throughput(Throughput::Elements(u64::from(sims)));
        group.bench_with_input(BenchmarkId::new("random", sims), &sims, |b, &sims| {
            let engine = MctsEngine::new(MctsConfig::default().with_iterations(sims));
            b.iter(|| black_box(engine.select_move(&board, Player::Red).unwrap()));
        });
    }

    group.finish();
}

fn bench_mcts_rollout_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_rollout_policies");
    let board = midgame_board();
    let sims = 500u32;

    group.bench_function("random_rollout", |b| {
        let engine = MctsEngine::new(MctsConfig::default().with_iterations(sims));
        b.iter(|| black_box(engine.select_move(&board, Player::Red).unwrap()));
    });

    group.bench_function("heuristic_rollout", |b| {
        let engine = MctsEngine::new(MctsConfig::default().with_iterations(sims))
            .with_rollout(HeuristicRollout);
        b.iter(|| black_box(engine.select_move(&board, Player::Red).unwrap()));
    });

    group.finish();
}

// =============================================================================
// Board Primitive Benchmarks
// =============================================================================

fn bench_board_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_ops");
    let board = midgame_board();

    group.bench_function("drop_undo", |b| {
        b.iter(|| {
            let mut scratch = board;
            let row = scratch.drop_piece(3, Player::Red).unwrap();
            black_box(scratch.win_at(row, 3));
            scratch.undo(3).unwrap();
            black_box(scratch.moves_played())
        });
    });

    group.bench_function("check_winner", |b| {
        b.iter(|| black_box(board.check_winner()));
    });

    group.bench_function("legal_moves", |b| {
        b.iter(|| black_box(board.legal_moves()));
    });

    group.bench_function("evaluate", |b| {
        b.iter(|| black_box(evaluate(&board, Player::Red)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_minimax_depths,
    bench_minimax_pruning,
    bench_mcts_simulations,
    bench_mcts_rollout_policies,
    bench_board_ops,
);

criterion_main!(benches);
