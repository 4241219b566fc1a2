//! Criterion benchmarks for the click-handling hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_hanoi::core::{Game, GameSnapshot, Layout};

fn laid_out_game() -> Game {
    let mut game = Game::new(3, 5, 42);
    game.on_resize(&Layout::compute(3, 120.0, 40.0));
    game
}

fn bench_click_resolution(c: &mut Criterion) {
    c.bench_function("select_and_deselect", |b| {
        let mut game = laid_out_game();
        let (x0, y0) = game.tower_center(0).unwrap();
        b.iter(|| {
            game.handle_click(black_box(x0), black_box(y0));
            game.handle_click(black_box(x0), black_box(y0));
        });
    });

    c.bench_function("move_and_undo", |b| {
        let mut game = laid_out_game();
        let (x0, y0) = game.tower_center(0).unwrap();
        let (x1, y1) = game.tower_center(1).unwrap();
        let undo = *game.undo_bounds();
        let (ux, uy) = (undo.x() + undo.width() / 2.0, undo.y() + undo.height() / 2.0);
        b.iter(|| {
            // Undo after each move keeps the position and history stable.
            game.handle_click(black_box(x0), black_box(y0));
            game.handle_click(black_box(x1), black_box(y1));
            game.handle_click(black_box(ux), black_box(uy));
        });
    });

    c.bench_function("miss_all_regions", |b| {
        let mut game = laid_out_game();
        b.iter(|| game.handle_click(black_box(0.1), black_box(0.1)));
    });

    c.bench_function("reset", |b| {
        let mut game = laid_out_game();
        b.iter(|| game.reset());
    });
}

fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot_into", |b| {
        let game = laid_out_game();
        let mut snapshot = GameSnapshot::default();
        b.iter(|| game.snapshot_into(black_box(&mut snapshot)));
    });
}

fn bench_layout(c: &mut Criterion) {
    c.bench_function("layout_compute", |b| {
        b.iter(|| Layout::compute(black_box(3), black_box(120.0), black_box(40.0)));
    });
}

criterion_group!(
    benches,
    bench_click_resolution,
    bench_snapshot,
    bench_layout
);
criterion_main!(benches);
