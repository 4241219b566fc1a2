//! End-to-end play scenarios driven purely through pointer clicks.

use tui_hanoi::core::{Game, Layout};
use tui_hanoi::types::{ClickOutcome, GamePhase};

const VIEW_W: f32 = 120.0;
const VIEW_H: f32 = 40.0;

fn new_game(towers: usize, blocks: usize) -> Game {
    let mut game = Game::new(towers, blocks, 77);
    game.on_resize(&Layout::compute(towers, VIEW_W, VIEW_H));
    game
}

fn click_tower(game: &mut Game, i: usize) -> ClickOutcome {
    let (x, y) = game.tower_center(i).unwrap();
    game.handle_click(x, y)
}

fn click_undo(game: &mut Game) -> ClickOutcome {
    let b = *game.undo_bounds();
    game.handle_click(b.x() + b.width() / 2.0, b.y() + b.height() / 2.0)
}

fn click_restart(game: &mut Game) -> ClickOutcome {
    let b = *game.restart_bounds();
    game.handle_click(b.x() + b.width() / 2.0, b.y() + b.height() / 2.0)
}

fn ids(game: &Game, i: usize) -> Vec<u8> {
    game.tower(i).unwrap().blocks().iter().map(|b| b.id).collect()
}

/// Every tower strictly decreasing bottom to top, and no block lost or
/// duplicated, after any sequence of operations.
fn assert_invariants(game: &Game) {
    let mut seen = Vec::new();
    for i in 0..game.tower_count() {
        let tower = ids(game, i);
        for pair in tower.windows(2) {
            assert!(
                pair[0] > pair[1],
                "tower {i} violates stacking order: {tower:?}"
            );
        }
        seen.extend(tower);
    }
    seen.sort_unstable();
    let expected: Vec<u8> = (1..=game.block_count() as u8).collect();
    assert_eq!(seen, expected, "block conservation violated");
}

/// The full walkthrough: two legal moves, one rejected move, one undo.
#[test]
fn three_block_walkthrough() {
    let mut game = new_game(3, 3);
    assert_eq!(ids(&game, 0), vec![3, 2, 1]);

    // Move block 1 to the empty tower 2.
    assert_eq!(click_tower(&mut game, 0), ClickOutcome::Selected(0));
    assert_eq!(
        click_tower(&mut game, 2),
        ClickOutcome::Moved { from: 0, to: 2 }
    );
    assert_eq!(ids(&game, 0), vec![3, 2]);
    assert_eq!(ids(&game, 2), vec![1]);
    assert_eq!(game.move_count(), 1);
    assert_invariants(&game);

    // Move block 2 to the empty tower 1.
    assert_eq!(click_tower(&mut game, 0), ClickOutcome::Selected(0));
    assert_eq!(
        click_tower(&mut game, 1),
        ClickOutcome::Moved { from: 0, to: 1 }
    );
    assert_eq!(ids(&game, 0), vec![3]);
    assert_eq!(ids(&game, 1), vec![2]);
    assert_eq!(game.move_count(), 2);

    // Block 3 onto block 1 is illegal: contents unchanged, selection cleared,
    // history unchanged.
    assert_eq!(click_tower(&mut game, 0), ClickOutcome::Selected(0));
    assert_eq!(
        click_tower(&mut game, 2),
        ClickOutcome::Rejected { from: 0, to: 2 }
    );
    assert_eq!(ids(&game, 0), vec![3]);
    assert_eq!(ids(&game, 2), vec![1]);
    assert_eq!(game.selected_tower(), None);
    assert_eq!(game.move_count(), 2);
    assert_invariants(&game);

    // Undo pops (0, 1): block 2 returns from tower 1 to tower 0.
    assert_eq!(click_undo(&mut game), ClickOutcome::Undone { from: 0, to: 1 });
    assert_eq!(ids(&game, 0), vec![3, 2]);
    assert!(game.tower(1).unwrap().is_empty());
    assert_eq!(game.move_count(), 1);
    assert_invariants(&game);
}

/// Two blocks: the last tower ending as [2, 1] flips the game to Finished.
#[test]
fn two_block_win() {
    let mut game = new_game(3, 2);

    click_tower(&mut game, 0);
    click_tower(&mut game, 1); // 1 -> tower 1
    click_tower(&mut game, 0);
    click_tower(&mut game, 2); // 2 -> tower 2
    assert_eq!(game.phase(), GamePhase::Playing);

    click_tower(&mut game, 1);
    click_tower(&mut game, 2); // 1 -> tower 2: [2, 1]
    assert_eq!(ids(&game, 2), vec![2, 1]);
    assert_eq!(game.phase(), GamePhase::Finished);

    // Win is detected immediately on the completing click, not a later one.
    assert_eq!(game.move_count(), 3);
}

/// The complete 3-disk solution in seven moves.
#[test]
fn optimal_three_block_solution_wins() {
    let mut game = new_game(3, 3);
    let solution = [
        (0, 2),
        (0, 1),
        (2, 1),
        (0, 2),
        (1, 0),
        (1, 2),
        (0, 2),
    ];
    for (from, to) in solution {
        assert_eq!(click_tower(&mut game, from), ClickOutcome::Selected(from));
        assert_eq!(
            click_tower(&mut game, to),
            ClickOutcome::Moved { from, to }
        );
        assert_invariants(&game);
    }
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.move_count(), 7);
    assert_eq!(ids(&game, 2), vec![3, 2, 1]);
}

/// Restart from an arbitrary mutated position restores the initial layout.
#[test]
fn restart_from_mutated_state() {
    let mut game = new_game(3, 4);
    click_tower(&mut game, 0);
    click_tower(&mut game, 2);
    click_tower(&mut game, 0);
    click_tower(&mut game, 1);
    click_tower(&mut game, 0); // leave a selection dangling

    assert_eq!(click_restart(&mut game), ClickOutcome::Restarted);
    assert_eq!(ids(&game, 0), vec![4, 3, 2, 1]);
    assert!(game.tower(1).unwrap().is_empty());
    assert!(game.tower(2).unwrap().is_empty());
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.selected_tower(), None);
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_invariants(&game);
}

/// Undo every move of a long random-ish walk and land exactly on the start.
#[test]
fn full_undo_returns_to_initial_position() {
    let mut game = new_game(3, 3);
    let moves = [(0, 2), (0, 1), (2, 1), (0, 2)];
    for (from, to) in moves {
        click_tower(&mut game, from);
        click_tower(&mut game, to);
    }
    assert_eq!(game.move_count(), 4);

    while game.move_count() > 0 {
        let count = game.move_count();
        click_undo(&mut game);
        assert_eq!(game.move_count(), count - 1);
        assert_invariants(&game);
    }

    assert_eq!(ids(&game, 0), vec![3, 2, 1]);
    assert!(game.tower(1).unwrap().is_empty());
    assert!(game.tower(2).unwrap().is_empty());
}

/// Four towers work the same way; the win tower is the highest-indexed one.
#[test]
fn four_towers_win_on_last_tower() {
    let mut game = new_game(4, 2);

    click_tower(&mut game, 0);
    click_tower(&mut game, 1);
    click_tower(&mut game, 0);
    click_tower(&mut game, 3);
    click_tower(&mut game, 1);
    // All blocks on tower 1 would NOT win; only the last tower counts.
    click_tower(&mut game, 3);
    assert_eq!(ids(&game, 3), vec![2, 1]);
    assert_eq!(game.phase(), GamePhase::Finished);
}
