//! Property tests over random command/tick sequences.
//!
//! Invariants covered:
//! - The falling piece never leaves the walls or the floor, and only overlaps
//!   locked cells while it is still untouched at the spawn point.
//! - Score only grows, and always in whole line-clear bonuses.
//! - No full row survives a completed engine call.
//! - Game over is terminal: nothing changes once it is reached.

use proptest::prelude::*;
use tui_blocks::engine::Engine;
use tui_blocks::types::{Command, COLS, LINE_CLEAR_BONUS, ROWS, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy)]
enum Input {
    Submit(Command),
    Tick(u32),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Submit(Command::MoveLeft)),
        Just(Input::Submit(Command::MoveRight)),
        Just(Input::Submit(Command::MoveDown)),
        Just(Input::Submit(Command::Rotate)),
        (0u32..2500).prop_map(Input::Tick),
    ]
}

fn assert_settled(engine: &Engine) {
    let grid = engine.grid();
    for row in 0..ROWS as usize {
        assert!(!grid.is_row_full(row), "row {} left full", row);
    }

    if let Some(piece) = engine.active() {
        if piece.collides(grid, 0, 0, piece.matrix()) {
            assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
            assert_eq!(piece.rotation.get(), 0);
        }
        for (row, col) in piece.cells() {
            assert!((0..COLS as i8).contains(&col));
            assert!(row < ROWS as i8);
        }
    }
}

proptest! {
    #[test]
    fn random_play_respects_engine_invariants(
        seed in any::<u32>(),
        inputs in prop::collection::vec(input(), 1..400),
    ) {
        let mut engine = Engine::new(seed);
        assert_settled(&engine);

        for step in inputs {
            let score_before = engine.current_score();
            let was_over = engine.is_game_over();
            let grid_before = engine.grid().clone();

            let changed = match step {
                Input::Submit(command) => engine.submit(command),
                Input::Tick(ms) => engine.on_tick(ms),
            };

            prop_assert!(engine.current_score() >= score_before);
            prop_assert_eq!(engine.current_score() % LINE_CLEAR_BONUS, 0);
            prop_assert_eq!(engine.current_score(), engine.lines() * LINE_CLEAR_BONUS);

            if was_over {
                prop_assert!(engine.is_game_over());
                prop_assert!(!changed);
                prop_assert_eq!(engine.grid(), &grid_before);
                prop_assert_eq!(engine.current_score(), score_before);
            }

            assert_settled(&engine);
        }
    }

    #[test]
    fn manual_drops_always_end_the_game(seed in any::<u32>()) {
        let mut engine = Engine::new(seed);
        // Every piece stacks in the spawn columns, so the game must end.
        for _ in 0..(ROWS as usize * 4) {
            if engine.is_game_over() {
                break;
            }
            while engine.take_last_event().is_none() {
                engine.submit(Command::MoveDown);
            }
        }
        prop_assert!(engine.is_game_over());
        prop_assert!(engine.active().is_none());
    }
}
