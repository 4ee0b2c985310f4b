//! Shape catalog tests

use tui_blocks::core::{color_of, rotation_states};
use tui_blocks::types::{Color, ShapeKind};

#[test]
fn test_rotation_state_counts() {
    for kind in ShapeKind::ALL {
        let expected = if kind == ShapeKind::O { 1 } else { 4 };
        assert_eq!(rotation_states(kind).len(), expected, "{:?}", kind);
    }
}

#[test]
fn test_states_are_distinct_within_kind() {
    for kind in ShapeKind::ALL {
        let states = rotation_states(kind);
        for i in 0..states.len() {
            for j in i + 1..states.len() {
                assert_ne!(states[i], states[j], "{:?} {} vs {}", kind, i, j);
            }
        }
    }
}

#[test]
fn test_i_piece_states() {
    let states = rotation_states(ShapeKind::I);
    let horizontal: Vec<_> = states[0].cells().collect();
    assert_eq!(horizontal, vec![(1, 0), (1, 1), (1, 2), (1, 3)]);

    let vertical: Vec<_> = states[1].cells().collect();
    assert_eq!(vertical, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_reference_colors() {
    assert_eq!(color_of(ShapeKind::Z), Color::Red);
    assert_eq!(color_of(ShapeKind::S), Color::Green);
    assert_eq!(color_of(ShapeKind::T), Color::Yellow);
    assert_eq!(color_of(ShapeKind::O), Color::Blue);
    assert_eq!(color_of(ShapeKind::L), Color::Purple);
    assert_eq!(color_of(ShapeKind::I), Color::Cyan);
    assert_eq!(color_of(ShapeKind::J), Color::Orange);
}

#[test]
fn test_shared_static_data() {
    // Same kind always yields the same static slice.
    let a = rotation_states(ShapeKind::T);
    let b = rotation_states(ShapeKind::T);
    assert!(std::ptr::eq(a, b));
}
