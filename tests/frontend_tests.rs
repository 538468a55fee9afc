//! Key map and terminal view wired to a live engine

use crossterm::event::{KeyCode, KeyEvent};

use blocks::core::{Engine, EngineConfig};
use blocks::input::action_for_key;
use blocks::term::{palette, BoardView};
use blocks::types::GameStatus;

fn press(engine: &mut Engine, code: KeyCode) -> bool {
    match action_for_key(KeyEvent::from(code), engine.status()) {
        Some(action) => engine.apply_action(action),
        None => false,
    }
}

#[test]
fn test_keys_drive_the_engine() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(4)).unwrap();
    let x = engine.active().unwrap().pending_x();

    assert!(press(&mut engine, KeyCode::Left));
    assert_eq!(engine.active().unwrap().pending_x(), x - 1);
    assert!(press(&mut engine, KeyCode::Down));
    assert_eq!(engine.score(), 1);
    assert!(press(&mut engine, KeyCode::Char(' ')));
    assert!(engine.active().is_none());

    assert!(press(&mut engine, KeyCode::Char('p')));
    assert_eq!(engine.status(), GameStatus::Paused);
    assert!(!press(&mut engine, KeyCode::Left));
    assert!(press(&mut engine, KeyCode::Char('p')));
    assert!(!press(&mut engine, KeyCode::Char('q')));
}

#[test]
fn test_any_key_restarts_after_game_over() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(4)).unwrap();
    while engine.hard_drop().is_some() {}
    assert_eq!(engine.status(), GameStatus::GameOver);

    assert!(press(&mut engine, KeyCode::Char('p')));
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_view_draws_engine_snapshot() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(4)).unwrap();
    engine.hard_drop();
    let snap = engine.snapshot();

    let view = BoardView::default();
    let fb = view.render(&snap, view.required_size(&snap));

    let painted = (0..fb.height())
        .flat_map(|y| fb.row(y).to_vec())
        .filter(|g| palette::PIECES.contains(&g.style.fg))
        .count();
    // Four locked cells two columns wide, plus the next-piece preview.
    assert_eq!(painted, 4 * 2 + 4 * 2);

    let score_row = (0..fb.height())
        .find(|&y| fb.row_text(y).contains("SCORE"))
        .unwrap();
    assert!(fb
        .row_text(score_row + 1)
        .contains(&engine.score().to_string()));
}
