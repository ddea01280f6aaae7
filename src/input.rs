use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::vec2::Vec2;

/// What a key press means to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Vec2),
    Quit,
    Ignore,
}

/// Maps a raw key event to a game command. Unknown keys are no-ops;
/// reversal filtering happens in `GameState::steer`, not here.
pub fn map_key(ev: &KeyEvent) -> Command {
    if is_ctrl_c(ev) {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') => Command::Steer(Vec2::UP),
        KeyCode::Down | KeyCode::Char('s') => Command::Steer(Vec2::DOWN),
        KeyCode::Left | KeyCode::Char('a') => Command::Steer(Vec2::LEFT),
        KeyCode::Right | KeyCode::Char('d') => Command::Steer(Vec2::RIGHT),
        KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
