//! Keyboard input mapping.

use crossterm::event::KeyCode;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by (rows, columns).
    MoveCursor(isize, isize),
    /// Place the human mark under the cursor.
    PlaceAtCursor,
    /// Place the human mark at a board index (0-8).
    PlaceAt(usize),
    /// Switch to the next difficulty and restart.
    CycleDifficulty,
    /// Swap who moves first and restart.
    ToggleFirstPlayer,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down => Some(Action::MoveCursor(1, 0)),
        KeyCode::Left => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right => Some(Action::MoveCursor(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::PlaceAt(d as usize - 1)),
        KeyCode::Char('d') => Some(Action::CycleDifficulty),
        KeyCode::Char('f') => Some(Action::ToggleFirstPlayer),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::PlaceAt(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::PlaceAt(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(action_for(KeyCode::Up), Some(Action::MoveCursor(-1, 0)));
        assert_eq!(action_for(KeyCode::Right), Some(Action::MoveCursor(0, 1)));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(action_for(KeyCode::Char('z')), None);
        assert_eq!(action_for(KeyCode::Tab), None);
    }
}
