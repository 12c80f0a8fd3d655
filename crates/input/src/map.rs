//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command.
///
/// Classic bindings: arrows or h/j/k/l, space to drop, p to pause, q or
/// Ctrl-C to quit. Anything else is [`Command::Redraw`].
pub fn handle_key_event(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Command::MoveRight,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Command::MoveDown,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Command::Rotate,
        KeyCode::Char(' ') => Command::QuickDrop,
        KeyCode::Char('p') | KeyCode::Char('P') => Command::Pause,
        _ => Command::Redraw,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map any terminal event. Returns `None` for events that should not reach
/// the game at all (key releases and repeats, mouse, focus, paste).
pub fn map_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(handle_key_event(*key)),
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Command::MoveLeft);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Command::MoveRight);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Command::MoveDown);

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('h'))), Command::MoveLeft);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), Command::MoveRight);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), Command::MoveDown);
    }

    #[test]
    fn test_rotation_and_actions() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Command::Rotate);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), Command::Rotate);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), Command::QuickDrop);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('p'))), Command::Pause);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }

    #[test]
    fn unknown_keys_redraw() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), Command::Redraw);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::F(5))), Command::Redraw);
    }

    #[test]
    fn releases_are_skipped_and_resize_redraws() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(map_event(&Event::Key(KeyEvent::from(KeyCode::Left))), Some(Command::MoveLeft));
        assert_eq!(map_event(&Event::Resize(80, 24)), Some(Command::Redraw));
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
