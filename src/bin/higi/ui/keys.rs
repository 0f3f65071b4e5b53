//! Key bindings

use crossterm::event::KeyCode;
use higi_studio::{CadenceMode, SessionEvent, ThemeKey};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Session(SessionEvent),
    None,
}

/// Map a key to an action
pub fn key_action(key: KeyCode) -> KeyAction {
    use SessionEvent::*;

    let event = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Left | KeyCode::Char('h') => NudgeEchoes(-1),
        KeyCode::Right | KeyCode::Char('l') => NudgeEchoes(1),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => NudgeTempo(1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => NudgeTempo(-1),
        KeyCode::Char('1') => SelectCadence(CadenceMode::Calm),
        KeyCode::Char('2') => SelectCadence(CadenceMode::Excited),
        KeyCode::Char('3') => SelectCadence(CadenceMode::Chaotic),
        KeyCode::Char('c') | KeyCode::Char('C') => CycleCadence,
        KeyCode::Char('a') | KeyCode::Char('A') => SelectTheme(ThemeKey::Aurora),
        KeyCode::Char('s') | KeyCode::Char('S') => SelectTheme(ThemeKey::Sunrise),
        KeyCode::Char('m') | KeyCode::Char('M') => SelectTheme(ThemeKey::Midnight),
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Tab => CycleTheme,
        _ => return KeyAction::None,
    };
    KeyAction::Session(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_action(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(key_action(KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_arrows_drive_echoes_and_tempo() {
        assert_eq!(
            key_action(KeyCode::Right),
            KeyAction::Session(SessionEvent::NudgeEchoes(1))
        );
        assert_eq!(
            key_action(KeyCode::Down),
            KeyAction::Session(SessionEvent::NudgeTempo(-1))
        );
    }

    #[test]
    fn test_digits_select_cadence() {
        assert_eq!(
            key_action(KeyCode::Char('3')),
            KeyAction::Session(SessionEvent::SelectCadence(CadenceMode::Chaotic))
        );
        assert_eq!(key_action(KeyCode::Char('9')), KeyAction::None);
    }
}
