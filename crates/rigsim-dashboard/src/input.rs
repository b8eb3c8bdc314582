//! Key handling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::DashboardResult;

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Operator quit (`q`).
    Quit,
    /// Ctrl+C. Raw mode delivers it as a key instead of a signal.
    Interrupt,
}

/// Map a key event to an action.
pub fn action_for_key(key: &KeyEvent) -> Option<DashboardAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(DashboardAction::Interrupt)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(DashboardAction::Quit),
        _ => None,
    }
}

/// Source of dashboard actions with a bounded wait.
pub trait KeySource {
    /// Wait up to `timeout` for a key and return its action, if any.
    fn next_action(&mut self, timeout: Duration) -> DashboardResult<Option<DashboardAction>>;
}

/// Reads keys from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_action(&mut self, timeout: Duration) -> DashboardResult<Option<DashboardAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(action_for_key(&key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_q_quits() {
        assert_eq!(
            action_for_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(DashboardAction::Quit)
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(DashboardAction::Quit)
        );
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            action_for_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(DashboardAction::Interrupt)
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_key(&key(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(action_for_key(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(&release), None);
    }
}
