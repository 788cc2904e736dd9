use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleMode,
    InputChar(char),
    InputBackspace,
    Submit,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleMode,
        KeyCode::Left | KeyCode::Right => Action::ToggleMode,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}
