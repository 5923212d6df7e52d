use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Compose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    NextView,
    PrevView,
    SelectView(usize),
    Toggle,
    Delete,
    Compose,
    Input(char),
    Backspace,
    Submit,
    Cancel,
}

pub fn action_for(mode: Mode, key: KeyEvent) -> Option<Action> {
    // Only presses; repeats and releases would duplicate input
    if key.kind != KeyEventKind::Press { return None; }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') { return Some(Action::Quit); }
    match mode {
        Mode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Action::NextView),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Action::PrevView),
            KeyCode::Char(c @ '1'..='9') => Some(Action::SelectView(c as usize - '1' as usize)),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::Delete),
            KeyCode::Char('n') => Some(Action::Compose),
            _ => None,
        },
        Mode::Compose => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}
