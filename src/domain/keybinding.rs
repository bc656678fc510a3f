use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NextSlide,
    PreviousSlide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Whether `key` triggers this binding. Key kind and state are ignored.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

/// Bindings of the presenter: arrows step through the deck, `q`/`Esc`/`Ctrl+C` quit.
#[must_use]
pub fn default_keybindings() -> Vec<Keybind> {
    vec![
        Keybind::new(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            Action::PreviousSlide,
            "Anterior",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            Action::NextSlide,
            "Próximo",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit,
            "Sair",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            Action::Quit,
            "Sair",
        )
        .hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Sair",
        )
        .hidden(),
    ]
}

/// Resolves a key press against `bindings`.
#[must_use]
pub fn action_for(bindings: &[Keybind], key: &KeyEvent) -> Option<Action> {
    bindings.iter().find(|b| b.matches(key)).map(|b| b.action)
}
