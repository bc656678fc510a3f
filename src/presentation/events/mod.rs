//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::domain::keybinding::{Action, Keybind, action_for, default_keybindings};
use crate::presentation::widgets::{FooterButtons, NavButton};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing to do.
    Continue,
    /// Exit application.
    Exit,
    /// Step through the deck.
    Navigate(Action),
    /// Terminal was resized.
    Redraw,
}

/// Maps terminal events to presenter commands.
pub struct EventHandler {
    keybindings: Vec<Keybind>,
    mouse_enabled: bool,
}

impl EventHandler {
    #[must_use]
    pub fn new(keybindings: Vec<Keybind>) -> Self {
        Self {
            keybindings,
            mouse_enabled: false,
        }
    }

    #[must_use]
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    #[must_use]
    pub fn keybindings(&self) -> &[Keybind] {
        &self.keybindings
    }

    /// Resolves one terminal event. `buttons` are the footer regions of the last draw.
    #[must_use]
    pub fn handle(&self, event: &Event, buttons: &FooterButtons) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse_enabled => Self::handle_mouse(mouse, buttons),
            Event::Resize(_, _) => EventResult::Redraw,
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Continue;
        }
        match action_for(&self.keybindings, key) {
            Some(Action::Quit) => EventResult::Exit,
            Some(action) => EventResult::Navigate(action),
            None => EventResult::Continue,
        }
    }

    fn handle_mouse(mouse: &MouseEvent, buttons: &FooterButtons) -> EventResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Continue;
        }
        match buttons.hit(mouse.column, mouse.row) {
            Some(NavButton::Previous) => EventResult::Navigate(Action::PreviousSlide),
            Some(NavButton::Next) => EventResult::Navigate(Action::NextSlide),
            None => EventResult::Continue,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(default_keybindings())
    }
}
