//! Convert crossterm events into the events the widgets understand.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;

/// A keyboard key, already stripped of modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Screen position in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Input events delivered to the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Key press (never release or repeat).
    Key(Key),
    /// Primary mouse button pressed at a position.
    Click(Position),
    /// Terminal resized.
    Resize { width: u16, height: u16 },
    /// Ctrl-C.
    Quit,
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}

fn convert_key_event(event: KeyEvent) -> Option<Event> {
    // Only key presses, not release or repeat.
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    // The widgets take no other modified keys.
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    convert_key(event.code).map(Event::Key)
}

fn convert_mouse_event(event: MouseEvent) -> Option<Event> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(Event::Click(Position::new(event.column, event.row)))
        }
        _ => None,
    }
}

/// Convert a crossterm event. Returns `None` for events the app ignores.
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => {
            trace!(
                "key event: code={:?}, modifiers={:?}, kind={:?}",
                key_event.code, key_event.modifiers, key_event.kind
            );
            convert_key_event(key_event)
        }
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}
