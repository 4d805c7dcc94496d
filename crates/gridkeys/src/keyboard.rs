//! Keyboard events and conversion from platform events.
//!
//! The grid managers only need two things from a key event: which key was
//! pressed, and a way to suppress the host's default action for it. Both are
//! captured by the [`KeyboardEvent`] trait, which [`KeyPressEvent`] implements.
//! Hosts with their own event type can implement the trait directly.
//!
//! ```
//! use gridkeys::keyboard::{from_winit_key, KeyPressEvent};
//! use winit::keyboard::{Key as WinitKey, NamedKey};
//!
//! let key = from_winit_key(&WinitKey::Named(NamedKey::ArrowDown));
//! let event = KeyPressEvent::from_key(key);
//! assert!(!event.base.is_accepted());
//! ```

use winit::event::Modifiers;
use winit::keyboard::{Key as WinitKey, NamedKey};

/// A key on the keyboard, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Insert,
    Enter,
    Tab,
    Space,
    Escape,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    /// A printable character, lowercased.
    Character(char),

    /// A key with no mapping; carries a code point when one is known.
    Unknown(u16),
}

/// The four arrow keys the grid managers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Classify the key as an arrow key, if it is one.
    pub fn arrow(self) -> Option<ArrowKey> {
        match self {
            Key::ArrowUp => Some(ArrowKey::Up),
            Key::ArrowDown => Some(ArrowKey::Down),
            Key::ArrowLeft => Some(ArrowKey::Left),
            Key::ArrowRight => Some(ArrowKey::Right),
            _ => None,
        }
    }
}

/// Keyboard modifiers held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyboardModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Returns `true` if any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// State shared by all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, suppressing the host's default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, leaving the default action in place.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat,
        }
    }

    /// Create a non-repeating event with no modifiers.
    pub fn from_key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, false)
    }
}

/// What the grid managers need from a keyboard event.
pub trait KeyboardEvent {
    /// The key that was pressed.
    fn key(&self) -> Key;

    /// Suppress the host's default action for this key (e.g. scrolling).
    fn prevent_default(&mut self);

    /// Whether [`prevent_default`](Self::prevent_default) has been called.
    fn is_default_prevented(&self) -> bool;
}

impl KeyboardEvent for KeyPressEvent {
    fn key(&self) -> Key {
        self.key
    }

    fn prevent_default(&mut self) {
        self.base.accept();
    }

    fn is_default_prevented(&self) -> bool {
        self.base.is_accepted()
    }
}

/// Converts a winit logical key to a gridkeys [`Key`].
pub fn from_winit_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => from_winit_named_key(named),
        WinitKey::Character(c) => from_character(c),
        WinitKey::Unidentified(_) => Key::Unknown(0),
        WinitKey::Dead(_) => Key::Unknown(0),
    }
}

fn from_winit_named_key(key: &NamedKey) -> Key {
    match key {
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,

        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::Insert => Key::Insert,
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::Space => Key::Space,
        NamedKey::Escape => Key::Escape,

        NamedKey::F1 => Key::F1,
        NamedKey::F2 => Key::F2,
        NamedKey::F3 => Key::F3,
        NamedKey::F4 => Key::F4,
        NamedKey::F5 => Key::F5,
        NamedKey::F6 => Key::F6,
        NamedKey::F7 => Key::F7,
        NamedKey::F8 => Key::F8,
        NamedKey::F9 => Key::F9,
        NamedKey::F10 => Key::F10,
        NamedKey::F11 => Key::F11,
        NamedKey::F12 => Key::F12,

        _ => Key::Unknown(0),
    }
}

fn from_character(c: &str) -> Key {
    let mut chars = c.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Key::Unknown(0);
    };

    match ch {
        ' ' => Key::Space,
        ch => Key::Character(ch.to_lowercase().next().unwrap_or(ch)),
    }
}

/// Converts winit modifiers to [`KeyboardModifiers`].
pub fn from_winit_modifiers(modifiers: &Modifiers) -> KeyboardModifiers {
    let state = modifiers.state();
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}
