//! Synthetic UI events
//!
//! Events are dispatched into built element trees by a host (or by tests)
//! through [`Element::dispatch`](crate::Element::dispatch).

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const CLICK: EventType = 1;
    pub const POINTER_DOWN: EventType = 2;
    pub const POINTER_UP: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    pub const KEY_UP: EventType = 21;
    /// Text value changed (input, textarea, select)
    pub const INPUT: EventType = 22;

    // Resource lifecycle events
    pub const LOAD: EventType = 60;
    pub const ERROR: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    Key {
        key: KeyCode,
        modifiers: Modifiers,
    },
    /// New text value of a form control
    Input {
        value: String,
    },
    #[default]
    None,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
        }
    }

    pub fn click() -> Self {
        Self::new(event_types::CLICK)
    }

    pub fn pointer_down() -> Self {
        Self {
            event_type: event_types::POINTER_DOWN,
            data: EventData::Pointer { x: 0.0, y: 0.0 },
        }
    }

    pub fn pointer_enter() -> Self {
        Self::new(event_types::POINTER_ENTER)
    }

    pub fn pointer_leave() -> Self {
        Self::new(event_types::POINTER_LEAVE)
    }

    pub fn focus() -> Self {
        Self::new(event_types::FOCUS)
    }

    pub fn blur() -> Self {
        Self::new(event_types::BLUR)
    }

    pub fn key_down(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            data: EventData::Key { key, modifiers },
        }
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self {
            event_type: event_types::INPUT,
            data: EventData::Input {
                value: value.into(),
            },
        }
    }

    pub fn load() -> Self {
        Self::new(event_types::LOAD)
    }

    pub fn error() -> Self {
        Self::new(event_types::ERROR)
    }

    /// Text payload of an input event
    pub fn value(&self) -> Option<&str> {
        match &self.data {
            EventData::Input { value } => Some(value),
            _ => None,
        }
    }

    /// Key payload of a keyboard event
    pub fn key(&self) -> Option<(KeyCode, Modifiers)> {
        match self.data {
            EventData::Key { key, modifiers } => Some((key, modifiers)),
            _ => None,
        }
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Special keys
    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const DELETE: KeyCode = KeyCode(0x7F);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);

    // Modifier keys pressed on their own
    pub const SHIFT: KeyCode = KeyCode(0x10);
    pub const CONTROL: KeyCode = KeyCode(0x11);
    pub const ALT: KeyCode = KeyCode(0x12);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000; // Cmd on macOS, Win on Windows

    /// Create new modifiers from flags
    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }
}
