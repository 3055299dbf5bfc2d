//! Primitive input-event vocabulary shared by the router, the widgets, and
//! the window glue. Codes follow GLFW's numbering so that hooks coming from
//! a GLFW-style window library can be forwarded without translation.

use bitflags::bitflags;

/// Key or button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Release,
    Press,
    Repeat,
}

impl Action {
    pub fn is_down(self) -> bool {
        matches!(self, Action::Press | Action::Repeat)
    }
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CONTROL = 0b0010;
        const ALT = 0b0100;
        const SUPER = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Key codes.
pub mod keys {
    pub const UNKNOWN: i32 = -1;
    pub const SPACE: i32 = 32;
    pub const APOSTROPHE: i32 = 39;
    pub const COMMA: i32 = 44;
    pub const MINUS: i32 = 45;
    pub const PERIOD: i32 = 46;
    pub const SLASH: i32 = 47;
    /// `0`..`9` are `DIGIT_0 + n`.
    pub const DIGIT_0: i32 = 48;
    pub const SEMICOLON: i32 = 59;
    pub const EQUAL: i32 = 61;
    /// `A`..`Z` are `A + n`.
    pub const A: i32 = 65;
    pub const LEFT_BRACKET: i32 = 91;
    pub const BACKSLASH: i32 = 92;
    pub const RIGHT_BRACKET: i32 = 93;
    pub const GRAVE_ACCENT: i32 = 96;
    pub const ESCAPE: i32 = 256;
    pub const ENTER: i32 = 257;
    pub const TAB: i32 = 258;
    pub const BACKSPACE: i32 = 259;
    pub const INSERT: i32 = 260;
    pub const DELETE: i32 = 261;
    pub const RIGHT: i32 = 262;
    pub const LEFT: i32 = 263;
    pub const DOWN: i32 = 264;
    pub const UP: i32 = 265;
    pub const PAGE_UP: i32 = 266;
    pub const PAGE_DOWN: i32 = 267;
    pub const HOME: i32 = 268;
    pub const END: i32 = 269;
    /// `F1`..`F12` are `F1 + n`.
    pub const F1: i32 = 290;
    pub const KP_ENTER: i32 = 335;
    pub const LEFT_SHIFT: i32 = 340;
    pub const LEFT_CONTROL: i32 = 341;
    pub const LEFT_ALT: i32 = 342;
    pub const LEFT_SUPER: i32 = 343;
    pub const RIGHT_SHIFT: i32 = 344;
    pub const RIGHT_CONTROL: i32 = 345;
    pub const RIGHT_ALT: i32 = 346;
    pub const RIGHT_SUPER: i32 = 347;
}
