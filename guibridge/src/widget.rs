//! The widget objects the bridge attaches handlers to.
//!
//! These carry just enough behavior to fire their events: a button clicks,
//! a text box edits and commits, a value box accepts or rejects a new value.
//! Positioning is explicit; there is no layout.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use std::str::FromStr;

use crate::callback::EventResult;
use crate::event::{keys, Action, Modifiers, MouseButton};

/// A widget event point that takes a one-argument handler.
///
/// This is the registration hook `set_value_callback` is generic over, so
/// any widget with a value-shaped event can take an owner binding.
pub trait ValueCallback<T: ?Sized> {
    type Output: EventResult;
    /// Replace the current handler.
    fn set_boxed_callback(&mut self, callback: Box<dyn FnMut(&T) -> Self::Output>);
}

/// Screen-space rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// A button's click handler, shared so it can run after the button itself
/// is no longer borrowed.
pub type ClickHandler = Rc<RefCell<dyn FnMut()>>;

/// Run a click handler.
///
/// # Panics
///
/// If the handler is already running further up the stack.
pub(crate) fn fire_click(handler: &ClickHandler) {
    let mut handler = handler.borrow_mut();
    (&mut *handler)();
}

/// What a mouse event did to a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonHit {
    /// The button took the event.
    pub consumed: bool,
    /// The event completed a click.
    pub clicked: bool,
}

pub struct Button {
    caption: String,
    bounds: Option<Bounds>,
    pushed: bool,
    callback: Option<ClickHandler>,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            bounds: None,
            pushed: false,
            callback: None,
        }
    }
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
    pub fn caption(&self) -> &str {
        &self.caption
    }
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }
    pub fn pushed(&self) -> bool {
        self.pushed
    }
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        let handler: ClickHandler = Rc::new(RefCell::new(callback));
        self.callback = Some(handler);
    }
    pub fn click_handler(&self) -> Option<ClickHandler> {
        self.callback.clone()
    }
    /// Fire the click handler. Returns whether there was one.
    pub fn click(&mut self) -> bool {
        match &self.callback {
            Some(handler) => {
                fire_click(handler);
                true
            }
            None => false,
        }
    }
    /// Update the pushed state from a mouse event without firing anything.
    /// A left press inside the bounds pushes the button; the matching
    /// release, still inside, completes a click.
    pub fn track_mouse(
        &mut self,
        x: f64,
        y: f64,
        button: MouseButton,
        action: Action,
    ) -> ButtonHit {
        let inside = self.bounds.is_some_and(|b| b.contains(x, y));
        if button != MouseButton::Left {
            return ButtonHit::default();
        }
        match action {
            Action::Press | Action::Repeat => {
                self.pushed = inside;
                ButtonHit {
                    consumed: inside,
                    clicked: false,
                }
            }
            Action::Release => {
                let was_pushed = std::mem::take(&mut self.pushed);
                ButtonHit {
                    consumed: was_pushed,
                    clicked: was_pushed && inside,
                }
            }
        }
    }
    /// [`Button::track_mouse`], then fire the handler on a click.
    pub fn mouse_button_event(
        &mut self,
        x: f64,
        y: f64,
        button: MouseButton,
        action: Action,
    ) -> bool {
        let hit = self.track_mouse(x, y, button, action);
        if hit.clicked {
            self.click();
        }
        hit.consumed
    }
}

impl ValueCallback<()> for Button {
    type Output = ();
    fn set_boxed_callback(&mut self, mut callback: Box<dyn FnMut(&())>) {
        self.set_callback(move || callback(&()));
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("caption", &self.caption)
            .field("bounds", &self.bounds)
            .field("pushed", &self.pushed)
            .finish_non_exhaustive()
    }
}

/// Editable text with a committed value and an in-progress edit.
///
/// Besides the commit callback there is a key callback that fires after
/// every keyboard event with the current edit buffer, so a handler can
/// react while the user is still typing.
pub struct TextBox {
    value: String,
    edit: String,
    editable: bool,
    callback: Option<Box<dyn FnMut(&str) -> bool>>,
    key_callback: Option<Box<dyn FnMut(&str) -> bool>>,
}

impl TextBox {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            edit: value.clone(),
            value,
            editable: true,
            callback: None,
            key_callback: None,
        }
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn edit_buffer(&self) -> &str {
        &self.edit
    }
    /// Set both the committed value and the edit buffer. No callback fires.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.edit.clone_from(&self.value);
    }
    pub fn editable(&self) -> bool {
        self.editable
    }
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }
    pub fn set_callback(&mut self, callback: impl FnMut(&str) -> bool + 'static) {
        self.callback = Some(Box::new(callback));
    }
    pub fn set_key_callback(&mut self, callback: impl FnMut(&str) -> bool + 'static) {
        self.key_callback = Some(Box::new(callback));
    }
    pub fn char_event(&mut self, codepoint: u32) -> bool {
        if !self.editable {
            return false;
        }
        match char::from_u32(codepoint) {
            Some(c) if !c.is_control() => {
                self.edit.push(c);
                true
            }
            _ => false,
        }
    }
    pub fn keyboard_event(
        &mut self,
        key: i32,
        _scancode: i32,
        action: Action,
        _mods: Modifiers,
    ) -> bool {
        let handled = self.editable
            && action.is_down()
            && match key {
                keys::BACKSPACE => {
                    self.edit.pop();
                    true
                }
                keys::ENTER | keys::KP_ENTER => {
                    self.commit();
                    true
                }
                keys::ESCAPE => {
                    self.revert();
                    true
                }
                _ => false,
            };
        if let Some(key_callback) = self.key_callback.as_mut() {
            key_callback(&self.edit);
        }
        handled
    }
    /// Offer the edit buffer to the callback. Accepted edits become the
    /// value; rejected ones are discarded.
    pub fn commit(&mut self) -> bool {
        let accepted = match self.callback.as_mut() {
            Some(callback) => callback(&self.edit),
            None => true,
        };
        if accepted {
            self.value.clone_from(&self.edit);
        } else {
            log::debug!("text box rejected {:?}, keeping {:?}", self.edit, self.value);
            self.revert();
        }
        accepted
    }
    pub fn revert(&mut self) {
        self.edit.clone_from(&self.value);
    }
}

impl ValueCallback<str> for TextBox {
    type Output = bool;
    fn set_boxed_callback(&mut self, callback: Box<dyn FnMut(&str) -> bool>) {
        self.callback = Some(callback);
    }
}

impl std::fmt::Debug for TextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("value", &self.value)
            .field("edit", &self.edit)
            .field("editable", &self.editable)
            .finish_non_exhaustive()
    }
}

/// A box holding a parsed value of type `T`.
pub struct ValueBox<T> {
    value: T,
    callback: Option<Box<dyn FnMut(&T) -> bool>>,
}

pub type FloatBox = ValueBox<f32>;
pub type IntBox = ValueBox<i32>;

impl<T> ValueBox<T>
where
    T: Clone + Display + FromStr,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            callback: None,
        }
    }
    pub fn value(&self) -> &T {
        &self.value
    }
    /// Set the value directly. No callback fires.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }
    pub fn set_callback(&mut self, callback: impl FnMut(&T) -> bool + 'static) {
        self.callback = Some(Box::new(callback));
    }
    pub fn display(&self) -> String {
        self.value.to_string()
    }
    /// Offer `value` to the callback; keep it only if accepted.
    pub fn commit_value(&mut self, value: T) -> bool {
        let accepted = match self.callback.as_mut() {
            Some(callback) => callback(&value),
            None => true,
        };
        if accepted {
            self.value = value;
        } else {
            log::debug!("value box rejected {value}, keeping {}", self.value);
        }
        accepted
    }
    /// Parse `text` and commit it. Unparseable text is rejected without
    /// reaching the callback.
    pub fn commit_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<T>() {
            Ok(value) => self.commit_value(value),
            Err(_) => {
                log::debug!("value box could not parse {text:?}");
                false
            }
        }
    }
}

impl<T> ValueCallback<T> for ValueBox<T> {
    type Output = bool;
    fn set_boxed_callback(&mut self, callback: Box<dyn FnMut(&T) -> bool>) {
        self.callback = Some(callback);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueBox")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn type_text(tb: &mut TextBox, text: &str) {
        for c in text.chars() {
            tb.char_event(c as u32);
        }
    }

    #[test]
    fn text_box_commit_keeps_accepted_edit() {
        let mut tb = TextBox::new("old");
        tb.set_callback(|s| !s.is_empty());
        tb.set_value("");
        type_text(&mut tb, "new");
        assert!(tb.keyboard_event(keys::ENTER, 0, Action::Press, Modifiers::empty()));
        assert_eq!(tb.value(), "new");
    }

    #[test]
    fn text_box_commit_reverts_rejected_edit() {
        let mut tb = TextBox::new("keep");
        tb.set_callback(|s| s.len() < 5);
        type_text(&mut tb, "ing");
        assert!(!tb.commit());
        assert_eq!(tb.value(), "keep");
        assert_eq!(tb.edit_buffer(), "keep");
    }

    #[test]
    fn key_callback_sees_buffer_after_every_key() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tb = TextBox::new("ab");
        let log = seen.clone();
        tb.set_key_callback(move |s| {
            log.borrow_mut().push(s.to_string());
            true
        });
        tb.keyboard_event(keys::BACKSPACE, 0, Action::Press, Modifiers::empty());
        tb.keyboard_event(keys::BACKSPACE, 0, Action::Release, Modifiers::empty());
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "a".to_string()]);
    }

    #[test]
    fn read_only_text_box_ignores_input() {
        let mut tb = TextBox::new("fixed");
        tb.set_editable(false);
        assert!(!tb.char_event('x' as u32));
        assert!(!tb.keyboard_event(keys::BACKSPACE, 0, Action::Press, Modifiers::empty()));
        assert_eq!(tb.edit_buffer(), "fixed");
    }

    #[test]
    fn value_box_rejects_unparseable_text_without_callback() {
        let calls = Rc::new(Cell::new(0));
        let mut fb = FloatBox::new(1.0);
        let counter = calls.clone();
        fb.set_callback(move |_| {
            counter.set(counter.get() + 1);
            true
        });
        assert!(!fb.commit_text("one"));
        assert_eq!(calls.get(), 0);
        assert!(fb.commit_text(" 2.5 "));
        assert_eq!(*fb.value(), 2.5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn button_clicks_on_release_inside() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut button = Button::new("go").with_bounds(Bounds::new(10.0, 10.0, 20.0, 10.0));
        button.set_callback(move || counter.set(counter.get() + 1));

        assert!(button.mouse_button_event(15.0, 15.0, MouseButton::Left, Action::Press));
        assert!(button.pushed());
        button.mouse_button_event(15.0, 15.0, MouseButton::Left, Action::Release);
        assert_eq!(clicks.get(), 1);

        button.mouse_button_event(15.0, 15.0, MouseButton::Left, Action::Press);
        button.mouse_button_event(100.0, 15.0, MouseButton::Left, Action::Release);
        assert_eq!(clicks.get(), 1);
        assert!(!button.mouse_button_event(15.0, 15.0, MouseButton::Right, Action::Press));
    }
}
