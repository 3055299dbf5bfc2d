//! The root GUI surface: owns a [`Form`] and turns routed window input into
//! widget events.

use std::path::PathBuf;

use crate::event::{Action, Modifiers, MouseButton};
use crate::form::Form;
use crate::router::{Deferred, InputSurface};
use crate::widget::fire_click;

pub struct Screen {
    form: Form,
    size: (i32, i32),
    cursor: (f64, f64),
    modifiers: Modifiers,
    pressed: Vec<MouseButton>,
    scroll: (f64, f64),
    dropped: Vec<PathBuf>,
    focus: Option<usize>,
    resize_callback: Option<Box<dyn FnMut(i32, i32)>>,
    deferred: Vec<Deferred>,
}

impl Screen {
    pub fn new(form: Form, width: i32, height: i32) -> Self {
        Self {
            form,
            size: (width, height),
            cursor: (0.0, 0.0),
            modifiers: Modifiers::empty(),
            pressed: Vec::new(),
            scroll: (0.0, 0.0),
            dropped: Vec::new(),
            focus: None,
            resize_callback: None,
            deferred: Vec::new(),
        }
    }
    pub fn form(&self) -> &Form {
        &self.form
    }
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }
    pub fn size(&self) -> (i32, i32) {
        self.size
    }
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }
    /// Scroll accumulated since the last [`Screen::take_scroll`].
    pub fn take_scroll(&mut self) -> (f64, f64) {
        std::mem::take(&mut self.scroll)
    }
    /// Paths dropped since the last call.
    pub fn take_dropped(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.dropped)
    }
    /// Send keyboard input to the form's `index`th text box, or to nothing.
    pub fn set_focus(&mut self, index: Option<usize>) {
        self.focus = index.filter(|&i| i < self.form.text_boxes().len());
    }
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }
    pub fn set_resize_callback(&mut self, callback: impl FnMut(i32, i32) + 'static) {
        self.resize_callback = Some(Box::new(callback));
    }
}

impl InputSurface for Screen {
    fn cursor_pos_event(&mut self, x: f64, y: f64) -> bool {
        self.cursor = (x, y);
        false
    }
    fn mouse_button_event(&mut self, button: MouseButton, action: Action, mods: Modifiers) -> bool {
        self.modifiers = mods;
        if action.is_down() {
            if !self.pressed.contains(&button) {
                self.pressed.push(button);
            }
        } else {
            self.pressed.retain(|&b| b != button);
        }
        let (x, y) = self.cursor;
        let mut consumed = false;
        for b in self.form.buttons_mut() {
            let hit = b.track_mouse(x, y, button, action);
            consumed |= hit.consumed;
            if hit.clicked {
                if let Some(handler) = b.click_handler() {
                    self.deferred.push(Box::new(move || fire_click(&handler)));
                }
            }
        }
        consumed
    }
    fn key_event(&mut self, key: i32, scancode: i32, action: Action, mods: Modifiers) -> bool {
        self.modifiers = mods;
        match self.focus.and_then(|i| self.form.text_box_mut(i)) {
            Some(text_box) => text_box.keyboard_event(key, scancode, action, mods),
            None => false,
        }
    }
    fn char_event(&mut self, codepoint: u32) -> bool {
        match self.focus.and_then(|i| self.form.text_box_mut(i)) {
            Some(text_box) => text_box.char_event(codepoint),
            None => false,
        }
    }
    fn drop_event(&mut self, paths: &[PathBuf]) -> bool {
        log::debug!("{} file(s) dropped on screen", paths.len());
        self.dropped.extend_from_slice(paths);
        true
    }
    fn scroll_event(&mut self, dx: f64, dy: f64) -> bool {
        self.scroll.0 += dx;
        self.scroll.1 += dy;
        false
    }
    fn resize_event(&mut self, width: i32, height: i32) -> bool {
        self.size = (width, height);
        if let Some(callback) = self.resize_callback.as_mut() {
            callback(width, height);
        }
        true
    }
    /// Click handlers of buttons released since the last call.
    fn take_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::keys;
    use crate::widget::Bounds;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn left_click_queues_button_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut form = Form::new("f");
        form.add_button("ok", move || counter.set(counter.get() + 1))
            .set_bounds(Bounds::new(0.0, 0.0, 50.0, 20.0));
        let mut screen = Screen::new(form, 100, 100);

        screen.cursor_pos_event(10.0, 10.0);
        assert!(screen.mouse_button_event(MouseButton::Left, Action::Press, Modifiers::empty()));
        assert!(screen.is_pressed(MouseButton::Left));
        assert!(screen.mouse_button_event(MouseButton::Left, Action::Release, Modifiers::empty()));
        assert!(!screen.is_pressed(MouseButton::Left));
        assert_eq!(clicks.get(), 0);

        let deferred = screen.take_deferred();
        assert_eq!(deferred.len(), 1);
        deferred.into_iter().for_each(|task| task());
        assert_eq!(clicks.get(), 1);
        assert!(screen.take_deferred().is_empty());
    }

    #[test]
    fn typing_goes_to_focused_text_box() {
        let mut form = Form::new("f");
        form.add_text_box("");
        let mut screen = Screen::new(form, 100, 100);

        assert!(!screen.char_event('x' as u32));
        screen.set_focus(Some(0));
        assert!(screen.char_event('h' as u32));
        assert!(screen.char_event('i' as u32));
        assert!(screen.key_event(keys::ENTER, 0, Action::Press, Modifiers::empty()));
        assert_eq!(screen.form().text_boxes()[0].value(), "hi");

        screen.set_focus(Some(3));
        assert_eq!(screen.focus(), None);
    }

    #[test]
    fn scroll_and_drops_accumulate_until_taken() {
        let mut screen = Screen::new(Form::default(), 10, 10);
        screen.scroll_event(0.0, 1.0);
        screen.scroll_event(0.5, 1.0);
        assert_eq!(screen.take_scroll(), (0.5, 2.0));
        assert_eq!(screen.take_scroll(), (0.0, 0.0));

        screen.drop_event(&[PathBuf::from("a.txt")]);
        assert_eq!(screen.take_dropped(), vec![PathBuf::from("a.txt")]);
        assert!(screen.resize_event(20, 30));
        assert_eq!(screen.size(), (20, 30));
    }
}
