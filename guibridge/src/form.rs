//! A form helper: named buttons, text boxes, and variables backed by a
//! setter/getter pair.

use std::fmt::Display;
use std::str::FromStr;

use crate::widget::{Button, TextBox};

/// A named, text-editable entry in a [`Form`].
pub trait Field {
    fn name(&self) -> &str;
    /// Current value as read through the getter.
    fn display(&self) -> String;
    /// Parse `text` and push it through the setter. Returns whether `text`
    /// parsed; setters have no way to refuse, so read [`Field::display`]
    /// back to see what was kept.
    fn set_from_text(&mut self, text: &str) -> bool;
}

/// A form entry that does not own its value: reads go through `getter`,
/// writes through `setter`.
pub struct Variable<T> {
    name: String,
    setter: Box<dyn FnMut(&T)>,
    getter: Box<dyn Fn() -> T>,
}

impl<T> Variable<T> {
    pub fn new(
        name: impl Into<String>,
        setter: impl FnMut(&T) + 'static,
        getter: impl Fn() -> T + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            setter: Box::new(setter),
            getter: Box::new(getter),
        }
    }
    pub fn get(&self) -> T {
        (self.getter)()
    }
    pub fn set(&mut self, value: &T) {
        (self.setter)(value)
    }
}

impl<T: Display + FromStr> Field for Variable<T> {
    fn name(&self) -> &str {
        &self.name
    }
    fn display(&self) -> String {
        self.get().to_string()
    }
    fn set_from_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<T>() {
            Ok(value) => {
                self.set(&value);
                true
            }
            Err(_) => {
                log::debug!("variable {} could not parse {text:?}", self.name);
                false
            }
        }
    }
}

#[derive(Default)]
pub struct Form {
    title: String,
    buttons: Vec<Button>,
    text_boxes: Vec<TextBox>,
    variables: Vec<Box<dyn Field>>,
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn add_button(
        &mut self,
        caption: impl Into<String>,
        callback: impl FnMut() + 'static,
    ) -> &mut Button {
        let mut button = Button::new(caption);
        button.set_callback(callback);
        let index = self.buttons.len();
        self.buttons.push(button);
        &mut self.buttons[index]
    }
    pub fn add_text_box(&mut self, value: impl Into<String>) -> &mut TextBox {
        let index = self.text_boxes.len();
        self.text_boxes.push(TextBox::new(value));
        &mut self.text_boxes[index]
    }
    pub fn add_variable<T: Display + FromStr + 'static>(
        &mut self,
        name: impl Into<String>,
        setter: impl FnMut(&T) + 'static,
        getter: impl Fn() -> T + 'static,
    ) -> &mut (dyn Field + 'static) {
        let index = self.variables.len();
        self.variables.push(Box::new(Variable::new(name, setter, getter)));
        self.variables[index].as_mut()
    }
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
    pub fn buttons_mut(&mut self) -> &mut [Button] {
        &mut self.buttons
    }
    pub fn button_mut(&mut self, caption: &str) -> Option<&mut Button> {
        self.buttons.iter_mut().find(|b| b.caption() == caption)
    }
    pub fn text_boxes(&self) -> &[TextBox] {
        &self.text_boxes
    }
    pub fn text_box_mut(&mut self, index: usize) -> Option<&mut TextBox> {
        self.text_boxes.get_mut(index)
    }
    pub fn variable(&self, name: &str) -> Option<&dyn Field> {
        self.variables
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.as_ref())
    }
    pub fn variable_mut(&mut self, name: &str) -> Option<&mut (dyn Field + 'static)> {
        self.variables
            .iter_mut()
            .find(|v| v.name() == name)
            .map(|v| v.as_mut())
    }
    /// `name = value` for every variable, in insertion order.
    pub fn summary(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(|v| format!("{} = {}", v.name(), v.display()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn variable_reads_and_writes_through_closures() {
        let speed = Rc::new(Cell::new(1.5_f32));
        let (set, get) = (speed.clone(), speed.clone());
        let mut form = Form::new("settings");
        form.add_variable("speed", move |v: &f32| set.set(*v), move || get.get());

        assert_eq!(form.summary(), vec!["speed = 1.5".to_string()]);
        assert!(form.variable_mut("speed").unwrap().set_from_text("3"));
        assert_eq!(speed.get(), 3.0);
        assert!(!form.variable_mut("speed").unwrap().set_from_text("fast"));
        assert_eq!(form.variable("speed").unwrap().display(), "3");
        assert!(form.variable("missing").is_none());
    }

    #[test]
    fn buttons_are_found_by_caption() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut form = Form::new("f");
        form.add_button("reset", move || counter.set(counter.get() + 1));
        assert!(form.button_mut("reset").unwrap().click());
        assert!(form.button_mut("nope").is_none());
        assert_eq!(hits.get(), 1);
    }
}
