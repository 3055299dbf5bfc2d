//! Entry points for callers that hand over `(owner, fn)` pairs instead of
//! closures. Each one binds the pair and installs it on the widget,
//! replacing whatever handler was there.

use std::fmt::Display;
use std::str::FromStr;

use crate::callback::{bind, bind_action, bind_getter, EventResult};
use crate::form::{Field, Form};
use crate::owner::OwnerHandle;
use crate::widget::{Button, TextBox, ValueCallback};

pub fn set_button_callback(
    button: &mut Button,
    owner: OwnerHandle,
    callback: Option<fn(OwnerHandle)>,
) {
    button.set_callback(bind_action(owner, callback).into_handler());
}

pub fn set_text_box_callback(
    text_box: &mut TextBox,
    owner: OwnerHandle,
    callback: Option<fn(OwnerHandle, &str) -> bool>,
) {
    text_box.set_callback(bind(owner, callback).into_handler());
}

/// Fires after every keyboard event with the text box's edit buffer.
pub fn set_text_box_key_callback(
    text_box: &mut TextBox,
    owner: OwnerHandle,
    callback: Option<fn(OwnerHandle, &str) -> bool>,
) {
    text_box.set_key_callback(bind(owner, callback).into_handler());
}

/// Attach an owner binding to any widget with a value-shaped event.
pub fn set_value_callback<W, T>(
    widget: &mut W,
    owner: OwnerHandle,
    callback: Option<fn(OwnerHandle, &T) -> W::Output>,
) where
    W: ValueCallback<T> + ?Sized,
    W::Output: EventResult + 'static,
    T: ?Sized + 'static,
{
    widget.set_boxed_callback(Box::new(bind(owner, callback).into_handler()));
}

pub fn add_button<'a>(
    form: &'a mut Form,
    caption: &str,
    owner: OwnerHandle,
    callback: Option<fn(OwnerHandle)>,
) -> &'a mut Button {
    form.add_button(caption, bind_action(owner, callback).into_handler())
}

/// Add a form variable whose value lives on the caller's side.
pub fn add_variable<'a, T>(
    form: &'a mut Form,
    name: &str,
    owner: OwnerHandle,
    setter: Option<fn(OwnerHandle, &T)>,
    getter: Option<fn(OwnerHandle) -> T>,
) -> &'a mut (dyn Field + 'static)
where
    T: Default + Display + FromStr + 'static,
{
    let setter = bind(owner, setter).into_handler();
    let getter = bind_getter(owner, getter).into_getter();
    form.add_variable(name, setter, getter)
}
