//! A stand-in for an embedded scripting runtime: objects live in a table on
//! its side, and the GUI only ever sees their index as an [`OwnerHandle`]
//! plus plain functions to call with it.

use std::cell::RefCell;

use guibridge::OwnerHandle;

pub const MAX_SPEED: f32 = 100.0;

struct ScriptObject {
    name: String,
    speed: f32,
    resets: u32,
}

thread_local! {
    static OBJECTS: RefCell<Vec<ScriptObject>> = const { RefCell::new(Vec::new()) };
}

pub fn spawn(name: &str) -> OwnerHandle {
    OBJECTS.with(|objects| {
        let mut objects = objects.borrow_mut();
        objects.push(ScriptObject {
            name: name.to_string(),
            speed: 1.0,
            resets: 0,
        });
        OwnerHandle::from_token(objects.len() - 1)
    })
}

fn with_object<R>(owner: OwnerHandle, f: impl FnOnce(&mut ScriptObject) -> R) -> Option<R> {
    OBJECTS.with(|objects| objects.borrow_mut().get_mut(owner.addr()).map(f))
}

pub fn on_reset(owner: OwnerHandle) {
    with_object(owner, |obj| {
        obj.speed = 1.0;
        obj.resets += 1;
        log::info!("{} reset ({} times)", obj.name, obj.resets);
    });
}

pub fn on_speed(owner: OwnerHandle, value: &f32) -> bool {
    if !(0.0..=MAX_SPEED).contains(value) {
        log::warn!("speed {value} out of range");
        return false;
    }
    with_object(owner, |obj| obj.speed = *value).is_some()
}

pub fn on_name(owner: OwnerHandle, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    with_object(owner, |obj| {
        log::info!("{} renamed to {name}", obj.name);
        obj.name = name.to_string();
    })
    .is_some()
}

pub fn on_name_key(_owner: OwnerHandle, text: &str) -> bool {
    log::debug!("editing name: {text:?}");
    true
}

/// Form variable setter. Setters cannot refuse a value, so an out of range
/// speed is logged and dropped here.
pub fn set_speed(owner: OwnerHandle, value: &f32) {
    if !on_speed(owner, value) {
        log::warn!("speed setter ignored {value}");
    }
}

pub fn get_speed(owner: OwnerHandle) -> f32 {
    with_object(owner, |obj| obj.speed).unwrap_or_default()
}

pub fn name(owner: OwnerHandle) -> Option<String> {
    with_object(owner, |obj| obj.name.clone())
}
