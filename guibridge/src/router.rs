//! Routing of context-free window hooks to the active GUI surface.
//!
//! Window libraries in the GLFW mold deliver input through plain function
//! pointers with no user data. The router keeps the one surface that should
//! receive those events in a thread-local slot and registers hook functions
//! that look it up and forward each event unchanged.
//!
//! The slot starts empty (`Uninstalled`). [`install_router`] fills it; a
//! later install replaces the surface, and there is no way back to empty.
//! Events are pumped on a single thread, so the slot belongs to the thread
//! that installs it; a hook fired on a thread with no installed surface
//! panics rather than dropping the event.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::BridgeError;
use crate::event::{Action, Modifiers, MouseButton};

/// Work a surface hands back to run once the router has released it.
pub type Deferred = Box<dyn FnOnce()>;

/// The receiving end of routed input. Every handler returns whether the
/// event was consumed.
///
/// Handlers run while the surface is mutably borrowed, so anything that may
/// reach back into the router (a widget's foreign callback, say) should be
/// queued and returned from [`InputSurface::take_deferred`] instead.
pub trait InputSurface {
    fn cursor_pos_event(&mut self, x: f64, y: f64) -> bool;
    fn mouse_button_event(&mut self, button: MouseButton, action: Action, mods: Modifiers) -> bool;
    fn key_event(&mut self, key: i32, scancode: i32, action: Action, mods: Modifiers) -> bool;
    fn char_event(&mut self, codepoint: u32) -> bool;
    fn drop_event(&mut self, paths: &[PathBuf]) -> bool;
    fn scroll_event(&mut self, dx: f64, dy: f64) -> bool;
    fn resize_event(&mut self, width: i32, height: i32) -> bool;
    /// Drain work queued by the last event.
    fn take_deferred(&mut self) -> Vec<Deferred> {
        Vec::new()
    }
}

pub type SurfaceRef = Rc<RefCell<dyn InputSurface>>;

pub type CursorPosHook = fn(f64, f64) -> bool;
pub type MouseButtonHook = fn(MouseButton, Action, Modifiers) -> bool;
pub type KeyHook = fn(i32, i32, Action, Modifiers) -> bool;
pub type CharHook = fn(u32) -> bool;
pub type DropHook = fn(&[PathBuf]) -> bool;
pub type ScrollHook = fn(f64, f64) -> bool;
pub type ResizeHook = fn(i32, i32) -> bool;

/// The seven input registration points of a window.
#[derive(Clone, Copy)]
pub struct InputHooks {
    pub cursor_pos: CursorPosHook,
    pub mouse_button: MouseButtonHook,
    pub key: KeyHook,
    pub char: CharHook,
    pub drop: DropHook,
    pub scroll: ScrollHook,
    pub resize: ResizeHook,
}

impl InputHooks {
    /// Hooks that forward to the active surface.
    pub fn routed() -> Self {
        Self {
            cursor_pos: route_cursor_pos,
            mouse_button: route_mouse_button,
            key: route_key,
            char: route_char,
            drop: route_drop,
            scroll: route_scroll,
            resize: route_resize,
        }
    }
}

/// Something that accepts a hook table, i.e. a window.
pub trait HookWindow {
    fn set_input_hooks(&mut self, hooks: InputHooks);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Uninstalled,
    Installed,
}

thread_local! {
    static ACTIVE_SURFACE: RefCell<Option<SurfaceRef>> = const { RefCell::new(None) };
}

/// Make `surface` the target of all routed input on this thread and
/// register the routing hooks on `window`.
///
/// The active surface is per thread, not per process: install on the
/// thread that pumps the window's events. A routed hook fired on any other
/// thread finds no surface and panics, as it would before any install.
pub fn install_router<S, W>(surface: Rc<RefCell<S>>, window: &mut W)
where
    S: InputSurface + 'static,
    W: HookWindow + ?Sized,
{
    let surface: SurfaceRef = surface;
    let replaced = ACTIVE_SURFACE.with(|slot| slot.borrow_mut().replace(surface).is_some());
    if replaced {
        log::info!("input router retargeted to a new surface");
    } else {
        log::info!("input router installed");
    }
    window.set_input_hooks(InputHooks::routed());
}

pub fn router_state() -> RouterState {
    ACTIVE_SURFACE.with(|slot| match *slot.borrow() {
        Some(_) => RouterState::Installed,
        None => RouterState::Uninstalled,
    })
}

pub fn active_surface() -> Result<SurfaceRef, BridgeError> {
    ACTIVE_SURFACE
        .with(|slot| slot.borrow().clone())
        .ok_or(BridgeError::RouterNotInstalled)
}

/// Run `f` on the active surface, then run whatever it deferred with the
/// surface released.
///
/// # Panics
///
/// If no surface was ever installed on this thread, or if the surface is
/// already borrowed (a hook fired from inside a surface handler).
fn with_surface<R>(f: impl FnOnce(&mut dyn InputSurface) -> R) -> R {
    let surface = match active_surface() {
        Ok(surface) => surface,
        Err(err) => panic!("input hook fired before install_router: {err}"),
    };
    let (result, deferred) = {
        let mut surface = surface.borrow_mut();
        let result = f(&mut *surface);
        (result, surface.take_deferred())
    };
    for task in deferred {
        task();
    }
    result
}

pub fn route_cursor_pos(x: f64, y: f64) -> bool {
    log::trace!("cursor {x} {y}");
    with_surface(|s| s.cursor_pos_event(x, y))
}

pub fn route_mouse_button(button: MouseButton, action: Action, mods: Modifiers) -> bool {
    log::trace!("mouse {button:?} {action:?} {mods:?}");
    with_surface(|s| s.mouse_button_event(button, action, mods))
}

pub fn route_key(key: i32, scancode: i32, action: Action, mods: Modifiers) -> bool {
    log::trace!("key {key} ({scancode}) {action:?} {mods:?}");
    with_surface(|s| s.key_event(key, scancode, action, mods))
}

pub fn route_char(codepoint: u32) -> bool {
    log::trace!("char {codepoint:#x}");
    with_surface(|s| s.char_event(codepoint))
}

pub fn route_drop(paths: &[PathBuf]) -> bool {
    log::trace!("drop {} path(s)", paths.len());
    with_surface(|s| s.drop_event(paths))
}

pub fn route_scroll(dx: f64, dy: f64) -> bool {
    log::trace!("scroll {dx} {dy}");
    with_surface(|s| s.scroll_event(dx, dy))
}

pub fn route_resize(width: i32, height: i32) -> bool {
    log::trace!("resize {width}x{height}");
    with_surface(|s| s.resize_event(width, height))
}
