//! Glue between GUI widgets, a window's input hooks, and callers that can
//! only hand over function pointers.
//!
//! guibridge has two halves:
//! 1. An owner-callback adapter: a caller without closures (an embedded
//!    scripting runtime, say) supplies an opaque [`OwnerHandle`] and a
//!    plain `fn`, and [`bind`] turns the pair into the closure a widget
//!    wants. The entry points in [`bridge`] do this for buttons, text
//!    boxes, value boxes and form variables.
//! 2. An input router: window libraries that deliver input through
//!    context-free hooks can be pointed at [`install_router`], which keeps
//!    the active [`InputSurface`] (usually a [`Screen`]) in thread-local
//!    state and forwards every hook to it.
//!
//! With the `winit` feature, [`winit_hooks::WinitHookWindow`] plays the
//! part of such a window on top of a winit event loop.
//!
//! Typical usage builds a [`Form`], attaches handlers with the
//! [`bridge`] functions, wraps it in a [`Screen`], installs the router on
//! the window, and then feeds window events to the window until it closes.

mod callback;
pub use callback::{
    bind, bind_action, bind_getter, ActionBinding, Binding, EventResult, GetterBinding,
};
mod owner;
pub use owner::OwnerHandle;

pub mod bridge;
pub mod event;
pub use event::{keys, Action, Modifiers, MouseButton};

mod error;
pub use error::BridgeError;

mod form;
pub use form::{Field, Form, Variable};
mod widget;
pub use widget::{
    Bounds, Button, ButtonHit, ClickHandler, FloatBox, IntBox, TextBox, ValueBox, ValueCallback,
};

mod router;
pub use router::{
    active_surface, install_router, router_state, Deferred, HookWindow, InputHooks, InputSurface,
    RouterState, SurfaceRef,
};
pub mod routes {
    //! The hook functions [`crate::InputHooks::routed`] registers, for
    //! windows that take hooks one at a time.
    pub use crate::router::{
        route_char, route_cursor_pos, route_drop, route_key, route_mouse_button, route_resize,
        route_scroll,
    };
}

mod screen;
pub use screen::Screen;

pub mod clock;
pub use clock::FrameClock;
pub mod crash;

#[cfg(feature = "winit")]
pub mod winit_hooks;
#[cfg(feature = "winit")]
pub use winit;
