//! Closures for callers that only have function pointers.
//!
//! A foreign runtime that cannot build closures hands over an
//! `(OwnerHandle, fn)` pair instead. The bindings here store that pair and
//! turn it into the boxed-closure shape widgets take, calling
//! `fn(owner, value)` whenever the widget fires and passing the function's
//! return value straight back to the widget.

use crate::owner::OwnerHandle;

/// What a handler returns when no function is bound.
pub trait EventResult {
    fn unhandled() -> Self;
}

impl EventResult for () {
    fn unhandled() {}
}

/// An unbound boolean handler accepts, the same as a widget with no
/// callback at all.
impl EventResult for bool {
    fn unhandled() -> bool {
        true
    }
}

/// `(owner, fn(owner, &T) -> R)`, for any value type `T`.
///
/// `T` may be unsized, so `Binding<str, bool>` is the text handler shape
/// and `Binding<f32, bool>` the float one.
pub struct Binding<T: ?Sized, R> {
    owner: OwnerHandle,
    func: Option<fn(OwnerHandle, &T) -> R>,
}

impl<T: ?Sized, R> Clone for Binding<T, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: ?Sized, R> Copy for Binding<T, R> {}

impl<T: ?Sized, R> std::fmt::Debug for Binding<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("owner", &self.owner)
            .field("bound", &self.func.is_some())
            .finish()
    }
}

impl<T: ?Sized, R: EventResult> Binding<T, R> {
    pub fn new(owner: OwnerHandle, func: Option<fn(OwnerHandle, &T) -> R>) -> Self {
        if func.is_none() {
            log::debug!("null value callback bound for {owner:?}");
        }
        Self { owner, func }
    }
    pub fn owner(&self) -> OwnerHandle {
        self.owner
    }
    pub fn is_null(&self) -> bool {
        self.func.is_none()
    }
    /// Run the bound function with `value`, or return
    /// [`EventResult::unhandled`] if nothing is bound.
    pub fn call(&self, value: &T) -> R {
        match self.func {
            Some(func) => func(self.owner, value),
            None => R::unhandled(),
        }
    }
    /// Turn the binding into a handler a widget can own.
    pub fn into_handler(self) -> impl FnMut(&T) -> R + 'static
    where
        T: 'static,
        R: 'static,
    {
        move |value: &T| self.call(value)
    }
}

/// `(owner, fn(owner))`, for zero-argument events such as button clicks.
#[derive(Clone, Copy, Debug)]
pub struct ActionBinding {
    owner: OwnerHandle,
    func: Option<fn(OwnerHandle)>,
}

impl ActionBinding {
    pub fn new(owner: OwnerHandle, func: Option<fn(OwnerHandle)>) -> Self {
        if func.is_none() {
            log::debug!("null action callback bound for {owner:?}");
        }
        Self { owner, func }
    }
    pub fn owner(&self) -> OwnerHandle {
        self.owner
    }
    pub fn is_null(&self) -> bool {
        self.func.is_none()
    }
    pub fn call(&self) {
        if let Some(func) = self.func {
            func(self.owner);
        }
    }
    pub fn into_handler(self) -> impl FnMut() + 'static {
        move || self.call()
    }
}

/// `(owner, fn(owner) -> T)`, the read half of a form variable.
pub struct GetterBinding<T> {
    owner: OwnerHandle,
    func: Option<fn(OwnerHandle) -> T>,
}

impl<T> Clone for GetterBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for GetterBinding<T> {}

impl<T: Default> GetterBinding<T> {
    pub fn new(owner: OwnerHandle, func: Option<fn(OwnerHandle) -> T>) -> Self {
        Self { owner, func }
    }
    pub fn owner(&self) -> OwnerHandle {
        self.owner
    }
    /// Unbound getters read as `T::default()`.
    pub fn get(&self) -> T {
        self.func.map_or_else(T::default, |func| func(self.owner))
    }
    pub fn into_getter(self) -> impl Fn() -> T + 'static
    where
        T: 'static,
    {
        move || self.get()
    }
}

pub fn bind<T: ?Sized, R: EventResult>(
    owner: OwnerHandle,
    func: Option<fn(OwnerHandle, &T) -> R>,
) -> Binding<T, R> {
    Binding::new(owner, func)
}

pub fn bind_action(owner: OwnerHandle, func: Option<fn(OwnerHandle)>) -> ActionBinding {
    ActionBinding::new(owner, func)
}

pub fn bind_getter<T: Default>(
    owner: OwnerHandle,
    func: Option<fn(OwnerHandle) -> T>,
) -> GetterBinding<T> {
    GetterBinding::new(owner, func)
}
