//! Hook-style input delivery on top of winit.
//!
//! winit hands every event to the event-loop closure; [`WinitHookWindow`]
//! converts the input-related ones into calls on a registered
//! [`InputHooks`] table, the way a GLFW-style library would invoke its
//! callbacks. Pair it with [`crate::install_router`] to reach the active
//! surface.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::event::{keys, Action, Modifiers, MouseButton};
use crate::router::{HookWindow, InputHooks};

/// Pixel scroll deltas are reported in lines of this height.
const PIXELS_PER_LINE: f64 = 20.0;

#[derive(Default)]
pub struct WinitHookWindow {
    hooks: Option<InputHooks>,
    modifiers: Modifiers,
}

impl HookWindow for WinitHookWindow {
    fn set_input_hooks(&mut self, hooks: InputHooks) {
        self.hooks = Some(hooks);
    }
}

impl WinitHookWindow {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn has_hooks(&self) -> bool {
        self.hooks.is_some()
    }
    /// Feed one window event through the registered hooks. Returns whether
    /// any hook reported the event as consumed; events with no matching
    /// hook, or arriving before hooks are set, return `false`.
    pub fn dispatch(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::ModifiersChanged(mods) = event {
            self.modifiers = modifiers(mods.state());
            return false;
        }
        let Some(hooks) = self.hooks else {
            return false;
        };
        match event {
            WindowEvent::CursorMoved { position, .. } => (hooks.cursor_pos)(position.x, position.y),
            WindowEvent::MouseInput { state, button, .. } => {
                (hooks.mouse_button)(mouse_button(*button), action(*state, false), self.modifiers)
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = match event.physical_key {
                    PhysicalKey::Code(code) => key_code(code),
                    _ => keys::UNKNOWN,
                };
                dispatch_key(
                    &hooks,
                    key,
                    scancode(event.physical_key),
                    action(event.state, event.repeat),
                    event.text.as_deref(),
                    self.modifiers,
                )
            }
            WindowEvent::DroppedFile(path) => (hooks.drop)(std::slice::from_ref(path)),
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = scroll_lines(*delta);
                (hooks.scroll)(dx, dy)
            }
            WindowEvent::Resized(size) => (hooks.resize)(
                i32::try_from(size.width).unwrap_or(i32::MAX),
                i32::try_from(size.height).unwrap_or(i32::MAX),
            ),
            _ => false,
        }
    }
}

/// Fire the key hook, then the char hook once per character of `text` if
/// the key went down.
pub fn dispatch_key(
    hooks: &InputHooks,
    key: i32,
    scancode: i32,
    action: Action,
    text: Option<&str>,
    mods: Modifiers,
) -> bool {
    let consumed = (hooks.key)(key, scancode, action, mods);
    let mut typed = false;
    if action.is_down() {
        for c in text.unwrap_or_default().chars() {
            typed |= (hooks.char)(u32::from(c));
        }
    }
    consumed || typed
}

pub fn action(state: ElementState, repeat: bool) -> Action {
    match (state, repeat) {
        (ElementState::Released, _) => Action::Release,
        (ElementState::Pressed, false) => Action::Press,
        (ElementState::Pressed, true) => Action::Repeat,
    }
}

pub fn modifiers(state: ModifiersState) -> Modifiers {
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::SHIFT, state.shift_key());
    mods.set(Modifiers::CONTROL, state.control_key());
    mods.set(Modifiers::ALT, state.alt_key());
    mods.set(Modifiers::SUPER, state.super_key());
    mods
}

pub fn mouse_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as W;
    match button {
        W::Left => MouseButton::Left,
        W::Right => MouseButton::Right,
        W::Middle => MouseButton::Middle,
        W::Back => MouseButton::Other(3),
        W::Forward => MouseButton::Other(4),
        W::Other(n) => MouseButton::Other(n),
        #[allow(unreachable_patterns)]
        _ => MouseButton::Other(u16::MAX),
    }
}

pub fn scroll_lines(delta: MouseScrollDelta) -> (f64, f64) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (f64::from(x), f64::from(y)),
        MouseScrollDelta::PixelDelta(pos) => (pos.x / PIXELS_PER_LINE, pos.y / PIXELS_PER_LINE),
    }
}

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
fn scancode(key: PhysicalKey) -> i32 {
    use winit::platform::scancode::PhysicalKeyExtScancode;
    key.to_scancode()
        .and_then(|code| i32::try_from(code).ok())
        .unwrap_or(0)
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn scancode(_key: PhysicalKey) -> i32 {
    0
}

/// Physical key to window-library key code; unmapped keys are
/// [`keys::UNKNOWN`].
pub fn key_code(code: KeyCode) -> i32 {
    use KeyCode::*;
    match code {
        KeyA => keys::A,
        KeyB => keys::A + 1,
        KeyC => keys::A + 2,
        KeyD => keys::A + 3,
        KeyE => keys::A + 4,
        KeyF => keys::A + 5,
        KeyG => keys::A + 6,
        KeyH => keys::A + 7,
        KeyI => keys::A + 8,
        KeyJ => keys::A + 9,
        KeyK => keys::A + 10,
        KeyL => keys::A + 11,
        KeyM => keys::A + 12,
        KeyN => keys::A + 13,
        KeyO => keys::A + 14,
        KeyP => keys::A + 15,
        KeyQ => keys::A + 16,
        KeyR => keys::A + 17,
        KeyS => keys::A + 18,
        KeyT => keys::A + 19,
        KeyU => keys::A + 20,
        KeyV => keys::A + 21,
        KeyW => keys::A + 22,
        KeyX => keys::A + 23,
        KeyY => keys::A + 24,
        KeyZ => keys::A + 25,
        Digit0 => keys::DIGIT_0,
        Digit1 => keys::DIGIT_0 + 1,
        Digit2 => keys::DIGIT_0 + 2,
        Digit3 => keys::DIGIT_0 + 3,
        Digit4 => keys::DIGIT_0 + 4,
        Digit5 => keys::DIGIT_0 + 5,
        Digit6 => keys::DIGIT_0 + 6,
        Digit7 => keys::DIGIT_0 + 7,
        Digit8 => keys::DIGIT_0 + 8,
        Digit9 => keys::DIGIT_0 + 9,
        F1 => keys::F1,
        F2 => keys::F1 + 1,
        F3 => keys::F1 + 2,
        F4 => keys::F1 + 3,
        F5 => keys::F1 + 4,
        F6 => keys::F1 + 5,
        F7 => keys::F1 + 6,
        F8 => keys::F1 + 7,
        F9 => keys::F1 + 8,
        F10 => keys::F1 + 9,
        F11 => keys::F1 + 10,
        F12 => keys::F1 + 11,
        Space => keys::SPACE,
        Quote => keys::APOSTROPHE,
        Comma => keys::COMMA,
        Minus => keys::MINUS,
        Period => keys::PERIOD,
        Slash => keys::SLASH,
        Semicolon => keys::SEMICOLON,
        Equal => keys::EQUAL,
        BracketLeft => keys::LEFT_BRACKET,
        Backslash => keys::BACKSLASH,
        BracketRight => keys::RIGHT_BRACKET,
        Backquote => keys::GRAVE_ACCENT,
        Escape => keys::ESCAPE,
        Enter => keys::ENTER,
        Tab => keys::TAB,
        Backspace => keys::BACKSPACE,
        Insert => keys::INSERT,
        Delete => keys::DELETE,
        ArrowRight => keys::RIGHT,
        ArrowLeft => keys::LEFT,
        ArrowDown => keys::DOWN,
        ArrowUp => keys::UP,
        PageUp => keys::PAGE_UP,
        PageDown => keys::PAGE_DOWN,
        Home => keys::HOME,
        End => keys::END,
        NumpadEnter => keys::KP_ENTER,
        ShiftLeft => keys::LEFT_SHIFT,
        ControlLeft => keys::LEFT_CONTROL,
        AltLeft => keys::LEFT_ALT,
        SuperLeft => keys::LEFT_SUPER,
        ShiftRight => keys::RIGHT_SHIFT,
        ControlRight => keys::RIGHT_CONTROL,
        AltRight => keys::RIGHT_ALT,
        SuperRight => keys::RIGHT_SUPER,
        _ => keys::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{install_router, InputSurface};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    #[test]
    fn key_codes() {
        assert_eq!(key_code(KeyCode::KeyA), 65);
        assert_eq!(key_code(KeyCode::KeyZ), 90);
        assert_eq!(key_code(KeyCode::Digit7), 55);
        assert_eq!(key_code(KeyCode::F12), 301);
        assert_eq!(key_code(KeyCode::Enter), keys::ENTER);
        assert_eq!(key_code(KeyCode::MediaPlayPause), keys::UNKNOWN);
    }

    #[test]
    fn buttons_modifiers_and_actions() {
        assert_eq!(mouse_button(winit::event::MouseButton::Middle), MouseButton::Middle);
        assert_eq!(mouse_button(winit::event::MouseButton::Other(9)), MouseButton::Other(9));
        assert_eq!(
            modifiers(ModifiersState::SHIFT | ModifiersState::CONTROL),
            Modifiers::SHIFT | Modifiers::CONTROL
        );
        assert_eq!(action(ElementState::Pressed, true), Action::Repeat);
        assert_eq!(action(ElementState::Released, true), Action::Release);
    }

    #[test]
    fn pixel_scroll_becomes_lines() {
        let delta = MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(0.0, 40.0));
        assert_eq!(scroll_lines(delta), (0.0, 2.0));
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(1.0, -1.0)), (1.0, -1.0));
    }

    thread_local! {
        static FIRED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn fired() -> Vec<String> {
        FIRED.with(|f| f.borrow().clone())
    }
    fn note(what: String) -> bool {
        FIRED.with(|f| f.borrow_mut().push(what));
        true
    }

    fn recording_hooks() -> InputHooks {
        InputHooks {
            cursor_pos: |x, y| note(format!("cursor {x} {y}")),
            mouse_button: |b, a, m| note(format!("mouse {b:?} {a:?} {}", m.bits())),
            key: |k, _, a, m| note(format!("key {k} {a:?} {}", m.bits())),
            char: |c| note(format!("char {c}")),
            drop: |p| note(format!("drop {}", p.len())),
            scroll: |x, y| note(format!("scroll {x} {y}")),
            resize: |w, h| note(format!("resize {w} {h}")),
        }
    }

    #[test]
    fn key_press_fires_key_then_one_char_per_character() {
        let hooks = recording_hooks();
        assert!(dispatch_key(
            &hooks,
            keys::A,
            30,
            Action::Press,
            Some("ab"),
            Modifiers::SHIFT
        ));
        assert_eq!(fired(), vec!["key 65 Press 1", "char 97", "char 98"]);
    }

    #[test]
    fn key_release_fires_no_chars() {
        let hooks = recording_hooks();
        let none = Modifiers::empty();
        dispatch_key(&hooks, keys::A, 30, Action::Release, Some("a"), none);
        dispatch_key(&hooks, keys::A, 30, Action::Repeat, Some("a"), none);
        dispatch_key(&hooks, keys::ESCAPE, 1, Action::Press, None, none);
        assert_eq!(
            fired(),
            vec!["key 65 Release 0", "key 65 Repeat 0", "char 97", "key 256 Press 0"]
        );
    }

    #[test]
    fn modifier_changes_reach_later_mouse_events() {
        let mut window = WinitHookWindow::new();
        window.set_input_hooks(recording_hooks());
        let shift = winit::event::Modifiers::from(ModifiersState::SHIFT);
        assert!(!window.dispatch(&WindowEvent::ModifiersChanged(shift)));
        let click = WindowEvent::MouseInput {
            // SAFETY: a placeholder id, never handed back to the platform.
            device_id: unsafe { winit::event::DeviceId::dummy() },
            state: ElementState::Pressed,
            button: winit::event::MouseButton::Left,
        };
        assert!(window.dispatch(&click));
        assert_eq!(fired(), vec!["mouse Left Press 1"]);
    }

    #[derive(Default)]
    struct Sizes {
        resized: Vec<(i32, i32)>,
        dropped: Vec<PathBuf>,
    }

    impl InputSurface for Sizes {
        fn cursor_pos_event(&mut self, _: f64, _: f64) -> bool {
            false
        }
        fn mouse_button_event(&mut self, _: MouseButton, _: Action, _: Modifiers) -> bool {
            false
        }
        fn key_event(&mut self, _: i32, _: i32, _: Action, _: Modifiers) -> bool {
            false
        }
        fn char_event(&mut self, _: u32) -> bool {
            false
        }
        fn drop_event(&mut self, paths: &[PathBuf]) -> bool {
            self.dropped.extend_from_slice(paths);
            true
        }
        fn scroll_event(&mut self, _: f64, _: f64) -> bool {
            false
        }
        fn resize_event(&mut self, width: i32, height: i32) -> bool {
            self.resized.push((width, height));
            true
        }
    }

    #[test]
    fn dispatch_reaches_routed_surface() {
        let mut window = WinitHookWindow::new();
        let resize = WindowEvent::Resized(winit::dpi::PhysicalSize::new(800, 600));
        assert!(!window.dispatch(&resize));

        let surface = Rc::new(RefCell::new(Sizes::default()));
        install_router(surface.clone(), &mut window);
        assert!(window.has_hooks());
        assert!(window.dispatch(&resize));
        assert!(window.dispatch(&WindowEvent::DroppedFile(PathBuf::from("level.json"))));
        assert!(!window.dispatch(&WindowEvent::Focused(true)));

        let surface = surface.borrow();
        assert_eq!(surface.resized, vec![(800, 600)]);
        assert_eq!(surface.dropped, vec![PathBuf::from("level.json")]);
    }
}
