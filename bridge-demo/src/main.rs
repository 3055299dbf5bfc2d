use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use guibridge::bridge;
use guibridge::winit_hooks::WinitHookWindow;
use guibridge::{
    install_router, Bounds, BridgeError, FloatBox, Form, FrameClock, OwnerHandle, Screen,
};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

mod script;

/// Open a window and drive a small form whose handlers live on the
/// "script" side.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    #[arg(long, default_value = "guibridge demo")]
    title: String,
    /// Where to write a report if the demo panics.
    #[arg(long, default_value = "crash.txt")]
    crash_report: PathBuf,
    /// Frames per frame-rate report.
    #[arg(long, default_value_t = guibridge::clock::DEFAULT_WINDOW)]
    fps_window: u32,
}

fn build_form(owner: OwnerHandle) -> Form {
    let mut form = Form::new("controls");
    bridge::add_button(&mut form, "reset", owner, Some(script::on_reset))
        .set_bounds(Bounds::new(10.0, 10.0, 120.0, 30.0));
    let name = form.add_text_box(script::name(owner).unwrap_or_default());
    bridge::set_text_box_callback(name, owner, Some(script::on_name));
    bridge::set_text_box_key_callback(name, owner, Some(script::on_name_key));
    bridge::add_variable(
        &mut form,
        "speed",
        owner,
        Some(script::set_speed as fn(OwnerHandle, &f32)),
        Some(script::get_speed as fn(OwnerHandle) -> f32),
    );
    form
}

fn main() -> Result<(), BridgeError> {
    env_logger::init();
    let args = Args::parse();
    guibridge::crash::install(args.crash_report.clone());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&args.title)
        .with_inner_size(winit::dpi::LogicalSize::new(args.width, args.height))
        .build(&event_loop)?;

    let owner = script::spawn("player");
    let size = window.inner_size();
    let mut screen = Screen::new(
        build_form(owner),
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    );
    screen.set_focus(Some(0));
    screen.set_resize_callback(|w, h| log::debug!("screen resized to {w}x{h}"));
    let screen = Rc::new(RefCell::new(screen));

    let mut speed = FloatBox::new(script::get_speed(owner));
    bridge::set_value_callback(
        &mut speed,
        owner,
        Some(script::on_speed as fn(OwnerHandle, &f32) -> bool),
    );

    let mut hooks = WinitHookWindow::new();
    install_router(screen.clone(), &mut hooks);
    let mut clock = FrameClock::new(args.fps_window);

    event_loop.run(move |event, target| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => target.exit(),
        Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } => {
            let mut screen = screen.borrow_mut();
            let (_, dy) = screen.take_scroll();
            if dy != 0.0 {
                speed.set_value(script::get_speed(owner));
                let wanted = speed.value() + dy as f32;
                if !speed.commit_value(wanted) {
                    log::info!("speed stays at {}", speed.display());
                }
            }
            for path in screen.take_dropped() {
                log::info!("dropped {}", path.display());
            }
            if clock.tick().is_some() {
                for line in screen.form().summary() {
                    log::info!("{line}");
                }
            }
        }
        Event::WindowEvent { event, .. } => {
            hooks.dispatch(&event);
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
