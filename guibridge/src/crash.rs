//! Crash reports: on panic, write what is known about it to a file.

use std::backtrace::Backtrace;
use std::fs::File;
use std::io::Write;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::error::BridgeError;

/// Chain a panic hook that writes a crash report to `path` before running
/// the previously installed hook.
pub fn install(path: impl Into<PathBuf>) {
    let path = path.into();
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let report = render_report(info);
        log::error!("{report}");
        match write_report(&path, &report) {
            Ok(()) => log::error!("crash report written to {}", path.display()),
            Err(err) => log::error!("could not write crash report to {}: {err}", path.display()),
        }
        previous(info);
    }));
}

pub fn render_report(info: &PanicHookInfo<'_>) -> String {
    let thread = std::thread::current();
    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    };
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "<unknown>".to_string());
    format!(
        "thread '{}' panicked at {location}\n{message}\n\nbacktrace:\n{}",
        thread.name().unwrap_or("<unnamed>"),
        Backtrace::force_capture()
    )
}

pub fn write_report(path: &Path, report: &str) -> Result<(), BridgeError> {
    let mut file = File::create(path)?;
    file.write_all(report.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
