use thiserror::Error;

/// Failures reported by the bridge's fallible entry points.
///
/// Contract violations (a routed hook firing before any surface was
/// installed) are not represented here; those panic.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("input router has no active surface on this thread")]
    RouterNotInstalled,
    #[cfg(feature = "winit")]
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[cfg(feature = "winit")]
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
