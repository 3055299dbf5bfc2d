use std::time::Instant;

/// Frames counted before a rate is reported.
pub const DEFAULT_WINDOW: u32 = 128;

/// A frame counter that reports frames-per-second once every `window`
/// frames.
pub struct FrameClock {
    window: u32,
    frames: u32,
    start_t: Instant,
    last_fps: Option<f32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl FrameClock {
    /// A `window` of zero is treated as one.
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            frames: 0,
            start_t: Instant::now(),
            last_fps: None,
        }
    }
    /// Restart the measurement window at the given instant.
    pub fn set_now(&mut self, instant: Instant) {
        self.start_t = instant;
        self.frames = 0;
    }
    /// Most recently reported rate.
    pub fn fps(&self) -> Option<f32> {
        self.last_fps
    }
    /// Count one frame. Returns the elapsed seconds and frame rate when
    /// this frame completes a window.
    pub fn tick(&mut self) -> Option<(f32, f32)> {
        self.tick_at(Instant::now())
    }
    pub fn tick_at(&mut self, now: Instant) -> Option<(f32, f32)> {
        self.frames += 1;
        if self.frames < self.window {
            return None;
        }
        let total = now.saturating_duration_since(self.start_t).as_secs_f32();
        let fps = if total > 0.0 {
            self.frames as f32 / total
        } else {
            f32::INFINITY
        };
        log::info!("{total:.3}s {fps:.1} fps");
        self.last_fps = Some(fps);
        self.set_now(now);
        Some((total, fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn reports_once_per_window() {
        let start = Instant::now();
        let mut clock = FrameClock::new(4);
        clock.set_now(start);
        for i in 1..4 {
            assert!(clock.tick_at(start + Duration::from_millis(i * 10)).is_none());
        }
        let (total, fps) = clock.tick_at(start + Duration::from_millis(40)).unwrap();
        assert!((total - 0.04).abs() < 1e-4);
        assert!((fps - 100.0).abs() < 0.1);
        assert_eq!(clock.fps(), Some(fps));
        assert!(clock.tick_at(start + Duration::from_millis(50)).is_none());
    }

    #[test]
    fn zero_window_reports_every_frame() {
        let mut clock = FrameClock::new(0);
        assert!(clock.tick().is_some());
        assert!(clock.tick().is_some());
    }
}
