//! Frame-rate accounting.
//!
//! [`FrameMetrics`] averages frame times over a fixed window instead of
//! reporting every frame, so the displayed rate stays readable.

/// Length of the averaging window, in milliseconds.
pub const FPS_WINDOW_MS: f64 = 500.0;

/// Rolling frames-per-second counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameMetrics {
    /// Frames per second over the last completed window, rounded.
    pub fps: u32,
    /// Frames counted in the current window.
    pub frames: u32,
    /// Time accumulated in the current window, in milliseconds.
    pub accumulated_ms: f64,
}

impl FrameMetrics {
    /// Record one frame that took `delta_ms` milliseconds.
    ///
    /// Non-finite or negative deltas are ignored. When the window fills,
    /// `fps` is recomputed and the window restarts. Returns `true` if
    /// `fps` changed.
    pub fn record_frame(&mut self, delta_ms: f64) -> bool {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return false;
        }
        self.frames += 1;
        self.accumulated_ms += delta_ms;
        if self.accumulated_ms < FPS_WINDOW_MS {
            return false;
        }

        let fps = (f64::from(self.frames) * 1000.0 / self.accumulated_ms).round() as u32;
        self.frames = 0;
        self.accumulated_ms = 0.0;
        let changed = fps != self.fps;
        self.fps = fps;
        changed
    }
}
