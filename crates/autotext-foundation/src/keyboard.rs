//! Keyboard geometry delivered with keyboard notifications.

use std::time::Duration;

use autotext_graphics::Rect;

/// Payload of keyboard-will-show / keyboard-will-hide notifications.
///
/// Frames are in the same coordinate space as the host view frames they are
/// compared against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardInfo {
    pub frame_begin: Rect,
    pub frame_end: Rect,
    /// Duration of the system's own keyboard animation.
    pub animation_duration: Duration,
}

impl KeyboardInfo {
    pub fn new(frame_begin: Rect, frame_end: Rect) -> Self {
        Self {
            frame_begin,
            frame_end,
            animation_duration: Duration::ZERO,
        }
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }
}

/// Vertical extent of `keyboard_frame` covering `view_frame`; zero when they
/// do not overlap.
pub fn keyboard_overlap(view_frame: Rect, keyboard_frame: Rect) -> f32 {
    view_frame
        .intersection(&keyboard_frame)
        .map(|overlap| overlap.height)
        .unwrap_or(0.0)
}
