//! One-shot frame requests on top of the runtime's callback queue.

use crate::runtime::{FrameCallbackId, RuntimeHandle};

/// Hands out callbacks for the next drained frame.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Queues `on_frame` for the next frame; it receives the frame time in
    /// nanoseconds. Against a dropped runtime nothing is queued.
    pub fn request_frame(&self, on_frame: impl FnOnce(u64) + 'static) -> FrameRequest {
        FrameRequest {
            id: self.runtime.register_frame_callback(on_frame),
            runtime: self.runtime.clone(),
        }
    }
}

/// Handle to a queued frame callback. Dropping it withdraws the callback if
/// the frame has not been drained yet.
pub struct FrameRequest {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameRequest {
    pub fn cancel(mut self) {
        self.withdraw();
    }

    fn withdraw(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        self.withdraw();
    }
}
